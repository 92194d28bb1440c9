//! Pre-release text handling for semantic versioning
//!
//! The pre-release is kept as the literal dot-separated string from the
//! manifest. Only its final segment is ever interpreted, and only when it is
//! purely numeric: that segment acts as the build counter.
//! See https://semver.org/#spec-item-9

/// Returns true when the identifier consists only of ASCII digits.
pub fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Extracts the build counter from pre-release text.
///
/// # Returns
/// * `Some(n)` - The final dot-separated segment is numeric and fits in a `u64`
/// * `None` - Otherwise
///
/// # Examples
/// ```ignore
/// assert_eq!(trailing_number("beta.10"), Some(10));
/// assert_eq!(trailing_number("alpha"), None);
/// ```
pub fn trailing_number(pre_release: &str) -> Option<u64> {
    let last = pre_release.rsplit('.').next()?;
    if is_numeric(last) {
        last.parse::<u64>().ok()
    } else {
        None
    }
}

/// Folds a build counter into pre-release text.
///
/// - no text: the counter alone (`5`)
/// - a single non-numeric segment: the counter is appended (`alpha` -> `alpha.5`)
/// - anything else: the final segment is replaced (`alpha.1.2.3` -> `alpha.1.2.5`)
pub fn with_number(pre_release: Option<&str>, number: u64) -> String {
    match pre_release {
        None | Some("") => number.to_string(),
        Some(text) => match text.rsplit_once('.') {
            Some((head, _)) => format!("{}.{}", head, number),
            None if is_numeric(text) => number.to_string(),
            None => format!("{}.{}", text, number),
        },
    }
}
