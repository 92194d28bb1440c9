use thiserror::Error;

/// Unified error type for json-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Version value is not a string: {0}")]
    NotAString(String),

    #[error("Invalid semantic version: '{0}'")]
    InvalidSemVer(String),

    #[error("Manifest has no \"version\" field: {0}")]
    VersionFieldMissing(String),

    #[error("Manifest \"version\" field is not a string: {0}")]
    VersionFieldNotString(String),

    #[error("Manifest not found: {0}")]
    ManifestNotFound(String),

    #[error("Manifest parse error: {0}")]
    ManifestParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in json-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create an invalid-version error for the offending text
    pub fn invalid(text: impl Into<String>) -> Self {
        BumpError::InvalidSemVer(text.into())
    }

    /// Create a manifest parse error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        BumpError::ManifestParse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Process exit code for this error kind.
    ///
    /// Each kind maps to its own code. Code 2 is shared with clap usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            BumpError::Io(_) => 1,
            BumpError::ManifestNotFound(_) => 2,
            BumpError::InvalidSemVer(_) => 3,
            BumpError::NotAString(_) => 4,
            BumpError::VersionFieldMissing(_) => 5,
            BumpError::VersionFieldNotString(_) => 6,
            BumpError::ManifestParse(_) => 7,
            BumpError::Config(_) => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumpError::config("bad target");
        assert_eq!(err.to_string(), "Configuration error: bad target");
    }

    #[test]
    fn test_invalid_semver_display() {
        let err = BumpError::invalid("invalid.semver");
        assert_eq!(
            err.to_string(),
            "Invalid semantic version: 'invalid.semver'"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: BumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = vec![
            BumpError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")),
            BumpError::ManifestNotFound("x".to_string()),
            BumpError::invalid("x"),
            BumpError::NotAString("x".to_string()),
            BumpError::VersionFieldMissing("x".to_string()),
            BumpError::VersionFieldNotString("x".to_string()),
            BumpError::manifest("x"),
            BumpError::config("x"),
        ];

        let mut codes: Vec<i32> = errors.iter().map(BumpError::exit_code).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpError::NotAString("42".to_string()), "Version value is not a string"),
            (BumpError::invalid("x"), "Invalid semantic version"),
            (BumpError::ManifestNotFound("p".to_string()), "Manifest not found"),
            (BumpError::manifest("x"), "Manifest parse error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
