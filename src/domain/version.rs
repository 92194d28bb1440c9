use crate::domain::prerelease;
use crate::error::{BumpError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Grammar from semver.org, anchored on both ends.
static SEMVER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
        r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .expect("semver grammar must compile")
});

/// Semantic version as read from a manifest.
///
/// The pre-release is stored verbatim. `pre_release_number` mirrors its
/// final numeric segment and is the only part of it that bumps touch; it is
/// folded back into the text when the version is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<String>,
    pub pre_release_number: Option<u64>,
    pub build_metadata: Option<String>,
}

impl Version {
    /// Create a plain release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            ..Version::default()
        }
    }

    /// Parse a version string such as `1.2.3-beta.10+sha.5114f85`.
    ///
    /// # Returns
    /// * `Ok(Version)` - The parsed version
    /// * `Err(BumpError::InvalidSemVer)` - If the text does not follow the
    ///   semver grammar or a component overflows `u64`
    pub fn parse(text: &str) -> Result<Self> {
        let caps = SEMVER_PATTERN
            .captures(text)
            .ok_or_else(|| BumpError::invalid(text))?;

        let component = |index: usize| {
            caps[index]
                .parse::<u64>()
                .map_err(|_| BumpError::invalid(text))
        };

        let pre_release = caps.get(4).map(|m| m.as_str().to_string());
        let pre_release_number = pre_release
            .as_deref()
            .and_then(prerelease::trailing_number);

        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
            pre_release,
            pre_release_number,
            build_metadata: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }

    /// Parse a version held in a JSON value.
    ///
    /// Fails with `NotAString` for anything other than a JSON string.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Version::parse(text),
            other => Err(BumpError::NotAString(other.to_string())),
        }
    }

    /// Pre-release text with the build counter folded in.
    pub fn rendered_pre_release(&self) -> Option<String> {
        match self.pre_release_number {
            Some(number) => Some(prerelease::with_number(
                self.pre_release.as_deref(),
                number,
            )),
            None => self.pre_release.clone(),
        }
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = self.rendered_pre_release() {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
