use crate::domain::version::Version;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of a version a bump increments (or resets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IncrementTarget {
    Major,
    Minor,
    Patch,
    /// The trailing numeric pre-release segment
    #[value(alias = "buildNumber")]
    #[serde(alias = "buildNumber")]
    BuildNumber,
    /// Leave every counter alone
    None,
}

impl fmt::Display for IncrementTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IncrementTarget::Major => "major",
            IncrementTarget::Minor => "minor",
            IncrementTarget::Patch => "patch",
            IncrementTarget::BuildNumber => "build-number",
            IncrementTarget::None => "none",
        };
        write!(f, "{}", name)
    }
}

impl Version {
    /// Bump version according to the increment target.
    ///
    /// Returns a new value; `self` is never modified.
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    /// - **BuildNumber**: build counter += 1, or 0 when there was none
    /// - **None**: unchanged
    ///
    /// With `reset`, the selected component is set to 0 instead of being
    /// incremented. Major, minor and patch bumps also set an existing build
    /// counter back to 0.
    ///
    /// # Example
    /// ```ignore
    /// let v = Version::parse("1.2.3-beta.10")?;
    /// assert_eq!(v.bump(IncrementTarget::Minor, false).to_string(), "1.3.0-beta.0");
    /// ```
    pub fn bump(&self, target: IncrementTarget, reset: bool) -> Version {
        let step = |n: u64| if reset { 0 } else { n.saturating_add(1) };
        let restarted_counter = self.pre_release_number.map(|_| 0);

        match target {
            IncrementTarget::Major => Version {
                major: step(self.major),
                minor: 0,
                patch: 0,
                pre_release_number: restarted_counter,
                ..self.clone()
            },
            IncrementTarget::Minor => Version {
                minor: step(self.minor),
                patch: 0,
                pre_release_number: restarted_counter,
                ..self.clone()
            },
            IncrementTarget::Patch => Version {
                patch: step(self.patch),
                pre_release_number: restarted_counter,
                ..self.clone()
            },
            IncrementTarget::BuildNumber => Version {
                pre_release_number: Some(self.pre_release_number.map_or(0, step)),
                ..self.clone()
            },
            IncrementTarget::None => self.clone(),
        }
    }
}
