use std::fmt;

/// Warnings about bump requests that are valid but probably not what was meant.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// `--reset` was given without a component to reset
    ResetWithoutTarget,
    /// A build counter was added to a version that had none
    BuildNumberIntroduced { version: String },
    /// The bump produced the version that was already there
    VersionUnchanged { version: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::ResetWithoutTarget => {
                write!(f, "--reset has no effect when the target is 'none'")
            }
            BoundaryWarning::BuildNumberIntroduced { version } => {
                write!(
                    f,
                    "Version '{}' had no build number; starting one at 0",
                    version
                )
            }
            BoundaryWarning::VersionUnchanged { version } => {
                write!(f, "Version '{}' is unchanged", version)
            }
        }
    }
}
