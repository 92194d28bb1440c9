//! Main workflow orchestration logic
//!
//! Reads the manifest, bumps its version, applies any literal overrides and
//! writes the result back. Nothing here prints; the binary renders the
//! returned [WorkflowResult].

use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::domain::{prerelease, IncrementTarget, Version};
use crate::error::Result;
use crate::manifest::{FileAccess, Manifest};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic,
/// so the workflow can be called without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Manifest holding the version
    pub manifest_path: PathBuf,

    /// Component to increment
    pub target: IncrementTarget,

    /// Set the component to zero instead of incrementing it
    pub reset: bool,

    /// Literal pre-release text; empty removes the pre-release
    pub pre_release: Option<String>,

    /// Literal build metadata; empty removes it
    pub build_metadata: Option<String>,

    /// Compute the new version without writing it
    pub dry_run: bool,
}

impl BumpWorkflowArgs {
    /// Arguments for a plain bump of `target` in the manifest at `path`
    pub fn new(path: impl Into<PathBuf>, target: IncrementTarget) -> Self {
        BumpWorkflowArgs {
            manifest_path: path.into(),
            target,
            reset: false,
            pre_release: None,
            build_metadata: None,
            dry_run: false,
        }
    }
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version found in the manifest
    pub previous: String,

    /// Version after the bump
    pub version: String,

    /// Whether the manifest was written
    pub written: bool,

    /// Non-fatal conditions noticed along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Main bump workflow
///
/// 1. Load the manifest and parse its `version`
/// 2. Compute the next version
/// 3. Write it back unless this is a dry run
///
/// Any failure aborts before the manifest is touched.
pub fn run_bump_workflow<F: FileAccess + ?Sized>(
    args: &BumpWorkflowArgs,
    files: &F,
) -> Result<WorkflowResult> {
    let mut manifest = Manifest::load(files, &args.manifest_path)?;
    let current = manifest.version()?;
    let previous = current.to_string();

    let next = next_version(&current, args)?;
    let version = next.to_string();
    let warnings = collect_warnings(&current, &previous, &version, args);

    let written = !args.dry_run;
    if written {
        manifest.set_version(&version)?;
        manifest.save(files)?;
    }

    Ok(WorkflowResult {
        previous,
        version,
        written,
        warnings,
    })
}

/// Bump `current` and apply the literal overrides from `args`.
///
/// The rendered result is parsed again, so overrides that break the semver
/// grammar fail with `InvalidSemVer`.
pub fn next_version(current: &Version, args: &BumpWorkflowArgs) -> Result<Version> {
    let mut next = current.bump(args.target, args.reset);

    if let Some(text) = args.pre_release.as_deref() {
        if text.is_empty() {
            next.pre_release = None;
            next.pre_release_number = None;
        } else {
            // A counter the bump just set survives the new text; otherwise
            // the text is taken as written.
            let counter_from_bump =
                args.target != IncrementTarget::None && next.pre_release_number.is_some();
            next.pre_release = Some(text.to_string());
            if !counter_from_bump {
                next.pre_release_number = prerelease::trailing_number(text);
            }
        }
    }

    if let Some(text) = args.build_metadata.as_deref() {
        next.build_metadata = (!text.is_empty()).then(|| text.to_string());
    }

    Version::parse(&next.to_string())
}

fn collect_warnings(
    current: &Version,
    previous: &str,
    version: &str,
    args: &BumpWorkflowArgs,
) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    if args.reset && args.target == IncrementTarget::None {
        warnings.push(BoundaryWarning::ResetWithoutTarget);
    }
    if args.target == IncrementTarget::BuildNumber && current.pre_release_number.is_none() {
        warnings.push(BoundaryWarning::BuildNumberIntroduced {
            version: previous.to_string(),
        });
    }
    if previous == version {
        warnings.push(BoundaryWarning::VersionUnchanged {
            version: version.to_string(),
        });
    }

    warnings
}
