use anyhow::Result;
use clap::Parser;

use json_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use json_bump::config;
use json_bump::manifest::FsAccess;
use json_bump::ui;
use json_bump::IncrementTarget;

#[derive(clap::Parser)]
#[command(
    name = "json-bump",
    about = "Bump the semantic version stored in a JSON package manifest"
)]
struct Args {
    #[arg(value_enum, help = "Version component to increment [default: patch]")]
    target: Option<IncrementTarget>,

    #[arg(short, long, help = "Set the component to zero instead of incrementing it")]
    reset: bool,

    #[arg(long, value_name = "TEXT", help = "Replace the pre-release text (empty removes it)")]
    pre_release: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Replace the build metadata (empty removes it)")]
    build_metadata: Option<String>,

    #[arg(short = 'n', long, help = "Print the new version without writing the manifest")]
    dry_run: bool,

    #[arg(
        short,
        long,
        alias = "packageFile",
        value_name = "PATH",
        help = "Manifest file [default: package.json]"
    )]
    file: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Only print the new version")]
    quiet: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("json-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Err(e) = run(args) {
        ui::display_error(&e.to_string());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(args: Args) -> json_bump::Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let quiet = args.quiet || config.behavior.quiet;

    let workflow_args = BumpWorkflowArgs {
        manifest_path: args.file.unwrap_or(config.manifest.path).into(),
        target: args.target.unwrap_or(config.defaults.target),
        reset: args.reset,
        pre_release: args.pre_release,
        build_metadata: args.build_metadata,
        dry_run: args.dry_run || config.behavior.dry_run,
    };
    let manifest = workflow_args.manifest_path.display().to_string();

    if !quiet {
        ui::display_status(&format!(
            "Bumping {} version in {}",
            workflow_args.target, manifest
        ));
    }

    let result = run_bump_workflow(&workflow_args, &FsAccess)?;

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    if quiet {
        println!("{}", result.version);
        return Ok(());
    }

    ui::display_version_change(&result.previous, &result.version);
    if result.written {
        ui::display_success(&format!("Updated {} to {}", manifest, result.version));
    } else {
        ui::display_dry_run(&manifest, &result.version);
    }

    Ok(())
}
