use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use gha_autoupdate::config::Config;
use gha_autoupdate::files::collect_workflow_files;
use gha_autoupdate::update::ActionUpdater;
use gha_autoupdate::version::registries::GitHubRegistry;
use gha_autoupdate::version::strategy::VersionStrategy;

#[derive(Parser)]
#[command(name = "gha-autoupdate")]
#[command(version, about = "Update GitHub Action references in workflow files")]
struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Update action versions.
    Autoupdate(AutoupdateArgs),
}

#[derive(clap::Args)]
struct AutoupdateArgs {
    /// Workflow files or directories to search for .yml/.yaml files.
    paths: Vec<PathBuf>,

    /// Print a unified diff of the changes.
    #[arg(long)]
    diff: bool,

    /// Write changes back to the files.
    #[arg(long)]
    write: bool,

    /// Version strategy to use: major or specific.
    #[arg(long, short = 's', default_value_t = VersionStrategy::Major)]
    version_strategy: VersionStrategy,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = real_main(cli) {
        error!("{:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn init_logging(debug: bool) {
    // --debug wins over RUST_LOG; dependencies stay at info either way.
    let filter = match (debug, EnvFilter::try_from_default_env()) {
        (false, Ok(filter)) => filter,
        (false, Err(_)) => EnvFilter::new("info"),
        (true, _) => EnvFilter::new("gha_autoupdate=debug,info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn real_main(cli: Cli) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Command::Autoupdate(args) => runtime.block_on(cmd_autoupdate(args)),
    }
}

async fn cmd_autoupdate(args: AutoupdateArgs) -> anyhow::Result<()> {
    let files = collect_workflow_files(&args.paths)?;
    for path in &files.skipped {
        warn!("Skipping {} because it is not a YAML file.", path.display());
    }
    if files.found.is_empty() {
        bail!("No workflow files found in the given paths.");
    }

    let config = Config::from_env();
    let registry = GitHubRegistry::from_config(&config).context("create GitHub client")?;
    let mut updater = ActionUpdater::with_registry(Arc::new(registry));

    for path in &files.found {
        info!("Updating {}...", path.display());
        let result = updater
            .update_path(path, args.version_strategy)
            .await
            .with_context(|| format!("update {}", path.display()))?;

        if !result.has_changes() {
            info!("  No changes to {}.", path.display());
            continue;
        }

        if args.diff {
            let mut stdout = std::io::stdout().lock();
            result.print_diff(&mut stdout)?;
            stdout.flush()?;
        } else {
            for change in result.changes() {
                info!("  Update {} -> {}", change.old_spec, change.new_spec);
            }
        }

        if args.write {
            result.write()?;
            info!("  => Updated {}.", path.display());
        }
    }

    Ok(())
}
