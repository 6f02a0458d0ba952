//! CLI for the rebase checkbox action.
//!
//! Reads the action inputs and the workflow event, then merges the base branch
//! into the pull request branch if the rebase checkbox is ticked.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use rebase_checkbox::{
    load_snapshot, OctocrabClient, RepoRef, RunOutcome, Runner, RunnerConfig, RunnerError,
    UpdateConfig, DEFAULT_COMMIT_MESSAGE,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Rebase Checkbox - Update a pull request branch when its rebase checkbox is ticked.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub token used to compare, merge and update the pull request.
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Log the merge instead of performing it.
    #[arg(
        long,
        env = "INPUT_TRIAL_RUN",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    trial_run: bool,

    /// Message for the merge commit.
    #[arg(long, env = "INPUT_COMMIT_MESSAGE", default_value = DEFAULT_COMMIT_MESSAGE)]
    commit_message: String,

    /// Path to the workflow event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// Repository the workflow runs in, as `owner/name`.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: RepoRef,

    /// GitHub API base URL (for GitHub Enterprise Server).
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,
}

/// What a successful run did, for the summary.
struct RunReport {
    pr_number: u64,
    trial_run: bool,
    outcome: RunOutcome,
}

#[tokio::main]
async fn main() -> ExitCode {
    install_crypto_provider();

    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(report) => {
            print_summary(&report);
            ExitCode::from(0)
        }
        Err(e) if e.is_config() => {
            error!(error = %e, "Invalid workflow trigger");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Rebase failed");
            ExitCode::from(1)
        }
    }
}

/// Installs aws-lc-rs as the process-wide rustls crypto provider.
///
/// octocrab's TLS stack panics if no provider is installed and more than one is
/// compiled in. A second call is a no-op.
fn install_crypto_provider() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunReport, RunnerError> {
    let snapshot = load_snapshot(&args.event_path)?;

    let client =
        OctocrabClient::new(&args.token, args.api_url.as_deref()).map_err(RunnerError::Client)?;
    let update = UpdateConfig::new(args.trial_run, args.commit_message);
    let config = RunnerConfig::new(args.repository).with_update_config(update);

    let runner = Runner::new(config, client);
    let outcome = runner.run(&snapshot).await?;

    Ok(RunReport {
        pr_number: snapshot.number,
        trial_run: args.trial_run,
        outcome,
    })
}

/// Prints the final run summary.
fn print_summary(report: &RunReport) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if report.trial_run { "Trial Run" } else { "Live" }
    );
    println!("  Pull request: #{}", report.pr_number);
    println!("  Outcome: {}", report.outcome);
    if let Some(update) = report.outcome.update_outcome() {
        println!("  Branch update: {}", update.as_str());
    }
}
