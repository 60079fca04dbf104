#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::error::ErrorKind;
use clap::Parser;
use depreport_core::config::parse_flag;
use depreport_core::{report_deployment_sync, BuildStatus, Config, StepInputs};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "depreport",
    version,
    about = "Report a deployment and its status to GitHub"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Create a staging deployment for a commit and attach its status
    Report(ReportArgs),
}

#[derive(clap::Args)]
struct ReportArgs {
    /// Token used as `Authorization: token <auth_token>`
    #[arg(long, env = "auth_token", hide_env_values = true)]
    auth_token: Option<String>,

    /// Repository URL (https://host/owner/repo.git or git@host:owner/repo.git)
    #[arg(long, env = "repository_url")]
    repository_url: Option<String>,

    /// Commit to deploy
    #[arg(long, env = "commit_hash")]
    commit_hash: Option<String>,

    /// API root (default: https://api.github.com)
    #[arg(long, env = "api_base_url")]
    api_base_url: Option<String>,

    /// State to report: auto, pending, success, error or failure
    #[arg(long, env = "set_specific_status")]
    set_specific_status: Option<String>,

    /// URL of the build, sent as the status environment URL
    #[arg(long, env = "build_url")]
    build_url: Option<String>,

    /// Status identifier (accepted, not sent)
    #[arg(long, env = "status_identifier")]
    status_identifier: Option<String>,

    /// Description (default: the title-cased state)
    #[arg(long, env = "description")]
    description: Option<String>,

    /// Dump every request and response (yes/no)
    #[arg(long, env = "verbose")]
    verbose: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "request_timeout_secs")]
    request_timeout_secs: Option<String>,

    /// Build result exported by the CI runner ("0" = success)
    #[arg(long, env = "BITRISE_BUILD_STATUS")]
    build_status: Option<String>,
}

impl ReportArgs {
    /// Borrow the raw inputs
    fn inputs(&self) -> StepInputs<'_> {
        StepInputs {
            auth_token: self.auth_token.as_deref(),
            repository_url: self.repository_url.as_deref(),
            commit_hash: self.commit_hash.as_deref(),
            api_base_url: self.api_base_url.as_deref(),
            set_specific_status: self.set_specific_status.as_deref(),
            build_url: self.build_url.as_deref(),
            status_identifier: self.status_identifier.as_deref(),
            description: self.description.as_deref(),
            verbose: self.verbose.as_deref(),
            request_timeout_secs: self.request_timeout_secs.as_deref(),
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_failure_code(&e));
        }
    };
    let code = match cli.command {
        Commands::Report(args) => run_report(args),
    };
    std::process::exit(code);
}

/// Help and version requests succeed; every other parse failure is a
/// configuration error
fn parse_failure_code(e: &clap::Error) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Logs go to stderr; stdout carries the config echo, deployment id and dumps
fn init_logging(verbose: bool) {
    let default = if verbose {
        "info,depreport=debug,depreport_core=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_report(args: ReportArgs) -> i32 {
    // Invalid values are reported by config validation below
    let verbose = args
        .verbose
        .as_deref()
        .and_then(|v| parse_flag("verbose", v).ok())
        .unwrap_or(false);
    init_logging(verbose);

    let config = match Config::from_inputs(args.inputs()) {
        Ok(config) => config,
        Err(e) => {
            error!(kind = ?e.kind(), "invalid configuration");
            eprintln!("Error: {e}");
            return 1;
        }
    };

    println!("{config}");
    info!(repository = %config.repository, "configuration accepted");

    let build_status = BuildStatus::new(args.build_status.as_deref());
    debug!(signal = ?build_status.raw(), "build status");

    match report_deployment_sync(&config, build_status) {
        Ok(outcome) => {
            info!(
                deployment_id = outcome.deployment_id,
                state = %outcome.state,
                description = %outcome.description,
                "deployment reported"
            );
            0
        }
        Err(e) => {
            error!(kind = ?e.kind(), "deployment report failed");
            eprintln!("Error: {e}");
            1
        }
    }
}
