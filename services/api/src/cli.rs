use crate::demo::{run_dashboard, run_demo, run_verify, DashboardArgs, DemoArgs, VerifyArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use jobcheck::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "jobcheck",
    about = "Score job and internship postings for scam risk and collect scam reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single job posting and print the trust report
    Verify(VerifyArgs),
    /// Print the dashboard summary built from sample activity
    Dashboard(DashboardArgs),
    /// Run an end-to-end demo: verify two postings, file a report, show the dashboard
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Verify(args) => run_verify(args),
        Command::Dashboard(args) => run_dashboard(args),
        Command::Demo(args) => run_demo(args),
    }
}
