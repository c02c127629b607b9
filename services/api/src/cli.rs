use crate::render::{
    run_analytics, run_dashboard, run_donor, AnalyticsArgs, DashboardArgs, DonorArgs,
};
use crate::server;
use bloodflow::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "BloodFlow",
    about = "Serve or print the BloodFlow blood-bank dashboards from the command line",
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
    /// Print the operations dashboard for the sample inventory
    Dashboard(DashboardArgs),
    /// Print the analytics hub: data sources, predictions, risk and districts
    Analytics(AnalyticsArgs),
    /// Print the donor app view with nearby requests
    Donor(DonorArgs),
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
        Command::Dashboard(args) => run_dashboard(args),
        Command::Analytics(args) => run_analytics(args),
        Command::Donor(args) => run_donor(args),
    }
}
