use crate::demo::{run_assess, run_demo, run_questions, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use flight_planner::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Marketing Flight Planner",
    about = "Score marketing maturity and build a flight plan from the command line",
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
    /// Score a JSON response file and print the flight plan
    Assess(AssessArgs),
    /// Print the standard question bank
    Questions,
    /// Print a flight plan for a respondent answering every question alike
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
        Command::Assess(args) => run_assess(args),
        Command::Questions => run_questions(),
        Command::Demo(args) => run_demo(args),
    }
}
