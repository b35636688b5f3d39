use crate::demo::{run_demo, run_flow_report, DemoArgs, FlowReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vibe_quiz::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Era Onboarding Service",
    about = "Demonstrate and run the Era onboarding quiz engine from the command line",
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
    /// Inspect the composed onboarding flow
    Flow {
        #[command(subcommand)]
        command: FlowCommand,
    },
    /// Run an end-to-end CLI demo walking a full quiz session
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum FlowCommand {
    /// Print the composed screen sequence for a configuration
    Report(FlowReportArgs),
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
        Command::Flow {
            command: FlowCommand::Report(args),
        } => run_flow_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
