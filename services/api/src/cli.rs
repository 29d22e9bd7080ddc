use crate::commands::{run_availability, run_matrix, run_quote, MatrixArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use villa_roi::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Villa ROI Configurator",
    about = "Quote villa configurations and serve the configurator API",
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
    /// Price a single configuration, starting from the defaults
    Quote(QuoteArgs),
    /// Export every legal configuration with its metrics as CSV
    Matrix(MatrixArgs),
    /// Print the active finish availability table
    Availability,
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
        Command::Quote(args) => run_quote(args),
        Command::Matrix(args) => run_matrix(args),
        Command::Availability => run_availability(),
    }
}
