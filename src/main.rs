use clap::Parser;
use report_ops::errors::ErrorHandler;
use report_ops::logger;
use report_ops::structs::cli::Cli;
use report_ops::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    logger::init();
    let cli = Cli::parse();

    let mut runner = CommandRunner::new(cli.config);
    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(error.exit_code());
    }
}
