mod cli;
mod command;
mod command_result;
mod commands;
mod graphql_files;
mod logging;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    logging::setup_logger(&cli);

    let result = match cli.cmd.take() {
        Some(command) => command.run(&cli).await,
        None => cli.run_default().await,
    };
    result.emit()
}
