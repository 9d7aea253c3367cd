use clap::CommandFactory;
use crate::commands;
use crate::CommandResult;

#[derive(clap::Parser, Debug)]
#[command(
    about = "Print, diff, and validate GraphQL schemas and queries.",
    name = "graphql",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Without a subcommand there is nothing to run, so print usage.
    pub(crate) async fn run_default(&self) -> CommandResult {
        CommandResult::stdout(format_args!("{}", Self::command().render_help()))
    }
}
