mod diff;
mod print;
mod validate;

use crate::Cli;
use crate::CommandResult;
use diff::DiffCmd;
use libgraphql_analysis::schema::SchemaBuilder;
use libgraphql_analysis::Schema;
use print::PrintCmd;
use std::path::PathBuf;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Print a schema as canonical SDL.
    Print(Box<PrintCmd>),

    /// List the changes between two versions of a schema.
    Diff(Box<DiffCmd>),

    /// Check that overlapping fields in query documents can be merged.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Diff(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

fn load_schema(file_paths: &[PathBuf]) -> anyhow::Result<Schema> {
    log::debug!("Building a schema from {} files.", file_paths.len());
    Ok(SchemaBuilder::new()
        .load_files(file_paths.to_vec())?
        .build()?)
}
