use crate::commands::load_schema;
use crate::graphql_files::GraphQLFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_analysis::printer::SchemaPrinter;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[command(flatten)]
    files: GraphQLFileArgs,

    #[arg(
        help="Print the built-in directives and introspection types instead \
             of the schema's own definitions.",
        long,
    )]
    introspection: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which together define the schema.",
        name="SCHEMA_PATHS",
        required=true,
    )]
    schema_paths: Vec<PathBuf>,
}
impl PrintCmd {
    fn print(&self) -> anyhow::Result<String> {
        let found = self.files.find_files(&self.schema_paths)?;
        let schema = load_schema(&found.file_paths)?;
        let printer = SchemaPrinter::new(&schema);
        Ok(if self.introspection {
            printer.print_introspection()
        } else {
            printer.print()
        })
    }
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        match self.print() {
            Ok(sdl) => CommandResult::stdout(format_args!("{sdl}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Unable to print the schema: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
