use crate::commands::load_schema;
use crate::graphql_files::GraphQLFileArgs;
use crate::output_utils;
use crate::output_utils::OutputFormat;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_analysis::schema_diff;
use libgraphql_analysis::schema_diff::ChangeRecord;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct DiffCmd {
    #[arg(
        help="Exit with a failure status if any change is breaking.",
        long,
    )]
    fail_on_breaking: bool,

    #[command(flatten)]
    files: GraphQLFileArgs,

    #[arg(
        default_value_t,
        help="How to render the list of changes.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        help="Files or directories defining the new version of the schema.",
        long,
        num_args=1..,
        required=true,
    )]
    new: Vec<PathBuf>,

    #[arg(
        help="Files or directories defining the old version of the schema.",
        long,
        num_args=1..,
        required=true,
    )]
    old: Vec<PathBuf>,
}
impl DiffCmd {
    fn diff(&self) -> anyhow::Result<Vec<ChangeRecord>> {
        let old_files = self.files.find_files(&self.old)?;
        let new_files = self.files.find_files(&self.new)?;
        let old_schema = load_schema(&old_files.file_paths)?;
        let new_schema = load_schema(&new_files.file_paths)?;
        Ok(schema_diff::compare(&old_schema, &new_schema))
    }

    fn render(&self, changes: &[ChangeRecord]) -> anyhow::Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(changes)?);
        }

        if changes.is_empty() {
            return Ok(format!("{} No changes.", output_utils::GREEN_CHECK));
        }

        let num_breaking = changes.iter().filter(|change| change.breaking).count();
        let mut lines =
            changes.iter()
                .map(|change| {
                    let marker =
                        if change.breaking {
                            output_utils::RED_X
                        } else {
                            output_utils::GREEN_CHECK
                        };
                    format!("{marker} {change}")
                })
                .collect::<Vec<_>>();
        lines.push(format!(
            "\nFound {} changes ({num_breaking} breaking).",
            changes.len(),
        ));
        Ok(lines.join("\n"))
    }
}

#[inherent::inherent]
impl RunnableCommand for DiffCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let rendered =
            self.diff().and_then(|changes| {
                let has_breaking = changes.iter().any(|change| change.breaking);
                Ok((self.render(&changes)?, has_breaking))
            });

        match rendered {
            Ok((output, has_breaking)) => {
                let result = CommandResult::stdout(format_args!("{output}"));
                if has_breaking && self.fail_on_breaking {
                    result.failed()
                } else {
                    result
                }
            },

            Err(err) => CommandResult::stderr(format_args!(
                "{} Unable to compare the schemas: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
