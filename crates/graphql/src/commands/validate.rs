use crate::commands::load_schema;
use crate::graphql_files::GraphQLFileArgs;
use crate::output_utils;
use crate::output_utils::OutputFormat;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_analysis::ast;
use libgraphql_analysis::file_reader;
use libgraphql_analysis::validation::FieldsWillMergeValidator;
use libgraphql_analysis::validation::ValidationMessage;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    files: GraphQLFileArgs,

    #[arg(
        default_value_t,
        help="How to render validation messages.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which together define the schema.",
        long,
        num_args=1..,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL query documents or directories \
             containing them which need to be validated.",
        name="QUERY_PATHS",
        required=true,
    )]
    query_paths: Vec<PathBuf>,
}

/// The validation messages produced for one query document.
#[derive(Debug, serde::Serialize)]
struct FileReport {
    file: PathBuf,
    messages: Vec<ValidationMessage>,
}

impl ValidateCmd {
    fn validate(&self) -> anyhow::Result<(Vec<FileReport>, usize)> {
        let schema_files = self.files.find_files(&self.schema)?;
        let schema = load_schema(&schema_files.file_paths)?;

        let query_files = self.files.find_files(&self.query_paths)?;
        let mut reports = vec![];
        for file_path in query_files.file_paths {
            let content = file_reader::read_content(file_path.as_path())?;
            let document =
                ast::query::parse(content.as_str())
                    .map_err(|err| anyhow::anyhow!(
                        "Error parsing {file_path:?}: {err}",
                    ))?;

            let messages = FieldsWillMergeValidator::new(&schema, &document).validate();
            log::debug!("{} messages for {file_path:?}.", messages.len());
            reports.push(FileReport {
                file: file_path,
                messages,
            });
        }

        Ok((reports, query_files.num_skipped))
    }

    fn render(&self, reports: &[FileReport], num_skipped: usize) -> anyhow::Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(reports)?);
        }

        let num_messages: usize = reports.iter().map(|report| report.messages.len()).sum();
        if num_messages == 0 {
            return Ok(format!(
                concat!(
                    "{} All queries validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-graphql files.",
                ),
                output_utils::GREEN_CHECK,
                reports.len(),
                num_skipped,
            ));
        }

        let lines =
            reports.iter()
                .flat_map(|report| report.messages.iter().map(move |message| format!(
                    "{} {}: {message}",
                    output_utils::RED_X,
                    report.file.display(),
                )))
                .collect::<Vec<_>>();
        Ok(lines.join("\n"))
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let rendered =
            self.validate().and_then(|(reports, num_skipped)| {
                let is_valid = reports.iter().all(|report| report.messages.is_empty());
                Ok((self.render(&reports, num_skipped)?, is_valid))
            });

        match rendered {
            Ok((output, true)) => CommandResult::stdout(format_args!("{output}")),
            Ok((output, false)) => CommandResult::stdout(format_args!("{output}")).failed(),
            Err(err) => CommandResult::stderr(format_args!(
                "{} GraphQL validation errors: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
