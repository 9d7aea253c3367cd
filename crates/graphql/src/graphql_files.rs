use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Clone, Debug, clap::Args)]
pub(crate) struct GraphQLFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,
}

/// The GraphQL files found at or under a set of paths.
#[derive(Debug)]
pub(crate) struct FoundFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

impl GraphQLFileArgs {
    /// Recursively collects every file at or under `paths` whose extension is
    /// one of `--graphql-file-exts`.
    ///
    /// If exactly one path is given and it names a file, that file is used even
    /// if its extension doesn't match.
    pub(crate) fn find_files(&self, paths: &[PathBuf]) -> anyhow::Result<FoundFiles> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!("Scanning {} input paths...", paths.len());
        let mut num_skipped: usize = 0;
        let mut file_paths = vec![];
        for path in paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let is_graphql_file =
                    entry_path.extension()
                        .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                        .unwrap_or(false);
                if is_graphql_file {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    file_paths.push(std::fs::canonicalize(entry_path)?);
                } else {
                    log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                    num_skipped += 1;
                }
            }
        }

        if file_paths.is_empty()
            && let [only_path] = paths
            && only_path.is_file() {
            let only_path = std::fs::canonicalize(only_path)?;
            log::warn!(
                "Proceeding with {only_path:#?} even though it doesn't match \
                any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped = num_skipped.saturating_sub(1);
            file_paths.push(only_path);
        }

        if file_paths.is_empty() {
            anyhow::bail!("No GraphQL files were found under {paths:?}");
        }

        log::debug!("Found {} GraphQL files.", file_paths.len());
        Ok(FoundFiles {
            file_paths,
            num_skipped,
        })
    }
}
