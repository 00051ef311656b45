use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Schema file arguments shared by every command that loads a schema.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaFileArgs {
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

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug)]
pub(crate) struct DiscoveredFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

impl SchemaFileArgs {
    /// Find all schema files recursively located at or under each path.
    pub(crate) fn discover(&self) -> anyhow::Result<DiscoveredFiles> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }

                let matches_ext = path.extension()
                    .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                    .unwrap_or(false);
                if matches_ext {
                    log::trace!("Found schema file at {path:#?}.");
                    file_paths.push(std::fs::canonicalize(path)?);
                } else {
                    log::trace!("Skipping non-graphql file: {path:#?}.");
                    num_skipped += 1;
                }
            }
        }

        // A single file given explicitly is loaded even if its extension
        // doesn't match.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let canonicalized = std::fs::canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to load {canonicalized:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(canonicalized);
            num_skipped = num_skipped.saturating_sub(1);
        }

        log::debug!("Found {} GraphQL schema files.", file_paths.len());
        Ok(DiscoveredFiles {
            file_paths,
            num_skipped,
        })
    }
}
