use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libdql_parser::DqlParserOptions;
use std::collections::HashSet;
use std::path::PathBuf;
use tokio::task::JoinSet;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "dql".to_string(),
            "rdf".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    dql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more DQL files or directories containing \
             DQL files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// Why a single file failed validation, rendered for display.
struct FileFailure {
    path: PathBuf,
    rendered: String,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        // Normalize the set of file extensions to filter with
        let dql_file_exts: HashSet<String> =
            self.dql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files = 0usize;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        let matches_ext = path
                            .extension()
                            .map(|ext| ext.to_string_lossy())
                            .is_some_and(|ext| dql_file_exts.contains(ext.as_ref()));
                        if matches_ext {
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file passed explicitly is validated even if its extension
        // is not in `--dql-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --dql-file-exts ({}).",
                dql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = num_skipped_files.saturating_sub(1);
            file_paths.push(first_arg_path.clone());
        }

        log::debug!("Found {} DQL files to be validated.", file_paths.len());

        let options = cli.parser_options();
        let mut tasks = JoinSet::new();
        for path in file_paths.iter().cloned() {
            let options = options.clone();
            tasks.spawn(async move { validate_file(path, options).await });
        }

        let mut failures: Vec<FileFailure> = vec![];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {},
                Ok(Err(failure)) => failures.push(failure),
                Err(e) => errors.push(format!("Validation task failed: {e}")),
            }
        }
        failures.sort_by(|a, b| a.path.cmp(&b.path));

        if !errors.is_empty() || !failures.is_empty() {
            let rendered_failures = failures
                .iter()
                .map(|failure| failure.rendered.as_str())
                .chain(errors.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join("\n");
            return CommandResult::failure(format_args!(
                "{} of {} DQL files failed validation:\n{rendered_failures}",
                failures.len(),
                file_paths.len(),
            ));
        }

        CommandResult::success(format_args!(
            concat!(
                "All DQL validated successfully:\n",
                "  * Validated {} files.\n",
                "  * Skipped {} non-dql files.",
            ),
            file_paths.len(),
            num_skipped_files,
        ))
    }
}

async fn validate_file(path: PathBuf, options: DqlParserOptions) -> Result<(), FileFailure> {
    let text = match tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {path:#?}"))
    {
        Ok(text) => text,
        Err(e) => {
            return Err(FileFailure {
                rendered: format!("{e:#}"),
                path,
            });
        },
    };

    match libdql_parser::parse_mutation_with_file_path(&text, &path, &options) {
        Ok(_) => {
            log::debug!("{path:#?} is valid.");
            Ok(())
        },
        Err(e) => Err(FileFailure {
            rendered: e.format_detailed(Some(&text)),
            path,
        }),
    }
}
