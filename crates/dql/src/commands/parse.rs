use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libdql_parser::ast::AstNode;
use libdql_parser::ast::Mutation;
use libdql_parser::ParsedMutation;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        help="Path to a file containing one mutation or upsert block.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let text = match read_source(&self.file_path).await {
            Ok(text) => text,
            Err(e) => return CommandResult::failure(format_args!("{e:#}")),
        };

        let options = cli.parser_options();
        log::debug!("Parsing {:#?} with {options:?}.", self.file_path);
        match libdql_parser::parse_mutation_with_file_path(
            &text,
            &self.file_path,
            &options,
        ) {
            Ok(parsed) => CommandResult::success(format_args!(
                "Parsed {:#?}:\n{}",
                self.file_path,
                describe(&parsed),
            )),
            Err(e) => CommandResult::parse_failure(&e, &text),
        }
    }
}

async fn read_source(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {path:#?}"))
}

/// Summarizes a parsed block for display.
fn describe(parsed: &ParsedMutation) -> String {
    let mut out = String::new();
    let kind = if parsed.is_upsert() { "upsert" } else { "mutation" };
    let _ = writeln!(out, "  * Block: {kind}");

    match &parsed.mutation {
        Some(mutation) => describe_mutation(&mut out, mutation),
        None => {
            let _ = writeln!(out, "  * Mutation: none");
        },
    }

    if let Some(query) = &parsed.query {
        let _ = writeln!(out, "  * Query roots: {}", query.len());
        if !query.is_empty() {
            out.push_str(&output_utils::indent(&query.to_source(None), 4));
            out.push('\n');
        }
    }

    out.trim_end().to_string()
}

fn describe_mutation(out: &mut String, mutation: &Mutation) {
    for (label, payload) in [
        ("Set", &mutation.set_nquads),
        ("Delete", &mutation.del_nquads),
    ] {
        match payload {
            Some(bytes) => {
                let _ = writeln!(out, "  * {label} payload: {} bytes", bytes.len());
            },
            None => {
                let _ = writeln!(out, "  * {label} payload: none");
            },
        }
    }
}
