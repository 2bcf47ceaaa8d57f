use libdql_parser::DqlParseError;
use std::process::ExitCode;

use crate::output_utils;

/// What a finished command prints and how the process exits.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn failure(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{} {fmt_args}", output_utils::RED_X)),
            stdout: None,
        }
    }

    pub fn success(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{} {fmt_args}", output_utils::GREEN_CHECK)),
        }
    }

    /// Renders a parse error against the text it was produced from.
    pub fn parse_failure(error: &DqlParseError, source: &str) -> Self {
        Self::failure(format_args!("{}", error.format_detailed(Some(source)).trim_end()))
    }
}
