mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {e:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// Maps a `LOG_LEVEL` value onto a tracing level.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

fn setup_logger(cli: &Cli) {
    let mut invalid_env_value = None;
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        match std::env::var("LOG_LEVEL") {
            Ok(value) => parse_log_level(&value).unwrap_or_else(|| {
                invalid_env_value = Some(value);
                DEFAULT_LOG_LEVEL
            }),
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    // Diagnostics go to stderr so `dql parse` output stays pipeable.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(value) = invalid_env_value {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{value}`");
    }
}
