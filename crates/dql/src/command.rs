use crate::Cli;
use crate::CommandResult;

/// A `dql` subcommand. Global flags (logging, parser limits) arrive through
/// `cli`.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
