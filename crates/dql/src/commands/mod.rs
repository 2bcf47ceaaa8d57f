mod parse;
mod validate;

use crate::Cli;
use crate::CommandResult;
use parse::ParseCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "dql")]
pub(crate) enum CommandEnum {
    /// Parse a single mutation or upsert block and print what it contains.
    Parse(Box<ParseCmd>),
    /// Check that every DQL file at or under the given paths parses.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
