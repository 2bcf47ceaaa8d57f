use clap::CommandFactory;
use crate::commands;
use libdql_parser::DqlParserOptions;

#[derive(clap::Parser, Debug)]
#[command(name = "dql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,

    #[arg(
        default_value_t=DqlParserOptions::DEFAULT_MAX_RECURSION_DEPTH,
        global=true,
        help="Maximum nesting depth of selection sets and values inside \
             upsert queries.",
        long,
    )]
    pub max_depth: usize,

    #[arg(
        global=true,
        help="Reject inputs larger than this many bytes.",
        long,
    )]
    pub max_input_bytes: Option<usize>,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    pub(crate) fn parser_options(&self) -> DqlParserOptions {
        DqlParserOptions::default()
            .max_recursion_depth(self.max_depth)
            .max_input_bytes(self.max_input_bytes)
    }
}
