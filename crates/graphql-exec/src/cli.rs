use clap::CommandFactory;
use crate::CommandResult;
use crate::commands;

/// Inspect GraphQL type signatures and execute JSON demo plans against the
/// `libgraphql-exec` executor.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-exec", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output (overrides `LOG_LEVEL`).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Without a subcommand there is nothing to execute, so show usage.
    pub(crate) fn usage() -> CommandResult {
        CommandResult::output(Self::command().render_help().to_string())
    }
}
