mod demo_argument;
mod demo_field;
mod demo_plan;
mod run;
mod signature;

use crate::Cli;
use crate::CommandResult;
pub(crate) use demo_argument::DemoArgument;
pub(crate) use demo_field::DemoField;
pub(crate) use demo_plan::DemoPlan;
use run::RunCmd;
use signature::SignatureCmd;

/// A subcommand of the CLI. Implementations use `#[inherent::inherent]` so
/// `run` is also callable without the trait in scope.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum CommandEnum {
    /// Execute a JSON demo plan and print the response.
    Run(Box<RunCmd>),

    /// Inspect one or more GraphQL type signatures.
    Signature(Box<SignatureCmd>),
}
impl CommandEnum {
    pub async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Run(cmd) => cmd.run(cli).await,
            Self::Signature(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
