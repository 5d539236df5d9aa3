use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils::GREEN_CHECK;
use crate::output_utils::RED_X;
use libgraphql_exec::types::TypeWrapper;

#[derive(clap::Args, Debug)]
pub(crate) struct SignatureCmd {
    #[arg(
        help="Type signatures to inspect (e.g. `[ID!]!`).",
        required=true,
        value_name="SIGNATURE",
    )]
    pub(crate) signatures: Vec<String>,
}

impl SignatureCmd {
    /// Successful parses go to stdout and failures to stderr. Any failure
    /// makes the exit code a failure.
    pub(crate) fn describe(&self) -> CommandResult {
        let mut lines = vec![];
        let mut failures = vec![];
        for signature in &self.signatures {
            match TypeWrapper::parse(signature) {
                Ok(type_wrapper) => lines.push(format!(
                    "{GREEN_CHECK} {type_wrapper}\n    \
                    list: {}\n    \
                    non_null: {}\n    \
                    named: {}",
                    type_wrapper.is_list(),
                    type_wrapper.is_non_null(),
                    type_wrapper.innermost_name(),
                )),
                Err(err) => failures.push(format!("{RED_X} `{signature}`: {err}")),
            }
        }

        if !failures.is_empty() {
            log::debug!(
                "{} of {} signatures failed to parse.",
                failures.len(),
                self.signatures.len(),
            );
        }
        CommandResult::report(lines, failures)
    }
}

#[inherent::inherent]
impl RunnableCommand for SignatureCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.describe()
    }
}
