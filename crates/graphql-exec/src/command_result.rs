use crate::output_utils::RED_X;
use std::process::ExitCode;

/// What a subcommand prints, and the exit code the process ends with.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A command that could not produce any output at all.
    pub fn failed(err: &anyhow::Error) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{RED_X} {err:#}")),
            stdout: None,
        }
    }

    pub fn output(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(stdout.into()),
        }
    }

    /// One line per input: `successes` go to stdout and `failures` to stderr.
    /// Any failure fails the process, but never hides the successes.
    pub fn report(successes: Vec<String>, failures: Vec<String>) -> Self {
        let exit_code =
            if failures.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        Self {
            exit_code,
            stderr: (!failures.is_empty()).then(|| failures.join("\n")),
            stdout: (!successes.is_empty()).then(|| successes.join("\n")),
        }
    }
}
