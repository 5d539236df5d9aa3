use crate::commands::SignatureCmd;
use std::process::ExitCode;

fn describe(signatures: &[&str]) -> crate::CommandResult {
    SignatureCmd {
        signatures: signatures.iter().map(|sig| sig.to_string()).collect(),
    }.describe()
}

fn same_exit_code(actual: ExitCode, expected: ExitCode) -> bool {
    format!("{actual:?}") == format!("{expected:?}")
}

#[test]
fn describes_each_signature() {
    let result = describe(&["[ID!]!", "Int"]);

    assert!(same_exit_code(result.exit_code, ExitCode::SUCCESS));
    assert!(result.stderr.is_none());
    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("[ID!]!\n    list: false\n    non_null: true\n    named: ID"));
    assert!(stdout.contains("Int\n    list: false\n    non_null: false\n    named: Int"));
}

#[test]
fn failures_do_not_hide_successful_signatures() {
    let result = describe(&["[Int!]", "[Int", "String!"]);

    assert!(same_exit_code(result.exit_code, ExitCode::FAILURE));
    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("[Int!]\n    list: true"));
    assert!(stdout.contains("String!\n    list: false"));
    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("`[Int`"));
    assert!(!stderr.contains("String!"));
}

#[test]
fn all_failures_leave_stdout_empty() {
    let result = describe(&["!"]);

    assert!(same_exit_code(result.exit_code, ExitCode::FAILURE));
    assert!(result.stdout.is_none());
    assert!(result.stderr.is_some());
}
