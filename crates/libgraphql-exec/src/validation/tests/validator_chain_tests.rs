use crate::execution::FieldError;
use crate::execution::QueryContext;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorChain;
use crate::Value;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Fails with a fixed message and counts how often it ran.
struct Failing {
    calls: Arc<AtomicUsize>,
    message: &'static str,
}
impl Validator for Failing {
    fn kind(&self) -> &str {
        "failing"
    }

    fn validate(
        &self,
        _target: &ValidationTarget<'_>,
        _value: &Value,
    ) -> Result<Option<String>, FieldError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(self.message.to_string()))
    }
}

struct Raising;
impl Validator for Raising {
    fn kind(&self) -> &str {
        "raising"
    }

    fn validate(
        &self,
        _target: &ValidationTarget<'_>,
        _value: &Value,
    ) -> Result<Option<String>, FieldError> {
        Err(FieldError::new("raised"))
    }
}

fn failing(calls: &Arc<AtomicUsize>, message: &'static str) -> Arc<dyn Validator> {
    Arc::new(Failing {
        calls: calls.clone(),
        message,
    })
}

fn run(chain: &ValidatorChain) -> Result<Vec<String>, FieldError> {
    let context = QueryContext::new();
    let target = ValidationTarget {
        context: &context,
        name: "arg",
        object: None,
    };
    chain.run_all(&target, &Value::Int(1))
}

#[test]
fn every_validator_runs_in_attachment_order() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut chain = ValidatorChain::new();
    chain.attach(failing(&calls, "first"));
    chain.attach(failing(&calls, "second"));

    let messages = run(&chain).unwrap();
    assert_eq!(messages, vec!["first", "second"]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        ValidatorChain::aggregate(&messages),
        Some("first, second".to_string()),
    );
}

#[test]
fn no_failures_aggregate_to_nothing() {
    assert_eq!(ValidatorChain::aggregate(&[]), None);
    assert_eq!(run(&ValidatorChain::new()), Ok(vec![]));
}

#[test]
fn a_raised_error_stops_the_chain_and_wins() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut chain = ValidatorChain::new();
    chain.attach(failing(&calls, "first"));
    chain.attach(Arc::new(Raising));
    chain.attach(failing(&calls, "third"));

    assert_eq!(run(&chain), Err(FieldError::new("raised")));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn inherited_chains_are_independent_copies() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut parent = ValidatorChain::new();
    parent.attach(failing(&calls, "parent"));

    let mut child = parent.inherit();
    child.attach(failing(&calls, "child"));

    assert_eq!(parent.len(), 1);
    assert_eq!(child.len(), 2);
    assert_eq!(run(&child).unwrap(), vec!["parent", "child"]);
    assert_eq!(format!("{child:?}"), "[\"failing\", \"failing\"]");
}
