use crate::execution::FieldError;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::Value;
use std::sync::Arc;

/// The ordered list of validators attached to one argument, input object or
/// field.
#[derive(Clone, Default)]
pub struct ValidatorChain {
    validators: Vec<Arc<dyn Validator>>,
}
impl ValidatorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join plain failure messages into the single message reported for a
    /// target. `None` when there are no failures.
    pub fn aggregate(messages: &[String]) -> Option<String> {
        if messages.is_empty() {
            None
        } else {
            Some(messages.join(", "))
        }
    }

    /// Append `validator` after any previously attached validators.
    pub fn attach(&mut self, validator: Arc<dyn Validator>) {
        self.validators.push(validator);
    }

    /// A copy of this chain for a derived definition to extend. Attaching to
    /// the copy leaves this chain untouched.
    pub fn inherit(&self) -> Self {
        self.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.validators.iter()
            .map(|validator| validator.kind())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Run every validator in attachment order and collect the plain failure
    /// messages. Every validator runs even after an earlier one fails.
    ///
    /// A validator that raises a structured error stops the chain; that
    /// error is returned in place of any messages collected so far.
    pub fn run_all(
        &self,
        target: &ValidationTarget<'_>,
        value: &Value,
    ) -> Result<Vec<String>, FieldError> {
        let mut messages = vec![];
        for validator in &self.validators {
            if let Some(message) = validator.validate(target, value)? {
                messages.push(message);
            }
        }
        Ok(messages)
    }
}
impl std::fmt::Debug for ValidatorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}
