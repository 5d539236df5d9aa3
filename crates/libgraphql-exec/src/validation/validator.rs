use crate::execution::FieldError;
use crate::execution::QueryContext;
use crate::Value;

/// What a [`Validator`] is validating.
#[derive(Clone, Copy, Debug)]
pub struct ValidationTarget<'a> {
    pub context: &'a QueryContext,

    /// The name substituted for `%{validated}` in messages: an argument or
    /// input field name for value validators, the field or input object type
    /// name for validators that check a whole bundle of arguments.
    pub name: &'a str,

    /// The parent object of the field whose arguments are being validated,
    /// when there is one.
    pub object: Option<&'a Value>,
}

/// A single check attached to an argument, an input object, or a field's
/// argument bundle.
///
/// Returning `Ok(Some(message))` reports a plain failure that is aggregated
/// with the failures of the other validators in the same
/// [`ValidatorChain`](crate::validation::ValidatorChain). Returning `Err`
/// raises a structured error that replaces every other failure for the same
/// target.
pub trait Validator: Send + Sync {
    /// Short name of this kind of validator (`"numericality"`, ...).
    fn kind(&self) -> &str;

    fn validate(
        &self,
        target: &ValidationTarget<'_>,
        value: &Value,
    ) -> Result<Option<String>, FieldError>;
}
