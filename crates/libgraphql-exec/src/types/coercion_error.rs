use crate::Value;
use thiserror::Error;

/// Raised by a scalar or enum coercion hook when a value can not be coerced
/// to (or from) the type's internal representation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionError {
    /// A hook-supplied failure. The message is surfaced to clients verbatim.
    #[error("{message}")]
    Custom {
        message: String,
    },

    /// The value is syntactically fine but falls outside of the domain of
    /// `type_name` (wrong kind of value, out-of-range number, unknown enum
    /// member, ...).
    #[error(
        "Could not coerce value {} to {type_name}",
        value.to_graphql_literal(),
    )]
    InvalidValue {
        type_name: String,
        value: Value,
    },
}
impl CoercionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_value(type_name: &str, value: &Value) -> Self {
        Self::InvalidValue {
            type_name: type_name.to_string(),
            value: value.to_owned(),
        }
    }
}
