use crate::timeout::TimeoutError;
use crate::Value;
use indexmap::IndexMap;
use thiserror::Error;

/// A structured error raised by a resolver or validator. Reported at the
/// path of the field being resolved, with its `extensions` carried through
/// to the response untouched.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct FieldError {
    extensions: IndexMap<String, Value>,
    message: String,
}
impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            extensions: IndexMap::new(),
            message: message.into(),
        }
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn with_extension(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }
}

/// Why a resolver produced no value.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A checkpoint inside the resolver found the query past its deadline.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}
