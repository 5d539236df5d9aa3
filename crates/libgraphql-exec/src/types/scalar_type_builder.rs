use crate::execution::QueryContext;
use crate::types::CoercionError;
use crate::types::ScalarType;
use crate::Value;
use std::sync::Arc;

/// Utility for defining a custom [`ScalarType`].
///
/// Both coercion hooks default to the identity function.
///
/// ```
/// use libgraphql_exec::types::CoercionError;
/// use libgraphql_exec::types::ScalarTypeBuilder;
/// use libgraphql_exec::Value;
///
/// let upcase = ScalarTypeBuilder::new("Upcase")
///     .coerce_input(|raw, _ctx| match raw.as_str() {
///         Some(s) => Ok(Value::String(s.to_uppercase())),
///         None => Err(CoercionError::new("Upcase values must be strings")),
///     })
///     .build();
/// assert!(!upcase.is_default());
/// ```
pub struct ScalarTypeBuilder {
    coerce_input: Option<crate::types::CoerceFn>,
    coerce_result: Option<crate::types::CoerceFn>,
    description: Option<String>,
    handles_null: bool,
    name: String,
}
impl ScalarTypeBuilder {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            coerce_input: None,
            coerce_result: None,
            description: None,
            handles_null: false,
            name: name.as_ref().to_string(),
        }
    }

    pub fn build(self) -> ScalarType {
        ScalarType {
            coerce_input: self.coerce_input.unwrap_or_else(identity),
            coerce_result: self.coerce_result.unwrap_or_else(identity),
            description: self.description,
            handles_null: self.handles_null,
            is_default: false,
            name: self.name,
        }
    }

    pub fn coerce_input<F>(mut self, coerce_fn: F) -> Self
    where
        F: Fn(&Value, &QueryContext) -> Result<Value, CoercionError>
            + Send
            + Sync
            + 'static,
    {
        self.coerce_input = Some(Arc::new(coerce_fn));
        self
    }

    pub fn coerce_result<F>(mut self, coerce_fn: F) -> Self
    where
        F: Fn(&Value, &QueryContext) -> Result<Value, CoercionError>
            + Send
            + Sync
            + 'static,
    {
        self.coerce_result = Some(Arc::new(coerce_fn));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Opt into receiving `null` in the input-coercion hook rather than
    /// having `null` pass through untouched.
    pub fn handles_null(mut self, handles_null: bool) -> Self {
        self.handles_null = handles_null;
        self
    }
}

fn identity() -> crate::types::CoerceFn {
    Arc::new(|value: &Value, _context: &QueryContext| {
        Ok::<Value, CoercionError>(value.to_owned())
    })
}
