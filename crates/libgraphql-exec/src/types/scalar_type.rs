use crate::execution::QueryContext;
use crate::types::CoercionError;
use crate::Value;
use std::sync::Arc;

/// Signature shared by input- and result-coercion hooks.
pub type CoerceFn = Arc<
    dyn Fn(&Value, &QueryContext) -> Result<Value, CoercionError> + Send + Sync
>;

/// A leaf type that converts client-supplied literals into internal values
/// ([`ScalarType::coerce_input`]) and resolved values into response values
/// ([`ScalarType::coerce_result`]).
///
/// Use [`ScalarTypeBuilder`](crate::types::ScalarTypeBuilder) to define
/// custom scalars.
#[derive(Clone)]
pub struct ScalarType {
    pub(super) coerce_input: CoerceFn,
    pub(super) coerce_result: CoerceFn,
    pub(super) description: Option<String>,
    pub(super) handles_null: bool,
    pub(super) is_default: bool,
    pub(super) name: String,
}
impl ScalarType {
    /// Coerce a raw input value.
    ///
    /// `null` short-circuits to `null` without consulting the input hook
    /// unless the scalar was built with
    /// [`handles_null`](crate::types::ScalarTypeBuilder::handles_null), in
    /// which case the hook sees the `null` (and may still fail on it).
    pub fn coerce_input(
        &self,
        raw: &Value,
        context: &QueryContext,
    ) -> Result<Value, CoercionError> {
        if raw.is_null() && !self.handles_null {
            return Ok(Value::Null);
        }
        (self.coerce_input)(raw, context)
    }

    /// Coerce a resolved value for serialization into a response.
    pub fn coerce_result(
        &self,
        value: &Value,
        context: &QueryContext,
    ) -> Result<Value, CoercionError> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        (self.coerce_result)(value, context)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn handles_null(&self) -> bool {
        self.handles_null
    }

    /// Indicates whether this is one of the scalars defined by the GraphQL
    /// specification (`Int`, `Float`, `String`, `Boolean`, `ID`).
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn builtins() -> Vec<ScalarType> {
        vec![
            builtin("Boolean", coerce_boolean, coerce_boolean),
            builtin("Float", coerce_float, coerce_float),
            builtin("ID", coerce_id, coerce_id),
            builtin("Int", coerce_int, coerce_int),
            builtin("String", coerce_string, coerce_string),
        ]
    }
}
impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("handles_null", &self.handles_null)
            .field("is_default", &self.is_default)
            .finish_non_exhaustive()
    }
}

fn builtin(
    name: &str,
    coerce_input: fn(&Value, &QueryContext) -> Result<Value, CoercionError>,
    coerce_result: fn(&Value, &QueryContext) -> Result<Value, CoercionError>,
) -> ScalarType {
    ScalarType {
        coerce_input: Arc::new(coerce_input),
        coerce_result: Arc::new(coerce_result),
        description: None,
        handles_null: false,
        is_default: true,
        name: name.to_string(),
    }
}

fn coerce_boolean(
    value: &Value,
    _context: &QueryContext,
) -> Result<Value, CoercionError> {
    match value {
        Value::Bool(_) => Ok(value.to_owned()),
        _ => Err(CoercionError::invalid_value("Boolean", value)),
    }
}

fn coerce_float(
    value: &Value,
    _context: &QueryContext,
) -> Result<Value, CoercionError> {
    match value {
        Value::Int(i) => Ok(Value::Float(*i as f64)),

        // Literals like `1e400` parse fine but overflow to infinity, which is
        // outside of what a GraphQL Float can represent.
        Value::Float(f) if f.is_finite() => Ok(Value::Float(*f)),

        _ => Err(CoercionError::invalid_value("Float", value)),
    }
}

fn coerce_id(
    value: &Value,
    _context: &QueryContext,
) -> Result<Value, CoercionError> {
    match value {
        Value::String(_) => Ok(value.to_owned()),
        Value::Int(i) => Ok(Value::String(i.to_string())),
        _ => Err(CoercionError::invalid_value("ID", value)),
    }
}

fn coerce_int(
    value: &Value,
    _context: &QueryContext,
) -> Result<Value, CoercionError> {
    match value {
        Value::Int(i) if i32::try_from(*i).is_ok() => Ok(Value::Int(*i)),
        _ => Err(CoercionError::invalid_value("Int", value)),
    }
}

fn coerce_string(
    value: &Value,
    _context: &QueryContext,
) -> Result<Value, CoercionError> {
    match value {
        Value::String(_) => Ok(value.to_owned()),
        _ => Err(CoercionError::invalid_value("String", value)),
    }
}
