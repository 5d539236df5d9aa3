use crate::types::CoercionError;
use crate::Value;
use indexmap::IndexSet;

/// A leaf type whose values are drawn from a fixed set of member names.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexSet<String>,
}
impl EnumType {
    pub fn new<S: AsRef<str>>(
        name: impl AsRef<str>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            description: None,
            name: name.as_ref().to_string(),
            values: values.into_iter()
                .map(|value| value.as_ref().to_string())
                .collect(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Accepts an enum literal (or, as variables arrive from JSON, a string)
    /// naming one of this enum's members.
    pub fn coerce_input(&self, raw: &Value) -> Result<Value, CoercionError> {
        self.coerce_member(raw)
    }

    pub fn coerce_result(&self, value: &Value) -> Result<Value, CoercionError> {
        self.coerce_member(value)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &IndexSet<String> {
        &self.values
    }

    fn coerce_member(&self, value: &Value) -> Result<Value, CoercionError> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Enum(member) | Value::String(member)
                if self.values.contains(member) =>
                Ok(Value::Enum(member.to_owned())),
            _ => Err(CoercionError::invalid_value(self.name(), value)),
        }
    }
}
