use crate::execution::ResponsePath;
use thiserror::Error;

/// A field that was abandoned because its query ran past the deadline.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Timeout on {owner_type_name}.{field_name}")]
pub struct TimeoutError {
    field_name: String,
    owner_type_name: String,
    path: ResponsePath,
}
impl TimeoutError {
    pub fn new(
        owner_type_name: impl Into<String>,
        field_name: impl Into<String>,
        path: ResponsePath,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            owner_type_name: owner_type_name.into(),
            path,
        }
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn owner_type_name(&self) -> &str {
        self.owner_type_name.as_str()
    }

    pub fn path(&self) -> &ResponsePath {
        &self.path
    }
}
