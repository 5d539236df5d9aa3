use crate::types::Argument;
use crate::types::InputObjectType;
use crate::types::TypeBuildError;
use crate::validation::Validator;
use crate::validation::ValidatorChain;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TypeBuildError>;

/// Utility for building an [`InputObjectType`].
#[derive(Clone, Debug)]
pub struct InputObjectTypeBuilder {
    description: Option<String>,
    fields: IndexMap<String, Argument>,
    name: String,
    one_of: bool,
    validators: ValidatorChain,
}
impl InputObjectTypeBuilder {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            description: None,
            fields: IndexMap::new(),
            name: name.as_ref().to_string(),
            one_of: false,
            validators: ValidatorChain::new(),
        }
    }

    /// Start a new input object type that inherits everything `parent`
    /// defines: its fields, its validators and its `one_of`-ness.
    ///
    /// The parent is only read from. Anything added to the derived builder
    /// is invisible to `parent`.
    pub fn derive_from(
        parent: &InputObjectType,
        name: impl AsRef<str>,
    ) -> Self {
        Self {
            description: parent.description.to_owned(),
            fields: parent.fields.to_owned(),
            name: name.as_ref().to_string(),
            one_of: parent.one_of,
            validators: parent.validators.inherit(),
        }
    }

    /// Add a field after any previously added fields.
    pub fn add_field(mut self, field: Argument) -> Result<Self> {
        if self.fields.contains_key(field.name()) {
            return Err(TypeBuildError::DuplicateFieldName {
                field_name: field.name().to_string(),
                type_name: self.name,
            });
        }
        if self.one_of && field.type_wrapper().is_non_null() {
            return Err(TypeBuildError::NonNullOneOfField {
                field_name: field.name().to_string(),
                type_name: self.name,
            });
        }
        self.fields.insert(field.name().to_string(), field);
        Ok(self)
    }

    pub fn build(self) -> InputObjectType {
        InputObjectType {
            description: self.description,
            fields: self.fields,
            name: self.name,
            one_of: self.one_of,
            validators: self.validators,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Require exactly one field to be given whenever a value of this type
    /// is supplied. All fields of a one-of type must be nullable.
    pub fn one_of(mut self) -> Result<Self> {
        if let Some(field) = self.fields.values().find(|field| {
            field.type_wrapper().is_non_null()
        }) {
            return Err(TypeBuildError::NonNullOneOfField {
                field_name: field.name().to_string(),
                type_name: self.name,
            });
        }
        self.one_of = true;
        Ok(self)
    }

    /// Append an object-level validator.
    pub fn validates(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validators.attach(validator);
        self
    }
}
