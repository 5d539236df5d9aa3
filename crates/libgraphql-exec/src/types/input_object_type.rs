use crate::types::Argument;
use crate::validation::ValidatorChain;
use indexmap::IndexMap;

/// An input object type: a named bundle of [`Argument`]s accepted as a
/// single argument value.
///
/// Build these with
/// [`InputObjectTypeBuilder`](crate::types::InputObjectTypeBuilder).
#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Argument>,
    pub(super) name: String,
    pub(super) one_of: bool,
    pub(super) validators: ValidatorChain,
}
impl InputObjectType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Argument> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Argument> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Indicates whether exactly one field must be provided (and non-null)
    /// whenever a value of this type is supplied.
    pub fn one_of(&self) -> bool {
        self.one_of
    }

    /// Validators that run against the whole coerced object after its
    /// individual fields have been coerced and validated.
    pub fn validators(&self) -> &ValidatorChain {
        &self.validators
    }
}
