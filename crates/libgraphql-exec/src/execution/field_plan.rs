use crate::execution::Resolver;
use crate::loc::SourceLocation;
use crate::types::Argument;
use crate::types::TypeWrapper;
use crate::validation::ValidatorChain;
use crate::Value;
use indexmap::IndexMap;

/// One field selection of a [`QueryPlan`](crate::execution::QueryPlan):
/// the field definition it invokes, the raw arguments supplied to it, and
/// the sub-selections to run on its value.
#[derive(Clone)]
pub struct FieldPlan {
    pub(super) alias: Option<String>,
    pub(super) argument_definitions: IndexMap<String, Argument>,
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) location: Option<SourceLocation>,
    pub(super) name: String,
    pub(super) owner_type_name: String,
    pub(super) resolver: Option<Resolver>,
    pub(super) return_type: TypeWrapper,
    pub(super) selections: Vec<FieldPlan>,
    pub(super) validators: ValidatorChain,
}
impl FieldPlan {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn argument_definitions(&self) -> &IndexMap<String, Argument> {
        &self.argument_definitions
    }

    /// The raw (uncoerced) argument values supplied to this selection.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn location(&self) -> Option<SourceLocation> {
        self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn owner_type_name(&self) -> &str {
        self.owner_type_name.as_str()
    }

    pub fn resolver(&self) -> Option<&Resolver> {
        self.resolver.as_ref()
    }

    /// The key this selection's value is stored under in the response: the
    /// alias if there is one, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn return_type(&self) -> &TypeWrapper {
        &self.return_type
    }

    pub fn selections(&self) -> &[FieldPlan] {
        self.selections.as_slice()
    }

    /// Validators that check this field's whole argument bundle.
    pub fn validators(&self) -> &ValidatorChain {
        &self.validators
    }
}
impl std::fmt::Debug for FieldPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldPlan")
            .field("alias", &self.alias)
            .field("arguments", &self.arguments)
            .field("location", &self.location)
            .field("name", &self.name)
            .field("owner_type_name", &self.owner_type_name)
            .field("has_resolver", &self.resolver.is_some())
            .field("return_type", &self.return_type)
            .field("selections", &self.selections)
            .field("validators", &self.validators)
            .finish()
    }
}
