use crate::execution::FieldPlan;
use crate::execution::Resolver;
use crate::loc::SourceLocation;
use crate::types::Argument;
use crate::types::TypeWrapper;
use crate::validation::Validator;
use crate::validation::ValidatorChain;
use crate::Value;
use indexmap::IndexMap;
use std::sync::Arc;

/// Assembles a [`FieldPlan`].
///
/// ```
/// use libgraphql_exec::execution::constant;
/// use libgraphql_exec::execution::FieldPlanBuilder;
/// use libgraphql_exec::types::Argument;
/// use libgraphql_exec::types::TypeWrapper;
///
/// let field = FieldPlanBuilder::new("Query", "greeting", TypeWrapper::named("String"))
///     .argument(Argument::new("name", TypeWrapper::named("String")))
///     .raw_argument("name", "Ada")
///     .resolver(constant("Hello, Ada"))
///     .build();
/// assert_eq!(field.response_key(), "greeting");
/// ```
#[derive(Clone, Debug)]
pub struct FieldPlanBuilder {
    plan: FieldPlan,
}
impl FieldPlanBuilder {
    pub fn new(
        owner_type_name: impl AsRef<str>,
        name: impl AsRef<str>,
        return_type: TypeWrapper,
    ) -> Self {
        Self {
            plan: FieldPlan {
                alias: None,
                argument_definitions: IndexMap::new(),
                arguments: IndexMap::new(),
                location: None,
                name: name.as_ref().to_string(),
                owner_type_name: owner_type_name.as_ref().to_string(),
                resolver: None,
                return_type,
                selections: vec![],
                validators: ValidatorChain::new(),
            },
        }
    }

    pub fn alias(mut self, alias: impl AsRef<str>) -> Self {
        self.plan.alias = Some(alias.as_ref().to_string());
        self
    }

    /// Declare an argument this field accepts.
    pub fn argument(mut self, definition: Argument) -> Self {
        self.plan.argument_definitions.insert(
            definition.name().to_string(),
            definition,
        );
        self
    }

    pub fn build(self) -> FieldPlan {
        self.plan
    }

    pub fn location(mut self, location: SourceLocation) -> Self {
        self.plan.location = Some(location);
        self
    }

    /// Supply a value for an argument in this selection.
    pub fn raw_argument(
        mut self,
        name: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Self {
        self.plan.arguments.insert(name.as_ref().to_string(), value.into());
        self
    }

    pub fn resolver(mut self, resolver: Resolver) -> Self {
        self.plan.resolver = Some(resolver);
        self
    }

    pub fn select(mut self, selection: FieldPlan) -> Self {
        self.plan.selections.push(selection);
        self
    }

    /// Attach a validator that checks the whole bundle of coerced
    /// arguments.
    pub fn validates(mut self, validator: Arc<dyn Validator>) -> Self {
        self.plan.validators.attach(validator);
        self
    }
}
