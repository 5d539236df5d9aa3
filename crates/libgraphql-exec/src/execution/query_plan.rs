use crate::execution::FieldPlan;
use crate::execution::QueryPlanError;
use crate::execution::ResponsePath;
use crate::types::TypeBuildError;
use crate::types::TypeRegistry;
use crate::Value;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, QueryPlanError>;

/// A resolved operation, ready to hand to an
/// [`Executor`](crate::execution::Executor).
#[derive(Clone, Debug)]
pub struct QueryPlan {
    operation_type_name: String,
    root_value: Value,
    selections: Vec<FieldPlan>,
}
impl QueryPlan {
    /// Check that `selections` form a well-shaped tree: response keys are
    /// unique among siblings and every field is selected on a value of its
    /// owner type.
    pub fn new(
        operation_type_name: impl AsRef<str>,
        selections: Vec<FieldPlan>,
    ) -> Result<Self> {
        let operation_type_name = operation_type_name.as_ref().to_string();
        check_selections(
            operation_type_name.as_str(),
            selections.as_slice(),
            &ResponsePath::root(),
        )?;
        Ok(Self {
            operation_type_name,
            root_value: Value::Null,
            selections,
        })
    }

    /// Check every argument default in the plan against `registry`, so a
    /// bad default is caught before any query runs rather than on every
    /// query that omits the argument.
    pub fn check_default_values(
        &self,
        registry: &TypeRegistry,
    ) -> std::result::Result<(), TypeBuildError> {
        check_argument_defaults(registry, self.selections.as_slice())
    }

    pub fn operation_type_name(&self) -> &str {
        self.operation_type_name.as_str()
    }

    pub fn root_value(&self) -> &Value {
        &self.root_value
    }

    pub fn selections(&self) -> &[FieldPlan] {
        self.selections.as_slice()
    }

    /// The parent object value handed to root fields.
    pub fn with_root_value(mut self, root_value: impl Into<Value>) -> Self {
        self.root_value = root_value.into();
        self
    }
}

fn check_selections(
    parent_type_name: &str,
    selections: &[FieldPlan],
    path: &ResponsePath,
) -> Result<()> {
    let mut seen_keys = HashSet::new();
    for field in selections {
        if field.owner_type_name() != parent_type_name {
            return Err(QueryPlanError::OwnerTypeMismatch {
                field_name: field.name().to_string(),
                owner_type_name: field.owner_type_name().to_string(),
                parent_type_name: parent_type_name.to_string(),
            });
        }
        if !seen_keys.insert(field.response_key()) {
            return Err(QueryPlanError::DuplicateResponseKey {
                path: path.to_owned(),
                response_key: field.response_key().to_string(),
            });
        }
        check_selections(
            field.return_type().innermost_name(),
            field.selections(),
            &path.child(field.response_key()),
        )?;
    }
    Ok(())
}

fn check_argument_defaults(
    registry: &TypeRegistry,
    selections: &[FieldPlan],
) -> std::result::Result<(), TypeBuildError> {
    for field in selections {
        for argument in field.argument_definitions().values() {
            let coordinate = format!(
                "{}.{}.{}",
                field.owner_type_name(),
                field.name(),
                argument.name(),
            );
            registry.check_default_value(coordinate.as_str(), argument)?;
        }
        check_argument_defaults(registry, field.selections())?;
    }
    Ok(())
}
