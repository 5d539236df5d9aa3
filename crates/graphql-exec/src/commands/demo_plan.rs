use crate::commands::DemoField;
use anyhow::Context;
use indexmap::IndexMap;
use libgraphql_exec::execution::QueryContext;
use libgraphql_exec::execution::QueryPlan;
use libgraphql_exec::types::EnumType;
use libgraphql_exec::types::TypeRegistry;
use libgraphql_exec::validation::ValidatorRegistry;
use libgraphql_exec::Value;

/// A query described as JSON, for trying the executor out from the command
/// line.
///
/// ```json
/// {
///   "operation": "Query",
///   "max_seconds": 1,
///   "fields": [
///     { "name": "slow", "type": "Int", "value": 1, "delay_ms": 400 }
///   ]
/// }
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DemoPlan {
    /// Entries copied into the query context before execution.
    #[serde(default)]
    pub context: IndexMap<String, Value>,

    /// Enum types to register, keyed by name.
    #[serde(default)]
    pub enums: IndexMap<String, Vec<String>>,

    pub fields: Vec<DemoField>,

    #[serde(default)]
    pub max_seconds: Option<f64>,

    #[serde(default = "default_operation")]
    pub operation: String,

    #[serde(default)]
    pub root_value: Value,
}
impl DemoPlan {
    pub fn query_context(&self) -> QueryContext {
        self.context.iter()
            .map(|(key, value)| (key.as_str(), value.to_owned()))
            .collect()
    }

    pub fn to_query_plan(&self) -> anyhow::Result<QueryPlan> {
        let validator_registry = ValidatorRegistry::new();
        let selections = self.fields.iter()
            .map(|field| field.to_field_plan(
                self.operation.as_str(),
                &validator_registry,
            ))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let query_plan = QueryPlan::new(self.operation.as_str(), selections)
            .context("The demo plan's selections are malformed")?;
        Ok(query_plan.with_root_value(self.root_value.to_owned()))
    }

    pub fn type_registry(&self) -> anyhow::Result<TypeRegistry> {
        let mut registry = TypeRegistry::new();
        for (name, values) in &self.enums {
            registry.register_enum(EnumType::new(name, values))
                .with_context(|| format!("Failed to register the `{name}` enum"))?;
        }
        Ok(registry)
    }
}

fn default_operation() -> String {
    "Query".to_string()
}
