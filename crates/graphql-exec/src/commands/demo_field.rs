use crate::commands::DemoArgument;
use anyhow::Context;
use indexmap::IndexMap;
use libgraphql_exec::execution::FieldError;
use libgraphql_exec::execution::FieldPlan;
use libgraphql_exec::execution::FieldPlanBuilder;
use libgraphql_exec::execution::resolver_fn;
use libgraphql_exec::execution::Resolver;
use libgraphql_exec::loc::SourceLocation;
use libgraphql_exec::types::TypeWrapper;
use libgraphql_exec::validation::ValidatorConfig;
use libgraphql_exec::validation::ValidatorRegistry;
use libgraphql_exec::Value;
use std::time::Duration;

/// One field selection within a [`DemoPlan`](crate::commands::DemoPlan).
///
/// Fields with none of `value`, `error` or `delay_ms` fall back to reading
/// `name` off of their parent object.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DemoField {
    #[serde(default)]
    pub alias: Option<String>,

    #[serde(default)]
    pub arguments: IndexMap<String, Value>,

    #[serde(default)]
    pub args: Vec<DemoArgument>,

    /// Sleep through the resolver context so the timeout supervisor can stop
    /// the field partway through. When `false` the resolver sleeps blindly.
    #[serde(default = "default_cooperative")]
    pub cooperative: bool,

    #[serde(default)]
    pub delay_ms: u64,

    /// Fail the field with this message instead of producing a value.
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub fields: Vec<DemoField>,

    #[serde(default)]
    pub location: Option<SourceLocation>,

    pub name: String,

    #[serde(default = "default_type_signature", rename = "type")]
    pub type_signature: String,

    /// Validators for the whole bundle of arguments, keyed by kind.
    #[serde(default)]
    pub validators: IndexMap<String, ValidatorConfig>,

    #[serde(default)]
    pub value: Option<Value>,
}
impl DemoField {
    pub fn to_field_plan(
        &self,
        owner_type_name: &str,
        validator_registry: &ValidatorRegistry,
    ) -> anyhow::Result<FieldPlan> {
        let return_type = TypeWrapper::parse(self.type_signature.as_str())
            .with_context(|| format!(
                "Invalid return type for `{owner_type_name}.{}`",
                self.name,
            ))?;
        let child_owner_type_name = return_type.innermost_name().to_string();

        let mut builder = FieldPlanBuilder::new(
            owner_type_name,
            self.name.as_str(),
            return_type,
        );
        if let Some(alias) = &self.alias {
            builder = builder.alias(alias);
        }
        if let Some(location) = self.location {
            builder = builder.location(location);
        }
        for demo_argument in &self.args {
            builder = builder.argument(demo_argument.to_argument(validator_registry)?);
        }
        for (name, value) in &self.arguments {
            builder = builder.raw_argument(name, value.to_owned());
        }
        let validators = validator_registry.build_all(&self.validators)
            .with_context(|| format!(
                "Invalid validators on `{owner_type_name}.{}`",
                self.name,
            ))?;
        for validator in validators {
            builder = builder.validates(validator);
        }
        if let Some(resolver) = self.resolver() {
            builder = builder.resolver(resolver);
        }
        for child in &self.fields {
            builder = builder.select(child.to_field_plan(
                child_owner_type_name.as_str(),
                validator_registry,
            )?);
        }
        Ok(builder.build())
    }

    fn resolver(&self) -> Option<Resolver> {
        if self.value.is_none() && self.error.is_none() && self.delay_ms == 0 {
            return None;
        }

        let cooperative = self.cooperative;
        let delay = Duration::from_millis(self.delay_ms);
        let error = self.error.to_owned();
        let value = self.value.to_owned();
        Some(resolver_fn(move |ctx| {
            let error = error.to_owned();
            let value = value.to_owned();
            async move {
                if cooperative {
                    ctx.sleep(delay).await?;
                } else {
                    tokio::time::sleep(delay).await;
                }
                if let Some(message) = error {
                    return Err(FieldError::new(message).into());
                }
                Ok(value.unwrap_or_else(|| {
                    ctx.object()
                        .get(ctx.field_name())
                        .cloned()
                        .unwrap_or_default()
                }))
            }
        }))
    }
}

fn default_cooperative() -> bool {
    true
}

fn default_type_signature() -> String {
    "String".to_string()
}
