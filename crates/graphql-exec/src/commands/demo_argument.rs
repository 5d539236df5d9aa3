use anyhow::Context;
use indexmap::IndexMap;
use libgraphql_exec::types::Argument;
use libgraphql_exec::types::TypeWrapper;
use libgraphql_exec::validation::ValidatorConfig;
use libgraphql_exec::validation::ValidatorRegistry;
use libgraphql_exec::Value;

/// An argument definition within a [`DemoField`](crate::commands::DemoField).
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DemoArgument {
    #[serde(default)]
    pub default: Option<Value>,

    pub name: String,

    /// Treat an explicit `null` as if the argument were left out.
    #[serde(default)]
    pub replace_null_with_default: bool,

    /// Require the argument to be passed, even if only as `null`.
    #[serde(default)]
    pub require_presence: bool,

    #[serde(rename = "type")]
    pub type_signature: String,

    /// Validator configs keyed by validator kind.
    #[serde(default)]
    pub validators: IndexMap<String, ValidatorConfig>,
}
impl DemoArgument {
    pub fn to_argument(
        &self,
        validator_registry: &ValidatorRegistry,
    ) -> anyhow::Result<Argument> {
        let type_wrapper = TypeWrapper::parse(self.type_signature.as_str())
            .with_context(|| format!("Invalid type for argument `{}`", self.name))?;

        let mut argument = Argument::new(self.name.as_str(), type_wrapper);
        if let Some(default) = &self.default {
            argument = argument.with_default_value(default.to_owned());
        }
        if self.replace_null_with_default {
            argument = argument.replace_null_with_default();
        }
        if self.require_presence {
            argument = argument.require_presence();
        }
        for (kind, config) in &self.validators {
            argument = argument.validates_with(validator_registry, kind, config)
                .with_context(|| format!(
                    "Invalid `{kind}` validator on argument `{}`",
                    self.name,
                ))?;
        }
        Ok(argument)
    }
}
