use crate::execution::FieldError;
use crate::validation::validator_config::ConfigReader;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::validation::ValidatorOptions;
use crate::Value;
use inherent::inherent;

/// Requires the value to be one of an allowed set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InclusionValidator {
    pub allowed: Vec<Value>,
    pub options: ValidatorOptions,
}
impl InclusionValidator {
    pub const KIND: &'static str = "inclusion";

    pub fn new(allowed: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            options: ValidatorOptions::default(),
        }
    }

    pub fn from_config(
        config: &ValidatorConfig,
    ) -> Result<Self, ValidatorConfigError> {
        let mut reader = ConfigReader::new(Self::KIND, config);
        let allowed = reader.list("in")?.ok_or_else(|| {
            ValidatorConfigError::MissingOption {
                kind: Self::KIND.to_string(),
                options: vec!["in".to_string()],
            }
        })?;
        let options = ValidatorOptions::read(&mut reader)?;
        reader.finish()?;
        Ok(Self { allowed, options })
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }
}

#[inherent]
impl Validator for InclusionValidator {
    pub fn kind(&self) -> &str {
        Self::KIND
    }

    pub fn validate(
        &self,
        target: &ValidationTarget<'_>,
        value: &Value,
    ) -> Result<Option<String>, FieldError> {
        if self.options.permits_empty_value(value) || self.allowed.contains(value) {
            return Ok(None);
        }
        Ok(Some(self.options.render(
            "%{validated} is not included in the list",
            target,
            value,
            None,
        )))
    }
}
