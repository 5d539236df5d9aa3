use crate::execution::FieldError;
use crate::validation::validator_config::ConfigReader;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::validation::ValidatorOptions;
use crate::Value;
use inherent::inherent;

/// Rejects values drawn from a reserved set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExclusionValidator {
    pub options: ValidatorOptions,
    pub reserved: Vec<Value>,
}
impl ExclusionValidator {
    pub const KIND: &'static str = "exclusion";

    pub fn new(reserved: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            options: ValidatorOptions::default(),
            reserved: reserved.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(
        config: &ValidatorConfig,
    ) -> Result<Self, ValidatorConfigError> {
        let mut reader = ConfigReader::new(Self::KIND, config);
        let reserved = reader.list("in")?.ok_or_else(|| {
            ValidatorConfigError::MissingOption {
                kind: Self::KIND.to_string(),
                options: vec!["in".to_string()],
            }
        })?;
        let options = ValidatorOptions::read(&mut reader)?;
        reader.finish()?;
        Ok(Self { options, reserved })
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }
}

#[inherent]
impl Validator for ExclusionValidator {
    pub fn kind(&self) -> &str {
        Self::KIND
    }

    pub fn validate(
        &self,
        target: &ValidationTarget<'_>,
        value: &Value,
    ) -> Result<Option<String>, FieldError> {
        if self.options.permits_empty_value(value) || !self.reserved.contains(value) {
            return Ok(None);
        }
        Ok(Some(self.options.render("%{validated} is reserved", target, value, None)))
    }
}
