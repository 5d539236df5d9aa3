use crate::execution::FieldError;
use crate::validation::validator_config::ConfigReader;
use crate::validation::validator_options::render_template;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::Value;
use inherent::inherent;

/// Rejects an explicit `null` unless `allow_null` is true.
///
/// Useful on nullable arguments that may be omitted but, when given, must
/// carry a value.
#[derive(Clone, Debug, PartialEq)]
pub struct AllowNullValidator {
    pub allow_null: bool,
    pub message: Option<String>,
}
impl AllowNullValidator {
    pub const KIND: &'static str = "allow_null";

    pub fn new(allow_null: bool) -> Self {
        Self {
            allow_null,
            message: None,
        }
    }

    pub fn from_config(
        config: &ValidatorConfig,
    ) -> Result<Self, ValidatorConfigError> {
        let mut reader = ConfigReader::new(Self::KIND, config);
        let allow_null = reader.bool("allow_null")?.ok_or_else(|| {
            ValidatorConfigError::MissingOption {
                kind: Self::KIND.to_string(),
                options: vec!["allow_null".to_string()],
            }
        })?;
        let message = reader.string("message")?;
        reader.finish()?;
        Ok(Self { allow_null, message })
    }
}

#[inherent]
impl Validator for AllowNullValidator {
    pub fn kind(&self) -> &str {
        Self::KIND
    }

    pub fn validate(
        &self,
        target: &ValidationTarget<'_>,
        value: &Value,
    ) -> Result<Option<String>, FieldError> {
        if self.allow_null || !value.is_null() {
            return Ok(None);
        }
        let template = self.message.as_deref().unwrap_or("%{validated} can't be null");
        Ok(Some(render_template(template, target, value, None)))
    }
}
