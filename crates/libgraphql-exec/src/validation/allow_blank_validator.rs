use crate::execution::FieldError;
use crate::validation::validator_config::ConfigReader;
use crate::validation::validator_options::render_template;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::Value;
use inherent::inherent;

/// Rejects blank values (`null`, whitespace-only strings, empty lists and
/// objects) unless `allow_blank` is true.
#[derive(Clone, Debug, PartialEq)]
pub struct AllowBlankValidator {
    pub allow_blank: bool,
    pub message: Option<String>,
}
impl AllowBlankValidator {
    pub const KIND: &'static str = "allow_blank";

    pub fn new(allow_blank: bool) -> Self {
        Self {
            allow_blank,
            message: None,
        }
    }

    pub fn from_config(
        config: &ValidatorConfig,
    ) -> Result<Self, ValidatorConfigError> {
        let mut reader = ConfigReader::new(Self::KIND, config);
        let allow_blank = reader.bool("allow_blank")?.ok_or_else(|| {
            ValidatorConfigError::MissingOption {
                kind: Self::KIND.to_string(),
                options: vec!["allow_blank".to_string()],
            }
        })?;
        let message = reader.string("message")?;
        reader.finish()?;
        Ok(Self { allow_blank, message })
    }
}

#[inherent]
impl Validator for AllowBlankValidator {
    pub fn kind(&self) -> &str {
        Self::KIND
    }

    pub fn validate(
        &self,
        target: &ValidationTarget<'_>,
        value: &Value,
    ) -> Result<Option<String>, FieldError> {
        if self.allow_blank || !value.is_blank() {
            return Ok(None);
        }
        let template = self.message.as_deref().unwrap_or("%{validated} can't be blank");
        Ok(Some(render_template(template, target, value, None)))
    }
}
