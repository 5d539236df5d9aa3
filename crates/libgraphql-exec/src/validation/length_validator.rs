use crate::execution::FieldError;
use crate::validation::validator_config::ConfigReader;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::validation::ValidatorOptions;
use crate::Value;
use inherent::inherent;

const TOO_LONG: &str = "%{validated} is too long (maximum is %{count})";
const TOO_SHORT: &str = "%{validated} is too short (minimum is %{count})";
const WRONG_LENGTH: &str = "%{validated} is the wrong length (should be %{count})";

/// Checks the length of a string (in characters) or a list (in items).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LengthValidator {
    pub is: Option<usize>,
    pub maximum: Option<usize>,
    pub minimum: Option<usize>,
    pub options: ValidatorOptions,
    pub too_long: Option<String>,
    pub too_short: Option<String>,
    pub wrong_length: Option<String>,
}
impl LengthValidator {
    pub const KIND: &'static str = "length";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(
        config: &ValidatorConfig,
    ) -> Result<Self, ValidatorConfigError> {
        let mut reader = ConfigReader::new(Self::KIND, config);
        let mut validator = Self {
            is: reader.count("is")?,
            maximum: reader.count("maximum")?,
            minimum: reader.count("minimum")?,
            options: ValidatorOptions::read(&mut reader)?,
            too_long: reader.string("too_long")?,
            too_short: reader.string("too_short")?,
            wrong_length: reader.string("wrong_length")?,
        };
        if let Some((minimum, maximum)) = reader.count_range("within")? {
            validator.minimum = Some(minimum);
            validator.maximum = Some(maximum);
        }
        reader.finish()?;

        if validator.is.is_none()
            && validator.maximum.is_none()
            && validator.minimum.is_none() {
            return Err(ValidatorConfigError::MissingOption {
                kind: Self::KIND.to_string(),
                options: vec![
                    "is".to_string(),
                    "maximum".to_string(),
                    "minimum".to_string(),
                    "within".to_string(),
                ],
            });
        }
        Ok(validator)
    }

    pub fn is(mut self, length: usize) -> Self {
        self.is = Some(length);
        self
    }

    pub fn maximum(mut self, length: usize) -> Self {
        self.maximum = Some(length);
        self
    }

    pub fn minimum(mut self, length: usize) -> Self {
        self.minimum = Some(length);
        self
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    fn render(
        &self,
        specific_message: &Option<String>,
        default_template: &str,
        target: &ValidationTarget<'_>,
        value: &Value,
        count: usize,
    ) -> String {
        let template = specific_message.as_deref().unwrap_or(default_template);
        self.options.render(template, target, value, Some(count.to_string().as_str()))
    }
}

#[inherent]
impl Validator for LengthValidator {
    pub fn kind(&self) -> &str {
        Self::KIND
    }

    pub fn validate(
        &self,
        target: &ValidationTarget<'_>,
        value: &Value,
    ) -> Result<Option<String>, FieldError> {
        if self.options.permits_empty_value(value) {
            return Ok(None);
        }

        let length = match value {
            Value::String(s) => s.chars().count(),
            Value::List(items) => items.len(),
            Value::Null => 0,
            _ => return Ok(None),
        };

        if let Some(maximum) = self.maximum
            && length > maximum {
            return Ok(Some(self.render(&self.too_long, TOO_LONG, target, value, maximum)));
        }
        if let Some(minimum) = self.minimum
            && length < minimum {
            return Ok(Some(self.render(&self.too_short, TOO_SHORT, target, value, minimum)));
        }
        if let Some(is) = self.is
            && length != is {
            return Ok(Some(self.render(&self.wrong_length, WRONG_LENGTH, target, value, is)));
        }
        Ok(None)
    }
}
