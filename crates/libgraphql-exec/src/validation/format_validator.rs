use crate::execution::FieldError;
use crate::validation::validator_config::ConfigReader;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::validation::ValidatorOptions;
use crate::Value;
use inherent::inherent;
use regex::Regex;

/// Checks a string against regular expressions it must (`with`) or must not
/// (`without`) match.
#[derive(Clone, Debug, Default)]
pub struct FormatValidator {
    pub options: ValidatorOptions,
    pub with: Option<Regex>,
    pub without: Option<Regex>,
}
impl FormatValidator {
    pub const KIND: &'static str = "format";

    pub fn from_config(
        config: &ValidatorConfig,
    ) -> Result<Self, ValidatorConfigError> {
        let mut reader = ConfigReader::new(Self::KIND, config);
        let with = compile(reader.string("with")?, "with")?;
        let without = compile(reader.string("without")?, "without")?;
        let options = ValidatorOptions::read(&mut reader)?;
        reader.finish()?;

        if with.is_none() && without.is_none() {
            return Err(ValidatorConfigError::MissingOption {
                kind: Self::KIND.to_string(),
                options: vec!["with".to_string(), "without".to_string()],
            });
        }
        Ok(Self {
            options,
            with,
            without,
        })
    }

    pub fn with(pattern: Regex) -> Self {
        Self {
            with: Some(pattern),
            ..Self::default()
        }
    }

    pub fn without(pattern: Regex) -> Self {
        Self {
            without: Some(pattern),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }
}

#[inherent]
impl Validator for FormatValidator {
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

        let matches_format = match value {
            Value::String(s) =>
                self.with.as_ref().is_none_or(|with| with.is_match(s))
                    && self.without.as_ref().is_none_or(|without| !without.is_match(s)),
            Value::Null => false,
            _ => return Ok(None),
        };

        if matches_format {
            Ok(None)
        } else {
            Ok(Some(self.options.render("%{validated} is invalid", target, value, None)))
        }
    }
}

fn compile(
    pattern: Option<String>,
    option: &str,
) -> Result<Option<Regex>, ValidatorConfigError> {
    pattern
        .map(|pattern| Regex::new(pattern.as_str()))
        .transpose()
        .map_err(|err| ValidatorConfigError::InvalidPattern {
            message: err.to_string(),
            option: option.to_string(),
        })
}
