use crate::execution::FieldError;
use crate::validation::validator_config::ConfigReader;
use crate::validation::validator_options::render_template;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::validation::ValidatorOptions;
use crate::Value;
use inherent::inherent;

const DEFAULT_MESSAGE: &str =
    "%{validated} must include exactly one of the following arguments: %{one_of}.";

/// A cross-field check over a bundle of arguments (a field's arguments or an
/// input object's fields): exactly one of the `one_of` names must be present.
///
/// An argument counts as present when the client supplied it (even as
/// `null`) or it has a default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequiredValidator {
    pub one_of: Vec<String>,
    pub options: ValidatorOptions,
}
impl RequiredValidator {
    pub const KIND: &'static str = "required";

    pub fn one_of<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            one_of: names.into_iter().map(|name| name.as_ref().to_string()).collect(),
            options: ValidatorOptions::default(),
        }
    }

    pub fn from_config(
        config: &ValidatorConfig,
    ) -> Result<Self, ValidatorConfigError> {
        let mut reader = ConfigReader::new(Self::KIND, config);
        let names = reader.list("one_of")?.ok_or_else(|| {
            ValidatorConfigError::MissingOption {
                kind: Self::KIND.to_string(),
                options: vec!["one_of".to_string()],
            }
        })?;
        let options = ValidatorOptions::read(&mut reader)?;
        reader.finish()?;

        let one_of = names.iter()
            .map(|name| match name.as_str() {
                Some(name) => Ok(name.to_string()),
                None => Err(ValidatorConfigError::InvalidOption {
                    actual: Value::List(names.to_owned()),
                    expected: "a list of argument names".to_string(),
                    kind: Self::KIND.to_string(),
                    option: "one_of".to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { one_of, options })
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }
}

#[inherent]
impl Validator for RequiredValidator {
    pub fn kind(&self) -> &str {
        Self::KIND
    }

    pub fn validate(
        &self,
        target: &ValidationTarget<'_>,
        value: &Value,
    ) -> Result<Option<String>, FieldError> {
        let present_count = match value.as_object() {
            Some(arguments) => self.one_of.iter()
                .filter(|name| arguments.contains_key(name.as_str()))
                .count(),
            None => 0,
        };
        if present_count == 1 {
            return Ok(None);
        }

        let template = self.options.message.as_deref().unwrap_or(DEFAULT_MESSAGE);
        let rendered = render_template(template, target, value, None)
            .replace("%{one_of}", self.one_of.join(", ").as_str());
        Ok(Some(rendered))
    }
}
