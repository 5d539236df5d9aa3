use crate::validation::validator_config::ConfigReader;
use crate::validation::ValidationTarget;
use crate::validation::ValidatorConfigError;
use crate::Value;

/// Options understood by every built-in validator kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidatorOptions {
    /// Let blank values (`null`, `""`, `[]`, ...) pass without checking.
    pub allow_blank: Option<bool>,

    /// Let `null` pass without checking.
    pub allow_null: Option<bool>,

    /// Replaces the validator's default failure message. Supports the
    /// `%{validated}`, `%{value}` and `%{count}` placeholders.
    pub message: Option<String>,
}
impl ValidatorOptions {
    pub(crate) fn read(
        reader: &mut ConfigReader<'_>,
    ) -> Result<Self, ValidatorConfigError> {
        Ok(Self {
            allow_blank: reader.bool("allow_blank")?,
            allow_null: reader.bool("allow_null")?,
            message: reader.string("message")?,
        })
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Indicates whether `value` is an empty value that these options say
    /// to let through unchecked.
    pub fn permits_empty_value(&self, value: &Value) -> bool {
        (value.is_null() && self.allow_null == Some(true))
            || (value.is_blank() && self.allow_blank == Some(true))
    }

    /// Render the configured message (or `default_template` if none was
    /// configured) for a failure on `value`.
    pub fn render(
        &self,
        default_template: &str,
        target: &ValidationTarget<'_>,
        value: &Value,
        count: Option<&str>,
    ) -> String {
        render_template(
            self.message.as_deref().unwrap_or(default_template),
            target,
            value,
            count,
        )
    }
}

pub(crate) fn render_template(
    template: &str,
    target: &ValidationTarget<'_>,
    value: &Value,
    count: Option<&str>,
) -> String {
    let mut rendered = template
        .replace("%{validated}", target.name)
        .replace("%{value}", value.to_graphql_literal().as_str());
    if let Some(count) = count {
        rendered = rendered.replace("%{count}", count);
    }
    rendered
}

/// Render a number the way people write it: `1` rather than `1.0`.
pub(crate) fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}
