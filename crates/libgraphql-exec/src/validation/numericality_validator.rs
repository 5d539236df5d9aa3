use crate::execution::FieldError;
use crate::validation::validator_config::ConfigReader;
use crate::validation::validator_options::format_number;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::validation::ValidatorOptions;
use crate::Value;
use inherent::inherent;

type Result<T> = std::result::Result<T, ValidatorConfigError>;

/// Checks a numeric value against comparison bounds and parity.
///
/// Bounds are checked in declaration order below; the first failing bound
/// produces the message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericalityValidator {
    pub equal_to: Option<f64>,
    pub even: bool,
    pub greater_than: Option<f64>,
    pub greater_than_or_equal_to: Option<f64>,
    pub less_than: Option<f64>,
    pub less_than_or_equal_to: Option<f64>,
    pub odd: bool,
    pub options: ValidatorOptions,
    pub other_than: Option<f64>,
    pub within: Option<(f64, f64)>,
}
impl NumericalityValidator {
    pub const KIND: &'static str = "numericality";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ValidatorConfig) -> Result<Self> {
        let mut reader = ConfigReader::new(Self::KIND, config);
        let validator = Self {
            equal_to: reader.number("equal_to")?,
            even: reader.bool("even")?.unwrap_or(false),
            greater_than: reader.number("greater_than")?,
            greater_than_or_equal_to: reader.number("greater_than_or_equal_to")?,
            less_than: reader.number("less_than")?,
            less_than_or_equal_to: reader.number("less_than_or_equal_to")?,
            odd: reader.bool("odd")?.unwrap_or(false),
            options: ValidatorOptions::read(&mut reader)?,
            other_than: reader.number("other_than")?,
            within: reader.number_range("within")?,
        };
        reader.finish()?;
        Ok(validator)
    }

    pub fn greater_than(mut self, bound: f64) -> Self {
        self.greater_than = Some(bound);
        self
    }

    pub fn greater_than_or_equal_to(mut self, bound: f64) -> Self {
        self.greater_than_or_equal_to = Some(bound);
        self
    }

    pub fn less_than(mut self, bound: f64) -> Self {
        self.less_than = Some(bound);
        self
    }

    pub fn less_than_or_equal_to(mut self, bound: f64) -> Self {
        self.less_than_or_equal_to = Some(bound);
        self
    }

    pub fn within(mut self, low: f64, high: f64) -> Self {
        self.within = Some((low, high));
        self
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// The first violated bound as a `(message template, count)` pair.
    fn violation(&self, number: f64) -> Option<(&'static str, String)> {
        let checks: [(Option<f64>, fn(f64, f64) -> bool, &'static str); 6] = [
            (self.greater_than, |n: f64, b: f64| n > b,
                "%{validated} must be greater than %{count}"),
            (self.greater_than_or_equal_to, |n: f64, b: f64| n >= b,
                "%{validated} must be greater than or equal to %{count}"),
            (self.less_than, |n: f64, b: f64| n < b,
                "%{validated} must be less than %{count}"),
            (self.less_than_or_equal_to, |n: f64, b: f64| n <= b,
                "%{validated} must be less than or equal to %{count}"),
            (self.equal_to, |n: f64, b: f64| n == b,
                "%{validated} must be equal to %{count}"),
            (self.other_than, |n: f64, b: f64| n != b,
                "%{validated} must be something other than %{count}"),
        ];
        for (bound, passes, template) in checks {
            if let Some(bound) = bound
                && !passes(number, bound) {
                return Some((template, format_number(bound)));
            }
        }

        if self.even && number % 2.0 != 0.0 {
            return Some(("%{validated} must be even", String::new()));
        }
        if self.odd && number % 2.0 != 1.0 && number % 2.0 != -1.0 {
            return Some(("%{validated} must be odd", String::new()));
        }
        if let Some((low, high)) = self.within
            && !(low..=high).contains(&number) {
            return Some((
                "%{validated} must be within %{count}",
                format!("{}..{}", format_number(low), format_number(high)),
            ));
        }
        None
    }
}

#[inherent]
impl Validator for NumericalityValidator {
    pub fn kind(&self) -> &str {
        Self::KIND
    }

    pub fn validate(
        &self,
        target: &ValidationTarget<'_>,
        value: &Value,
    ) -> std::result::Result<Option<String>, FieldError> {
        if self.options.permits_empty_value(value) {
            return Ok(None);
        }
        if value.is_null() {
            return Ok(Some(self.options.render(
                "%{validated} can't be null",
                target,
                value,
                None,
            )));
        }

        let number = match value.as_f64() {
            Some(number) => number,
            None => return Ok(None),
        };
        Ok(self.violation(number).map(|(template, count)| {
            self.options.render(template, target, value, Some(count.as_str()))
        }))
    }
}
