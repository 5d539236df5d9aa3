use crate::Value;
use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, ValidatorConfigError>;

/// The option bag a validator kind is constructed from, e.g.
/// `{"greater_than_or_equal_to": 1}` for `numericality`.
pub type ValidatorConfig = IndexMap<String, Value>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidatorConfigError {
    #[error(
        "The `{option}` option of the `{kind}` validator must be {expected}, \
        but {} was given",
        actual.to_graphql_literal(),
    )]
    InvalidOption {
        actual: Value,
        expected: String,
        kind: String,
        option: String,
    },

    #[error(
        "Invalid regular expression given for the `{option}` option of the \
        `format` validator: {message}"
    )]
    InvalidPattern {
        message: String,
        option: String,
    },

    #[error(
        "The `{kind}` validator requires at least one of these options: {}",
        options.join(", "),
    )]
    MissingOption {
        kind: String,
        options: Vec<String>,
    },

    #[error("No validator kind named `{kind}` is registered")]
    UnknownKind {
        kind: String,
    },

    #[error("The `{kind}` validator does not accept a `{option}` option")]
    UnknownOption {
        kind: String,
        option: String,
    },
}

/// Typed access to a [`ValidatorConfig`] that remembers which options were
/// read, so leftovers can be reported as unknown.
pub(crate) struct ConfigReader<'a> {
    config: &'a ValidatorConfig,
    kind: &'a str,
    read_options: HashSet<&'a str>,
}
impl<'a> ConfigReader<'a> {
    pub fn new(kind: &'a str, config: &'a ValidatorConfig) -> Self {
        Self {
            config,
            kind,
            read_options: HashSet::new(),
        }
    }

    /// Fail if the config holds any option nothing asked for.
    pub fn finish(self) -> Result<()> {
        match self.config.keys().find(|key| {
            !self.read_options.contains(key.as_str())
        }) {
            Some(option) => Err(ValidatorConfigError::UnknownOption {
                kind: self.kind.to_string(),
                option: option.to_owned(),
            }),
            None => Ok(()),
        }
    }

    pub fn kind(&self) -> &str {
        self.kind
    }

    pub fn bool(&mut self, option: &'a str) -> Result<Option<bool>> {
        self.read(option, "a boolean", |value| value.as_bool())
    }

    pub fn number(&mut self, option: &'a str) -> Result<Option<f64>> {
        self.read(option, "a number", |value| value.as_f64())
    }

    pub fn count(&mut self, option: &'a str) -> Result<Option<usize>> {
        self.read(option, "a non-negative integer", |value| {
            value.as_i64().and_then(|i| usize::try_from(i).ok())
        })
    }

    pub fn string(&mut self, option: &'a str) -> Result<Option<String>> {
        self.read(option, "a string", |value| value.as_str().map(str::to_string))
    }

    pub fn list(&mut self, option: &'a str) -> Result<Option<Vec<Value>>> {
        self.read(option, "a list", |value| value.as_list().cloned())
    }

    /// A two-element `[low, high]` list of numbers.
    pub fn number_range(&mut self, option: &'a str) -> Result<Option<(f64, f64)>> {
        self.read(option, "a list of two numbers", |value| match value.as_list() {
            Some(bounds) if bounds.len() == 2 =>
                bounds[0].as_f64().zip(bounds[1].as_f64()),
            _ => None,
        })
    }

    /// A two-element `[low, high]` list of counts.
    pub fn count_range(&mut self, option: &'a str) -> Result<Option<(usize, usize)>> {
        let as_count = |value: &Value| {
            value.as_i64().and_then(|i| usize::try_from(i).ok())
        };
        self.read(option, "a list of two non-negative integers", |value| {
            match value.as_list() {
                Some(bounds) if bounds.len() == 2 =>
                    as_count(&bounds[0]).zip(as_count(&bounds[1])),
                _ => None,
            }
        })
    }

    fn read<T>(
        &mut self,
        option: &'a str,
        expected: &str,
        convert: impl Fn(&Value) -> Option<T>,
    ) -> Result<Option<T>> {
        self.read_options.insert(option);
        match self.config.get(option) {
            None => Ok(None),
            Some(value) => match convert(value) {
                Some(converted) => Ok(Some(converted)),
                None => Err(ValidatorConfigError::InvalidOption {
                    actual: value.to_owned(),
                    expected: expected.to_string(),
                    kind: self.kind.to_string(),
                    option: option.to_string(),
                }),
            },
        }
    }
}
