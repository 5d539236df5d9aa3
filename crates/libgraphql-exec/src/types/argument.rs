use crate::execution::FieldError;
use crate::execution::QueryContext;
use crate::types::TypeWrapper;
use crate::validation::Validator;
use crate::validation::ValidatorChain;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::validation::ValidatorRegistry;
use crate::Value;
use std::sync::Arc;

/// Transforms a coerced argument value before validators and resolvers see
/// it. An `Err` nulls the field and is reported at the field's path.
pub type PrepareFn = Arc<
    dyn Fn(Value, &QueryContext) -> Result<Value, FieldError> + Send + Sync
>;

/// An argument accepted by a field, or a field of an input object type.
#[derive(Clone)]
pub struct Argument {
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) prepare: Option<PrepareFn>,
    pub(crate) presence_required: bool,
    pub(crate) replace_null_with_default: bool,
    pub(crate) type_wrapper: TypeWrapper,
    pub(crate) validators: ValidatorChain,
}
impl Argument {
    pub fn new(name: impl AsRef<str>, type_wrapper: TypeWrapper) -> Self {
        Self {
            default_value: None,
            description: None,
            name: name.as_ref().to_string(),
            prepare: None,
            presence_required: false,
            replace_null_with_default: false,
            type_wrapper,
            validators: ValidatorChain::new(),
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A required argument is non-null and has no default to fall back on.
    pub fn is_required(&self) -> bool {
        self.type_wrapper.is_non_null() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn prepare(&self) -> Option<&PrepareFn> {
        self.prepare.as_ref()
    }

    /// Indicates whether this argument must be given explicitly, even though
    /// `null` is an acceptable value for it.
    pub fn presence_required(&self) -> bool {
        self.presence_required
    }

    /// The value to coerce when the client supplied `raw`, or `None` when
    /// there is nothing to coerce.
    pub(crate) fn effective_value<'a>(&'a self, raw: Option<&'a Value>) -> Option<&'a Value> {
        match raw {
            Some(Value::Null) if self.replace_null_with_default =>
                self.default_value.as_ref().or(raw),
            Some(raw) => Some(raw),
            None => self.default_value.as_ref(),
        }
    }

    pub fn replaces_null_with_default(&self) -> bool {
        self.replace_null_with_default
    }

    /// Treat an explicit `null` from the client as if the argument had been
    /// left out, so the default applies.
    pub fn replace_null_with_default(mut self) -> Self {
        self.replace_null_with_default = true;
        self
    }

    /// Require clients to pass this (nullable) argument, even if only as
    /// `null`.
    pub fn require_presence(mut self) -> Self {
        self.presence_required = true;
        self
    }

    pub fn type_wrapper(&self) -> &TypeWrapper {
        &self.type_wrapper
    }

    /// Append a validator to this argument's chain.
    pub fn validates(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validators.attach(validator);
        self
    }

    /// Build a validator of the named kind from `registry` and append it to
    /// this argument's chain.
    pub fn validates_with(
        mut self,
        registry: &ValidatorRegistry,
        kind: &str,
        config: &ValidatorConfig,
    ) -> Result<Self, ValidatorConfigError> {
        self.validators.attach(registry.build(kind, config)?);
        Ok(self)
    }

    pub fn validators(&self) -> &ValidatorChain {
        &self.validators
    }

    pub fn with_default_value(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Run `prepare` on every coerced value of this argument, before its
    /// validators.
    pub fn with_prepare<F>(mut self, prepare: F) -> Self
    where
        F: Fn(Value, &QueryContext) -> Result<Value, FieldError> + Send + Sync + 'static,
    {
        self.prepare = Some(Arc::new(prepare));
        self
    }
}
impl std::fmt::Debug for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argument")
            .field("name", &self.name)
            .field("type_wrapper", &self.type_wrapper)
            .field("default_value", &self.default_value)
            .field("description", &self.description)
            .field("prepare", &self.prepare.is_some())
            .field("presence_required", &self.presence_required)
            .field("replace_null_with_default", &self.replace_null_with_default)
            .field("validators", &self.validators)
            .finish()
    }
}
