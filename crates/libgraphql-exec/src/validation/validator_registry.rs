use crate::validation::BuiltinValidator;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ValidatorConfigError>;

/// Builds a validator of one kind from its config.
pub type ValidatorFactory = Arc<
    dyn Fn(&ValidatorConfig) -> Result<Arc<dyn Validator>> + Send + Sync
>;

/// Maps validator kind names to the factories that build them.
///
/// Registries are plain values passed to the code that declares arguments,
/// so installing a custom kind in one registry does not affect any other.
#[derive(Clone)]
pub struct ValidatorRegistry {
    factories: IndexMap<String, ValidatorFactory>,
}
impl ValidatorRegistry {
    /// A registry with every built-in kind installed.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for kind in BuiltinValidator::KINDS {
            registry.install(kind, move |config: &ValidatorConfig| {
                let validator = BuiltinValidator::from_config(kind, config)?;
                Ok(Arc::new(validator) as Arc<dyn Validator>)
            });
        }
        registry
    }

    pub fn empty() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Build a validator of the named kind.
    pub fn build(
        &self,
        kind: &str,
        config: &ValidatorConfig,
    ) -> Result<Arc<dyn Validator>> {
        match self.factories.get(kind) {
            Some(factory) => factory(config),
            None => Err(ValidatorConfigError::UnknownKind {
                kind: kind.to_string(),
            }),
        }
    }

    /// Build one validator per `(kind, config)` entry, in entry order.
    pub fn build_all(
        &self,
        configs: &IndexMap<String, ValidatorConfig>,
    ) -> Result<Vec<Arc<dyn Validator>>> {
        configs.iter()
            .map(|(kind, config)| self.build(kind, config))
            .collect()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Install `factory` under `kind`, replacing any factory already
    /// installed under that name.
    pub fn install<F>(&mut self, kind: impl Into<String>, factory: F)
    where
        F: Fn(&ValidatorConfig) -> Result<Arc<dyn Validator>> + Send + Sync + 'static,
    {
        let kind = kind.into();
        log::trace!("Installed the `{kind}` validator kind.");
        self.factories.insert(kind, Arc::new(factory));
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Remove the factory installed under `kind`. Returns `false` if no such
    /// kind was installed.
    pub fn uninstall(&mut self, kind: &str) -> bool {
        self.factories.shift_remove(kind).is_some()
    }
}
impl std::default::Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("kinds", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
