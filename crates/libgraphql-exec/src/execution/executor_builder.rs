use crate::execution::Executor;
use crate::timeout::NoTimeout;
use crate::timeout::TimeoutPolicy;
use crate::types::TypeRegistry;
use std::sync::Arc;

/// Configures an [`Executor`]. Without any configuration the executor uses
/// a registry holding only the built-in scalars and runs queries without a
/// deadline.
#[derive(Default)]
pub struct ExecutorBuilder {
    timeout_policy: Option<Arc<dyn TimeoutPolicy>>,
    type_registry: Option<TypeRegistry>,
}
impl ExecutorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Executor {
        Executor {
            timeout_policy: self.timeout_policy.unwrap_or_else(|| Arc::new(NoTimeout)),
            type_registry: Arc::new(self.type_registry.unwrap_or_default()),
        }
    }

    pub fn timeout_policy(mut self, policy: impl TimeoutPolicy + 'static) -> Self {
        self.timeout_policy = Some(Arc::new(policy));
        self
    }

    pub fn type_registry(mut self, type_registry: TypeRegistry) -> Self {
        self.type_registry = Some(type_registry);
        self
    }
}
