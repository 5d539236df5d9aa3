use crate::execution::FieldPlan;
use crate::execution::ResponsePath;
use crate::types::TypeWrapper;
use crate::Value;
use indexmap::IndexMap;
use tokio::time::Instant;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvocationState {
    Completed,
    Errored,
    Pending,
    TimedOut,
}

/// Bookkeeping for one field while the executor works on it.
#[derive(Clone, Debug)]
pub struct FieldInvocation<'a> {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) field: &'a FieldPlan,
    pub(crate) path: ResponsePath,
    pub(crate) started_at: Instant,
    pub(crate) state: InvocationState,
}
impl<'a> FieldInvocation<'a> {
    pub(crate) fn begin(field: &'a FieldPlan, path: ResponsePath) -> Self {
        Self {
            arguments: IndexMap::new(),
            field,
            path,
            started_at: Instant::now(),
            state: InvocationState::Pending,
        }
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn field_name(&self) -> &str {
        self.field.name()
    }

    pub fn path(&self) -> &ResponsePath {
        &self.path
    }

    pub fn return_type(&self) -> &TypeWrapper {
        self.field.return_type()
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn state(&self) -> InvocationState {
        self.state
    }

    pub(crate) fn finish(&mut self, state: InvocationState) {
        self.state = state;
        log::trace!(
            "Field `{}` finished as {:?} after {:?}.",
            self.path,
            state,
            self.started_at.elapsed(),
        );
    }
}
