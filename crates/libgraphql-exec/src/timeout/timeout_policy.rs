use crate::execution::AbortReason;
use crate::execution::QueryContext;
use crate::timeout::TimeoutError;
use crate::Value;
use inherent::inherent;
use std::time::Duration;
use std::time::TryFromFloatSecsError;

/// What to do about a field that timed out.
#[derive(Debug)]
pub enum TimeoutAction {
    /// End the query; `Executor::execute` fails with
    /// [`ExecutionAbort::Timeout`](crate::execution::ExecutionAbort::Timeout).
    Abort(AbortReason),

    /// Null the field and record the timeout error at its path.
    Record,
}

/// Decides how long a query may run and what happens to fields that start
/// after that.
pub trait TimeoutPolicy: Send + Sync {
    /// Evaluated once when a query starts. `None` disables the deadline for
    /// that query.
    fn resolve_deadline(&self, context: &QueryContext) -> Option<Duration>;

    /// Called once for every field that times out.
    fn on_timeout(&self, _error: &TimeoutError, _context: &QueryContext) -> TimeoutAction {
        TimeoutAction::Record
    }
}

/// A policy with no deadline.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTimeout;

#[inherent]
impl TimeoutPolicy for NoTimeout {
    pub fn resolve_deadline(&self, _context: &QueryContext) -> Option<Duration> {
        None
    }
}

/// The same deadline for every query, unless the query context overrides
/// it.
///
/// The context entry named by [`context_key`](Self::context_key) (default
/// `"timeout"`) wins when present: `false` disables the deadline and a
/// number replaces it (in seconds).
#[derive(Clone, Debug)]
pub struct FixedTimeout {
    context_key: String,
    max: Duration,
}
impl FixedTimeout {
    pub const DEFAULT_CONTEXT_KEY: &'static str = "timeout";

    pub fn new(max: Duration) -> Self {
        Self {
            context_key: Self::DEFAULT_CONTEXT_KEY.to_string(),
            max,
        }
    }

    /// Fails when `seconds` is negative, not finite, or too large to be a
    /// [`Duration`].
    pub fn from_secs_f64(seconds: f64) -> Result<Self, TryFromFloatSecsError> {
        Ok(Self::new(Duration::try_from_secs_f64(seconds)?))
    }

    pub fn context_key(&self) -> &str {
        self.context_key.as_str()
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn with_context_key(mut self, context_key: impl Into<String>) -> Self {
        self.context_key = context_key.into();
        self
    }
}

#[inherent]
impl TimeoutPolicy for FixedTimeout {
    pub fn resolve_deadline(&self, context: &QueryContext) -> Option<Duration> {
        match context.get(self.context_key.as_str()) {
            None | Some(Value::Null) | Some(Value::Bool(true)) =>
                Some(self.max),

            Some(Value::Bool(false)) => None,

            Some(other) => match other.as_f64().map(Duration::try_from_secs_f64) {
                Some(Ok(deadline)) => Some(deadline),
                _ => {
                    log::warn!(
                        "Ignoring invalid `{}` query context override: {}. \
                        Falling back to {:?}.",
                        self.context_key,
                        other,
                        self.max,
                    );
                    Some(self.max)
                },
            },
        }
    }
}
