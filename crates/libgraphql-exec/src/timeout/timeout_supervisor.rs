use crate::execution::QueryContext;
use crate::execution::ResponsePath;
use crate::timeout::TimeoutError;
use crate::timeout::TimeoutPolicy;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SupervisorState {
    /// The query has no deadline.
    Disabled,

    /// A checkpoint observed the deadline passing. Every later checkpoint
    /// fails.
    Expired,

    Running,
}

/// Tracks one query's deadline.
///
/// Expiry is only ever noticed at checkpoints: before each field starts and
/// wherever a resolver calls
/// [`ResolverContext::checkpoint`](crate::execution::ResolverContext::checkpoint).
/// A resolver already running when the deadline passes is never
/// interrupted.
#[derive(Debug)]
pub struct TimeoutSupervisor {
    deadline: Option<Duration>,
    expired: AtomicBool,
    started_at: Instant,
}
impl TimeoutSupervisor {
    /// Resolve the deadline for a query that starts now.
    pub fn start(policy: &dyn TimeoutPolicy, context: &QueryContext) -> Self {
        let deadline = policy.resolve_deadline(context);
        match deadline {
            Some(deadline) => log::debug!("Query deadline is {deadline:?}."),
            None => log::debug!("Query runs without a deadline."),
        }
        Self {
            deadline,
            expired: AtomicBool::new(false),
            started_at: Instant::now(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            deadline: None,
            expired: AtomicBool::new(false),
            started_at: Instant::now(),
        }
    }

    /// Fails with a [`TimeoutError`] for the given field once the deadline
    /// has passed.
    pub fn checkpoint(
        &self,
        owner_type_name: &str,
        field_name: &str,
        path: &ResponsePath,
    ) -> Result<(), TimeoutError> {
        let Some(deadline) = self.deadline else {
            return Ok(());
        };

        if !self.expired.load(Ordering::Acquire) {
            let elapsed = self.elapsed();
            if elapsed <= deadline {
                return Ok(());
            }
            if !self.expired.swap(true, Ordering::AcqRel) {
                log::debug!(
                    "Query deadline of {deadline:?} passed after {elapsed:?}; \
                    no further fields will start.",
                );
            }
        }
        Err(TimeoutError::new(owner_type_name, field_name, path.to_owned()))
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn state(&self) -> SupervisorState {
        if self.deadline.is_none() {
            SupervisorState::Disabled
        } else if self.expired.load(Ordering::Acquire) {
            SupervisorState::Expired
        } else {
            SupervisorState::Running
        }
    }
}
