mod timeout_error;
mod timeout_policy;
mod timeout_supervisor;

pub use timeout_error::TimeoutError;
pub use timeout_policy::FixedTimeout;
pub use timeout_policy::NoTimeout;
pub use timeout_policy::TimeoutAction;
pub use timeout_policy::TimeoutPolicy;
pub use timeout_supervisor::SupervisorState;
pub use timeout_supervisor::TimeoutSupervisor;
