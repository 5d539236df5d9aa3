use crate::execution::ResponsePath;
use crate::timeout::TimeoutError;
use crate::types::CoercionError;
use thiserror::Error;

pub type AbortReason = Box<dyn std::error::Error + Send + Sync>;

/// A failure that ends query execution without a (partial) result.
#[derive(Debug, Error)]
pub enum ExecutionAbort {
    #[error("Failed to serialize the value at `{path}` as `{type_name}`: {source}")]
    ResultCoercion {
        path: ResponsePath,
        source: CoercionError,
        type_name: String,
    },

    /// The timeout policy chose to abort instead of recording `error`.
    #[error("Query aborted on `{}`: {reason}", error.path())]
    Timeout {
        error: TimeoutError,
        #[source]
        reason: AbortReason,
    },

    #[error(
        "The field at `{path}` returns `{type_name}`, which is not a \
        registered scalar or enum type"
    )]
    UnknownLeafType {
        path: ResponsePath,
        type_name: String,
    },
}
