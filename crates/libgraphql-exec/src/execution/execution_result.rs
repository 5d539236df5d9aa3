use crate::execution::GraphQLError;
use crate::execution::ResponsePath;
use crate::Value;
use serde::Serialize;

/// The outcome of executing a query that was not aborted: whatever data
/// could be resolved plus every error recorded along the way.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub data: Value,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}
impl ExecutionResult {
    /// The errors recorded at exactly `path`.
    pub fn errors_at<'a>(
        &'a self,
        path: &'a ResponsePath,
    ) -> impl Iterator<Item = &'a GraphQLError> + 'a {
        self.errors.iter().filter(move |error| &error.path == path)
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
