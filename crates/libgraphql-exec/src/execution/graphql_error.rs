use crate::execution::ResponsePath;
use crate::loc::SourceLocation;
use crate::Value;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// One entry of a response's `errors` list.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourceLocation>,

    #[serde(default, skip_serializing_if = "ResponsePath::is_empty")]
    pub path: ResponsePath,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: IndexMap<String, Value>,
}
impl GraphQLError {
    pub fn new(message: impl Into<String>, path: ResponsePath) -> Self {
        Self {
            extensions: IndexMap::new(),
            locations: vec![],
            message: message.into(),
            path,
        }
    }

    pub fn with_extensions(mut self, extensions: IndexMap<String, Value>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_location(mut self, location: Option<SourceLocation>) -> Self {
        self.locations.extend(location);
        self
    }
}
