use serde::Deserialize;
use serde::Serialize;

/// One step of a [`ResponsePath`]: a response key or a list index.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}
impl std::convert::From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Field(value.to_string())
    }
}
impl std::convert::From<String> for PathSegment {
    fn from(value: String) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{name}"),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Locates a node of the response tree, e.g. `["user", "friends", 2, "name"]`.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponsePath(Vec<PathSegment>);
impl ResponsePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path one segment deeper than this one.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indicates whether `self` equals `other` or lies beneath it.
    pub fn starts_with(&self, other: &ResponsePath) -> bool {
        self.0.starts_with(other.0.as_slice())
    }

    pub fn segments(&self) -> &[PathSegment] {
        self.0.as_slice()
    }
}
impl<S: Into<PathSegment>> std::iter::FromIterator<S> for ResponsePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
impl std::fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self.0.iter()
            .map(|segment| segment.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{rendered}")
    }
}
