use indexmap::IndexMap;

/// A GraphQL value as it flows through coercion and execution: raw input
/// literals, coerced argument values, resolver outputs and response data all
/// share this representation.
///
/// Serializes to the JSON shape of a GraphQL response (enum values render as
/// strings). Deserialization never produces [`Value::Enum`] since JSON has no
/// way to distinguish enum literals from strings.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    #[serde(skip_deserializing)]
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Numeric view of this value. Integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Self::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    /// String contents of a [`Value::String`] or the member name of a
    /// [`Value::Enum`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Enum(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Blank means null, an empty or whitespace-only string, or an empty
    /// list/object.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Object(entries) => entries.is_empty(),
            _ => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Look up `key` on an object value. Non-objects have no keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    /// Render this value the way it would appear as a literal in a GraphQL
    /// document.
    pub fn to_graphql_literal(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => format!("{s:?}"),
            Self::Enum(name) => name.to_owned(),
            Self::List(items) => format!(
                "[{}]",
                items.iter()
                    .map(|item| item.to_graphql_literal())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Object(entries) => format!(
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| {
                        format!("{key}: {}", value.to_graphql_literal())
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_literal().as_str())
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<Value>> std::convert::From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}
impl std::convert::From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) =>
                Self::List(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(entries) =>
                Self::Object(
                    entries.into_iter()
                        .map(|(key, value)| (key, Self::from(value)))
                        .collect(),
                ),
        }
    }
}
