use crate::ast;
use crate::types::TypeSignatureError;

type Result<T> = std::result::Result<T, TypeSignatureError>;

/// The declared type of an argument, input field or output field: a named
/// type wrapped in zero or more [list](https://spec.graphql.org/October2021/#sec-List)
/// and [non-null](https://spec.graphql.org/October2021/#sec-Non-Null)
/// modifiers.
///
/// [`TypeWrapper`] is a plain value type. Two wrappers are equal (and hash
/// equally) exactly when they describe the same wrapping of the same named
/// type, which is also exactly when their rendered signatures are equal.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum TypeWrapper {
    Named(String),
    List(Box<TypeWrapper>),
    NonNull(Box<TypeWrapper>),
}
impl TypeWrapper {
    pub fn named(name: impl AsRef<str>) -> Self {
        Self::Named(name.as_ref().to_string())
    }

    /// Wrap this type in a list: `T` becomes `[T]`.
    pub fn wrap_list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Wrap this type in a non-null modifier: `T` becomes `T!`.
    ///
    /// Non-null of non-null is not expressible in GraphQL, so wrapping a type
    /// that is already non-null returns it unchanged.
    pub fn wrap_non_null(self) -> Self {
        if self.is_non_null() {
            self
        } else {
            Self::NonNull(Box::new(self))
        }
    }

    /// Indicates whether the *outermost* modifier is a list. `[Int]!` is not
    /// a list by this definition; its outermost modifier is non-null.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Indicates whether the *outermost* modifier is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn is_nullable(&self) -> bool {
        !self.is_non_null()
    }

    /// The type directly wrapped by this one, if any.
    pub fn of_type(&self) -> Option<&TypeWrapper> {
        match self {
            Self::Named(_) => None,
            Self::List(inner) | Self::NonNull(inner) => Some(inner),
        }
    }

    /// Strip a top-level non-null modifier if there is one.
    pub fn unwrap_non_null(&self) -> &TypeWrapper {
        match self {
            Self::NonNull(inner) => inner,
            _ => self,
        }
    }

    /// Recursively unwrap this type and return the name of the named type at
    /// its core.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_name(),
        }
    }

    /// Render this type the way it is written in GraphQL SDL, e.g.
    /// `[String!]!`.
    pub fn to_type_signature(&self) -> String {
        self.to_string()
    }

    /// Parse a GraphQL type signature (e.g. `[ID!]`) back into a
    /// [`TypeWrapper`].
    pub fn parse(signature: &str) -> Result<Self> {
        let trimmed = signature.trim();
        if trimmed.is_empty() {
            return Err(TypeSignatureError::Empty);
        }

        // The signature gets spliced into a variable definition below, so
        // anything outside of the type-reference grammar is refused up front.
        if let Some(character) = trimmed.chars().find(|c| {
            !(c.is_ascii_alphanumeric() || matches!(c, '_' | '[' | ']' | '!' | ' ' | '\t'))
        }) {
            return Err(TypeSignatureError::InvalidCharacter {
                character,
                signature: signature.to_string(),
            });
        }

        let document_src = format!("query($value: {trimmed}) {{ __typename }}");
        let document: ast::query::Document =
            graphql_parser::query::parse_query::<String>(document_src.as_str())
                .map_err(|err| TypeSignatureError::Syntax {
                    message: err.to_string(),
                    signature: signature.to_string(),
                })?
                .into_static();

        let var_type = document.definitions.first().and_then(|def| match def {
            ast::query::Definition::Operation(
                ast::query::OperationDefinition::Query(query),
            ) => query.variable_definitions.first().map(|var| &var.var_type),
            _ => None,
        });

        match var_type {
            Some(var_type) => Ok(Self::from_ast_type(var_type)),
            None => Err(TypeSignatureError::Syntax {
                message: "expected exactly one type reference".to_string(),
                signature: signature.to_string(),
            }),
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::query::Type) -> Self {
        match ast_type {
            ast::query::Type::NamedType(name) =>
                Self::Named(name.to_owned()),

            ast::query::Type::ListType(inner) =>
                Self::List(Box::new(Self::from_ast_type(inner))),

            ast::query::Type::NonNullType(inner) =>
                Self::NonNull(Box::new(Self::from_ast_type(inner))),
        }
    }
}
impl std::fmt::Display for TypeWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
impl std::str::FromStr for TypeWrapper {
    type Err = TypeSignatureError;

    fn from_str(signature: &str) -> Result<Self> {
        Self::parse(signature)
    }
}
