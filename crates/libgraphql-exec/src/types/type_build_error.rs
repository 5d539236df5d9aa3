use crate::types::TypeWrapper;
use crate::Value;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeBuildError {
    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldName {
        field_name: String,
        type_name: String,
    },

    #[error("A type named `{type_name}` is already registered")]
    DuplicateTypeName {
        type_name: String,
    },

    /// `coordinate` names the argument, e.g. `Query.users.first` for a
    /// field argument or `UserFilter.role` for an input object field.
    #[error(
        "`{coordinate}` has an invalid default value: `{}` isn't accepted by \
        `{type_wrapper}`; update the default value or the argument type.",
        default_value.to_graphql_literal(),
    )]
    InvalidDefaultValue {
        coordinate: String,
        default_value: Value,
        type_wrapper: TypeWrapper,
    },

    #[error(
        "Argument '{type_name}.{field_name}' must be nullable because it is \
        part of a OneOf type."
    )]
    NonNullOneOfField {
        field_name: String,
        type_name: String,
    },
}
