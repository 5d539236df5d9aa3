use crate::execution::FieldError;
use crate::types::TypeWrapper;
use crate::Value;
use indexmap::IndexMap;
use thiserror::Error;

/// Something wrong with the arguments supplied to a field, discovered while
/// coercing or validating them.
///
/// These never abort a query. The executor reports each one at the path of
/// the field whose arguments were rejected and nulls that field.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputCoercionError {
    /// A scalar or enum refused the value it was given.
    #[error("{message}")]
    IncompatibleValue {
        message: String,
        type_name: String,
    },

    #[error(
        "Field '{field_name}' is missing required arguments: {}",
        argument_names.join(", "),
    )]
    MissingRequiredArguments {
        argument_names: Vec<String>,
        field_name: String,
    },

    /// A nullable argument that must still be passed explicitly was left
    /// out.
    #[error("{owner_name} must include the following argument: {argument_name}.")]
    MissingPresentArgument {
        argument_name: String,
        owner_name: String,
    },

    #[error(
        "Argument '{field_name}' on InputObject '{type_name}' is required. \
        Expected type {expected_type}"
    )]
    MissingRequiredInputField {
        expected_type: TypeWrapper,
        field_name: String,
        type_name: String,
    },

    /// The lone entry given for a one-of input object is `null`.
    #[error("Argument '{argument_path}' must be non-null.")]
    NullForNonNull {
        argument_path: String,
    },

    #[error("OneOf Input Object '{type_name}' must specify exactly one key.")]
    OneOfViolation {
        type_name: String,
    },

    /// A validator raised a structured error of its own; it is reported
    /// as-is instead of being folded into an aggregated message.
    #[error("{0}")]
    Raised(FieldError),

    #[error("There is no input type defined with the name `{type_name}`")]
    UndefinedType {
        type_name: String,
    },

    #[error("Field '{field_name}' doesn't accept argument '{argument_name}'")]
    UnknownArgument {
        argument_name: String,
        field_name: String,
    },

    #[error("InputObject '{type_name}' doesn't accept argument '{field_name}'")]
    UnknownInputField {
        field_name: String,
        type_name: String,
    },

    /// One or more plain validator messages, already joined with `", "`.
    #[error("{message}")]
    ValidationFailed {
        message: String,
    },
}
impl InputCoercionError {
    /// The `extensions` entry reported alongside this error.
    pub fn extensions(&self) -> IndexMap<String, Value> {
        let code_and_type = |code: &str, type_name: &str| IndexMap::from([
            ("code".to_string(), Value::from(code)),
            ("typeName".to_string(), Value::from(type_name)),
        ]);

        match self {
            Self::IncompatibleValue { type_name, .. } =>
                code_and_type("argumentLiteralsIncompatible", type_name),

            Self::MissingRequiredArguments { .. } => IndexMap::from([
                ("code".to_string(), Value::from("missingRequiredArguments")),
            ]),

            Self::MissingRequiredInputField { type_name, .. } =>
                code_and_type("missingRequiredInputObjectAttribute", type_name),

            Self::OneOfViolation { type_name } =>
                code_and_type("invalidOneOfInputObject", type_name),

            Self::Raised(error) => error.extensions().to_owned(),

            Self::UnknownArgument { .. } => IndexMap::from([
                ("code".to_string(), Value::from("argumentNotAccepted")),
            ]),

            Self::UnknownInputField { type_name, .. } =>
                code_and_type("argumentNotAccepted", type_name),

            Self::MissingPresentArgument { .. }
            | Self::NullForNonNull { .. }
            | Self::UndefinedType { .. }
            | Self::ValidationFailed { .. } => IndexMap::new(),
        }
    }
}
