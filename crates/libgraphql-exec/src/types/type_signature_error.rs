use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeSignatureError {
    #[error("Type signatures must not be empty")]
    Empty,

    #[error(
        "Invalid character `{character}` in type signature `{signature}`"
    )]
    InvalidCharacter {
        character: char,
        signature: String,
    },

    #[error("Unable to parse type signature `{signature}`: {message}")]
    Syntax {
        message: String,
        signature: String,
    },
}
