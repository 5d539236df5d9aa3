use crate::execution::ResponsePath;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueryPlanError {
    #[error(
        "The response key `{response_key}` is selected more than once at \
        `{path}`"
    )]
    DuplicateResponseKey {
        path: ResponsePath,
        response_key: String,
    },

    #[error(
        "The field `{owner_type_name}.{field_name}` was selected on a value of \
        type `{parent_type_name}`"
    )]
    OwnerTypeMismatch {
        field_name: String,
        owner_type_name: String,
        parent_type_name: String,
    },
}
