//! Execution-side building blocks for GraphQL services built on
//! `libgraphql`: the type-wrapper algebra, scalar/enum/input-object input
//! coercion, composable argument validators, and a query executor whose
//! field scheduling is bounded by a cooperative timeout supervisor.

pub(crate) mod ast;
pub mod execution;
pub mod loc;
pub mod timeout;
pub mod types;
pub mod validation;
mod value;

pub use value::Value;
