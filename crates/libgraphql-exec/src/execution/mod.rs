mod execution_abort;
mod execution_result;
mod executor;
mod executor_builder;
mod field_error;
mod field_invocation;
mod field_plan;
mod field_plan_builder;
mod graphql_error;
mod query_context;
mod query_plan;
mod query_plan_error;
mod resolver;
mod response_path;

pub use execution_abort::AbortReason;
pub use execution_abort::ExecutionAbort;
pub use execution_result::ExecutionResult;
pub use executor::Executor;
pub use executor_builder::ExecutorBuilder;
pub use field_error::FieldError;
pub use field_error::ResolveError;
pub use field_invocation::FieldInvocation;
pub use field_invocation::InvocationState;
pub use field_plan::FieldPlan;
pub use field_plan_builder::FieldPlanBuilder;
pub use graphql_error::GraphQLError;
pub use query_context::QueryContext;
pub use query_plan::QueryPlan;
pub use query_plan_error::QueryPlanError;
pub use resolver::constant;
pub use resolver::resolver_fn;
pub use resolver::ResolveResult;
pub use resolver::Resolver;
pub use resolver::ResolverContext;
pub use response_path::PathSegment;
pub use response_path::ResponsePath;

#[cfg(test)]
mod tests;
