use crate::execution::ExecutionAbort;
use crate::execution::ExecutionResult;
use crate::execution::ExecutorBuilder;
use crate::execution::FieldInvocation;
use crate::execution::FieldPlan;
use crate::execution::GraphQLError;
use crate::execution::InvocationState;
use crate::execution::QueryContext;
use crate::execution::QueryPlan;
use crate::execution::ResolveError;
use crate::execution::ResolverContext;
use crate::execution::ResponsePath;
use crate::timeout::TimeoutAction;
use crate::timeout::TimeoutError;
use crate::timeout::TimeoutPolicy;
use crate::timeout::TimeoutSupervisor;
use crate::types::CoercionError;
use crate::types::InputCoercer;
use crate::types::RegisteredType;
use crate::types::TypeRegistry;
use crate::types::TypeWrapper;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ExecutionAbort>;

/// Runs [`QueryPlan`]s.
///
/// Sibling fields run one after another in selection order; a field's
/// sub-selections run once its own resolver has produced a value. Every
/// field start is a timeout checkpoint.
///
/// Failures local to one field (rejected arguments, resolver errors,
/// timeouts under a recording policy) null that field and are reported in
/// [`ExecutionResult::errors`] while the rest of the query carries on.
/// Result coercion failures and timeout policy aborts end the query with an
/// [`ExecutionAbort`] instead.
pub struct Executor {
    pub(super) timeout_policy: Arc<dyn TimeoutPolicy>,
    pub(super) type_registry: Arc<TypeRegistry>,
}
impl Executor {
    pub fn builder() -> ExecutorBuilder {
        ExecutorBuilder::new()
    }

    pub async fn execute(
        &self,
        plan: &QueryPlan,
        context: QueryContext,
    ) -> Result<ExecutionResult> {
        let supervisor = Arc::new(TimeoutSupervisor::start(
            self.timeout_policy.as_ref(),
            &context,
        ));
        let mut run = ExecutionRun {
            context,
            errors: vec![],
            executor: self,
            supervisor,
        };
        let data = run.execute_selections(
            plan.selections(),
            plan.root_value(),
            ResponsePath::root(),
        ).await?;

        log::debug!(
            "Executed `{}` operation in {:?} with {} errors.",
            plan.operation_type_name(),
            run.supervisor.elapsed(),
            run.errors.len(),
        );
        Ok(ExecutionResult {
            data: data.unwrap_or(Value::Null),
            errors: run.errors,
        })
    }

    pub fn timeout_policy(&self) -> &dyn TimeoutPolicy {
        self.timeout_policy.as_ref()
    }

    pub fn type_registry(&self) -> &TypeRegistry {
        self.type_registry.as_ref()
    }
}
impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("type_registry", &self.type_registry)
            .finish_non_exhaustive()
    }
}

/// State of a single [`Executor::execute`] call.
///
/// Completion functions return `None` when the value at their position is
/// null but its type is non-null, meaning the null has to move up to the
/// enclosing position.
struct ExecutionRun<'a> {
    context: QueryContext,
    errors: Vec<GraphQLError>,
    executor: &'a Executor,
    supervisor: Arc<TimeoutSupervisor>,
}
impl ExecutionRun<'_> {
    fn execute_selections<'s>(
        &'s mut self,
        selections: &'s [FieldPlan],
        parent: &'s Value,
        path: ResponsePath,
    ) -> BoxFuture<'s, Result<Option<Value>>> {
        async move {
            let mut data = IndexMap::new();
            let mut nulled = false;
            for field in selections {
                let field_path = path.child(field.response_key());
                match self.execute_field(field, parent, field_path).await? {
                    Some(value) => {
                        data.insert(field.response_key().to_string(), value);
                    },
                    None => nulled = true,
                }
            }
            Ok(if nulled { None } else { Some(Value::Object(data)) })
        }.boxed()
    }

    async fn execute_field(
        &mut self,
        field: &FieldPlan,
        parent: &Value,
        path: ResponsePath,
    ) -> Result<Option<Value>> {
        let mut invocation = FieldInvocation::begin(field, path);
        if let Err(timeout) = self.supervisor.checkpoint(
            field.owner_type_name(),
            field.name(),
            invocation.path(),
        ) {
            invocation.finish(InvocationState::TimedOut);
            self.handle_timeout(field, timeout)?;
            return Ok(self.null_for(field, invocation.path()));
        }

        let coerced = {
            let coercer = InputCoercer::new(
                self.executor.type_registry.as_ref(),
                &self.context,
                field.name(),
            ).with_object(parent);
            coercer.coerce_arguments(field.argument_definitions(), field.arguments())
                .and_then(|arguments| {
                    let bundle = Value::Object(arguments.to_owned());
                    coercer.run_validators(field.validators(), field.name(), &bundle)
                        .map(|()| arguments)
                        .map_err(|err| vec![err])
                })
        };
        match coerced {
            Ok(arguments) => invocation.arguments = arguments,
            Err(errors) => {
                invocation.finish(InvocationState::Errored);
                for error in errors {
                    log::debug!(
                        "Rejected the arguments of `{}`: {error}",
                        invocation.path(),
                    );
                    self.errors.push(
                        GraphQLError::new(error.to_string(), invocation.path().to_owned())
                            .with_extensions(error.extensions())
                            .with_location(field.location()),
                    );
                }
                return Ok(self.null_for(field, invocation.path()));
            },
        }

        let resolved = match field.resolver() {
            Some(resolver) => resolver(ResolverContext {
                arguments: invocation.arguments().to_owned(),
                context: self.context.clone(),
                field_name: field.name().to_string(),
                object: parent.to_owned(),
                owner_type_name: field.owner_type_name().to_string(),
                path: invocation.path().to_owned(),
                supervisor: self.supervisor.clone(),
            }).await,
            None => Ok(parent.get(field.name()).cloned().unwrap_or(Value::Null)),
        };

        match resolved {
            Ok(value) => {
                invocation.finish(InvocationState::Completed);
                self.complete_value(field, field.return_type(), value, invocation.path)
                    .await
            },

            Err(ResolveError::Field(error)) => {
                invocation.finish(InvocationState::Errored);
                log::debug!("Resolver for `{}` failed: {error}", invocation.path());
                self.errors.push(
                    GraphQLError::new(error.message(), invocation.path().to_owned())
                        .with_extensions(error.extensions().to_owned())
                        .with_location(field.location()),
                );
                Ok(self.null_for(field, invocation.path()))
            },

            Err(ResolveError::Timeout(timeout)) => {
                invocation.finish(InvocationState::TimedOut);
                self.handle_timeout(field, timeout)?;
                Ok(self.null_for(field, invocation.path()))
            },
        }
    }

    fn complete_value<'s>(
        &'s mut self,
        field: &'s FieldPlan,
        type_: &'s TypeWrapper,
        value: Value,
        path: ResponsePath,
    ) -> BoxFuture<'s, Result<Option<Value>>> {
        async move {
            match type_ {
                TypeWrapper::NonNull(inner) => {
                    match self.complete_value(field, inner, value, path.to_owned()).await? {
                        None | Some(Value::Null) => {
                            self.record_non_null_violation(field, &path);
                            Ok(None)
                        },
                        completed => Ok(completed),
                    }
                },

                _ if value.is_null() => Ok(Some(Value::Null)),

                TypeWrapper::List(inner) => {
                    let items = match value {
                        Value::List(items) => items,
                        other => return Err(ExecutionAbort::ResultCoercion {
                            source: CoercionError::invalid_value(
                                type_.to_type_signature().as_str(),
                                &other,
                            ),
                            path,
                            type_name: type_.to_type_signature(),
                        }),
                    };

                    let mut completed = Vec::with_capacity(items.len());
                    let mut nulled = false;
                    for (index, item) in items.into_iter().enumerate() {
                        match self.complete_value(field, inner, item, path.child(index)).await? {
                            Some(item) => completed.push(item),
                            None => nulled = true,
                        }
                    }
                    Ok(Some(if nulled { Value::Null } else { Value::List(completed) }))
                },

                TypeWrapper::Named(type_name) => {
                    if field.selections().is_empty() {
                        return self.complete_leaf(type_name, &value, &path).map(Some);
                    }
                    let object = self.execute_selections(
                        field.selections(),
                        &value,
                        path,
                    ).await?;
                    Ok(Some(object.unwrap_or(Value::Null)))
                },
            }
        }.boxed()
    }

    fn complete_leaf(
        &self,
        type_name: &str,
        value: &Value,
        path: &ResponsePath,
    ) -> Result<Value> {
        let coerced = match self.executor.type_registry.get(type_name) {
            Some(RegisteredType::Scalar(scalar_type)) =>
                scalar_type.coerce_result(value, &self.context),

            Some(RegisteredType::Enum(enum_type)) =>
                enum_type.coerce_result(value),

            Some(RegisteredType::InputObject(_)) | None =>
                return Err(ExecutionAbort::UnknownLeafType {
                    path: path.to_owned(),
                    type_name: type_name.to_string(),
                }),
        };
        coerced.map_err(|source| ExecutionAbort::ResultCoercion {
            path: path.to_owned(),
            source,
            type_name: type_name.to_string(),
        })
    }

    fn handle_timeout(&mut self, field: &FieldPlan, error: TimeoutError) -> Result<()> {
        match self.executor.timeout_policy.on_timeout(&error, &self.context) {
            TimeoutAction::Record => {
                log::debug!("{error} (at `{}`).", error.path());
                self.errors.push(
                    GraphQLError::new(error.to_string(), error.path().to_owned())
                        .with_location(field.location()),
                );
                Ok(())
            },

            TimeoutAction::Abort(reason) => {
                log::warn!(
                    "Timeout policy aborted the query at `{}`: {reason}",
                    error.path(),
                );
                Err(ExecutionAbort::Timeout { error, reason })
            },
        }
    }

    /// The value of a field that produced no value of its own.
    fn null_for(&mut self, field: &FieldPlan, path: &ResponsePath) -> Option<Value> {
        if field.return_type().is_non_null() {
            self.record_non_null_violation(field, path);
            None
        } else {
            Some(Value::Null)
        }
    }

    /// Reports a null in a non-null position unless an error at or below
    /// `path` already explains it.
    fn record_non_null_violation(&mut self, field: &FieldPlan, path: &ResponsePath) {
        if self.errors.iter().any(|error| error.path.starts_with(path)) {
            return;
        }
        self.errors.push(
            GraphQLError::new(
                format!(
                    "Cannot return null for non-nullable field {}.{}",
                    field.owner_type_name(),
                    field.name(),
                ),
                path.to_owned(),
            ).with_location(field.location()),
        );
    }
}
