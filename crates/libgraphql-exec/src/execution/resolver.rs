use crate::execution::QueryContext;
use crate::execution::ResolveError;
use crate::execution::ResponsePath;
use crate::timeout::TimeoutError;
use crate::timeout::TimeoutSupervisor;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;
use indexmap::IndexMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub type ResolveResult = Result<Value, ResolveError>;

/// Produces the value of one field invocation.
pub type Resolver = Arc<
    dyn Fn(ResolverContext) -> BoxFuture<'static, ResolveResult> + Send + Sync
>;

/// Wrap an async closure as a [`Resolver`].
///
/// ```
/// use libgraphql_exec::execution::resolver_fn;
/// use libgraphql_exec::Value;
/// use std::time::Duration;
///
/// let resolver = resolver_fn(|ctx| async move {
///     ctx.sleep(Duration::from_millis(10)).await?;
///     Ok(Value::from("done"))
/// });
/// # drop(resolver);
/// ```
pub fn resolver_fn<F, Fut>(resolve: F) -> Resolver
where
    F: Fn(ResolverContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ResolveResult> + Send + 'static,
{
    Arc::new(move |ctx: ResolverContext| resolve(ctx).boxed())
}

/// A resolver that always produces `value`.
pub fn constant(value: impl Into<Value>) -> Resolver {
    let value = value.into();
    Arc::new(move |_ctx: ResolverContext| {
        futures::future::ready(Ok(value.to_owned())).boxed()
    })
}

/// Everything a resolver gets to see about the invocation it is serving.
#[derive(Clone, Debug)]
pub struct ResolverContext {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) context: QueryContext,
    pub(crate) field_name: String,
    pub(crate) object: Value,
    pub(crate) owner_type_name: String,
    pub(crate) path: ResponsePath,
    pub(crate) supervisor: Arc<TimeoutSupervisor>,
}
impl ResolverContext {
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    /// The coerced and validated arguments, defaults included.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    /// Give the timeout supervisor a chance to stop this resolver. Fails once
    /// the query is past its deadline.
    pub fn checkpoint(&self) -> Result<(), TimeoutError> {
        self.supervisor.checkpoint(
            self.owner_type_name.as_str(),
            self.field_name.as_str(),
            &self.path,
        )
    }

    pub fn context(&self) -> &QueryContext {
        &self.context
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    /// The parent object value this field is being resolved on.
    pub fn object(&self) -> &Value {
        &self.object
    }

    pub fn owner_type_name(&self) -> &str {
        self.owner_type_name.as_str()
    }

    pub fn path(&self) -> &ResponsePath {
        &self.path
    }

    /// Sleep for `duration`, checking the deadline on both sides of the
    /// wait.
    pub async fn sleep(&self, duration: Duration) -> Result<(), TimeoutError> {
        self.checkpoint()?;
        tokio::time::sleep(duration).await;
        self.checkpoint()
    }
}
