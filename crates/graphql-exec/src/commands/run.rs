use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::DemoPlan;
use anyhow::Context;
use libgraphql_exec::execution::ExecutionResult;
use libgraphql_exec::execution::Executor;
use libgraphql_exec::timeout::FixedTimeout;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub(crate) struct RunCmd {
    #[arg(
        help="Path to a JSON demo plan.",
        value_name="PLAN_FILE",
    )]
    pub(crate) plan_file: PathBuf,

    #[arg(
        help="Maximum run time for the query, in seconds. Overrides the \
              plan's own `max_seconds`.",
        long,
    )]
    pub(crate) max_seconds: Option<f64>,
}
impl RunCmd {
    pub(crate) async fn execute(&self) -> anyhow::Result<ExecutionResult> {
        let plan_src = tokio::fs::read_to_string(&self.plan_file).await
            .with_context(|| format!(
                "Failed to read `{}`",
                self.plan_file.display(),
            ))?;
        let demo_plan: DemoPlan = serde_json::from_str(plan_src.as_str())
            .with_context(|| format!(
                "`{}` is not a valid demo plan",
                self.plan_file.display(),
            ))?;
        log::debug!(
            "Loaded a demo plan with {} root fields from `{}`.",
            demo_plan.fields.len(),
            self.plan_file.display(),
        );

        let query_plan = demo_plan.to_query_plan()?;
        let type_registry = demo_plan.type_registry()?;
        query_plan.check_default_values(&type_registry)
            .context("The demo plan declares an invalid argument default")?;
        let mut builder = Executor::builder().type_registry(type_registry);
        if let Some(max_seconds) = self.max_seconds.or(demo_plan.max_seconds) {
            let policy = match FixedTimeout::from_secs_f64(max_seconds) {
                Ok(policy) => policy,
                Err(err) => anyhow::bail!(
                    "`max_seconds` must be a non-negative number of seconds \
                    ({max_seconds}): {err}"
                ),
            };
            builder = builder.timeout_policy(policy);
        }

        let result = builder.build()
            .execute(&query_plan, demo_plan.query_context())
            .await?;
        Ok(result)
    }
}

#[inherent::inherent]
impl RunnableCommand for RunCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let rendered = self.execute().await.and_then(|result| {
            let json = result.to_json()?;
            Ok(serde_json::to_string_pretty(&json)?)
        });
        match rendered {
            Ok(json) => CommandResult::output(json),
            Err(err) => CommandResult::failed(&err),
        }
    }
}
