use crate::execution::constant;
use crate::execution::resolver_fn;
use crate::execution::ExecutionAbort;
use crate::execution::ExecutionResult;
use crate::execution::Executor;
use crate::execution::FieldError;
use crate::execution::FieldPlan;
use crate::execution::FieldPlanBuilder;
use crate::execution::QueryContext;
use crate::execution::QueryPlan;
use crate::execution::ResponsePath;
use crate::loc::SourceLocation;
use crate::types::Argument;
use crate::types::EnumType;
use crate::types::TypeRegistry;
use crate::types::TypeWrapper;
use crate::validation::NumericalityValidator;
use crate::validation::RequiredValidator;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::Value;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::Mutex;

fn named(name: &str) -> TypeWrapper {
    TypeWrapper::named(name)
}

fn object(entries: &[(&str, Value)]) -> Value {
    Value::Object(
        entries.iter()
            .map(|(key, value)| (key.to_string(), value.to_owned()))
            .collect(),
    )
}

fn path(segments: &[&str]) -> ResponsePath {
    segments.iter().copied().collect()
}

async fn execute(selections: Vec<FieldPlan>) -> ExecutionResult {
    let plan = QueryPlan::new("Query", selections).unwrap();
    Executor::builder()
        .build()
        .execute(&plan, QueryContext::new())
        .await
        .unwrap()
}

#[tokio::test]
async fn siblings_run_in_selection_order() {
    let order = Arc::new(Mutex::new(vec![]));
    let recording = |name: &'static str| {
        let order = order.clone();
        resolver_fn(move |_ctx| {
            let order = order.clone();
            async move {
                order.lock().unwrap().push(name);
                Ok(Value::from(name))
            }
        })
    };

    let result = execute(vec![
        FieldPlanBuilder::new("Query", "c", named("String")).resolver(recording("c")).build(),
        FieldPlanBuilder::new("Query", "a", named("String")).resolver(recording("a")).build(),
        FieldPlanBuilder::new("Query", "b", named("String")).resolver(recording("b")).build(),
    ]).await;

    assert!(result.is_ok());
    assert_eq!(*order.lock().unwrap(), vec!["c", "a", "b"]);
    assert_eq!(
        result.data.as_object().unwrap().keys().collect::<Vec<_>>(),
        vec!["c", "a", "b"],
    );
}

#[tokio::test]
async fn nested_fields_use_the_default_resolver() {
    let result = execute(vec![
        FieldPlanBuilder::new("Query", "user", named("User"))
            .resolver(constant(object(&[
                ("name", Value::from("Ada")),
                ("age", Value::Int(36)),
            ])))
            .select(FieldPlanBuilder::new("User", "name", named("String")).build())
            .select(
                FieldPlanBuilder::new("User", "age", named("Int"))
                    .alias("years")
                    .build(),
            )
            .select(FieldPlanBuilder::new("User", "email", named("String")).build())
            .build(),
    ]).await;

    assert_eq!(result.data, object(&[(
        "user",
        object(&[
            ("name", Value::from("Ada")),
            ("years", Value::Int(36)),
            ("email", Value::Null),
        ]),
    )]));
}

#[tokio::test]
async fn root_fields_read_the_root_value() {
    let plan = QueryPlan::new("Query", vec![
        FieldPlanBuilder::new("Query", "version", named("String")).build(),
    ]).unwrap().with_root_value(object(&[("version", Value::from("1.2"))]));

    let result = Executor::builder()
        .build()
        .execute(&plan, QueryContext::new())
        .await
        .unwrap();
    assert_eq!(result.data, object(&[("version", Value::from("1.2"))]));
}

#[tokio::test]
async fn resolver_errors_null_only_their_own_field() {
    let result = execute(vec![
        FieldPlanBuilder::new("Query", "before", named("Int"))
            .resolver(constant(1))
            .build(),
        FieldPlanBuilder::new("Query", "boom", named("Int"))
            .location(SourceLocation::new(2, 3))
            .resolver(resolver_fn(|_ctx| async {
                Err(FieldError::new("Something broke").with_extension("code", "BOOM").into())
            }))
            .build(),
        FieldPlanBuilder::new("Query", "after", named("Int"))
            .resolver(constant(2))
            .build(),
    ]).await;

    assert_eq!(result.data, object(&[
        ("before", Value::Int(1)),
        ("boom", Value::Null),
        ("after", Value::Int(2)),
    ]));
    assert_eq!(result.errors.len(), 1);
    let error = &result.errors[0];
    assert_eq!(error.message, "Something broke");
    assert_eq!(error.path, path(&["boom"]));
    assert_eq!(error.locations, vec![SourceLocation::new(2, 3)]);
    assert_eq!(error.extensions.get("code"), Some(&Value::from("BOOM")));
}

#[tokio::test]
async fn aliased_repeats_report_errors_under_their_own_key() {
    let greeting = |alias: &str, name: Value, line: usize| {
        FieldPlanBuilder::new("Query", "greeting", named("String"))
            .alias(alias)
            .location(SourceLocation::new(line, 3))
            .argument(Argument::new("name", named("String").wrap_non_null()))
            .raw_argument("name", name)
            .resolver(resolver_fn(|ctx| async move {
                let name = ctx.argument("name").and_then(Value::as_str).unwrap_or_default();
                Ok(Value::from(format!("Hello, {name}")))
            }))
            .build()
    };

    let result = execute(vec![
        greeting("first", Value::from("Ada"), 1),
        greeting("second", Value::Int(7), 2),
    ]).await;

    assert_eq!(result.data, object(&[
        ("first", Value::from("Hello, Ada")),
        ("second", Value::Null),
    ]));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, path(&["second"]));
    assert_eq!(result.errors[0].locations, vec![SourceLocation::new(2, 3)]);
    assert_eq!(
        result.errors[0].message,
        "Argument 'name' on Field 'greeting' has an invalid value (7). Expected type 'String!'.",
    );
    assert_eq!(
        result.errors[0].extensions.get("code"),
        Some(&Value::from("argumentLiteralsIncompatible")),
    );
}

#[tokio::test]
async fn rejected_arguments_skip_the_resolver() {
    let called = Arc::new(Mutex::new(false));
    let resolver_called = called.clone();
    let result = execute(vec![
        FieldPlanBuilder::new("Query", "items", named("Int").wrap_list())
            .argument(
                Argument::new("first", named("Int").wrap_non_null())
                    .validates(Arc::new(NumericalityValidator::new().greater_than_or_equal_to(1.0))),
            )
            .argument(
                Argument::new("last", named("Int"))
                    .validates(Arc::new(NumericalityValidator::new().greater_than_or_equal_to(1.0))),
            )
            .raw_argument("first", 0)
            .raw_argument("last", -2)
            .resolver(resolver_fn(move |_ctx| {
                let called = resolver_called.clone();
                async move {
                    *called.lock().unwrap() = true;
                    Ok(Value::List(vec![]))
                }
            }))
            .build(),
    ]).await;

    assert!(!*called.lock().unwrap());
    assert_eq!(result.data, object(&[("items", Value::Null)]));
    let messages: Vec<_> = result.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec![
        "first must be greater than or equal to 1",
        "last must be greater than or equal to 1",
    ]);
    assert!(result.errors.iter().all(|error| error.path == path(&["items"])));
}

#[tokio::test]
async fn field_validators_check_the_argument_bundle() {
    let post = |arguments: &[(&str, Value)]| {
        let mut builder = FieldPlanBuilder::new("Query", "post", named("String"))
            .argument(Argument::new("id", named("ID")))
            .argument(Argument::new("slug", named("String")))
            .validates(Arc::new(RequiredValidator::one_of(["id", "slug"])))
            .resolver(constant("a post"));
        for (name, value) in arguments {
            builder = builder.raw_argument(name, value.to_owned());
        }
        builder
    };

    let result = execute(vec![
        post(&[("id", Value::from("1"))]).alias("byId").build(),
        post(&[]).alias("neither").build(),
    ]).await;

    assert_eq!(result.data, object(&[
        ("byId", Value::from("a post")),
        ("neither", Value::Null),
    ]));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "post must include exactly one of the following arguments: id, slug.",
    );
    assert_eq!(result.errors[0].path, path(&["neither"]));
}

/// Rejects invocations on posts that are locked.
struct Unlocked;
impl Validator for Unlocked {
    fn kind(&self) -> &str {
        "unlocked"
    }

    fn validate(
        &self,
        target: &ValidationTarget<'_>,
        _value: &Value,
    ) -> Result<Option<String>, FieldError> {
        let locked = target.object
            .and_then(|object| object.get("locked"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Ok(locked.then(|| format!("{} is not available on locked posts", target.name)))
    }
}

#[tokio::test]
async fn list_elements_fail_independently() {
    let post = |id: i32, locked: bool| object(&[
        ("id", Value::Int(id.into())),
        ("locked", Value::Bool(locked)),
        ("body", Value::from(format!("body {id}"))),
    ]);

    let result = execute(vec![
        FieldPlanBuilder::new("Query", "posts", named("Post").wrap_list())
            .resolver(constant(vec![post(1, false), post(2, true), post(3, false)]))
            .select(FieldPlanBuilder::new("Post", "id", named("Int")).build())
            .select(
                FieldPlanBuilder::new("Post", "body", named("String"))
                    .validates(Arc::new(Unlocked))
                    .build(),
            )
            .build(),
    ]).await;

    let body_of = |index: usize| {
        result.data.get("posts")
            .and_then(Value::as_list)
            .and_then(|posts| posts[index].get("body"))
            .cloned()
    };
    assert_eq!(body_of(0), Some(Value::from("body 1")));
    assert_eq!(body_of(1), Some(Value::Null));
    assert_eq!(body_of(2), Some(Value::from("body 3")));

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "body is not available on locked posts");
    assert_eq!(
        result.errors[0].path,
        ResponsePath::root().child("posts").child(1).child("body"),
    );
}

#[tokio::test]
async fn nulls_in_non_null_positions_bubble_to_the_nearest_nullable_parent() {
    let result = execute(vec![
        FieldPlanBuilder::new("Query", "viewer", named("Viewer"))
            .resolver(constant(object(&[("name", Value::from("Ada"))])))
            .select(FieldPlanBuilder::new("Viewer", "name", named("String")).build())
            .select(FieldPlanBuilder::new("Viewer", "id", named("ID").wrap_non_null()).build())
            .build(),
        FieldPlanBuilder::new("Query", "ok", named("Boolean"))
            .resolver(constant(true))
            .build(),
    ]).await;

    assert_eq!(result.data, object(&[
        ("viewer", Value::Null),
        ("ok", Value::Bool(true)),
    ]));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "Cannot return null for non-nullable field Viewer.id",
    );
    assert_eq!(result.errors[0].path, path(&["viewer", "id"]));
}

#[tokio::test]
async fn non_null_root_fields_null_the_whole_response() {
    let result = execute(vec![
        FieldPlanBuilder::new("Query", "ok", named("Boolean"))
            .resolver(constant(true))
            .build(),
        FieldPlanBuilder::new("Query", "required", named("Int").wrap_non_null())
            .resolver(resolver_fn(|_ctx| async {
                Err(FieldError::new("nope").into())
            }))
            .build(),
    ]).await;

    assert_eq!(result.data, Value::Null);
    // The resolver's own error already explains the null.
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "nope");
}

#[tokio::test]
async fn null_items_of_non_null_lists_null_the_list() {
    let result = execute(vec![
        FieldPlanBuilder::new("Query", "scores", named("Int").wrap_non_null().wrap_list())
            .resolver(constant(vec![Value::Int(1), Value::Null, Value::Int(3)]))
            .build(),
        FieldPlanBuilder::new("Query", "maybeScores", named("Int").wrap_list())
            .resolver(constant(vec![Value::Int(1), Value::Null]))
            .build(),
    ]).await;

    assert_eq!(result.data, object(&[
        ("scores", Value::Null),
        ("maybeScores", Value::from(vec![Value::Int(1), Value::Null])),
    ]));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, ResponsePath::root().child("scores").child(1));
}

#[tokio::test]
async fn enum_results_are_checked() {
    let mut registry = TypeRegistry::new();
    registry.register_enum(EnumType::new("Color", ["RED", "GREEN"])).unwrap();
    let executor = Executor::builder().type_registry(registry).build();

    let plan = QueryPlan::new("Query", vec![
        FieldPlanBuilder::new("Query", "color", named("Color"))
            .resolver(constant("RED"))
            .build(),
    ]).unwrap();
    let result = executor.execute(&plan, QueryContext::new()).await.unwrap();
    assert_eq!(result.data, object(&[("color", Value::Enum("RED".to_string()))]));

    let plan = QueryPlan::new("Query", vec![
        FieldPlanBuilder::new("Query", "color", named("Color"))
            .resolver(constant("BLUE"))
            .build(),
    ]).unwrap();
    assert!(matches!(
        executor.execute(&plan, QueryContext::new()).await,
        Err(ExecutionAbort::ResultCoercion { .. }),
    ));
}

#[tokio::test]
async fn result_coercion_failures_abort_the_query() {
    let plan = QueryPlan::new("Query", vec![
        FieldPlanBuilder::new("Query", "fine", named("Int"))
            .resolver(constant(1))
            .build(),
        FieldPlanBuilder::new("Query", "count", named("Int"))
            .resolver(constant("lots"))
            .build(),
    ]).unwrap();

    let err = Executor::builder()
        .build()
        .execute(&plan, QueryContext::new())
        .await
        .unwrap_err();
    match err {
        ExecutionAbort::ResultCoercion { path: err_path, type_name, .. } => {
            assert_eq!(err_path, path(&["count"]));
            assert_eq!(type_name, "Int");
        },
        other => panic!("expected a result coercion abort, got {other:?}"),
    }
}

#[tokio::test]
async fn leaves_of_unknown_types_abort_the_query() {
    let plan = QueryPlan::new("Query", vec![
        FieldPlanBuilder::new("Query", "widget", named("Widget"))
            .resolver(constant(object(&[])))
            .build(),
    ]).unwrap();

    assert!(matches!(
        Executor::builder().build().execute(&plan, QueryContext::new()).await,
        Err(ExecutionAbort::UnknownLeafType { type_name, .. }) if type_name == "Widget",
    ));
}

#[tokio::test]
async fn resolvers_share_the_query_context() {
    let context = QueryContext::new();
    let plan = QueryPlan::new("Query", vec![
        FieldPlanBuilder::new("Query", "login", named("Boolean"))
            .resolver(resolver_fn(|ctx| async move {
                ctx.context().set("user", "ada");
                Ok(Value::Bool(true))
            }))
            .build(),
        FieldPlanBuilder::new("Query", "whoami", named("String"))
            .resolver(resolver_fn(|ctx| async move {
                Ok(ctx.context().get("user").unwrap_or_default())
            }))
            .build(),
    ]).unwrap();

    let result = Executor::builder()
        .build()
        .execute(&plan, context.clone())
        .await
        .unwrap();
    assert_eq!(result.data.get("whoami"), Some(&Value::from("ada")));
    assert_eq!(context.snapshot(), IndexMap::from([("user".to_string(), Value::from("ada"))]));
}

#[tokio::test]
async fn prepare_failures_null_only_their_own_field() {
    let echo = |alias: &str, argument: Argument, value: i32| {
        FieldPlanBuilder::new("Query", "field", named("Int"))
            .alias(alias)
            .argument(argument)
            .raw_argument("arg", value)
            .resolver(resolver_fn(|ctx| async move {
                Ok(ctx.argument("arg").cloned().unwrap_or_default())
            }))
            .build()
    };
    let tripled = Argument::new("arg", named("Int")).with_prepare(|value, _context| {
        Ok(value.as_i64().map(|n| Value::Int(n * 3)).unwrap_or(value))
    });
    let exploding = Argument::new("arg", named("Int")).with_prepare(|_value, _context| {
        Err(FieldError::new("boom!"))
    });

    let result = execute(vec![echo("f1", tripled, 5), echo("f2", exploding, 5)]).await;

    assert_eq!(result.data, object(&[("f1", Value::Int(15)), ("f2", Value::Null)]));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "boom!");
    assert_eq!(result.errors[0].path, path(&["f2"]));
}

#[tokio::test]
async fn explicit_null_for_a_non_null_argument_is_an_incompatible_literal() {
    let result = execute(vec![
        FieldPlanBuilder::new("Query", "field", named("Int"))
            .argument(
                Argument::new("requiredWithDefaultArg", named("Int").wrap_non_null())
                    .with_default_value(1),
            )
            .raw_argument("requiredWithDefaultArg", Value::Null)
            .resolver(constant(1))
            .build(),
    ]).await;

    assert_eq!(result.data, object(&[("field", Value::Null)]));
    assert_eq!(
        result.errors[0].message,
        "Argument 'requiredWithDefaultArg' on Field 'field' has an invalid value \
        (null). Expected type 'Int!'.",
    );
    assert_eq!(
        result.errors[0].extensions.get("code"),
        Some(&Value::from("argumentLiteralsIncompatible")),
    );
}
