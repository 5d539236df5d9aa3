use crate::commands::DemoPlan;
use libgraphql_exec::execution::ExecutionResult;
use libgraphql_exec::execution::Executor;
use libgraphql_exec::timeout::FixedTimeout;
use libgraphql_exec::types::TypeWrapper;
use libgraphql_exec::Value;

fn parse_plan(json: &str) -> DemoPlan {
    serde_json::from_str(json).unwrap()
}

async fn execute(plan: &DemoPlan) -> ExecutionResult {
    let query_plan = plan.to_query_plan().unwrap();
    let type_registry = plan.type_registry().unwrap();
    query_plan.check_default_values(&type_registry).unwrap();
    let mut builder = Executor::builder().type_registry(type_registry);
    if let Some(max_seconds) = plan.max_seconds {
        builder = builder.timeout_policy(FixedTimeout::from_secs_f64(max_seconds).unwrap());
    }
    builder.build()
        .execute(&query_plan, plan.query_context())
        .await
        .unwrap()
}

#[test]
fn fields_default_to_nullable_strings_on_query() {
    let plan = parse_plan(r#"{ "fields": [{ "name": "greeting" }] }"#);
    let query_plan = plan.to_query_plan().unwrap();

    assert_eq!(query_plan.operation_type_name(), "Query");
    let field = &query_plan.selections()[0];
    assert_eq!(field.owner_type_name(), "Query");
    assert_eq!(field.return_type(), &TypeWrapper::named("String"));
}

#[test]
fn nested_fields_are_owned_by_the_parents_innermost_type() {
    let plan = parse_plan(r#"{
        "fields": [{
            "name": "people",
            "type": "[Person!]!",
            "fields": [{ "name": "name" }]
        }]
    }"#);
    let query_plan = plan.to_query_plan().unwrap();

    let child = &query_plan.selections()[0].selections()[0];
    assert_eq!(child.owner_type_name(), "Person");
}

#[test]
fn unknown_keys_are_rejected() {
    let result = serde_json::from_str::<DemoPlan>(
        r#"{ "fields": [{ "name": "a", "dealy_ms": 10 }] }"#,
    );
    assert!(result.is_err());
}

#[test]
fn invalid_return_types_are_reported_with_the_field() {
    let plan = parse_plan(r#"{ "fields": [{ "name": "broken", "type": "[Int" }] }"#);
    let err = plan.to_query_plan().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid return type for `Query.broken`",
    );
}

#[test]
fn unknown_validator_kinds_are_reported() {
    let plan = parse_plan(r#"{
        "fields": [{
            "name": "a",
            "args": [{
                "name": "n",
                "type": "Int",
                "validators": { "shape": {} }
            }]
        }]
    }"#);
    let err = plan.to_query_plan().unwrap_err();
    assert_eq!(err.to_string(), "Invalid `shape` validator on argument `n`");
}

#[test]
fn duplicate_response_keys_are_rejected() {
    let plan = parse_plan(r#"{
        "fields": [
            { "name": "a" },
            { "name": "b", "alias": "a" }
        ]
    }"#);
    assert!(plan.to_query_plan().is_err());
}

#[tokio::test(start_paused = true)]
async fn slow_fields_time_out_under_max_seconds() {
    let plan = parse_plan(r#"{
        "max_seconds": 1,
        "fields": [
            { "name": "a", "type": "Int", "value": 1, "delay_ms": 400 },
            { "name": "b", "type": "Int", "value": 2, "delay_ms": 400 },
            { "name": "c", "type": "Int", "value": 3, "delay_ms": 400 },
            { "name": "d", "type": "Int", "value": 4, "delay_ms": 400 },
            { "name": "e", "type": "Int", "value": 5, "delay_ms": 400 }
        ]
    }"#);
    let result = execute(&plan).await;

    assert_eq!(result.data.get("a"), Some(&Value::Int(1)));
    assert_eq!(result.data.get("b"), Some(&Value::Int(2)));
    for name in ["c", "d", "e"] {
        assert_eq!(result.data.get(name), Some(&Value::Null), "field {name}");
    }
    let messages: Vec<&str> = result.errors.iter()
        .map(|error| error.message.as_str())
        .collect();
    assert_eq!(messages, vec![
        "Timeout on Query.c",
        "Timeout on Query.d",
        "Timeout on Query.e",
    ]);
}

#[tokio::test(start_paused = true)]
async fn context_false_disables_the_timeout() {
    let plan = parse_plan(r#"{
        "max_seconds": 0.1,
        "context": { "timeout": false },
        "fields": [{ "name": "a", "type": "Int", "value": 1, "delay_ms": 500 }]
    }"#);
    let result = execute(&plan).await;

    assert!(result.is_ok());
    assert_eq!(result.data.get("a"), Some(&Value::Int(1)));
}

#[tokio::test]
async fn nested_values_fall_back_to_the_parent_object() {
    let plan = parse_plan(r#"{
        "enums": { "Color": ["RED", "GREEN"] },
        "fields": [{
            "name": "car",
            "type": "Car",
            "value": { "color": "RED", "seats": 4 },
            "fields": [
                { "name": "color", "type": "Color!" },
                { "name": "seats", "type": "Int" }
            ]
        }]
    }"#);
    let result = execute(&plan).await;

    assert!(result.is_ok(), "errors: {:?}", result.errors);
    let car = result.data.get("car").unwrap();
    assert_eq!(car.get("color"), Some(&Value::Enum("RED".to_string())));
    assert_eq!(car.get("seats"), Some(&Value::Int(4)));
}

#[tokio::test]
async fn failing_fields_report_their_message() {
    let plan = parse_plan(r#"{
        "fields": [
            { "name": "ok", "value": "fine" },
            { "name": "bad", "error": "Something broke" }
        ]
    }"#);
    let result = execute(&plan).await;

    assert_eq!(result.data.get("ok"), Some(&Value::from("fine")));
    assert_eq!(result.data.get("bad"), Some(&Value::Null));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Something broke");
}

#[tokio::test]
async fn argument_validators_reject_bad_input() {
    let plan = parse_plan(r#"{
        "fields": [{
            "name": "count",
            "type": "Int",
            "value": 1,
            "args": [{
                "name": "limit",
                "type": "Int",
                "validators": { "numericality": { "less_than": 10 } }
            }],
            "arguments": { "limit": 20 }
        }]
    }"#);
    let result = execute(&plan).await;

    assert_eq!(result.data.get("count"), Some(&Value::Null));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "limit must be less than 10");
}

#[test]
fn invalid_argument_defaults_are_caught_before_execution() {
    let plan = parse_plan(r#"{
        "fields": [{
            "name": "count",
            "type": "Int",
            "args": [{ "name": "limit", "type": "Int!", "default": "ten" }]
        }]
    }"#);
    let err = plan.to_query_plan().unwrap()
        .check_default_values(&plan.type_registry().unwrap())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "`Query.count.limit` has an invalid default value: `\"ten\"` isn't \
        accepted by `Int!`; update the default value or the argument type.",
    );
}

#[tokio::test]
async fn argument_flags_are_read_from_the_plan() {
    let plan = parse_plan(r#"{
        "fields": [
            {
                "name": "page",
                "type": "Int",
                "value": 1,
                "args": [{
                    "name": "size",
                    "type": "Int",
                    "default": 20,
                    "replace_null_with_default": true
                }],
                "arguments": { "size": null }
            },
            {
                "name": "echo",
                "value": "hi",
                "args": [{ "name": "str", "type": "String", "require_presence": true }]
            }
        ]
    }"#);
    let result = execute(&plan).await;

    assert_eq!(result.data.get("page"), Some(&Value::Int(1)));
    assert_eq!(result.data.get("echo"), Some(&Value::Null));
    let messages: Vec<&str> = result.errors.iter()
        .map(|error| error.message.as_str())
        .collect();
    assert_eq!(messages, vec!["echo must include the following argument: str."]);
}
