use crate::execution::QueryContext;
use crate::validation::AllowBlankValidator;
use crate::validation::AllowNullValidator;
use crate::validation::BuiltinValidator;
use crate::validation::FormatValidator;
use crate::validation::InclusionValidator;
use crate::validation::LengthValidator;
use crate::validation::NumericalityValidator;
use crate::validation::RequiredValidator;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::validation::ValidatorOptions;
use crate::Value;
use regex::Regex;

fn check(validator: &dyn Validator, name: &str, value: impl Into<Value>) -> Option<String> {
    let context = QueryContext::new();
    let target = ValidationTarget {
        context: &context,
        name,
        object: None,
    };
    validator.validate(&target, &value.into()).unwrap()
}

fn config(entries: &[(&str, Value)]) -> ValidatorConfig {
    entries.iter()
        .map(|(key, value)| (key.to_string(), value.to_owned()))
        .collect()
}

#[test]
fn numericality_reports_the_first_violated_bound() {
    let validator = NumericalityValidator::new()
        .greater_than(0.0)
        .less_than_or_equal_to(100.0);

    assert_eq!(check(&validator, "age", 50), None);
    assert_eq!(check(&validator, "age", 0), Some("age must be greater than 0".to_string()));
    assert_eq!(
        check(&validator, "age", 100.5),
        Some("age must be less than or equal to 100".to_string()),
    );
    assert_eq!(check(&validator, "age", Value::Null), Some("age can't be null".to_string()));
    // Non-numbers are some other validator's problem.
    assert_eq!(check(&validator, "age", "old"), None);
}

#[test]
fn numericality_parity_and_ranges() {
    let odd = NumericalityValidator { odd: true, ..NumericalityValidator::new() };
    assert_eq!(check(&odd, "n", 3), None);
    assert_eq!(check(&odd, "n", -3), None);
    assert_eq!(check(&odd, "n", 4), Some("n must be odd".to_string()));

    let within = NumericalityValidator::new().within(1.0, 5.0);
    assert_eq!(check(&within, "n", 5), None);
    assert_eq!(check(&within, "n", 6), Some("n must be within 1..5".to_string()));
}

#[test]
fn allow_null_lets_null_through() {
    let validator = NumericalityValidator::new()
        .greater_than(0.0)
        .with_options(ValidatorOptions {
            allow_null: Some(true),
            ..ValidatorOptions::default()
        });
    assert_eq!(check(&validator, "n", Value::Null), None);
}

#[test]
fn custom_messages_support_placeholders() {
    let validator = LengthValidator::new()
        .maximum(3)
        .with_options(ValidatorOptions::default().with_message("%{validated} of %{value} exceeds %{count}"));
    assert_eq!(
        check(&validator, "tags", vec!["a", "b", "c", "d"]),
        Some("tags of [\"a\", \"b\", \"c\", \"d\"] exceeds 3".to_string()),
    );
}

#[test]
fn length_counts_characters_and_items() {
    let validator = LengthValidator::new().is(2);
    assert_eq!(check(&validator, "code", "é!"), None);
    assert_eq!(check(&validator, "codes", vec![1, 2]), None);
    assert_eq!(
        check(&validator, "code", "abc"),
        Some("code is the wrong length (should be 2)".to_string()),
    );
}

#[test]
fn format_checks_with_and_without() {
    let validator = FormatValidator {
        without: Some(Regex::new("admin").unwrap()),
        ..FormatValidator::with(Regex::new("^[a-z]+$").unwrap())
    };
    assert_eq!(check(&validator, "login", "ada"), None);
    assert_eq!(check(&validator, "login", "Ada"), Some("login is invalid".to_string()));
    assert_eq!(check(&validator, "login", "admin"), Some("login is invalid".to_string()));
}

#[test]
fn inclusion_requires_membership() {
    let validator = InclusionValidator::new(["draft", "published"]);
    assert_eq!(check(&validator, "status", "draft"), None);
    assert_eq!(
        check(&validator, "status", "deleted"),
        Some("status is not included in the list".to_string()),
    );
}

#[test]
fn allow_null_and_allow_blank_kinds() {
    assert_eq!(
        check(&AllowNullValidator::new(false), "bio", Value::Null),
        Some("bio can't be null".to_string()),
    );
    assert_eq!(check(&AllowNullValidator::new(false), "bio", ""), None);
    assert_eq!(check(&AllowNullValidator::new(true), "bio", Value::Null), None);

    assert_eq!(
        check(&AllowBlankValidator::new(false), "bio", "   "),
        Some("bio can't be blank".to_string()),
    );
    assert_eq!(check(&AllowBlankValidator::new(true), "bio", "   "), None);
}

#[test]
fn required_counts_present_arguments() {
    let validator = RequiredValidator::one_of(["id", "slug"]);
    let bundle = |entries: &[(&str, Value)]| Value::Object(config(entries));

    assert_eq!(check(&validator, "post", bundle(&[("id", Value::from("1"))])), None);
    // Present as an explicit null still counts.
    assert_eq!(check(&validator, "post", bundle(&[("slug", Value::Null)])), None);

    let expected = Some(
        "post must include exactly one of the following arguments: id, slug.".to_string(),
    );
    assert_eq!(check(&validator, "post", bundle(&[])), expected);
    assert_eq!(
        check(&validator, "post", bundle(&[
            ("id", Value::from("1")),
            ("slug", Value::from("hello")),
        ])),
        expected,
    );
}

#[test]
fn builtin_kinds_build_from_config() {
    let validator = BuiltinValidator::from_config(
        "numericality",
        &config(&[("greater_than_or_equal_to", Value::Int(1))]),
    ).unwrap();
    assert_eq!(validator.kind(), "numericality");
    assert_eq!(check(&validator, "a", 0), Some("a must be greater than or equal to 1".to_string()));

    let validator = BuiltinValidator::from_config(
        "format",
        &config(&[("with", Value::from("^\\d+$")), ("message", Value::from("digits only"))]),
    ).unwrap();
    assert_eq!(check(&validator, "zip", "9o210"), Some("digits only".to_string()));
}

#[test]
fn bad_configs_are_rejected() {
    assert_eq!(
        BuiltinValidator::from_config("length", &config(&[("maximum", Value::from("ten"))]))
            .unwrap_err(),
        ValidatorConfigError::InvalidOption {
            actual: Value::from("ten"),
            expected: "a non-negative integer".to_string(),
            kind: "length".to_string(),
            option: "maximum".to_string(),
        },
    );
    assert_eq!(
        BuiltinValidator::from_config("inclusion", &config(&[("in", Value::from(vec![1])), ("among", Value::Null)]))
            .unwrap_err(),
        ValidatorConfigError::UnknownOption {
            kind: "inclusion".to_string(),
            option: "among".to_string(),
        },
    );
    assert!(matches!(
        BuiltinValidator::from_config("format", &config(&[("with", Value::from("("))])),
        Err(ValidatorConfigError::InvalidPattern { .. }),
    ));
    assert!(matches!(
        BuiltinValidator::from_config("length", &config(&[])),
        Err(ValidatorConfigError::MissingOption { .. }),
    ));
    assert!(matches!(
        BuiltinValidator::from_config("custom", &config(&[])),
        Err(ValidatorConfigError::UnknownKind { .. }),
    ));
}
