use crate::execution::QueryContext;
use crate::types::Argument;
use crate::types::CoercionError;
use crate::types::InputCoercionError;
use crate::types::InputObjectType;
use crate::types::RegisteredType;
use crate::types::TypeRegistry;
use crate::types::TypeWrapper;
use crate::validation::ValidationTarget;
use crate::validation::ValidatorChain;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, Vec<InputCoercionError>>;

/// Where a value being coerced came from. Used to phrase error messages.
struct Site<'a> {
    argument_name: &'a str,
    argument_path: String,
    declared_type: &'a TypeWrapper,
    owner: String,
}

/// Coerces the raw argument values of a single field invocation against the
/// field's argument definitions, running every validator attached along the
/// way.
///
/// All problems found are reported together; a failure in one argument does
/// not stop the remaining arguments from being checked.
pub struct InputCoercer<'a> {
    context: &'a QueryContext,
    field_name: &'a str,
    object: Option<&'a Value>,
    registry: &'a TypeRegistry,
}
impl<'a> InputCoercer<'a> {
    pub fn new(
        registry: &'a TypeRegistry,
        context: &'a QueryContext,
        field_name: &'a str,
    ) -> Self {
        Self {
            context,
            field_name,
            object: None,
            registry,
        }
    }

    /// The parent object of the field being invoked, made available to
    /// validators.
    pub fn with_object(mut self, object: &'a Value) -> Self {
        self.object = Some(object);
        self
    }

    pub fn coerce_arguments(
        &self,
        definitions: &IndexMap<String, Argument>,
        raw_arguments: &IndexMap<String, Value>,
    ) -> Result<IndexMap<String, Value>> {
        let mut errors = vec![];
        for argument_name in raw_arguments.keys() {
            if !definitions.contains_key(argument_name) {
                errors.push(InputCoercionError::UnknownArgument {
                    argument_name: argument_name.to_owned(),
                    field_name: self.field_name.to_string(),
                });
            }
        }

        let mut coerced = IndexMap::new();
        let mut missing_argument_names = vec![];
        for (argument_name, definition) in definitions {
            let raw_value = match definition.effective_value(raw_arguments.get(argument_name)) {
                Some(raw_value) => raw_value,
                None => {
                    if definition.type_wrapper().is_non_null() {
                        missing_argument_names.push(argument_name.to_owned());
                    } else if definition.presence_required() {
                        errors.push(InputCoercionError::MissingPresentArgument {
                            argument_name: argument_name.to_owned(),
                            owner_name: self.field_name.to_string(),
                        });
                    }
                    continue;
                },
            };

            let site = Site {
                argument_name,
                argument_path: argument_name.to_owned(),
                declared_type: definition.type_wrapper(),
                owner: format!("Field '{}'", self.field_name),
            };
            match self.coerce_and_validate(&site, definition, raw_value) {
                Ok(value) => {
                    coerced.insert(argument_name.to_owned(), value);
                },
                Err(mut errs) => errors.append(&mut errs),
            }
        }

        if !missing_argument_names.is_empty() {
            errors.push(InputCoercionError::MissingRequiredArguments {
                argument_names: missing_argument_names,
                field_name: self.field_name.to_string(),
            });
        }

        if errors.is_empty() {
            Ok(coerced)
        } else {
            Err(errors)
        }
    }

    /// Run `validators` against `value`, attributing messages to `validated`.
    pub fn run_validators(
        &self,
        validators: &ValidatorChain,
        validated: &str,
        value: &Value,
    ) -> std::result::Result<(), InputCoercionError> {
        if validators.is_empty() {
            return Ok(());
        }

        let target = ValidationTarget {
            context: self.context,
            name: validated,
            object: self.object,
        };
        let messages = validators.run_all(&target, value)
            .map_err(InputCoercionError::Raised)?;

        match ValidatorChain::aggregate(&messages) {
            Some(message) => Err(InputCoercionError::ValidationFailed { message }),
            None => Ok(()),
        }
    }

    fn coerce_and_validate(
        &self,
        site: &Site<'_>,
        definition: &Argument,
        raw_value: &Value,
    ) -> Result<Value> {
        let mut value = self.coerce_value(site, definition.type_wrapper(), raw_value)?;
        if let Some(prepare) = definition.prepare() {
            value = prepare(value, self.context)
                .map_err(|err| vec![InputCoercionError::Raised(err)])?;
        }
        self.run_validators(definition.validators(), definition.name(), &value)
            .map_err(|err| vec![err])?;
        Ok(value)
    }

    fn coerce_value(
        &self,
        site: &Site<'_>,
        type_: &TypeWrapper,
        raw_value: &Value,
    ) -> Result<Value> {
        match type_ {
            TypeWrapper::NonNull(inner) => {
                if raw_value.is_null() {
                    let type_name = inner.innermost_name();
                    return Err(vec![self.incompatible(
                        site,
                        type_name,
                        CoercionError::invalid_value(type_name, raw_value),
                    )]);
                }
                self.coerce_value(site, inner, raw_value)
            },

            TypeWrapper::List(inner) => match raw_value {
                // `null` is a perfectly good value for a nullable list and
                // must not turn into `[]` or `[null]`.
                Value::Null => Ok(Value::Null),

                Value::List(items) => {
                    let mut errors = vec![];
                    let mut coerced_items = Vec::with_capacity(items.len());
                    for item in items {
                        match self.coerce_value(site, inner, item) {
                            Ok(value) => coerced_items.push(value),
                            Err(mut errs) => errors.append(&mut errs),
                        }
                    }
                    if errors.is_empty() {
                        Ok(Value::List(coerced_items))
                    } else {
                        Err(errors)
                    }
                },

                // Input coercion lifts a lone item into a single-item list.
                single_item => Ok(Value::List(vec![
                    self.coerce_value(site, inner, single_item)?,
                ])),
            },

            TypeWrapper::Named(type_name) => self.coerce_named(site, type_name, raw_value),
        }
    }

    fn coerce_named(
        &self,
        site: &Site<'_>,
        type_name: &str,
        raw_value: &Value,
    ) -> Result<Value> {
        match self.registry.get(type_name) {
            Some(RegisteredType::Scalar(scalar_type)) =>
                scalar_type.coerce_input(raw_value, self.context)
                    .map_err(|err| vec![self.incompatible(site, type_name, err)]),

            Some(RegisteredType::Enum(enum_type)) =>
                enum_type.coerce_input(raw_value)
                    .map_err(|err| vec![self.incompatible(site, type_name, err)]),

            Some(RegisteredType::InputObject(input_object_type)) =>
                self.coerce_input_object(site, input_object_type, raw_value),

            None => Err(vec![InputCoercionError::UndefinedType {
                type_name: type_name.to_string(),
            }]),
        }
    }

    fn coerce_input_object(
        &self,
        site: &Site<'_>,
        input_object_type: &InputObjectType,
        raw_value: &Value,
    ) -> Result<Value> {
        let type_name = input_object_type.name();
        let entries = match raw_value {
            Value::Null => return Ok(Value::Null),
            Value::Object(entries) => entries,
            other => return Err(vec![self.incompatible(
                site,
                type_name,
                CoercionError::invalid_value(type_name, other),
            )]),
        };

        if input_object_type.one_of() {
            match entries.iter().next() {
                Some((field_name, value)) if entries.len() == 1 => {
                    if value.is_null() {
                        return Err(vec![InputCoercionError::NullForNonNull {
                            argument_path: format!("{type_name}.{field_name}"),
                        }]);
                    }
                },
                _ => return Err(vec![InputCoercionError::OneOfViolation {
                    type_name: type_name.to_string(),
                }]),
            }
        }

        let mut errors = vec![];
        for field_name in entries.keys() {
            if input_object_type.field(field_name).is_none() {
                errors.push(InputCoercionError::UnknownInputField {
                    field_name: field_name.to_owned(),
                    type_name: type_name.to_string(),
                });
            }
        }

        let mut coerced = IndexMap::new();
        for (field_name, field) in input_object_type.fields() {
            let raw_field_value = match field.effective_value(entries.get(field_name)) {
                Some(raw_field_value) => raw_field_value,
                None => {
                    if field.type_wrapper().is_non_null() {
                        errors.push(InputCoercionError::MissingRequiredInputField {
                            expected_type: field.type_wrapper().to_owned(),
                            field_name: field_name.to_owned(),
                            type_name: type_name.to_string(),
                        });
                    } else if field.presence_required() {
                        errors.push(InputCoercionError::MissingPresentArgument {
                            argument_name: field_name.to_owned(),
                            owner_name: type_name.to_string(),
                        });
                    }
                    continue;
                },
            };

            let field_site = Site {
                argument_name: field_name,
                argument_path: format!("{type_name}.{field_name}"),
                declared_type: field.type_wrapper(),
                owner: format!("InputObject '{type_name}'"),
            };
            match self.coerce_and_validate(&field_site, field, raw_field_value) {
                Ok(value) => {
                    coerced.insert(field_name.to_owned(), value);
                },
                Err(mut errs) => errors.append(&mut errs),
            }
        }

        if !errors.is_empty() {
            log::trace!(
                "Rejected `{}` value for `{}`: {} problems.",
                type_name,
                site.argument_path,
                errors.len(),
            );
            return Err(errors);
        }

        let coerced = Value::Object(coerced);
        self.run_validators(input_object_type.validators(), type_name, &coerced)
            .map_err(|err| vec![err])?;
        Ok(coerced)
    }

    fn incompatible(
        &self,
        site: &Site<'_>,
        type_name: &str,
        err: CoercionError,
    ) -> InputCoercionError {
        let message = match err {
            CoercionError::Custom { message } => message,
            CoercionError::InvalidValue { value, .. } => format!(
                "Argument '{}' on {} has an invalid value ({}). Expected type \
                '{}'.",
                site.argument_name,
                site.owner,
                value.to_graphql_literal(),
                site.declared_type,
            ),
        };
        InputCoercionError::IncompatibleValue {
            message,
            type_name: type_name.to_string(),
        }
    }
}
