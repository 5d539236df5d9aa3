use crate::execution::QueryContext;
use crate::types::Argument;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::ScalarType;
use crate::types::TypeBuildError;
use crate::types::TypeWrapper;
use crate::Value;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, TypeBuildError>;

/// A named type that participates in coercion.
#[derive(Clone, Debug)]
pub enum RegisteredType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Scalar(ScalarType),
}
impl RegisteredType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(type_) => type_.name(),
            Self::InputObject(type_) => type_.name(),
            Self::Scalar(type_) => type_.name(),
        }
    }
}

/// The set of scalar, enum and input object types available to coercion,
/// keyed by name.
///
/// A fresh registry already contains the built-in scalars.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    types: HashMap<String, RegisteredType>,
}
impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            types: ScalarType::builtins()
                .into_iter()
                .map(|scalar| {
                    (scalar.name().to_string(), RegisteredType::Scalar(scalar))
                })
                .collect(),
        }
    }

    /// Check that `argument`'s default value (if any) is accepted by its
    /// declared type. `coordinate` names the argument in the error.
    ///
    /// Named types that aren't registered yet are given the benefit of the
    /// doubt; see [`check_default_values`](Self::check_default_values).
    pub fn check_default_value(
        &self,
        coordinate: &str,
        argument: &Argument,
    ) -> Result<()> {
        match argument.default_value() {
            Some(default_value) if !self.accepts(argument.type_wrapper(), default_value) =>
                Err(TypeBuildError::InvalidDefaultValue {
                    coordinate: coordinate.to_string(),
                    default_value: default_value.to_owned(),
                    type_wrapper: argument.type_wrapper().to_owned(),
                }),
            _ => Ok(()),
        }
    }

    /// Re-check the field defaults of every registered input object, now
    /// that the types they refer to may have been registered.
    pub fn check_default_values(&self) -> Result<()> {
        let mut input_objects: Vec<_> = self.types.values()
            .filter_map(RegisteredType::as_input_object)
            .collect();
        input_objects.sort_by(|a, b| a.name().cmp(b.name()));
        for input_object in input_objects {
            for field in input_object.fields().values() {
                self.check_default_value(
                    format!("{}.{}", input_object.name(), field.name()).as_str(),
                    field,
                )?;
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredType> {
        self.types.get(name)
    }

    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.get(name).and_then(RegisteredType::as_enum)
    }

    pub fn input_object(&self, name: &str) -> Option<&InputObjectType> {
        self.get(name).and_then(RegisteredType::as_input_object)
    }

    pub fn scalar(&self, name: &str) -> Option<&ScalarType> {
        self.get(name).and_then(RegisteredType::as_scalar)
    }

    pub fn register_enum(&mut self, type_: EnumType) -> Result<()> {
        self.register(RegisteredType::Enum(type_))
    }

    /// Fails if any field's default value isn't accepted by the field's
    /// type.
    pub fn register_input_object(&mut self, type_: InputObjectType) -> Result<()> {
        for field in type_.fields().values() {
            self.check_default_value(
                format!("{}.{}", type_.name(), field.name()).as_str(),
                field,
            )?;
        }
        self.register(RegisteredType::InputObject(type_))
    }

    pub fn register_scalar(&mut self, type_: ScalarType) -> Result<()> {
        self.register(RegisteredType::Scalar(type_))
    }

    fn accepts(&self, type_: &TypeWrapper, value: &Value) -> bool {
        match type_ {
            TypeWrapper::NonNull(inner) =>
                !value.is_null() && self.accepts(inner, value),

            TypeWrapper::List(inner) => match value {
                Value::Null => true,
                Value::List(items) => items.iter().all(|item| self.accepts(inner, item)),
                single_item => self.accepts(inner, single_item),
            },

            TypeWrapper::Named(_) if value.is_null() => true,

            TypeWrapper::Named(type_name) => match self.get(type_name) {
                Some(RegisteredType::Scalar(scalar_type)) =>
                    scalar_type.coerce_input(value, &QueryContext::new()).is_ok(),

                Some(RegisteredType::Enum(enum_type)) =>
                    enum_type.coerce_input(value).is_ok(),

                Some(RegisteredType::InputObject(input_object_type)) => {
                    let Some(entries) = value.as_object() else {
                        return false;
                    };
                    entries.keys().all(|key| input_object_type.field(key).is_some())
                        && input_object_type.fields().iter().all(|(name, field)| {
                            match entries.get(name) {
                                Some(entry) => self.accepts(field.type_wrapper(), entry),
                                None => !field.is_required(),
                            }
                        })
                },

                None => true,
            },
        }
    }

    fn register(&mut self, type_: RegisteredType) -> Result<()> {
        let type_name = type_.name().to_string();
        if self.types.contains_key(type_name.as_str()) {
            return Err(TypeBuildError::DuplicateTypeName { type_name });
        }
        log::trace!("Registered the `{type_name}` type.");
        self.types.insert(type_name, type_);
        Ok(())
    }
}
impl std::default::Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
