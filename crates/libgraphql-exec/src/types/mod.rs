mod argument;
mod coercion_error;
mod enum_type;
mod input_coercer;
mod input_coercion_error;
mod input_object_type;
mod input_object_type_builder;
mod scalar_type;
mod scalar_type_builder;
mod type_build_error;
mod type_registry;
mod type_signature_error;
mod type_wrapper;

pub use argument::Argument;
pub use argument::PrepareFn;
pub use coercion_error::CoercionError;
pub use enum_type::EnumType;
pub use input_coercer::InputCoercer;
pub use input_coercion_error::InputCoercionError;
pub use input_object_type::InputObjectType;
pub use input_object_type_builder::InputObjectTypeBuilder;
pub use scalar_type::CoerceFn;
pub use scalar_type::ScalarType;
pub use scalar_type_builder::ScalarTypeBuilder;
pub use type_build_error::TypeBuildError;
pub use type_registry::RegisteredType;
pub use type_registry::TypeRegistry;
pub use type_signature_error::TypeSignatureError;
pub use type_wrapper::TypeWrapper;
