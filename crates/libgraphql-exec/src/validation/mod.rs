mod allow_blank_validator;
mod allow_null_validator;
mod builtin_validator;
mod exclusion_validator;
mod format_validator;
mod inclusion_validator;
mod length_validator;
mod numericality_validator;
mod required_validator;
mod validator;
mod validator_chain;
pub(crate) mod validator_config;
pub(crate) mod validator_options;
mod validator_registry;

pub use allow_blank_validator::AllowBlankValidator;
pub use allow_null_validator::AllowNullValidator;
pub use builtin_validator::BuiltinValidator;
pub use exclusion_validator::ExclusionValidator;
pub use format_validator::FormatValidator;
pub use inclusion_validator::InclusionValidator;
pub use length_validator::LengthValidator;
pub use numericality_validator::NumericalityValidator;
pub use required_validator::RequiredValidator;
pub use validator::ValidationTarget;
pub use validator::Validator;
pub use validator_chain::ValidatorChain;
pub use validator_config::ValidatorConfig;
pub use validator_config::ValidatorConfigError;
pub use validator_options::ValidatorOptions;
pub use validator_registry::ValidatorFactory;
pub use validator_registry::ValidatorRegistry;

#[cfg(test)]
mod tests;
