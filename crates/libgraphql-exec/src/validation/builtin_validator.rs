use crate::execution::FieldError;
use crate::validation::AllowBlankValidator;
use crate::validation::AllowNullValidator;
use crate::validation::ExclusionValidator;
use crate::validation::FormatValidator;
use crate::validation::InclusionValidator;
use crate::validation::LengthValidator;
use crate::validation::NumericalityValidator;
use crate::validation::RequiredValidator;
use crate::validation::ValidationTarget;
use crate::validation::Validator;
use crate::validation::ValidatorConfig;
use crate::validation::ValidatorConfigError;
use crate::Value;
use inherent::inherent;

/// The validator kinds that ship with this crate.
#[derive(Clone, Debug)]
pub enum BuiltinValidator {
    AllowBlank(AllowBlankValidator),
    AllowNull(AllowNullValidator),
    Exclusion(ExclusionValidator),
    Format(FormatValidator),
    Inclusion(InclusionValidator),
    Length(LengthValidator),
    Numericality(NumericalityValidator),
    Required(RequiredValidator),
}
impl BuiltinValidator {
    pub const KINDS: [&'static str; 8] = [
        AllowBlankValidator::KIND,
        AllowNullValidator::KIND,
        ExclusionValidator::KIND,
        FormatValidator::KIND,
        InclusionValidator::KIND,
        LengthValidator::KIND,
        NumericalityValidator::KIND,
        RequiredValidator::KIND,
    ];

    pub fn from_config(
        kind: &str,
        config: &ValidatorConfig,
    ) -> Result<Self, ValidatorConfigError> {
        Ok(match kind {
            AllowBlankValidator::KIND =>
                Self::AllowBlank(AllowBlankValidator::from_config(config)?),
            AllowNullValidator::KIND =>
                Self::AllowNull(AllowNullValidator::from_config(config)?),
            ExclusionValidator::KIND =>
                Self::Exclusion(ExclusionValidator::from_config(config)?),
            FormatValidator::KIND =>
                Self::Format(FormatValidator::from_config(config)?),
            InclusionValidator::KIND =>
                Self::Inclusion(InclusionValidator::from_config(config)?),
            LengthValidator::KIND =>
                Self::Length(LengthValidator::from_config(config)?),
            NumericalityValidator::KIND =>
                Self::Numericality(NumericalityValidator::from_config(config)?),
            RequiredValidator::KIND =>
                Self::Required(RequiredValidator::from_config(config)?),
            _ => return Err(ValidatorConfigError::UnknownKind {
                kind: kind.to_string(),
            }),
        })
    }

    fn as_validator(&self) -> &dyn Validator {
        match self {
            Self::AllowBlank(validator) => validator,
            Self::AllowNull(validator) => validator,
            Self::Exclusion(validator) => validator,
            Self::Format(validator) => validator,
            Self::Inclusion(validator) => validator,
            Self::Length(validator) => validator,
            Self::Numericality(validator) => validator,
            Self::Required(validator) => validator,
        }
    }
}

#[inherent]
impl Validator for BuiltinValidator {
    pub fn kind(&self) -> &str {
        Validator::kind(self.as_validator())
    }

    pub fn validate(
        &self,
        target: &ValidationTarget<'_>,
        value: &Value,
    ) -> Result<Option<String>, FieldError> {
        Validator::validate(self.as_validator(), target, value)
    }
}
