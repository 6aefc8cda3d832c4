//! Validation gate consulted before leaving a step.

use super::step::{InputField, Step};

/// Field-validation capability: verdict over the inputs of one step.
pub trait FieldValidator {
    fn validate(&self, fields: &[InputField]) -> bool;
}

impl<F> FieldValidator for F
where
    F: Fn(&[InputField]) -> bool,
{
    fn validate(&self, fields: &[InputField]) -> bool {
        self(fields)
    }
}

/// Passes when every `required` field has a non-blank value.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFields;

impl FieldValidator for RequiredFields {
    fn validate(&self, fields: &[InputField]) -> bool {
        fields
            .iter()
            .filter(|f| f.required)
            .all(|f| !f.value.trim().is_empty())
    }
}

pub struct ValidationGate {
    validator: Box<dyn FieldValidator>,
}

impl ValidationGate {
    pub fn new(validator: impl FieldValidator + 'static) -> Self {
        Self {
            validator: Box::new(validator),
        }
    }

    pub(crate) fn from_boxed(validator: Box<dyn FieldValidator>) -> Self {
        Self { validator }
    }

    /// Steps without inputs always pass.
    pub fn allows(&self, step: &Step) -> bool {
        if step.fields().is_empty() {
            return true;
        }
        let verdict = self.validator.validate(step.fields());
        tracing::trace!(step = %step.id(), verdict, "Validated step");
        verdict
    }
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self::new(RequiredFields)
    }
}
