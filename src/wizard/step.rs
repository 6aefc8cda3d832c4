//! Step registry: the fixed, ordered set of panels a wizard walks through.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while building a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("A wizard needs at least one step")]
    Empty,

    #[error("Duplicate step id '{id}'")]
    DuplicateStepId { id: StepId },
}

/// Stable identifier of a step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier assigned to a step registered without one.
    pub fn fallback(index: usize) -> Self {
        Self(format!("step-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StepId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// An input on a step, inspected by the validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputField {
    pub name: String,
    /// Label shown next to the input; the name is used when empty.
    pub label: String,
    pub value: String,
    pub required: bool,
}

impl InputField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

/// A step as supplied by the embedding application.
///
/// `title` wins over `legend`; with neither, the step id doubles as title.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StepDefinition {
    pub id: Option<String>,
    pub title: Option<String>,
    pub legend: Option<String>,
    pub body: String,
    pub fields: Vec<InputField>,
}

impl StepDefinition {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_field(mut self, field: InputField) -> Self {
        self.fields.push(field);
        self
    }
}

/// A registered step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    id: StepId,
    title: String,
    body: String,
    fields: Vec<InputField>,
}

impl Step {
    pub fn id(&self) -> &StepId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }
}

/// Ordered, immutable-after-build step collection.
#[derive(Debug, Clone)]
pub struct StepRegistry {
    steps: Vec<Step>,
}

impl StepRegistry {
    /// Register steps in order, assigning fallback ids and titles.
    pub fn build(definitions: Vec<StepDefinition>) -> Result<Self, RegistryError> {
        if definitions.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut steps: Vec<Step> = Vec::with_capacity(definitions.len());
        for (index, definition) in definitions.into_iter().enumerate() {
            let id = match definition.id {
                Some(id) if !id.is_empty() => StepId::new(id),
                _ => StepId::fallback(index),
            };
            if steps.iter().any(|s| s.id == id) {
                return Err(RegistryError::DuplicateStepId { id });
            }
            let title = definition
                .title
                .or(definition.legend)
                .unwrap_or_else(|| id.to_string());
            steps.push(Step {
                id,
                title,
                body: definition.body,
                fields: definition.fields,
            });
        }

        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a built registry; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Position of the step with the given id.
    pub fn index_of(&self, id: &StepId) -> Option<usize> {
        self.steps.iter().position(|s| &s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Mutable access to one input of a step. Ordering and identity stay fixed.
    pub fn field_mut(&mut self, id: &StepId, name: &str) -> Option<&mut InputField> {
        self.steps
            .iter_mut()
            .find(|s| &s.id == id)?
            .fields
            .iter_mut()
            .find(|f| f.name == name)
    }
}
