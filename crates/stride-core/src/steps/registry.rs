//! Ordered step definitions.

use super::{Step, StepView};
use crate::models::ProgramDraft;

/// A titled step. Registry order is navigation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub title: String,
    pub step: Step,
}

impl StepDefinition {
    pub fn new(title: impl Into<String>, step: Step) -> Self {
        Self {
            title: title.into(),
            step,
        }
    }

    /// Renders the step for `draft` under this definition's title.
    pub fn view(&self, draft: &ProgramDraft) -> StepView {
        StepView {
            title: self.title.clone(),
            fields: self.step.render(draft),
        }
    }
}

/// The immutable sequence of steps a wizard walks through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRegistry {
    steps: Vec<StepDefinition>,
}

impl StepRegistry {
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        Self { steps }
    }

    /// The five steps of the program builder.
    pub fn program_builder() -> Self {
        Self::new(vec![
            StepDefinition::new("Name & Type", Step::NameAndType),
            StepDefinition::new("Frequency", Step::Frequency),
            StepDefinition::new("Nutrition", Step::Nutrition),
            StepDefinition::new("Phases", Step::Phases),
            StepDefinition::new("Visibility", Step::Visibility),
        ])
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn as_slice(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDefinition> {
        self.steps.iter()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.iter().map(|s| s.title.as_str()).collect()
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::program_builder()
    }
}
