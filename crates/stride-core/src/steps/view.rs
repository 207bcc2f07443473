//! Framework-neutral description of what a step shows.
//!
//! Steps do not draw anything themselves. They describe their inputs as a
//! list of [`Field`]s which a front-end (terminal, web, tests) turns into
//! widgets. Display implementations live in [`crate::display::views`].

use crate::models::Phase;

/// A selectable option in a tag list or a binary choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub selected: bool,
}

impl OptionView {
    pub fn new(label: impl Into<String>, selected: bool) -> Self {
        Self {
            label: label.into(),
            selected,
        }
    }
}

/// One input affordance rendered by a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Free-text input
    Text {
        label: String,
        value: String,
        required: bool,
    },
    /// Integer input with an advisory range
    Number {
        label: String,
        value: u32,
        min: u32,
        max: u32,
    },
    /// Multi-select with toggle semantics
    Tags {
        label: String,
        options: Vec<OptionView>,
    },
    /// Two mutually exclusive buttons
    Choice {
        label: String,
        options: [OptionView; 2],
    },
    /// Editable ordered list of phases
    Phases { phases: Vec<Phase>, weeks: u32 },
}

/// Everything a front-end needs to draw the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub title: String,
    pub fields: Vec<Field>,
}
