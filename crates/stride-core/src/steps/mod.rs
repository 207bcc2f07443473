//! Step components of the program builder.
//!
//! A step never owns state. It is handed the whole [`ProgramDraft`] and
//! either describes what to show ([`Step::render`]) or turns a user input
//! into a [`ProgramPatch`] ([`Step::apply`]). The controller is responsible
//! for merging that patch, so every step can be tested in isolation.
//!
//! ```text
//! ┌──────────────┐  StepInput   ┌──────────────┐  ProgramPatch  ┌──────────────┐
//! │   Front-end  │─────────────▶│     Step     │───────────────▶│  Controller  │
//! │ (CLI, tests) │◀─────────────│  (stateless) │                │ (owns draft) │
//! └──────────────┘   StepView   └──────────────┘                └──────────────┘
//! ```

pub mod choice;
pub mod frequency;
pub mod name_type;
pub mod phases;
pub mod registry;
pub mod view;


pub use name_type::{toggle_type, SUGGESTED_TYPES};
pub use registry::{StepDefinition, StepRegistry};
pub use view::{Field, OptionView, StepView};

use crate::models::{ProgramDraft, ProgramPatch};

/// A user interaction with one of the steps.
///
/// Numeric inputs are carried as raw text; steps parse them and fall back to
/// 0 when the text is not a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepInput {
    SetName(String),
    ToggleType(String),
    SetWeeks(String),
    SetNutrition(bool),
    AddPhase,
    RemovePhase { id: String },
    RenamePhase { id: String, name: String },
    SetPhaseWeeks { id: String, start: String, end: String },
    SetPublic(bool),
}

/// The kinds of step the program builder is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    NameAndType,
    Frequency,
    Nutrition,
    Phases,
    Visibility,
}

impl Step {
    /// Describes the inputs this step shows for `draft`.
    pub fn render(&self, draft: &ProgramDraft) -> Vec<Field> {
        match self {
            Step::NameAndType => name_type::render(draft),
            Step::Frequency => frequency::render(draft),
            Step::Nutrition => choice::render_nutrition(draft),
            Step::Phases => phases::render(draft),
            Step::Visibility => choice::render_visibility(draft),
        }
    }

    /// Turns `input` into a patch, or `None` when the input does not belong
    /// to this step or changes nothing.
    pub fn apply(&self, draft: &ProgramDraft, input: StepInput) -> Option<ProgramPatch> {
        match self {
            Step::NameAndType => name_type::apply(draft, input),
            Step::Frequency => frequency::apply(input),
            Step::Nutrition => choice::apply_nutrition(input),
            Step::Phases => phases::apply(draft, input),
            Step::Visibility => choice::apply_visibility(input),
        }
    }
}

/// Parses a week number typed by the user, falling back to 0.
pub(crate) fn parse_week(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}
