//! Binary yes/no steps: nutrition and visibility.

use super::{Field, OptionView, StepInput};
use crate::models::{AccessType, ProgramDraft, ProgramPatch};

pub(super) fn render_nutrition(draft: &ProgramDraft) -> Vec<Field> {
    vec![Field::Choice {
        label: "Include a nutrition program?".to_string(),
        options: [
            OptionView::new("Yes", draft.includes_nutrition),
            OptionView::new("No", !draft.includes_nutrition),
        ],
    }]
}

pub(super) fn apply_nutrition(input: StepInput) -> Option<ProgramPatch> {
    match input {
        StepInput::SetNutrition(value) => Some(ProgramPatch::includes_nutrition(value)),
        _ => None,
    }
}

pub(super) fn render_visibility(draft: &ProgramDraft) -> Vec<Field> {
    vec![Field::Choice {
        label: "Who can see this program?".to_string(),
        options: [
            OptionView::new(AccessType::Public.label(), draft.is_public),
            OptionView::new(AccessType::Private.label(), !draft.is_public),
        ],
    }]
}

pub(super) fn apply_visibility(input: StepInput) -> Option<ProgramPatch> {
    match input {
        StepInput::SetPublic(value) => Some(ProgramPatch::is_public(value)),
        _ => None,
    }
}
