//! Program name and category tags.

use super::{Field, OptionView, StepInput};
use crate::models::{ProgramDraft, ProgramPatch};

/// Tags offered on the name/type step.
pub const SUGGESTED_TYPES: [&str; 6] = [
    "Strength",
    "Cardio",
    "Hypertrophy",
    "Endurance",
    "Flexibility",
    "Weight Loss",
];

pub(super) fn render(draft: &ProgramDraft) -> Vec<Field> {
    let mut options: Vec<OptionView> = SUGGESTED_TYPES
        .iter()
        .map(|tag| OptionView::new(*tag, draft.types.iter().any(|t| t.as_str() == *tag)))
        .collect();

    // Custom tags stay visible so they can be toggled off again.
    options.extend(
        draft
            .types
            .iter()
            .filter(|t| !SUGGESTED_TYPES.contains(&t.as_str()))
            .map(|t| OptionView::new(t.clone(), true)),
    );

    vec![
        Field::Text {
            label: "Program name".to_string(),
            value: draft.name.clone(),
            required: true,
        },
        Field::Tags {
            label: "Program type".to_string(),
            options,
        },
    ]
}

pub(super) fn apply(draft: &ProgramDraft, input: StepInput) -> Option<ProgramPatch> {
    match input {
        StepInput::SetName(name) => Some(ProgramPatch::name(name)),
        StepInput::ToggleType(tag) => Some(ProgramPatch::types(toggle_type(&draft.types, &tag))),
        _ => None,
    }
}

/// Remove `tag` if present, append it otherwise. Order of the other tags is
/// preserved.
pub fn toggle_type(types: &[String], tag: &str) -> Vec<String> {
    if types.iter().any(|t| t == tag) {
        types.iter().filter(|t| *t != tag).cloned().collect()
    } else {
        let mut next = types.to_vec();
        next.push(tag.to_string());
        next
    }
}
