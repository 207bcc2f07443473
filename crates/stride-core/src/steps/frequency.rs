//! Program length in weeks.
//!
//! The step only patches `weeks`. Keeping the first phase in sync with the
//! new length is a compound-update rule applied by the controller, see
//! [`crate::wizard::rules`].

use super::{parse_week, Field, StepInput};
use crate::models::{ProgramDraft, ProgramPatch};

pub const MIN_WEEKS: u32 = 1;
pub const MAX_WEEKS: u32 = 52;

pub(super) fn render(draft: &ProgramDraft) -> Vec<Field> {
    vec![Field::Number {
        label: "Number of weeks".to_string(),
        value: draft.weeks,
        min: MIN_WEEKS,
        max: MAX_WEEKS,
    }]
}

pub(super) fn apply(input: StepInput) -> Option<ProgramPatch> {
    match input {
        StepInput::SetWeeks(raw) => Some(ProgramPatch::weeks(parse_week(&raw))),
        _ => None,
    }
}
