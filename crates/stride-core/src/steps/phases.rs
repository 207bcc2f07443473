//! Ordered list of training phases.

use super::{parse_week, Field, StepInput};
use crate::models::{Phase, ProgramDraft, ProgramPatch};

pub(super) fn render(draft: &ProgramDraft) -> Vec<Field> {
    vec![Field::Phases {
        phases: draft.phases.clone(),
        weeks: draft.weeks,
    }]
}

pub(super) fn apply(draft: &ProgramDraft, input: StepInput) -> Option<ProgramPatch> {
    let phases = match input {
        StepInput::AddPhase => add_phase(draft),
        StepInput::RemovePhase { id } => remove_phase(draft, &id)?,
        StepInput::RenamePhase { id, name } => {
            edit_phase(&draft.phases, &id, |phase| phase.name = name)?
        }
        StepInput::SetPhaseWeeks { id, start, end } => {
            edit_phase(&draft.phases, &id, |phase| {
                phase.start_week = parse_week(&start);
                phase.end_week = parse_week(&end);
            })?
        }
        _ => return None,
    };
    Some(ProgramPatch::phases(phases))
}

/// Appends a phase that picks up where the last one ends.
fn add_phase(draft: &ProgramDraft) -> Vec<Phase> {
    let start = draft.phases.last().map_or(1, |last| last.end_week.saturating_add(1));
    let phase = Phase::new(
        next_phase_id(&draft.phases),
        format!("Phase {}", draft.phases.len() + 1),
        start,
        draft.weeks.max(start),
    );

    let mut phases = draft.phases.clone();
    phases.push(phase);
    phases
}

// The only remaining phase cannot be removed.
fn remove_phase(draft: &ProgramDraft, id: &str) -> Option<Vec<Phase>> {
    if draft.phases.len() <= 1 {
        return None;
    }
    draft.phase(id)?;
    Some(draft.phases.iter().filter(|p| p.id != id).cloned().collect())
}

fn edit_phase<F>(phases: &[Phase], id: &str, edit: F) -> Option<Vec<Phase>>
where
    F: FnOnce(&mut Phase),
{
    let mut phases = phases.to_vec();
    let phase = phases.iter_mut().find(|p| p.id == id)?;
    edit(phase);
    Some(phases)
}

/// Smallest numeric id greater than every numeric id in use.
fn next_phase_id(phases: &[Phase]) -> String {
    let max = phases
        .iter()
        .filter_map(|p| p.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    max.saturating_add(1).to_string()
}
