//! Compound-update rules.
//!
//! Some edits on one step imply edits elsewhere in the draft. Rather than
//! letting a step reach into fields it does not own, the controller expands
//! the step's patch with these rules before merging it, so the draft never
//! holds a half-applied change.

use crate::models::{ProgramDraft, ProgramPatch};

/// Expands `patch` with every rule that applies to it.
pub fn expand(draft: &ProgramDraft, mut patch: ProgramPatch) -> ProgramPatch {
    sync_first_phase_end(draft, &mut patch);
    patch
}

/// On a weeks change, the first phase ends on the new last week.
fn sync_first_phase_end(draft: &ProgramDraft, patch: &mut ProgramPatch) {
    let Some(weeks) = patch.weeks else {
        return;
    };

    let mut phases = patch.phases.take().unwrap_or_else(|| draft.phases.clone());
    if let Some(first) = phases.first_mut() {
        first.end_week = weeks;
        patch.phases = Some(phases);
    }
}
