//! The accumulated wizard state for a program under construction.

use serde::{Deserialize, Serialize};

/// Number of weeks a fresh draft starts with.
pub const DEFAULT_WEEKS: u32 = 4;

/// A training phase within a program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    /// Opaque identifier, stable for the lifetime of the draft
    pub id: String,

    /// Display name of the phase
    pub name: String,

    /// First week covered by the phase (1-based)
    pub start_week: u32,

    /// Last week covered by the phase (inclusive)
    pub end_week: u32,
}

impl Phase {
    /// Create a phase covering `start_week..=end_week`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, start_week: u32, end_week: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_week,
            end_week,
        }
    }
}

/// Everything the program builder has collected so far.
///
/// The draft is owned by the wizard controller and only ever changes through
/// [`ProgramDraft::merge`], which applies a [`ProgramPatch`] as a shallow
/// merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramDraft {
    /// Program name
    pub name: String,

    /// Selected category tags, in selection order
    pub types: Vec<String>,

    /// Program length in weeks
    pub weeks: u32,

    /// Whether a nutrition program is bundled
    pub includes_nutrition: bool,

    /// Ordered training phases; the first phase is phase 1
    pub phases: Vec<Phase>,

    /// Whether the program is visible to everyone
    pub is_public: bool,
}

impl Default for ProgramDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            types: Vec::new(),
            weeks: DEFAULT_WEEKS,
            includes_nutrition: false,
            phases: vec![Phase::new("1", "Phase 1", 1, DEFAULT_WEEKS)],
            is_public: false,
        }
    }
}

impl ProgramDraft {
    /// Shallow-merge `patch` into the draft.
    ///
    /// Fields left as `None` in the patch are untouched; fields present in the
    /// patch replace the draft's value wholesale (no deep merge of lists).
    pub fn merge(&mut self, patch: ProgramPatch) {
        let ProgramPatch {
            name,
            types,
            weeks,
            includes_nutrition,
            phases,
            is_public,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(types) = types {
            self.types = types;
        }
        if let Some(weeks) = weeks {
            self.weeks = weeks;
        }
        if let Some(includes_nutrition) = includes_nutrition {
            self.includes_nutrition = includes_nutrition;
        }
        if let Some(phases) = phases {
            self.phases = phases;
        }
        if let Some(is_public) = is_public {
            self.is_public = is_public;
        }
    }

    /// Returns a copy of the draft with `patch` merged in.
    pub fn merged(&self, patch: ProgramPatch) -> Self {
        let mut next = self.clone();
        next.merge(patch);
        next
    }

    /// Finds a phase by its identifier.
    pub fn phase(&self, id: &str) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id == id)
    }
}

/// A partial update to a [`ProgramDraft`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramPatch {
    pub name: Option<String>,
    pub types: Option<Vec<String>>,
    pub weeks: Option<u32>,
    pub includes_nutrition: Option<bool>,
    pub phases: Option<Vec<Phase>>,
    pub is_public: Option<bool>,
}

impl ProgramPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn types(types: Vec<String>) -> Self {
        Self {
            types: Some(types),
            ..Self::default()
        }
    }

    pub fn weeks(weeks: u32) -> Self {
        Self {
            weeks: Some(weeks),
            ..Self::default()
        }
    }

    pub fn includes_nutrition(includes_nutrition: bool) -> Self {
        Self {
            includes_nutrition: Some(includes_nutrition),
            ..Self::default()
        }
    }

    pub fn phases(phases: Vec<Phase>) -> Self {
        Self {
            phases: Some(phases),
            ..Self::default()
        }
    }

    pub fn is_public(is_public: bool) -> Self {
        Self {
            is_public: Some(is_public),
            ..Self::default()
        }
    }
}
