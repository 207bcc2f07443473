//! Outbound request and created-resource shapes for the program API.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{AccessType, Phase, ProgramDraft};

/// A phase as the program API expects it (no client-side id).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PhaseRequest {
    pub name: String,
    pub start_week: u32,
    pub end_week: u32,
}

impl From<&Phase> for PhaseRequest {
    fn from(phase: &Phase) -> Self {
        PhaseRequest {
            name: phase.name.clone(),
            start_week: phase.start_week,
            end_week: phase.end_week,
        }
    }
}

/// Body of a "create program" call.
///
/// Always derived from a [`ProgramDraft`] at submission time via
/// [`CreateProgramRequest::from_draft`]; it is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramRequest {
    pub name: String,
    /// Category tags, lower-cased
    pub types: Vec<String>,
    pub num_weeks: u32,
    pub has_nutrition_program: bool,
    pub phases: Vec<PhaseRequest>,
    pub access_type: AccessType,
    /// Users allowed to manage the program; always contains the creator
    pub admins: Vec<String>,
    pub created_by: String,
}

impl CreateProgramRequest {
    /// Map a draft into the request shape, attributing it to `caller_id`.
    pub fn from_draft(draft: &ProgramDraft, caller_id: &str) -> Self {
        CreateProgramRequest {
            name: draft.name.clone(),
            types: draft.types.iter().map(|t| t.to_lowercase()).collect(),
            num_weeks: draft.weeks,
            has_nutrition_program: draft.includes_nutrition,
            phases: draft.phases.iter().map(PhaseRequest::from).collect(),
            access_type: AccessType::from(draft.is_public),
            admins: vec![caller_id.to_string()],
            created_by: caller_id.to_string(),
        }
    }
}

/// A program as returned by the program API after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Server-assigned identifier
    pub id: String,

    #[serde(flatten)]
    pub details: CreateProgramRequest,

    /// Creation time, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}
