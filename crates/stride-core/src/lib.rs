//! Core library for the Stride program builder.
//!
//! This crate provides the multi-step wizard that coaches use to build a
//! training program: the step components, the ordered step registry, the
//! controller that owns the draft and drives submission, and the derived
//! progress indicator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │      Steps      │    │    Controller   │    │  Collaborators  │
//! │ (render, apply) │───▶│ (draft, index,  │───▶│ (ProgramService,│
//! │                 │    │  submission)    │    │  Identity, Nav) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`steps`]: stateless step components and the [`StepRegistry`]
//! - [`wizard`]: the [`WizardController`] and its [`WizardBuilder`]
//! - [`progress`]: completion percentage and step markers
//! - [`models`]: the draft, the outbound request and the created program
//! - [`services`]: collaborator traits injected into the controller
//! - [`display`]: markdown rendering of all of the above
//!
//! # Quick Start
//!
//! ```rust
//! use stride_core::{models::ProgramDraft, steps::{Step, StepInput}, wizard::rules};
//!
//! let draft = ProgramDraft::default();
//!
//! // The frequency step only knows about weeks...
//! let patch = Step::Frequency
//!     .apply(&draft, StepInput::SetWeeks("12".to_string()))
//!     .unwrap();
//!
//! // ...the controller's rules keep the first phase in step with it.
//! let next = draft.merged(rules::expand(&draft, patch));
//! assert_eq!(next.weeks, 12);
//! assert_eq!(next.phases[0].end_week, 12);
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod progress;
pub mod services;
pub mod steps;
pub mod wizard;

// Re-export commonly used types
pub use error::{Result, WizardError};
pub use models::{
    AccessType, CreateProgramRequest, Phase, PhaseRequest, Program, ProgramDraft, ProgramPatch,
};
pub use progress::{Progress, StepMarker};
pub use services::{IdentityProvider, Navigator, ProgramService, StaticIdentity};
pub use steps::{Field, Step, StepDefinition, StepInput, StepRegistry, StepView};
pub use wizard::{Advance, WizardBuilder, WizardController};
