//! Markdown display implementations.
//!
//! Domain types implement [`std::fmt::Display`] directly; this module keeps
//! those implementations away from the type definitions.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Views & Models  │    │  Display impls  │    │    Markdown     │
//! │ (StepView, ...) │───▶│ (this module)   │───▶│ (terminal, logs)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`views`]: step views and their fields
//! - [`progress`]: progress bar and step indicator
//! - [`models`]: drafts, programs, phases
//! - [`results`]: outcomes of advancing the wizard
//! - [`datetime`]: timestamp formatting
//!
//! ```rust
//! use stride_core::{models::ProgramDraft, progress::Progress, steps::StepRegistry};
//!
//! let registry = StepRegistry::program_builder();
//! let draft = ProgramDraft::default();
//!
//! let progress = Progress::compute(0, &registry.titles());
//! assert!(progress.to_string().starts_with("Step 1 of 5"));
//!
//! let view = registry.get(0).unwrap().view(&draft);
//! assert!(view.to_string().starts_with("## Name & Type"));
//! ```

pub mod datetime;
pub mod models;
pub mod progress;
pub mod results;
pub mod views;

pub use datetime::LocalDateTime;
