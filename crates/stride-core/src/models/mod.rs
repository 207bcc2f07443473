//! Data models for the program builder.
//!
//! This module contains the domain models the wizard works with:
//!
//! - [`ProgramDraft`] and [`Phase`]: the accumulated wizard state, owned by
//!   the controller and changed only through [`ProgramPatch`] merges
//! - [`CreateProgramRequest`]: the outbound shape sent to the program API,
//!   derived from a draft at submission time
//! - [`Program`]: the created resource handed back by the API
//! - [`AccessType`]: the public/private access level of a program
//!
//! # Examples
//!
//! ```rust
//! use stride_core::models::{AccessType, CreateProgramRequest, ProgramDraft, ProgramPatch};
//!
//! let mut draft = ProgramDraft::default();
//! draft.merge(ProgramPatch::types(vec!["Strength".to_string()]));
//! draft.merge(ProgramPatch::is_public(true));
//!
//! let request = CreateProgramRequest::from_draft(&draft, "coach-7");
//! assert_eq!(request.types, vec!["strength"]);
//! assert_eq!(request.access_type, AccessType::Public);
//! assert_eq!(request.created_by, "coach-7");
//! ```

pub mod access;
pub mod draft;
pub mod request;


pub use access::AccessType;
pub use draft::{Phase, ProgramDraft, ProgramPatch, DEFAULT_WEEKS};
pub use request::{CreateProgramRequest, PhaseRequest, Program};
