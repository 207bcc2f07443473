//! The wizard controller.
//!
//! [`WizardController`] owns the canonical [`ProgramDraft`], the current step
//! index and the submission flag. Front-ends drive it with four operations:
//!
//! - [`WizardController::apply_input`]: route a user input to the current
//!   step and merge the resulting patch
//! - [`WizardController::advance`]: next step, or submit on the last step
//! - [`WizardController::retreat`]: previous step
//! - [`WizardController::cancel`]: leave for the program list
//!
//! # Submission
//!
//! Submitting maps the draft to a [`CreateProgramRequest`], attributes it to
//! the caller reported by the [`IdentityProvider`] and hands it to the
//! [`ProgramService`] exactly once. Only one submission may be in flight;
//! while it runs every other operation fails with
//! [`WizardError::SubmissionInFlight`]. A failed submission leaves the
//! wizard on the last step with the draft intact and the failure available
//! from [`WizardController::last_error`]. Retrying maps the draft again.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use stride_core::{Advance, StaticIdentity, StepInput, WizardBuilder};
//! # use stride_core::{CreateProgramRequest, Navigator, Program, ProgramService};
//! # struct Api;
//! # #[async_trait::async_trait]
//! # impl ProgramService for Api {
//! #     async fn create_program(&self, r: CreateProgramRequest) -> stride_core::Result<Program> {
//! #         Ok(Program { id: "1".into(), details: r, created_at: None })
//! #     }
//! # }
//! # struct Router;
//! # impl Navigator for Router { fn navigate(&self, _: &str) {} }
//!
//! # async fn example() -> stride_core::Result<()> {
//! let wizard = WizardBuilder::new()
//!     .with_service(Arc::new(Api))
//!     .with_identity(Arc::new(StaticIdentity::new("coach-1")))
//!     .with_navigator(Arc::new(Router))
//!     .build()?;
//!
//! wizard.apply_input(StepInput::SetName("Couch to 5k".to_string()))?;
//! while let Advance::Moved { .. } = wizard.advance().await? {}
//! # Ok(())
//! # }
//! ```

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use log::{debug, error, info};

pub mod builder;
pub mod rules;

#[cfg(test)]
mod tests;

pub use builder::{WizardBuilder, DEFAULT_PROGRAMS_PATH};

use crate::{
    error::{Result, WizardError},
    models::{CreateProgramRequest, Program, ProgramDraft, ProgramPatch},
    progress::Progress,
    services::{IdentityProvider, Navigator, ProgramService},
    steps::{StepDefinition, StepInput, StepRegistry, StepView},
};

/// Outcome of [`WizardController::advance`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved to the step at `index`
    Moved { index: usize },
    /// The program was created and the navigator was sent to it
    Submitted(Program),
    /// Submission did not succeed; the wizard stays where it was
    Rejected { reason: String },
}

pub(crate) struct Collaborators {
    pub(crate) service: Arc<dyn ProgramService>,
    pub(crate) identity: Arc<dyn IdentityProvider>,
    pub(crate) navigator: Arc<dyn Navigator>,
}

struct Session {
    draft: ProgramDraft,
    current_index: usize,
    last_error: Option<String>,
}

/// Multi-step program builder.
pub struct WizardController {
    registry: StepRegistry,
    session: Mutex<Session>,
    submitting: AtomicBool,
    collaborators: Collaborators,
    programs_path: String,
}

/// Clears the submission flag when dropped, whatever the outcome.
struct SubmissionGuard<'a>(&'a AtomicBool);

impl<'a> SubmissionGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| WizardError::SubmissionInFlight)?;
        Ok(Self(flag))
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl WizardController {
    pub(crate) fn new(
        registry: StepRegistry,
        draft: ProgramDraft,
        collaborators: Collaborators,
        programs_path: String,
    ) -> Self {
        Self {
            registry,
            session: Mutex::new(Session {
                draft,
                current_index: 0,
                last_error: None,
            }),
            submitting: AtomicBool::new(false),
            collaborators,
            programs_path,
        }
    }

    // The session lock is never held across an await, so a poisoned lock
    // only means a panic elsewhere; the data is still consistent.
    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_submitting() {
            return Err(WizardError::SubmissionInFlight);
        }
        Ok(())
    }

    pub fn steps(&self) -> &StepRegistry {
        &self.registry
    }

    pub fn step_count(&self) -> usize {
        self.registry.len()
    }

    pub fn current_index(&self) -> usize {
        self.session().current_index
    }

    pub fn is_last_step(&self) -> bool {
        self.current_index() + 1 == self.step_count()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> ProgramDraft {
        self.session().draft.clone()
    }

    /// Why the most recent submission failed, until the next attempt.
    pub fn last_error(&self) -> Option<String> {
        self.session().last_error.clone()
    }

    pub fn current_step(&self) -> &StepDefinition {
        self.step_at(self.current_index())
    }

    /// Renders the current step for the current draft.
    pub fn view(&self) -> StepView {
        let session = self.session();
        self.step_at(session.current_index).view(&session.draft)
    }

    pub fn progress(&self) -> Progress {
        Progress::compute(self.current_index(), &self.registry.titles())
    }

    // The index stays within 0..len and the builder rejects empty registries.
    fn step_at(&self, index: usize) -> &StepDefinition {
        &self.registry.as_slice()[index]
    }

    /// Shallow-merges `patch` into the draft. No validation and no
    /// compound rules; use [`Self::apply_input`] for user edits.
    pub fn update_state(&self, patch: ProgramPatch) -> Result<()> {
        self.ensure_idle()?;
        self.session().draft.merge(patch);
        Ok(())
    }

    /// Routes `input` to the current step and merges the patch it produces,
    /// expanded by the compound-update rules, in one step.
    ///
    /// Returns whether the draft changed.
    pub fn apply_input(&self, input: StepInput) -> Result<bool> {
        self.ensure_idle()?;

        let mut session = self.session();
        let step = self.step_at(session.current_index).step;
        let Some(patch) = step.apply(&session.draft, input) else {
            debug!("{step:?} step ignored input");
            return Ok(false);
        };

        let patch = rules::expand(&session.draft, patch);
        debug!("Applying {patch:?}");
        session.draft.merge(patch);
        Ok(true)
    }

    /// Moves to the next step, or submits when already on the last one.
    ///
    /// Submitting does not change the step index.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::SubmissionInFlight` while a submission runs.
    pub async fn advance(&self) -> Result<Advance> {
        self.ensure_idle()?;

        {
            let mut session = self.session();
            if session.current_index + 1 < self.registry.len() {
                session.current_index += 1;
                debug!("Advanced to step {}", session.current_index);
                return Ok(Advance::Moved {
                    index: session.current_index,
                });
            }
        }

        self.finish().await
    }

    /// Moves to the previous step; no-op on the first step.
    pub fn retreat(&self) -> Result<usize> {
        self.ensure_idle()?;

        let mut session = self.session();
        if session.current_index > 0 {
            session.current_index -= 1;
            debug!("Retreated to step {}", session.current_index);
        }
        Ok(session.current_index)
    }

    /// Leaves the wizard for the program list.
    pub fn cancel(&self) -> Result<()> {
        self.ensure_idle()?;
        self.collaborators.navigator.navigate(&self.programs_path);
        Ok(())
    }

    /// Maps the current draft without submitting it.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Unauthenticated` when no caller is signed in.
    pub fn preview_request(&self) -> Result<CreateProgramRequest> {
        let caller = self
            .collaborators
            .identity
            .current_user_id()
            .ok_or(WizardError::Unauthenticated)?;
        Ok(CreateProgramRequest::from_draft(&self.session().draft, &caller))
    }

    /// Submits the draft. Reached only through [`Self::advance`] on the
    /// last step.
    ///
    /// Failures of the submission itself are reported as
    /// [`Advance::Rejected`] and recorded in [`Self::last_error`]; they are
    /// not returned as errors.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::SubmissionInFlight` if another submission is
    /// running on this controller.
    pub(crate) async fn finish(&self) -> Result<Advance> {
        let _guard = SubmissionGuard::acquire(&self.submitting)?;
        self.session().last_error = None;

        let request = match self.preview_request() {
            Ok(request) => request,
            Err(e) => return Ok(self.reject(&e)),
        };

        info!("Submitting program '{}'", request.name);
        match self.collaborators.service.create_program(request).await {
            Ok(program) => {
                info!("Created program {}", program.id);
                self.collaborators
                    .navigator
                    .navigate(&self.program_path(&program.id));
                Ok(Advance::Submitted(program))
            }
            Err(e) => Ok(self.reject(&e)),
        }
    }

    fn reject(&self, e: &WizardError) -> Advance {
        error!("Program submission failed: {e}");
        let reason = e.to_string();
        self.session().last_error = Some(reason.clone());
        Advance::Rejected { reason }
    }

    fn program_path(&self, id: &str) -> String {
        format!("{}/{}", self.programs_path.trim_end_matches('/'), id)
    }
}
