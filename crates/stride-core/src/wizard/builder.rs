//! Builder for creating and configuring wizard controllers.

use std::sync::Arc;

use super::WizardController;
use crate::{
    error::{Result, WizardError},
    models::ProgramDraft,
    services::{IdentityProvider, Navigator, ProgramService},
    steps::StepRegistry,
};

/// Path of the program list view.
pub const DEFAULT_PROGRAMS_PATH: &str = "/programs";

/// Builder for creating and configuring [`WizardController`] instances.
pub struct WizardBuilder {
    registry: StepRegistry,
    draft: ProgramDraft,
    service: Option<Arc<dyn ProgramService>>,
    identity: Option<Arc<dyn IdentityProvider>>,
    navigator: Option<Arc<dyn Navigator>>,
    programs_path: String,
}

impl WizardBuilder {
    /// Creates a builder for the five-step program builder starting from
    /// the default draft.
    pub fn new() -> Self {
        Self {
            registry: StepRegistry::program_builder(),
            draft: ProgramDraft::default(),
            service: None,
            identity: None,
            navigator: None,
            programs_path: DEFAULT_PROGRAMS_PATH.to_string(),
        }
    }

    /// Replaces the step sequence.
    pub fn with_steps(mut self, registry: StepRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Starts the wizard from `draft` instead of the default draft.
    pub fn with_initial_draft(mut self, draft: ProgramDraft) -> Self {
        self.draft = draft;
        self
    }

    pub fn with_service(mut self, service: Arc<dyn ProgramService>) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Sets the program list path. Created programs are shown at
    /// `<path>/<id>`.
    pub fn with_programs_path(mut self, path: impl Into<String>) -> Self {
        self.programs_path = path.into();
        self
    }

    /// Builds the configured controller.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Configuration` if a collaborator is missing or
    /// the step registry is empty, and `WizardError::InvalidInput` if the
    /// programs path is not absolute.
    pub fn build(self) -> Result<WizardController> {
        if self.registry.is_empty() {
            return Err(WizardError::configuration("wizard has no steps"));
        }
        if !self.programs_path.starts_with('/') {
            return Err(WizardError::invalid_input("programs_path").with_reason(format!(
                "must be absolute, got '{}'",
                self.programs_path
            )));
        }

        let service = self
            .service
            .ok_or_else(|| WizardError::configuration("no program service configured"))?;
        let identity = self
            .identity
            .ok_or_else(|| WizardError::configuration("no identity provider configured"))?;
        let navigator = self
            .navigator
            .ok_or_else(|| WizardError::configuration("no navigator configured"))?;

        let programs_path = match self.programs_path.trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        };

        Ok(WizardController::new(
            self.registry,
            self.draft,
            super::Collaborators {
                service,
                identity,
                navigator,
            },
            programs_path,
        ))
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
