//! Collaborators the wizard depends on but does not implement.
//!
//! The controller receives these at construction time (see
//! [`crate::WizardBuilder`]) so its submission behavior can be exercised
//! with in-memory doubles.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{CreateProgramRequest, Program},
};

/// Backend that creates programs.
#[async_trait]
pub trait ProgramService: Send + Sync {
    /// Submit one request. Called at most once per submitting `advance`.
    async fn create_program(&self, request: CreateProgramRequest) -> Result<Program>;
}

/// Source of the signed-in caller's identity.
pub trait IdentityProvider: Send + Sync {
    /// Identifier of the current caller, if a session exists.
    fn current_user_id(&self) -> Option<String>;
}

/// Side-effecting "go to path".
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Identity provider for a fixed, already known user.
#[derive(Debug, Clone)]
pub struct StaticIdentity(pub Option<String>);

impl StaticIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self(Some(user_id.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Option<String> {
        self.0.clone()
    }
}
