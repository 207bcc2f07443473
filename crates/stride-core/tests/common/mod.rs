#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use stride_core::{
    CreateProgramRequest, Navigator, Program, ProgramService, StaticIdentity, WizardBuilder,
    WizardController, WizardError,
};
use tokio::sync::Notify;

pub const CALLER_ID: &str = "coach-42";

/// Program service that records every request and fails on demand.
#[derive(Default)]
pub struct RecordingService {
    requests: Mutex<Vec<CreateProgramRequest>>,
    failures: Mutex<VecDeque<String>>,
}

impl RecordingService {
    /// Queue a failure for the next call.
    pub fn fail_next(&self, message: &str) {
        self.failures.lock().unwrap().push_back(message.to_string());
    }

    pub fn requests(&self) -> Vec<CreateProgramRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ProgramService for RecordingService {
    async fn create_program(
        &self,
        request: CreateProgramRequest,
    ) -> stride_core::Result<Program> {
        let id = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };

        if let Some(message) = self.failures.lock().unwrap().pop_front() {
            return Err(WizardError::submission(message));
        }

        Ok(Program {
            id: format!("prog-{id}"),
            details: request,
            created_at: None,
        })
    }
}

/// Program service that blocks until released, to observe the in-flight
/// state.
#[derive(Default)]
pub struct GatedService {
    pub started: Notify,
    pub release: Notify,
}

#[async_trait]
impl ProgramService for GatedService {
    async fn create_program(
        &self,
        request: CreateProgramRequest,
    ) -> stride_core::Result<Program> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(Program {
            id: "gated".to_string(),
            details: request,
            created_at: None,
        })
    }
}

/// Navigator that remembers every path it was sent to.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Helper bundling a controller with handles on its collaborators.
pub struct Harness {
    pub wizard: WizardController,
    pub service: Arc<RecordingService>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn create_test_harness() -> Harness {
    create_test_harness_with(|builder| builder)
}

pub fn create_test_harness_with<F>(configure: F) -> Harness
where
    F: FnOnce(WizardBuilder) -> WizardBuilder,
{
    let service = Arc::new(RecordingService::default());
    let navigator = Arc::new(RecordingNavigator::default());

    let builder = WizardBuilder::new()
        .with_service(service.clone())
        .with_identity(Arc::new(StaticIdentity::new(CALLER_ID)))
        .with_navigator(navigator.clone());

    let wizard = configure(builder)
        .build()
        .expect("Failed to build wizard");

    Harness {
        wizard,
        service,
        navigator,
    }
}

/// Advance until the last step without submitting.
pub async fn advance_to_last_step(wizard: &WizardController) {
    while !wizard.is_last_step() {
        wizard.advance().await.expect("Failed to advance");
    }
}
