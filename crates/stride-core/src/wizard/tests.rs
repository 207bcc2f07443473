//! Tests for the wizard module.

use std::sync::Arc;

use async_trait::async_trait;

use super::*;
use crate::{
    models::{CreateProgramRequest, Phase, Program},
    services::StaticIdentity,
    steps::{Step, StepDefinition},
};

/// Accepts every request and never navigates anywhere observable.
struct AcceptAll;

#[async_trait]
impl ProgramService for AcceptAll {
    async fn create_program(&self, request: CreateProgramRequest) -> Result<Program> {
        Ok(Program {
            id: "1".to_string(),
            details: request,
            created_at: None,
        })
    }
}

struct Nowhere;

impl Navigator for Nowhere {
    fn navigate(&self, _path: &str) {}
}

fn complete_builder() -> WizardBuilder {
    WizardBuilder::new()
        .with_service(Arc::new(AcceptAll))
        .with_identity(Arc::new(StaticIdentity::new("coach")))
        .with_navigator(Arc::new(Nowhere))
}

/// Helper function to create a test controller
fn create_test_wizard() -> WizardController {
    complete_builder().build().expect("Failed to build wizard")
}

#[test]
fn test_build_requires_collaborators() {
    let missing_service = WizardBuilder::new()
        .with_identity(Arc::new(StaticIdentity::new("coach")))
        .with_navigator(Arc::new(Nowhere))
        .build();
    assert!(matches!(
        missing_service,
        Err(WizardError::Configuration { .. })
    ));

    let missing_navigator = WizardBuilder::new()
        .with_service(Arc::new(AcceptAll))
        .with_identity(Arc::new(StaticIdentity::new("coach")))
        .build();
    assert!(matches!(
        missing_navigator,
        Err(WizardError::Configuration { .. })
    ));
}

#[test]
fn test_build_rejects_empty_registry() {
    let result = complete_builder()
        .with_steps(StepRegistry::new(vec![]))
        .build();

    assert!(matches!(result, Err(WizardError::Configuration { .. })));
}

#[test]
fn test_build_rejects_relative_programs_path() {
    let result = complete_builder().with_programs_path("programs").build();

    assert!(matches!(
        result,
        Err(WizardError::InvalidInput { ref field, .. }) if field == "programs_path"
    ));
}

#[test]
fn test_new_wizard_starts_on_first_step() {
    let wizard = create_test_wizard();

    assert_eq!(wizard.current_index(), 0);
    assert_eq!(wizard.step_count(), 5);
    assert!(!wizard.is_submitting());
    assert!(wizard.last_error().is_none());
    assert_eq!(wizard.current_step().step, Step::NameAndType);
    assert_eq!(wizard.draft(), ProgramDraft::default());
}

#[test]
fn test_update_state_is_shallow_merge() {
    let wizard = create_test_wizard();
    let before = wizard.draft();
    let patch = ProgramPatch {
        name: Some("Hill Repeats".to_string()),
        weeks: Some(9),
        ..ProgramPatch::default()
    };

    wizard.update_state(patch.clone()).unwrap();

    // No compound rules on a raw merge.
    assert_eq!(wizard.draft(), before.merged(patch));
    assert_eq!(wizard.draft().phases[0].end_week, 4);
}

#[test]
fn test_retreat_at_first_step_is_noop() {
    let wizard = create_test_wizard();

    assert_eq!(wizard.retreat().unwrap(), 0);
    assert_eq!(wizard.current_index(), 0);
    assert_eq!(wizard.draft(), ProgramDraft::default());
}

#[tokio::test]
async fn test_advance_then_retreat() {
    let wizard = create_test_wizard();

    assert_eq!(wizard.advance().await.unwrap(), Advance::Moved { index: 1 });
    assert_eq!(wizard.advance().await.unwrap(), Advance::Moved { index: 2 });
    assert_eq!(wizard.retreat().unwrap(), 1);
    assert_eq!(wizard.current_step().title, "Frequency");
}

#[tokio::test]
async fn test_apply_input_routes_to_current_step() {
    let wizard = create_test_wizard();

    // Frequency input on the name step is ignored.
    assert!(!wizard
        .apply_input(StepInput::SetWeeks("8".to_string()))
        .unwrap());
    assert_eq!(wizard.draft().weeks, 4);

    wizard.advance().await.unwrap();
    assert!(wizard
        .apply_input(StepInput::SetWeeks("8".to_string()))
        .unwrap());

    let draft = wizard.draft();
    assert_eq!(draft.weeks, 8);
    assert_eq!(draft.phases[0].end_week, 8);
}

#[tokio::test]
async fn test_single_step_wizard_submits_on_first_advance() {
    let wizard = complete_builder()
        .with_steps(StepRegistry::new(vec![StepDefinition::new(
            "Everything",
            Step::NameAndType,
        )]))
        .build()
        .unwrap();

    assert!(wizard.is_last_step());
    let outcome = wizard.advance().await.unwrap();
    assert!(matches!(outcome, Advance::Submitted(_)));
    assert_eq!(wizard.current_index(), 0);
}

#[test]
fn test_preview_request_maps_current_draft() {
    let wizard = complete_builder()
        .with_initial_draft(ProgramDraft {
            types: vec!["Strength".to_string(), "Cardio".to_string()],
            phases: vec![Phase::new("a", "Intro", 1, 2)],
            ..ProgramDraft::default()
        })
        .build()
        .unwrap();

    let request = wizard.preview_request().unwrap();
    assert_eq!(request.types, vec!["strength", "cardio"]);
    assert_eq!(request.phases[0].name, "Intro");
    assert_eq!(request.created_by, "coach");
}

#[test]
fn test_preview_request_requires_identity() {
    let wizard = complete_builder()
        .with_identity(Arc::new(StaticIdentity::anonymous()))
        .build()
        .unwrap();

    assert!(matches!(
        wizard.preview_request(),
        Err(WizardError::Unauthenticated)
    ));
}

#[test]
fn test_submission_guard_is_exclusive_and_released() {
    let flag = AtomicBool::new(false);

    {
        let _first = SubmissionGuard::acquire(&flag).unwrap();
        assert!(matches!(
            SubmissionGuard::acquire(&flag),
            Err(WizardError::SubmissionInFlight)
        ));
    }

    assert!(!flag.load(Ordering::Acquire));
    assert!(SubmissionGuard::acquire(&flag).is_ok());
}
