//! Workflow service tests against the in-memory stores

use std::sync::Arc;

use domain_grants::{
    ApplicationStatus, DecisionResult, GrantError, GrantWorkflowService, ScoringPolicy,
    SeededScores, WorkflowConfig,
};
use core_kernel::MoneyError;
use infra_store::{InMemoryApplicantStore, InMemoryApplicationStore, InMemoryGrantStore, InMemoryWorkerStore};
use test_utils::{
    assert_evaluation_order, assert_money_eq, assert_scores_within, assert_valid_status_path,
    ApplicationDataBuilder, ApplicationFixtures, ExpertFixtures, ExpertSpec, MoneyFixtures,
    PersonFixtures, WorkflowBuilder,
};

async fn register_roster(service: &GrantWorkflowService, specs: &[ExpertSpec]) -> Vec<domain_grants::Expert> {
    let mut experts = Vec::new();
    for (name, specialization, degree) in specs {
        experts.push(service.register_expert(name, specialization, degree).await.unwrap());
    }
    experts
}

async fn register_applicant(service: &GrantWorkflowService) -> core_kernel::ApplicantId {
    service
        .register_applicant(PersonFixtures::applicant_name(), Some(PersonFixtures::random_email()), None)
        .await
        .unwrap()
        .id()
}

#[tokio::test]
async fn test_reference_scenario_end_to_end() {
    let service = WorkflowBuilder::new().with_scores(vec![8, 6]).build();
    let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
    let founder = service.register_founder(PersonFixtures::founder_name()).await.unwrap();
    let applicant_id = register_applicant(&service).await;

    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();
    assert_eq!(application.status(), ApplicationStatus::Submitted);

    let assigned = service.assign_experts(application.id()).await.unwrap();
    let assigned_ids: Vec<_> = assigned.iter().map(|e| e.id).collect();
    assert_eq!(assigned_ids, vec![experts[0].id, experts[1].id]);

    let head = service.assigned_chain(application.id()).await.unwrap().head().unwrap();
    let evaluations = service.start_evaluation(application.id(), head).await.unwrap();
    assert_eq!(evaluations.len(), 2);

    let decision = service
        .make_decision(
            application.id(),
            founder.id,
            DecisionResult::Approved,
            MoneyFixtures::usd_granted(),
        )
        .await
        .unwrap();
    assert_eq!(decision.result, DecisionResult::Approved);
    assert_money_eq(&decision.granted_amount, &MoneyFixtures::usd_granted());

    let stored = service.get_application(application.id()).await.unwrap();
    assert_eq!(stored.status(), ApplicationStatus::DecisionMade);
    assert!(!stored.evaluations().is_empty());
    assert_evaluation_order(&stored, &assigned_ids);
    assert_eq!(stored.decision().map(|d| d.id), Some(decision.id));
    assert_valid_status_path(&stored);
    assert!(service.assigned_chain(application.id()).await.is_none());
}

#[tokio::test]
async fn test_unmatched_title_falls_back_to_first_registered() {
    let service = WorkflowBuilder::new().build();
    let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
    let applicant_id = register_applicant(&service).await;

    let application = service
        .submit_application(applicant_id, ApplicationFixtures::unmatched_data())
        .await
        .unwrap();
    let assigned = service.assign_experts(application.id()).await.unwrap();

    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, experts[0].id);
}

#[tokio::test]
async fn test_single_base_expert_scores_in_range() {
    let service = GrantWorkflowService::new(
        Arc::new(InMemoryApplicantStore::new()),
        Arc::new(InMemoryApplicationStore::new()),
        Arc::new(InMemoryGrantStore::new()),
        Arc::new(InMemoryWorkerStore::new()),
        WorkflowConfig::default(),
    )
    .with_score_source(Box::new(SeededScores::from_seed(2024)));
    let experts = register_roster(&service, &[("Jesse", "bio", "Master")]).await;
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();

    service.assign_experts(application.id()).await.unwrap();
    let evaluations = service.start_evaluation(application.id(), experts[0].id).await.unwrap();

    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].expert_id, experts[0].id);
    assert!((1..=10).contains(&evaluations[0].score));

    let stored = service.get_application(application.id()).await.unwrap();
    assert_eq!(stored.status(), ApplicationStatus::UnderReview);
    assert_scores_within(&stored, ScoringPolicy::Base);
}

#[tokio::test]
async fn test_three_expert_chain_evaluates_in_wiring_order() {
    let service = WorkflowBuilder::new().with_scores(vec![3, 5, 9]).build();
    let experts = register_roster(&service, &ExpertFixtures::BIO_TRIO).await;
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();

    service.assign_experts(application.id()).await.unwrap();
    service.start_evaluation(application.id(), experts[0].id).await.unwrap();

    let stored = service.get_application(application.id()).await.unwrap();
    assert_evaluation_order(&stored, &[experts[0].id, experts[1].id, experts[2].id]);
    let scores: Vec<u8> = stored.evaluations().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![3, 5, 9]);
    assert_eq!(stored.status(), ApplicationStatus::UnderReview);
}

#[tokio::test]
async fn test_starting_mid_chain_runs_successors_only() {
    let service = WorkflowBuilder::new().build();
    let experts = register_roster(&service, &ExpertFixtures::BIO_TRIO).await;
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();

    service.assign_experts(application.id()).await.unwrap();
    let evaluations = service.start_evaluation(application.id(), experts[1].id).await.unwrap();

    let order: Vec<_> = evaluations.iter().map(|e| e.expert_id).collect();
    assert_eq!(order, vec![experts[1].id, experts[2].id]);
}

#[tokio::test]
async fn test_expert_outside_chain_evaluates_alone() {
    let service = WorkflowBuilder::new().build();
    let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();

    // chemistry expert is not selected for a bio title
    service.assign_experts(application.id()).await.unwrap();
    let evaluations = service.start_evaluation(application.id(), experts[2].id).await.unwrap();

    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].expert_id, experts[2].id);
}

#[tokio::test]
async fn test_second_decision_rejected_and_first_kept() {
    let service = WorkflowBuilder::new().build();
    let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
    let founder = service.register_founder(PersonFixtures::founder_name()).await.unwrap();
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();
    service.start_evaluation(application.id(), experts[0].id).await.unwrap();

    let first = service
        .make_decision(application.id(), founder.id, DecisionResult::Approved, MoneyFixtures::usd_granted())
        .await
        .unwrap();
    let err = service
        .make_decision(application.id(), founder.id, DecisionResult::Rejected, MoneyFixtures::usd_zero())
        .await
        .unwrap_err();
    assert!(err.is_invalid_transition());

    let stored = service.get_application(application.id()).await.unwrap();
    let kept = stored.decision().unwrap();
    assert_eq!(kept.id, first.id);
    assert_eq!(kept.result, DecisionResult::Approved);
}

#[tokio::test]
async fn test_decision_before_evaluation_is_invalid() {
    let service = WorkflowBuilder::new().build();
    let founder = service.register_founder(PersonFixtures::founder_name()).await.unwrap();
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();

    let err = service
        .make_decision(application.id(), founder.id, DecisionResult::Rejected, MoneyFixtures::usd_zero())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GrantError::InvalidTransition { from: ApplicationStatus::Submitted, .. }
    ));
}

#[tokio::test]
async fn test_edit_after_submit_fails_and_keeps_data() {
    let service = WorkflowBuilder::new().build();
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();

    let changed = ApplicationDataBuilder::new().with_title("[Bio] Something else").build();
    let err = service.edit_application(application.id(), changed).await.unwrap_err();
    assert!(err.is_invalid_transition());

    let stored = service.get_application(application.id()).await.unwrap();
    assert_eq!(stored.data(), &ApplicationFixtures::bio_data());
}

#[tokio::test]
async fn test_draft_edit_then_submit() {
    let service = WorkflowBuilder::new().build();
    let applicant_id = register_applicant(&service).await;

    let draft = service
        .draft_application(applicant_id, ApplicationFixtures::unmatched_data())
        .await
        .unwrap();
    assert_eq!(draft.status(), ApplicationStatus::Draft);

    let edited = service
        .edit_application(draft.id(), ApplicationFixtures::bio_data())
        .await
        .unwrap();
    assert_eq!(edited.data().title(), ApplicationFixtures::bio_title());

    let submitted = service.submit_draft(draft.id()).await.unwrap();
    assert_eq!(submitted.status(), ApplicationStatus::Submitted);
    assert!(service.submit_draft(draft.id()).await.unwrap_err().is_invalid_transition());
}

#[tokio::test]
async fn test_withdraw_drops_chain_and_blocks_evaluation() {
    let service = WorkflowBuilder::new().build();
    let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();
    service.assign_experts(application.id()).await.unwrap();

    let withdrawn = service.withdraw_application(application.id()).await.unwrap();
    assert_eq!(withdrawn.status(), ApplicationStatus::Withdrawn);
    assert!(service.assigned_chain(application.id()).await.is_none());

    let err = service.start_evaluation(application.id(), experts[0].id).await.unwrap_err();
    assert!(err.is_invalid_transition());
    assert!(service.assign_experts(application.id()).await.unwrap_err().is_invalid_transition());
    assert!(service.withdraw_application(application.id()).await.unwrap_err().is_invalid_transition());
}

#[tokio::test]
async fn test_unknown_references_are_not_found() {
    let service = WorkflowBuilder::new().build();
    let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();

    let unknown_applicant = service
        .submit_application(core_kernel::ApplicantId::new(), ApplicationFixtures::bio_data())
        .await
        .unwrap_err();
    assert!(unknown_applicant.is_not_found());

    let unknown_expert = service
        .start_evaluation(application.id(), core_kernel::ExpertId::new())
        .await
        .unwrap_err();
    assert!(unknown_expert.is_not_found());

    service.start_evaluation(application.id(), experts[0].id).await.unwrap();
    let unknown_founder = service
        .make_decision(
            application.id(),
            core_kernel::FounderId::new(),
            DecisionResult::Approved,
            MoneyFixtures::usd_granted(),
        )
        .await
        .unwrap_err();
    assert!(unknown_founder.is_not_found());

    let stored = service.get_application(application.id()).await.unwrap();
    assert_eq!(stored.status(), ApplicationStatus::UnderReview);
    assert!(stored.decision().is_none());

    let missing = service.get_application(core_kernel::ApplicationId::new()).await.unwrap_err();
    assert!(missing.is_not_found());
}

#[tokio::test]
async fn test_grant_above_request_allowed_unless_capped() {
    for enforce in [false, true] {
        let service = WorkflowBuilder::new()
            .with_config(WorkflowConfig {
                enforce_requested_cap: enforce,
                ..Default::default()
            })
            .build();
        let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
        let founder = service.register_founder(PersonFixtures::founder_name()).await.unwrap();
        let applicant_id = register_applicant(&service).await;
        let application = service
            .submit_application(applicant_id, ApplicationFixtures::bio_data())
            .await
            .unwrap();
        service.start_evaluation(application.id(), experts[0].id).await.unwrap();

        let result = service
            .make_decision(
                application.id(),
                founder.id,
                DecisionResult::Approved,
                MoneyFixtures::usd_above_request(),
            )
            .await;

        if enforce {
            assert!(matches!(result, Err(GrantError::Validation(_))));
        } else {
            assert_money_eq(&result.unwrap().granted_amount, &MoneyFixtures::usd_above_request());
        }
    }
}

#[tokio::test]
async fn test_negative_grant_always_rejected() {
    let service = WorkflowBuilder::new().build();
    let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
    let founder = service.register_founder(PersonFixtures::founder_name()).await.unwrap();
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();
    service.start_evaluation(application.id(), experts[0].id).await.unwrap();

    let err = service
        .make_decision(application.id(), founder.id, DecisionResult::Approved, MoneyFixtures::usd_negative())
        .await
        .unwrap_err();
    assert!(matches!(err, GrantError::Money(MoneyError::InvalidAmount(_))));
}

#[tokio::test]
async fn test_submission_in_foreign_currency_rejected() {
    let service = WorkflowBuilder::new().build();
    let applicant_id = register_applicant(&service).await;
    let data = ApplicationDataBuilder::new()
        .with_requested_amount(MoneyFixtures::eur_100())
        .build();

    let err = service.submit_application(applicant_id, data).await.unwrap_err();
    assert!(matches!(err, GrantError::Validation(_)));
    assert!(service
        .applications_by_status(ApplicationStatus::Submitted)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_empty_roster_assigns_empty_chain() {
    let service = WorkflowBuilder::new().build();
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();

    let assigned = service.assign_experts(application.id()).await.unwrap();
    assert!(assigned.is_empty());
    assert!(service.assigned_chain(application.id()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_applications_by_status() {
    let service = WorkflowBuilder::new().build();
    let applicant_id = register_applicant(&service).await;

    let submitted = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();
    let draft = service
        .draft_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();

    let drafts = service.applications_by_status(ApplicationStatus::Draft).await.unwrap();
    assert_eq!(drafts.iter().map(|a| a.id()).collect::<Vec<_>>(), vec![draft.id()]);
    let pending = service.applications_by_status(ApplicationStatus::Submitted).await.unwrap();
    assert_eq!(pending.iter().map(|a| a.id()).collect::<Vec<_>>(), vec![submitted.id()]);
}

#[tokio::test]
async fn test_applicant_contact_update() {
    let service = WorkflowBuilder::new().build();
    let applicant_id = register_applicant(&service).await;

    let updated = service
        .update_applicant_contact(applicant_id, Some("new@example.com".into()), Some("+1-555".into()))
        .await
        .unwrap();
    assert_eq!(updated.email(), Some("new@example.com"));

    let stored = service.get_applicant(applicant_id).await.unwrap();
    assert_eq!(stored.phone(), Some("+1-555"));
    assert_eq!(stored.name(), PersonFixtures::applicant_name());
}

#[tokio::test]
async fn test_register_expert_validates_input() {
    let service = WorkflowBuilder::new().build();
    assert!(service.register_expert("", "bio", "PhD").await.is_err());
    assert!(service.register_expert("Walter", " ", "PhD").await.is_err());
    assert!(service.experts().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_chain_runs_do_not_lose_evaluations() {
    let service = Arc::new(WorkflowBuilder::new().build());
    let experts = register_roster(&service, &ExpertFixtures::BIO_TRIO).await;
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();
    service.assign_experts(application.id()).await.unwrap();

    let runs = 8;
    let mut handles = Vec::new();
    for _ in 0..runs {
        let service = Arc::clone(&service);
        let head = experts[0].id;
        let application_id = application.id();
        handles.push(tokio::spawn(async move {
            service.start_evaluation(application_id, head).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = service.get_application(application.id()).await.unwrap();
    assert_eq!(stored.evaluations().len(), runs * experts.len());
    for run in stored.evaluations().chunks(experts.len()) {
        let order: Vec<_> = run.iter().map(|e| e.expert_id).collect();
        assert_eq!(order, experts.iter().map(|e| e.id).collect::<Vec<_>>());
    }
}

#[tokio::test]
async fn test_record_locks_released_after_every_call() {
    let service = WorkflowBuilder::new().build();
    let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
    let founder = service.register_founder(PersonFixtures::founder_name()).await.unwrap();
    let applicant_id = register_applicant(&service).await;

    for _ in 0..1000 {
        let err = service
            .withdraw_application(core_kernel::ApplicationId::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
    assert_eq!(service.active_record_locks().await, 0);

    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();
    service.start_evaluation(application.id(), experts[0].id).await.unwrap();
    service
        .make_decision(application.id(), founder.id, DecisionResult::Approved, MoneyFixtures::usd_granted())
        .await
        .unwrap();
    assert!(service.withdraw_application(application.id()).await.is_err());
    assert_eq!(service.active_record_locks().await, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_record_locks_released_after_concurrent_runs() {
    let service = Arc::new(WorkflowBuilder::new().build());
    let experts = register_roster(&service, &ExpertFixtures::BIO_TRIO).await;
    let applicant_id = register_applicant(&service).await;

    let mut handles = Vec::new();
    for _ in 0..4 {
        let application = service
            .submit_application(applicant_id, ApplicationFixtures::bio_data())
            .await
            .unwrap();
        for _ in 0..4 {
            let service = Arc::clone(&service);
            let head = experts[0].id;
            let application_id = application.id();
            handles.push(tokio::spawn(async move {
                service.start_evaluation(application_id, head).await
            }));
        }
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(service.active_record_locks().await, 0);
}

#[tokio::test]
async fn test_second_decision_under_cap_is_invalid_transition() {
    let service = WorkflowBuilder::new()
        .with_config(WorkflowConfig {
            enforce_requested_cap: true,
            ..Default::default()
        })
        .build();
    let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
    let founder = service.register_founder(PersonFixtures::founder_name()).await.unwrap();
    let applicant_id = register_applicant(&service).await;
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();
    service.start_evaluation(application.id(), experts[0].id).await.unwrap();

    service
        .make_decision(application.id(), founder.id, DecisionResult::Approved, MoneyFixtures::usd_granted())
        .await
        .unwrap();

    // over the request and already decided: the state wins
    let err = service
        .make_decision(
            application.id(),
            founder.id,
            DecisionResult::Approved,
            MoneyFixtures::usd_above_request(),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GrantError::InvalidTransition { from: ApplicationStatus::DecisionMade, .. }
    ));
}

#[tokio::test]
async fn test_linked_grant_caps_decision_and_edit() {
    let service = WorkflowBuilder::new().build();
    let experts = register_roster(&service, &ExpertFixtures::REFERENCE).await;
    let founder = service.register_founder(PersonFixtures::founder_name()).await.unwrap();
    let applicant_id = register_applicant(&service).await;
    let grant = service
        .register_grant("Molecular biology", "Wet-lab research", MoneyFixtures::usd_grant_ceiling())
        .await
        .unwrap();

    let draft = service
        .draft_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();
    let linked = service.link_grant(draft.id(), grant.id).await.unwrap();
    assert_eq!(linked.grant_id(), Some(grant.id));
    assert_eq!(linked.status(), ApplicationStatus::Draft);

    let too_large = ApplicationDataBuilder::new()
        .with_requested_amount(MoneyFixtures::usd_above_request())
        .build();
    let err = service.edit_application(draft.id(), too_large).await.unwrap_err();
    assert!(matches!(err, GrantError::Validation(_)));
    assert_eq!(
        service.get_application(draft.id()).await.unwrap().data(),
        &ApplicationFixtures::bio_data()
    );

    service.submit_draft(draft.id()).await.unwrap();
    service.start_evaluation(draft.id(), experts[0].id).await.unwrap();

    // above the ceiling even though the cap on the request is off
    let err = service
        .make_decision(draft.id(), founder.id, DecisionResult::Approved, MoneyFixtures::usd_above_request())
        .await
        .unwrap_err();
    assert!(matches!(err, GrantError::Validation(_)));

    let decision = service
        .make_decision(draft.id(), founder.id, DecisionResult::Approved, MoneyFixtures::usd_grant_ceiling())
        .await
        .unwrap();
    assert_money_eq(&decision.granted_amount, &MoneyFixtures::usd_grant_ceiling());
}

#[tokio::test]
async fn test_grant_registration_and_lookup() {
    let service = WorkflowBuilder::new().build();

    let first = service
        .register_grant("Astrophysics", "", MoneyFixtures::usd_grant_ceiling())
        .await
        .unwrap();
    service
        .register_grant("Botany", "", MoneyFixtures::usd_requested())
        .await
        .unwrap();

    let foreign = service.register_grant("Chemistry", "", MoneyFixtures::eur_100()).await;
    assert!(matches!(foreign, Err(GrantError::Validation(_))));

    let titles: Vec<_> = service.grants().await.unwrap().into_iter().map(|g| g.title).collect();
    assert_eq!(titles, vec!["Astrophysics", "Botany"]);
    assert_eq!(service.get_grant(first.id).await.unwrap(), first);
    assert!(service.get_grant(core_kernel::GrantId::new()).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_link_unknown_grant_or_application_is_not_found() {
    let service = WorkflowBuilder::new().build();
    let applicant_id = register_applicant(&service).await;
    let grant = service
        .register_grant("Astrophysics", "", MoneyFixtures::usd_grant_ceiling())
        .await
        .unwrap();
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();

    let err = service
        .link_grant(application.id(), core_kernel::GrantId::new())
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = service
        .link_grant(core_kernel::ApplicationId::new(), grant.id)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(service.get_application(application.id()).await.unwrap().grant_id().is_none());
}

#[tokio::test]
async fn test_edit_of_submitted_linked_application_is_invalid_transition() {
    let service = WorkflowBuilder::new().build();
    let applicant_id = register_applicant(&service).await;
    let grant = service
        .register_grant("Molecular biology", "", MoneyFixtures::usd_grant_ceiling())
        .await
        .unwrap();
    let application = service
        .submit_application(applicant_id, ApplicationFixtures::bio_data())
        .await
        .unwrap();
    service.link_grant(application.id(), grant.id).await.unwrap();

    let too_large = ApplicationDataBuilder::new()
        .with_requested_amount(MoneyFixtures::usd_above_request())
        .build();
    let err = service.edit_application(application.id(), too_large).await.unwrap_err();
    assert!(err.is_invalid_transition());
}
