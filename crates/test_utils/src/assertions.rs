//! Custom Test Assertions
//!
//! Assertion helpers for lifecycle invariants with more meaningful failure
//! messages than plain `assert!`.

use core_kernel::{ExpertId, Money};
use domain_grants::{Application, ApplicationStatus, ScoringPolicy};

/// Asserts that the recorded status history is a path through the state graph
///
/// The path must start at `Draft`, every step must be an allowed edge and the
/// last step must end in the application's current status.
pub fn assert_valid_status_path(application: &Application) {
    let mut current = ApplicationStatus::Draft;
    for change in application.status_history() {
        assert_eq!(
            change.from, current,
            "Status history is broken: expected a change from {}, found {} -> {}",
            current, change.from, change.to
        );
        assert!(
            change.from.can_transition_to(change.to),
            "Illegal transition recorded: {} -> {}",
            change.from,
            change.to
        );
        current = change.to;
    }
    assert_eq!(
        current,
        application.status(),
        "Status history ends at {} but application is {}",
        current,
        application.status()
    );
}

/// Asserts that evaluations were attached by exactly these experts, in order
pub fn assert_evaluation_order(application: &Application, expected: &[ExpertId]) {
    let actual: Vec<ExpertId> = application
        .evaluations()
        .iter()
        .map(|evaluation| evaluation.expert_id)
        .collect();
    assert_eq!(
        actual, expected,
        "Evaluation order mismatch for application {}",
        application.id()
    );
}

/// Asserts that every attached score lies within `policy`'s range
pub fn assert_scores_within(application: &Application, policy: ScoringPolicy) {
    let (low, high) = policy.range();
    for evaluation in application.evaluations() {
        assert!(
            (low..=high).contains(&evaluation.score),
            "Score {} from {} is outside {}..={}",
            evaluation.score,
            evaluation.expert_id,
            low,
            high
        );
    }
}

/// Asserts that two Money values are equal, comparing amount and currency
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Amount mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
