//! Property-Based Test Generators
//!
//! Provides proptest strategies for lifecycle action sequences, rosters,
//! titles and amounts.

use core_kernel::{Currency, Money};
use domain_grants::ApplicationStatus;
use proptest::prelude::*;

/// An operation a caller may attempt on an application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Submit,
    Edit,
    Withdraw,
    Evaluate,
    Decide,
}

/// Strategy for a single lifecycle action
pub fn lifecycle_action_strategy() -> impl Strategy<Value = LifecycleAction> {
    prop_oneof![
        Just(LifecycleAction::Submit),
        Just(LifecycleAction::Edit),
        Just(LifecycleAction::Withdraw),
        Just(LifecycleAction::Evaluate),
        Just(LifecycleAction::Decide),
    ]
}

/// Strategy for an arbitrary sequence of attempted actions
pub fn lifecycle_actions_strategy(max_len: usize) -> impl Strategy<Value = Vec<LifecycleAction>> {
    proptest::collection::vec(lifecycle_action_strategy(), 0..=max_len)
}

/// Strategy for any application status
pub fn status_strategy() -> impl Strategy<Value = ApplicationStatus> {
    proptest::sample::select(ApplicationStatus::ALL.to_vec())
}

/// Strategy for specialization keywords
pub fn specialization_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("bio".to_string()),
        Just("chemistry".to_string()),
        Just("physics".to_string()),
        Just("economics".to_string()),
    ]
}

/// Strategy for expert degrees
pub fn degree_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("PhD".to_string()),
        Just("Master".to_string()),
        Just("Bachelor".to_string()),
    ]
}

/// Strategy for roster entries: (name, specialization, degree)
pub fn roster_strategy(max_len: usize) -> impl Strategy<Value = Vec<(String, String, String)>> {
    proptest::collection::vec(
        ("[A-Z][a-z]{2,8}", specialization_strategy(), degree_strategy()),
        1..=max_len,
    )
}

/// Strategy for application titles, sometimes tagged with a specialization
pub fn title_strategy() -> impl Strategy<Value = String> {
    (
        proptest::option::of(specialization_strategy()),
        "[A-Z][a-z]{3,12}( [a-z]{3,10}){0,3}",
    )
        .prop_map(|(tag, body)| match tag {
            Some(tag) => format!("[{tag}] {body}"),
            None => body,
        })
}

/// Strategy for non-negative requested amounts in USD
pub fn requested_amount_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::USD))
}

/// Strategy for raw score scripts, including values outside any policy range
pub fn score_script_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..=20u8, 1..8)
}
