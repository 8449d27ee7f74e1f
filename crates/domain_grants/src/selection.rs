//! Expert selection strategies
//!
//! A strategy picks which registered experts review one application and in
//! what order. The returned order becomes the evaluation chain order.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::Application;
use crate::expert::{Expert, Qualification};

/// Pluggable policy choosing and ordering experts for one application
pub trait ExpertSelectionStrategy: Send + Sync {
    /// Short name used in logs and configuration
    fn name(&self) -> &'static str;

    /// Returns the experts to wire into a chain, in chain order
    ///
    /// Returns an empty selection only when `experts` is empty.
    fn select<'a>(&self, experts: &'a [Expert], application: &Application) -> Vec<&'a Expert>;
}

fn first_registered(experts: &[Expert]) -> Vec<&Expert> {
    experts.first().into_iter().collect()
}

/// Selects experts whose specialization occurs in the application title
///
/// Matching is a case-insensitive substring test. When nothing matches the
/// first registered expert is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct BySpecialization;

impl ExpertSelectionStrategy for BySpecialization {
    fn name(&self) -> &'static str {
        "by_specialization"
    }

    fn select<'a>(&self, experts: &'a [Expert], application: &Application) -> Vec<&'a Expert> {
        let title = application.data().title().to_lowercase();
        let matched: Vec<&Expert> = experts
            .iter()
            .filter(|expert| title.contains(&expert.specialization.to_lowercase()))
            .collect();

        if matched.is_empty() {
            first_registered(experts)
        } else {
            matched
        }
    }
}

/// Selects every expert at or above a qualification tier
#[derive(Debug, Clone, Copy)]
pub struct QualificationThreshold {
    pub minimum: Qualification,
}

impl QualificationThreshold {
    pub fn new(minimum: Qualification) -> Self {
        Self { minimum }
    }
}

impl ExpertSelectionStrategy for QualificationThreshold {
    fn name(&self) -> &'static str {
        "qualification_threshold"
    }

    fn select<'a>(&self, experts: &'a [Expert], _application: &Application) -> Vec<&'a Expert> {
        let matched: Vec<&Expert> = experts
            .iter()
            .filter(|expert| expert.qualification >= self.minimum)
            .collect();

        if matched.is_empty() {
            first_registered(experts)
        } else {
            matched
        }
    }
}

/// Rotates a window of `team_size` experts across successive selections
#[derive(Debug)]
pub struct RoundRobin {
    team_size: usize,
    cursor: AtomicUsize,
}

impl RoundRobin {
    pub fn new(team_size: usize) -> Self {
        Self {
            team_size: team_size.max(1),
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }
}

impl ExpertSelectionStrategy for RoundRobin {
    fn name(&self) -> &'static str {
        "round_robin"
    }

    fn select<'a>(&self, experts: &'a [Expert], _application: &Application) -> Vec<&'a Expert> {
        if experts.is_empty() {
            return Vec::new();
        }

        let start = self.cursor.fetch_add(1, Ordering::Relaxed) % experts.len();
        let size = self.team_size.min(experts.len());
        (0..size)
            .map(|offset| &experts[(start + offset) % experts.len()])
            .collect()
    }
}
