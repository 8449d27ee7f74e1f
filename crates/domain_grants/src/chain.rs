//! Evaluation chain
//!
//! An ordered, duplicate-free sequence of experts wired for one application.
//! Starting the chain at some expert makes that expert and every successor
//! evaluate once, in order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{ApplicationId, ExpertId};
use crate::application::Application;
use crate::error::GrantError;
use crate::evaluation::Evaluation;
use crate::expert::Expert;
use crate::scoring::ScoreSource;

/// Ordered experts assigned to one application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationChain {
    application_id: ApplicationId,
    links: Vec<ExpertId>,
}

impl EvaluationChain {
    /// Wires the selected experts in order, skipping repeated experts
    pub fn wire(application_id: ApplicationId, experts: &[&Expert]) -> Self {
        let mut links: Vec<ExpertId> = Vec::with_capacity(experts.len());
        for expert in experts {
            if !links.contains(&expert.id) {
                links.push(expert.id);
            }
        }
        Self { application_id, links }
    }

    pub fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    /// First expert in the chain
    pub fn head(&self) -> Option<ExpertId> {
        self.links.first().copied()
    }

    pub fn experts(&self) -> &[ExpertId] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn position(&self, expert_id: ExpertId) -> Option<usize> {
        self.links.iter().position(|id| *id == expert_id)
    }

    /// Expert following `expert_id`, if any
    pub fn successor(&self, expert_id: ExpertId) -> Option<ExpertId> {
        self.position(expert_id)
            .and_then(|index| self.links.get(index + 1))
            .copied()
    }

    /// Runs the chain from `start` to its end
    ///
    /// Each expert resolves from `roster`, scores the application and
    /// attaches its evaluation before handing over to the next link. A link
    /// missing from the roster aborts the walk.
    pub fn run_from(
        &self,
        start: usize,
        application: &mut Application,
        roster: &[Expert],
        scores: &mut dyn ScoreSource,
    ) -> Result<Vec<Evaluation>, GrantError> {
        if application.id() != self.application_id {
            return Err(GrantError::validation(format!(
                "chain for {} cannot evaluate {}",
                self.application_id,
                application.id()
            )));
        }

        let mut produced = Vec::with_capacity(self.links.len().saturating_sub(start));
        for expert_id in self.links.iter().skip(start) {
            let expert = roster
                .iter()
                .find(|expert| expert.id == *expert_id)
                .ok_or_else(|| GrantError::not_found("Expert", expert_id))?;

            let evaluation = expert.evaluate(application, scores)?;
            debug!(
                application_id = %self.application_id,
                expert_id = %expert.id,
                score = evaluation.score,
                "Chain link evaluated"
            );
            produced.push(evaluation);
        }

        Ok(produced)
    }
}
