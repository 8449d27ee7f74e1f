//! Expert evaluations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ApplicationId, EvaluationId, ExpertId};

/// One expert's scored judgment of an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: EvaluationId,
    pub application_id: ApplicationId,
    pub expert_id: ExpertId,
    pub score: u8,
    pub comment: String,
    pub evaluated_at: DateTime<Utc>,
}

impl Evaluation {
    /// Creates a new evaluation
    pub fn new(
        application_id: ApplicationId,
        expert_id: ExpertId,
        score: u8,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: EvaluationId::new_v7(),
            application_id,
            expert_id,
            score,
            comment: comment.into(),
            evaluated_at: Utc::now(),
        }
    }
}
