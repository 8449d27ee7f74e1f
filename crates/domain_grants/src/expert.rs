//! Experts and the factory that registers them

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use core_kernel::ExpertId;
use crate::application::Application;
use crate::error::GrantError;
use crate::evaluation::Evaluation;
use crate::scoring::{ScoreSource, ScoringPolicy};

/// Qualification tier, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
    Standard,
    Doctorate,
}

impl FromStr for Qualification {
    type Err = GrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Qualification::Standard),
            "doctorate" | "phd" => Ok(Qualification::Doctorate),
            _ => Err(GrantError::validation(format!("unknown qualification '{s}'"))),
        }
    }
}

/// A domain expert able to evaluate applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expert {
    pub id: ExpertId,
    pub name: String,
    /// Keyword matched against application titles
    pub specialization: String,
    /// Degree as registered, e.g. "PhD"
    pub degree: String,
    pub qualification: Qualification,
    pub scoring: ScoringPolicy,
}

impl Expert {
    /// Scores the application and attaches the resulting evaluation
    pub fn evaluate(
        &self,
        application: &mut Application,
        scores: &mut dyn ScoreSource,
    ) -> Result<Evaluation, GrantError> {
        let score = self.scoring.score(scores);
        let evaluation = Evaluation::new(
            application.id(),
            self.id,
            score,
            self.scoring.comment(&self.name),
        );
        application.attach_evaluation(evaluation.clone())?;
        Ok(evaluation)
    }
}

/// Builds expert records from registration input
pub trait ExpertFactory: Send + Sync {
    fn create_expert(&self, name: &str, specialization: &str, degree: &str) -> Expert;
}

/// Maps a "PhD" degree to the high-confidence policy, everything else to base
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeExpertFactory;

impl ExpertFactory for DegreeExpertFactory {
    fn create_expert(&self, name: &str, specialization: &str, degree: &str) -> Expert {
        let (qualification, scoring) = if degree.trim() == "PhD" {
            (Qualification::Doctorate, ScoringPolicy::HighConfidence)
        } else {
            (Qualification::Standard, ScoringPolicy::Base)
        };

        Expert {
            id: ExpertId::new_v7(),
            name: name.to_string(),
            specialization: specialization.to_string(),
            degree: degree.to_string(),
            qualification,
            scoring,
        }
    }
}
