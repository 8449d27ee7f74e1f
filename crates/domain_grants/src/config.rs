//! Workflow configuration

use serde::{Deserialize, Serialize};

use core_kernel::{CoreError, Currency};
use crate::expert::Qualification;
use crate::selection::{
    BySpecialization, ExpertSelectionStrategy, QualificationThreshold, RoundRobin,
};

/// Which selection strategy the workflow wires chains with
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SelectionConfig {
    /// Specialization keyword found in the title
    #[default]
    BySpecialization,
    /// Experts at or above `minimum`
    QualificationThreshold { minimum: Qualification },
    /// Rotating window of `team_size` experts
    RoundRobin { team_size: usize },
}

impl SelectionConfig {
    /// Instantiates the configured strategy
    pub fn build(&self) -> Box<dyn ExpertSelectionStrategy> {
        match self {
            SelectionConfig::BySpecialization => Box::new(BySpecialization),
            SelectionConfig::QualificationThreshold { minimum } => {
                Box::new(QualificationThreshold::new(*minimum))
            }
            SelectionConfig::RoundRobin { team_size } => Box::new(RoundRobin::new(*team_size)),
        }
    }
}

/// Settings for [`GrantWorkflowService`](crate::service::GrantWorkflowService)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Currency every application must request in
    pub currency: Currency,
    /// Reject decisions granting more than was requested
    pub enforce_requested_cap: bool,
    pub selection: SelectionConfig,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            enforce_requested_cap: false,
            selection: SelectionConfig::default(),
        }
    }
}

impl WorkflowConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let SelectionConfig::RoundRobin { team_size: 0 } = self.selection {
            return Err(CoreError::configuration(
                "selection.team_size",
                "round robin selection needs a team size of at least 1",
            ));
        }
        Ok(())
    }
}
