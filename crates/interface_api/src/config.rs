//! API configuration

use std::str::FromStr;

use serde::Deserialize;

use core_kernel::{CoreError, Currency};
use domain_grants::{Qualification, SelectionConfig, WorkflowConfig};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Seed for reproducible scoring; OS randomness when unset
    pub score_seed: Option<u64>,
    /// Register the reference experts, applicant and founder at startup
    pub seed_reference_data: bool,
    /// ISO code every application must request in
    pub currency: String,
    /// Reject grants above the requested amount
    pub enforce_requested_cap: bool,
    /// by_specialization, qualification_threshold or round_robin
    pub selection_strategy: String,
    /// Minimum qualification for qualification_threshold
    pub selection_minimum: Option<String>,
    /// Team size for round_robin
    pub selection_team_size: Option<usize>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            score_seed: None,
            seed_reference_data: false,
            currency: "USD".to_string(),
            enforce_requested_cap: false,
            selection_strategy: "by_specialization".to_string(),
            selection_minimum: None,
            selection_team_size: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds and validates the workflow settings
    pub fn workflow_config(&self) -> Result<WorkflowConfig, CoreError> {
        let currency = Currency::from_str(&self.currency)?;

        let selection = match self.selection_strategy.trim().to_ascii_lowercase().as_str() {
            "by_specialization" | "specialization" => SelectionConfig::BySpecialization,
            "qualification_threshold" | "qualification" => {
                let minimum = match &self.selection_minimum {
                    Some(raw) => Qualification::from_str(raw)
                        .map_err(|e| CoreError::configuration("selection_minimum", e.to_string()))?,
                    None => Qualification::Doctorate,
                };
                SelectionConfig::QualificationThreshold { minimum }
            }
            "round_robin" => SelectionConfig::RoundRobin {
                team_size: self.selection_team_size.unwrap_or(2),
            },
            other => {
                return Err(CoreError::configuration(
                    "selection_strategy",
                    format!("unknown selection strategy '{other}'"),
                ))
            }
        };

        let workflow = WorkflowConfig {
            currency,
            enforce_requested_cap: self.enforce_requested_cap,
            selection,
        };
        workflow.validate()?;
        Ok(workflow)
    }
}
