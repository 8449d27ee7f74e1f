//! Applicants submitting grant proposals

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::ApplicantId;
use crate::application::{Application, ApplicationData};
use crate::error::GrantError;

/// Party submitting a grant proposal
///
/// Identity and name are fixed at registration; only the contact fields change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    id: ApplicantId,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
}

impl Applicant {
    /// Registers a new applicant
    pub fn new(
        name: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, GrantError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GrantError::validation("applicant name must not be empty"));
        }

        Ok(Self {
            id: ApplicantId::new_v7(),
            name,
            email,
            phone,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> ApplicantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the contact fields
    pub fn update_contact(&mut self, email: Option<String>, phone: Option<String>) {
        self.email = email;
        self.phone = phone;
    }

    /// Starts an application that stays in `Draft` until submitted
    pub fn draft_application(&self, data: ApplicationData) -> Application {
        Application::new(self.id, data)
    }

    /// Creates an application and submits it straight away
    pub fn prepare_application(&self, data: ApplicationData) -> Result<Application, GrantError> {
        let mut application = self.draft_application(data);
        application.submit()?;

        info!(
            applicant = %self.name,
            application_id = %application.id(),
            title = %application.data().title(),
            "Applicant submitted application"
        );
        Ok(application)
    }
}
