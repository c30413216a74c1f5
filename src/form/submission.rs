//! Contact form submission.
//!
//! There is no real backend behind the form. Delivery goes through a
//! [`SubmissionTransport`]; the stock [`SimulatedTransport`] waits a fixed
//! latency and then succeeds (or fails, when configured to).

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::phone::phone_digits;
use super::rules::FieldId;
use super::validator::{ContactForm, SuccessNotice};
use crate::error::{Result, SiteError};
use crate::latency::simulate_latency;

/// Alert raised when a submission fails.
pub const SUBMISSION_ALERT: &str =
    "Ocorreu um erro ao enviar sua mensagem. Por favor, tente novamente.";

/// Default simulated delivery latency.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1000);

/// Payload collected from a valid form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub company: String,
    pub email: String,
    /// Digits only.
    pub phone: String,
    pub contact_method: String,
    pub message: String,
}

/// Receipt returned for a delivered submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub submission: ContactSubmission,
    pub submitted_at: String,
}

/// Result of a submit attempt that did not error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The form failed re-validation; errors are now displayed.
    Rejected,
    /// The submission was delivered.
    Submitted(SubmissionReceipt),
}

/// Delivers a collected submission.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn deliver(
        &self,
        submission: &ContactSubmission,
        cancel: &CancellationToken,
    ) -> Result<()>;
}

/// Waits `latency`, then succeeds unless a failure reason is configured.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    pub latency: Duration,
    pub failure: Option<String>,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure: None,
        }
    }

    /// A transport that always rejects with `reason` after the latency.
    pub fn failing(latency: Duration, reason: impl Into<String>) -> Self {
        Self {
            latency,
            failure: Some(reason.into()),
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LATENCY)
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn deliver(
        &self,
        submission: &ContactSubmission,
        cancel: &CancellationToken,
    ) -> Result<()> {
        log::debug!("Delivering contact submission from {}", submission.email);
        simulate_latency(self.latency, cancel).await?;
        match &self.failure {
            Some(reason) => Err(SiteError::Submission(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Success-modal timestamp, e.g. `19/10/2026, 14:05`.
pub fn format_submission_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d/%m/%Y, %H:%M").to_string()
}

impl ContactForm {
    /// Collect the payload from the current values.
    pub fn submission(&self) -> ContactSubmission {
        let trimmed = |field| self.value(field).unwrap_or("").trim().to_string();
        ContactSubmission {
            name: trimmed(FieldId::Name),
            company: trimmed(FieldId::Company),
            email: trimmed(FieldId::Email),
            phone: phone_digits(self.value(FieldId::Phone).unwrap_or("")),
            contact_method: self.value(FieldId::ContactMethod).unwrap_or("").to_string(),
            message: trimmed(FieldId::Message),
        }
    }

    /// First half of [`submit`](Self::submit): re-validate with errors shown
    /// and, if the form is valid, collect the payload and put the form in its
    /// in-flight state (spinner shown, submit control disabled, alert cleared).
    ///
    /// Returns `None` when the form is invalid; nothing else changes then.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if !self.validate_form(true) {
            log::info!("Contact form invalid, submission refused");
            return None;
        }

        self.submitting = true;
        self.submit_enabled = false;
        self.alert = None;
        Some(self.submission())
    }

    /// Second half of [`submit`](Self::submit): apply the delivery result.
    ///
    /// On success the form is reset and the success notice is shown; on
    /// failure or cancellation the control is re-enabled, the alert is raised
    /// and the error is returned.
    pub fn finish_submit(
        &mut self,
        submission: ContactSubmission,
        delivered: Result<()>,
    ) -> Result<SubmitOutcome> {
        self.submitting = false;
        match delivered {
            Ok(()) => {
                let submitted_at = format_submission_time(&Local::now());
                self.success = Some(SuccessNotice {
                    submitted_at: submitted_at.clone(),
                });
                self.reset();
                log::info!("Contact submission delivered at {}", submitted_at);
                Ok(SubmitOutcome::Submitted(SubmissionReceipt {
                    submission,
                    submitted_at,
                }))
            }
            Err(e) => {
                log::error!("Error submitting the contact form: {}", e);
                self.submit_enabled = true;
                self.alert = Some(SUBMISSION_ALERT.to_string());
                Err(e)
            }
        }
    }

    /// Re-validate, then deliver through `transport`. Nothing is retried.
    pub async fn submit<T>(
        &mut self,
        transport: &T,
        cancel: &CancellationToken,
    ) -> Result<SubmitOutcome>
    where
        T: SubmissionTransport + ?Sized,
    {
        let Some(submission) = self.begin_submit() else {
            return Ok(SubmitOutcome::Rejected);
        };
        let delivered = transport.deliver(&submission, cancel).await;
        self.finish_submit(submission, delivered)
    }
}
