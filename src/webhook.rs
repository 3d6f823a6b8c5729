//! Outbound webhook for contact and quote form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, SubmissionError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    #[default]
    Contact,
    Quote,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(rename = "type")]
    pub kind: SubmissionKind,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub products: Vec<String>,
}

impl FormSubmission {
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.name.trim().is_empty() {
            return Err(SubmissionError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(SubmissionError::InvalidEmail(self.email.clone()));
        }
        match self.kind {
            SubmissionKind::Contact if self.message.trim().is_empty() => {
                Err(SubmissionError::MissingMessage)
            }
            SubmissionKind::Quote if self.products.iter().all(|p| p.trim().is_empty()) => {
                Err(SubmissionError::EmptyQuote)
            }
            _ => Ok(()),
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Wire format posted to the webhook
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    #[serde(flatten)]
    pub submission: &'a FormSubmission,
    pub submitted_at: DateTime<Utc>,
}

/// Posts form submissions to a single webhook URL
#[derive(Clone)]
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Returns true only when the webhook answered with a 2xx status.
    pub async fn notify(&self, submission: &FormSubmission) -> bool {
        if self.url.trim().is_empty() {
            tracing::warn!("No webhook URL configured; dropping {:?} submission", submission.kind);
            return false;
        }

        match self.send(submission).await {
            Ok(()) => {
                tracing::info!("Webhook accepted {:?} submission", submission.kind);
                true
            }
            Err(e) => {
                tracing::warn!("Webhook delivery failed: {}", e);
                false
            }
        }
    }

    async fn send(&self, submission: &FormSubmission) -> Result<(), ClientError> {
        let payload = WebhookPayload {
            submission,
            submitted_at: Utc::now(),
        };

        let response = self.client
            .post(&self.url)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::ApiError(format!("{}: {}", status, error_text)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> FormSubmission {
        FormSubmission {
            kind: SubmissionKind::Contact,
            name: "Ana Pérez".to_string(),
            email: "ana@tejidos.example".to_string(),
            message: "Quisiera conocer los horarios del local".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_contact() {
        assert_eq!(contact().validate(), Ok(()));
    }

    #[test]
    fn test_missing_name() {
        let submission = FormSubmission { name: "   ".to_string(), ..contact() };
        assert_eq!(submission.validate(), Err(SubmissionError::MissingName));
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["", "ana", "@tejidos.example", "ana@localhost", "ana@.example", "ana@example."] {
            let submission = FormSubmission { email: email.to_string(), ..contact() };
            assert_eq!(
                submission.validate(),
                Err(SubmissionError::InvalidEmail(email.to_string())),
                "accepted {email:?}"
            );
        }
    }

    #[test]
    fn test_contact_needs_message() {
        let submission = FormSubmission { message: String::new(), ..contact() };
        assert_eq!(submission.validate(), Err(SubmissionError::MissingMessage));
    }

    #[test]
    fn test_quote_needs_products_not_message() {
        let mut quote = FormSubmission {
            kind: SubmissionKind::Quote,
            message: String::new(),
            ..contact()
        };
        assert_eq!(quote.validate(), Err(SubmissionError::EmptyQuote));

        quote.products = vec!["Lino crudo x 50m".to_string()];
        assert_eq!(quote.validate(), Ok(()));
    }

    #[test]
    fn test_payload_shape() {
        let submission = FormSubmission {
            kind: SubmissionKind::Quote,
            products: vec!["Hilo poliéster".to_string()],
            ..contact()
        };
        let payload = WebhookPayload {
            submission: &submission,
            submitted_at: "2026-03-01T12:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "quote");
        assert_eq!(value["name"], "Ana Pérez");
        assert_eq!(value["products"][0], "Hilo poliéster");
        assert_eq!(value["submitted_at"], "2026-03-01T12:00:00Z");
    }
}
