use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use time::PrimitiveDateTime;

use crate::core::config::Settings;
use crate::core::time::format_primitive;

/// Outbound mail client for submission confirmations (SendGrid v3).
/// Absent when no API key is configured; callers treat send failures as
/// non-fatal.
#[derive(Debug, Clone)]
pub(crate) struct EmailService {
    client: Client,
    api_key: String,
    base_url: String,
    from_address: String,
}

impl EmailService {
    pub(crate) fn from_settings(settings: &Settings) -> Result<Option<Self>> {
        let email = settings.email();
        if email.sendgrid_api_key.is_empty() {
            return Ok(None);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(email.timeout_seconds))
            .build()
            .context("Failed to build mail HTTP client")?;

        Ok(Some(Self {
            client,
            api_key: email.sendgrid_api_key.clone(),
            base_url: email.sendgrid_base_url.trim_end_matches('/').to_string(),
            from_address: email.from_address.clone(),
        }))
    }

    pub(crate) async fn send_submission_confirmation(
        &self,
        recipient: &str,
        submitted_at: PrimitiveDateTime,
        submission_link: &str,
    ) -> Result<()> {
        let endpoint = format!("{}/mail/send", self.base_url);
        let payload = build_confirmation_payload(
            &self.from_address,
            recipient,
            submitted_at,
            submission_link,
        );

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .context("Failed to call mail API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("mail API returned status {status}: {body}");
        }

        Ok(())
    }
}

fn build_confirmation_payload(
    from: &str,
    to: &str,
    submitted_at: PrimitiveDateTime,
    submission_link: &str,
) -> Value {
    let body = format!(
        "<strong>Exam submission details:</strong>\
         <p>Submitted at: {}</p>\
         <p>Project link: <a href=\"{submission_link}\">{submission_link}</a></p>",
        format_primitive(submitted_at)
    );

    json!({
        "personalizations": [{"to": [{"email": to}]}],
        "from": {"email": from},
        "subject": "Final exam submission confirmation",
        "content": [{"type": "text/html", "value": body}],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Time};

    #[test]
    fn confirmation_payload_carries_recipient_and_link() {
        let date = Date::from_calendar_date(2025, time::Month::June, 5).unwrap();
        let submitted_at = PrimitiveDateTime::new(date, Time::from_hms(14, 30, 0).unwrap());

        let payload = build_confirmation_payload(
            "examenes@institutoalfa.com",
            "student@example.com",
            submitted_at,
            "https://github.com/org/repo",
        );

        assert_eq!(
            payload["personalizations"][0]["to"][0]["email"],
            "student@example.com"
        );
        assert_eq!(payload["from"]["email"], "examenes@institutoalfa.com");
        let body = payload["content"][0]["value"].as_str().unwrap();
        assert!(body.contains("https://github.com/org/repo"));
        assert!(body.contains("2025-06-05T14:30:00Z"));
    }
}
