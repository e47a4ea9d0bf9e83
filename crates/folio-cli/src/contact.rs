//! Simulated contact-form submission.
//!
//! There is no backend: submission validates the fields, waits the same
//! fixed delay the site uses, and reports success. Validation errors are
//! the only failure mode.

use std::time::Duration;

use anyhow::{Result, bail};

/// Fixed simulated round-trip, matching the site's mock submit.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Debug)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() {
            bail!("name must not be empty");
        }
        if !looks_like_email(email) {
            bail!("'{email}' does not look like an email address");
        }
        if message.is_empty() {
            bail!("message must not be empty");
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Just enough shape-checking for a form field: one `@` with something on
/// both sides and a dot in the domain.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Pretend to deliver the message and return the confirmation line.
pub async fn submit(message: &ContactMessage) -> String {
    tokio::time::sleep(SUBMIT_DELAY).await;
    format!(
        "Message sent! Thank you for reaching out, {} — I'll get back to you soon.",
        message.name
    )
}
