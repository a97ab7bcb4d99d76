//! venewatch-mail
//!
//! Synchronous SMTP transport for the surveillance report: a plain-text body
//! plus the PDF as an attachment. Server address and credentials are supplied
//! by the caller's configuration, never embedded here.

pub mod error;

pub use error::MailError;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use serde::{Deserialize, Serialize};

const REPORT_FILENAME: &str = "venewatch-report.pdf";

/// SMTP settings. Loaded from the user's config file by the session binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    pub smtp_host: String,
    /// Implicit-TLS submission port, typically 465.
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

pub struct Mailer {
    config: MailerConfig,
}

impl Mailer {
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    /// Send the report. Blocks until the SMTP exchange completes; a failure
    /// is returned once with the transport reason and the caller may retry
    /// with the same report bytes.
    pub fn send_report(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        pdf: Vec<u8>,
    ) -> Result<(), MailError> {
        let message = build_message(&self.config.from_address, to, subject, body, pdf)?;

        let transport = SmtpTransport::relay(&self.config.smtp_host)?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .build();

        tracing::info!(to, host = %self.config.smtp_host, "sending report by email");
        transport.send(&message)?;
        Ok(())
    }
}

/// Assemble the multipart message: text body + PDF attachment.
pub fn build_message(
    from: &str,
    to: &str,
    subject: &str,
    body: &str,
    pdf: Vec<u8>,
) -> Result<Message, MailError> {
    let pdf_type = ContentType::parse("application/pdf")
        .map_err(|e| MailError::ContentType(e.to_string()))?;

    let message = Message::builder()
        .from(from.parse()?)
        .to(to.parse()?)
        .subject(subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body.to_string()))
                .singlepart(Attachment::new(REPORT_FILENAME.to_string()).body(pdf, pdf_type)),
        )?;

    Ok(message)
}
