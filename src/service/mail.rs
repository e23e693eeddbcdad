use derive_more::{Display, Error};
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};

use crate::config::MailConfig;
use crate::entities::submission::Submission;

#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: Option<String>,
}

#[derive(Debug, Display, Error)]
#[display(fmt = "{}", cause)]
pub struct MailError {
    #[error(not(source))]
    pub cause: String,
}

// Seam for tests: handlers and the intake sequence only see this trait.
pub trait Mailer: Send + Sync {
    fn send(&self, message: &OutboundMessage) -> Result<(), MailError>;
}

// One authenticated sender identity, bound at startup. A single attempt
// per message, no retry.
pub struct SmtpMailer {
    sender: Mailbox,
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> anyhow::Result<Self> {
        let sender: Mailbox = config.address.parse()?;

        let transport = SmtpTransport::relay(&config.relay)?
            .credentials(Credentials::new(
                config.address.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { sender, transport })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let to: Mailbox = message.to.parse().map_err(|err| MailError {
            cause: format!("invalid recipient address: {}", err),
        })?;

        let builder = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(message.subject.clone());

        let email = match &message.html_body {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(
                message.text_body.clone(),
                html.clone(),
            )),
            None => builder.body(message.text_body.clone()),
        }
        .map_err(|err| MailError {
            cause: format!("error building email: {}", err),
        })?;

        self.transport.send(&email).map_err(|err| MailError {
            cause: format!("error sending email: {}", err),
        })?;

        Ok(())
    }
}

pub fn confirmation_message(email: &str) -> OutboundMessage {
    OutboundMessage {
        to: email.to_string(),
        subject: "[TotaloadCert] 사전신청 접수 완료".to_string(),
        text_body: include_str!("../../templates/confirmation.txt").to_string(),
        html_body: Some(include_str!("../../templates/confirmation.html").to_string()),
    }
}

pub fn admin_notice_message(admin_email: &str, submission: &Submission) -> OutboundMessage {
    OutboundMessage {
        to: admin_email.to_string(),
        subject: format!("[TotaloadCert] 새 사전신청 - {}", submission.email),
        text_body: include_str!("../../templates/admin-notice.txt")
            .replace("{email}", &submission.email)
            .replace("{timestamp}", &submission.submitted_at_display())
            .replace("{kind}", &submission.kind),
        html_body: None,
    }
}
