use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::submission::Submission;
use crate::error::{Error, Result};
use crate::service::mail::{admin_notice_message, confirmation_message, Mailer};
use crate::service::sheet::SheetService;
use crate::service::validator::validate_email;

// The secondary effect that runs after the confirmation mail. Exactly one
// variant is wired in per deployment.
#[async_trait]
pub trait FollowUp: Send + Sync {
    async fn run(&self, submission: &Submission) -> anyhow::Result<()>;
}

pub struct SheetFollowUp {
    sheet: Arc<SheetService>,
}

impl SheetFollowUp {
    pub fn new(sheet: Arc<SheetService>) -> Self {
        Self { sheet }
    }
}

#[async_trait]
impl FollowUp for SheetFollowUp {
    async fn run(&self, submission: &Submission) -> anyhow::Result<()> {
        self.sheet.forward(&submission.sheet_record()).await?;
        Ok(())
    }
}

pub struct AdminNoticeFollowUp {
    mailer: Arc<dyn Mailer>,
    admin_email: String,
}

impl AdminNoticeFollowUp {
    pub fn new(mailer: Arc<dyn Mailer>, admin_email: String) -> Self {
        Self {
            mailer,
            admin_email,
        }
    }
}

#[async_trait]
impl FollowUp for AdminNoticeFollowUp {
    async fn run(&self, submission: &Submission) -> anyhow::Result<()> {
        self.mailer
            .send(&admin_notice_message(&self.admin_email, submission))?;
        Ok(())
    }
}

pub struct PreregisterService {
    mailer: Arc<dyn Mailer>,
    follow_up: Arc<dyn FollowUp>,
}

impl PreregisterService {
    pub fn new(mailer: Arc<dyn Mailer>, follow_up: Arc<dyn FollowUp>) -> Self {
        Self { mailer, follow_up }
    }

    // Validation failures and a failed confirmation mail abort the request.
    // Once the submitter has their confirmation, a follow-up failure must
    // not make the signup look failed, so it is logged and dropped.
    pub async fn submit(&self, email: Option<&str>, kind: Option<String>) -> Result<Submission> {
        let email = validate_email(email)?;
        let submission = Submission::new(email, kind);

        self.mailer
            .send(&confirmation_message(&submission.email))
            .map_err(Error::UserMail)?;

        if let Err(err) = self.follow_up.run(&submission).await {
            log::warn!(
                "pre-registration follow-up failed for {}: {}",
                submission.email,
                err
            );
        }

        Ok(submission)
    }
}
