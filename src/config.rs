use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub relay: String,
    pub address: String,
    pub password: String,
}

// Read once in main and handed to the services that need it. Nothing
// reads the environment mid-request.
#[derive(Debug, Clone)]
pub struct Config {
    pub mail: MailConfig,
    pub admin_email: Option<String>,
    pub sheet_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            mail: MailConfig {
                relay: env::var("SMTP_RELAY").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                address: env::var("EMAIL_USER").context("EMAIL_USER is not set")?,
                password: env::var("EMAIL_PASS").context("EMAIL_PASS is not set")?,
            },
            admin_email: env::var("ADMIN_EMAIL").ok(),
            sheet_url: env::var("GOOGLE_APPS_SCRIPT_URL").ok(),
        })
    }
}
