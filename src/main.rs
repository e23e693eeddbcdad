use std::sync::Arc;

use actix_web::HttpServer;
use preregister::config::Config;
use preregister::create_app;
use preregister::service::mail::{Mailer, SmtpMailer};
use preregister::service::preregister::{
    AdminNoticeFollowUp, FollowUp, PreregisterService, SheetFollowUp,
};
use preregister::service::sheet::SheetService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().unwrap();

    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&config.mail).unwrap());
    let sheet = Arc::new(SheetService::new(config.sheet_url.clone()));

    let follow_up: Arc<dyn FollowUp> = match &config.admin_email {
        Some(admin_email) => Arc::new(AdminNoticeFollowUp::new(
            mailer.clone(),
            admin_email.clone(),
        )),
        None => Arc::new(SheetFollowUp::new(sheet.clone())),
    };

    let service = Arc::new(PreregisterService::new(mailer, follow_up));

    HttpServer::new(move || create_app(service.clone(), sheet.clone()))
        .bind(("0.0.0.0", 3001))?
        .run()
        .await
}
