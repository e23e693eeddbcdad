pub mod config;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod service;
pub mod utils;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware, web, App,
};

use crate::error::Error;
use crate::handlers::indexer::ping;
use crate::handlers::preregister::{post_preregister, post_sheet};
use crate::service::preregister::PreregisterService;
use crate::service::sheet::SheetService;

pub fn create_app(
    preregister: Arc<PreregisterService>,
    sheet: Arc<SheetService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    let cors = Cors::permissive();
    // An unreadable body falls into the same generic failure the rest of
    // the unanticipated errors do.
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| Error::Unexpected(anyhow::anyhow!("{}", err)).into());

    let app = App::new()
        .wrap(cors)
        .wrap(middleware::Logger::default())
        .app_data(json_config)
        .app_data(web::Data::from(preregister))
        .app_data(web::Data::from(sheet))
        .service(post_preregister)
        .service(post_sheet)
        .service(ping);
    app
}
