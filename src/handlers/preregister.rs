use actix_web::{
    post,
    web::{self, Json},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::submission::Submission;
use crate::error::Result;
use crate::service::preregister::PreregisterService;
use crate::service::sheet::SheetService;
use crate::service::validator::validate_email;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreregisterRequest {
    pub email: Option<String>,
    // Advisory label, only ever shown in the admin notice.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreregisterResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SheetForwardResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[utoipa::path(
    request_body(
        content = PreregisterRequest
    ),
    responses(
        (status = 200, body = PreregisterResponse)
    )
)]
#[post("/api/mail")]
pub async fn post_preregister(
    Json(data): web::Json<PreregisterRequest>,
    service: web::Data<PreregisterService>,
) -> Result<web::Json<PreregisterResponse>> {
    service.submit(data.email.as_deref(), data.kind).await?;

    Ok(web::Json(PreregisterResponse { success: true }))
}

#[utoipa::path(
    request_body(
        content = PreregisterRequest
    ),
    responses(
        (status = 200, body = SheetForwardResponse)
    )
)]
#[post("/api/sheet")]
pub async fn post_sheet(
    Json(data): web::Json<PreregisterRequest>,
    sheet: web::Data<SheetService>,
) -> Result<web::Json<SheetForwardResponse>> {
    let email = validate_email(data.email.as_deref())?;
    let submission = Submission::new(email, data.kind);

    let data = sheet.forward(&submission.sheet_record()).await?;

    Ok(web::Json(SheetForwardResponse {
        success: true,
        data,
    }))
}
