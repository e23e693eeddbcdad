use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::{Display, Error};
use serde_json::json;

use crate::service::mail::MailError;
use crate::service::sheet::SheetError;
use crate::service::validator::ValidationError;

#[derive(Debug, Display, Error)]
pub enum Error {
    Validation(ValidationError),
    #[display(fmt = "사용자에게 메일 전송 실패")]
    UserMail(MailError),
    Sheet(SheetError),
    #[display(fmt = "메일 전송 실패")]
    Unexpected(#[error(not(source))] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<SheetError> for Error {
    fn from(err: SheetError) -> Self {
        Error::Sheet(err)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::UserMail(_) | Error::Sheet(_) | Error::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Error::Validation(_) | Error::UserMail(_) | Error::Sheet(SheetError::Unconfigured) => {
                json!({ "error": self.to_string() })
            }
            Error::Sheet(err) => json!({ "error": "시트 저장 실패", "detail": err.to_string() }),
            Error::Unexpected(err) => {
                json!({ "error": self.to_string(), "detail": err.to_string() })
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
