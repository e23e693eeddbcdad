use derive_more::{Display, Error};
use reqwest::header::CONTENT_TYPE;

use crate::entities::submission::SheetRecord;

#[derive(Debug, Display, Error)]
pub enum SheetError {
    #[display(fmt = "스크립트 설정 오류")]
    Unconfigured,
    #[display(fmt = "Google Apps Script 요청 실패: {}", _0)]
    Request(#[error(not(source))] String),
    #[display(fmt = "Google Apps Script 요청 실패: {} - {}", code, body)]
    HttpStatus {
        code: u16,
        body: String,
    },
    #[display(fmt = "Google Apps Script 실행 오류 - 스프레드시트 연결을 확인해주세요")]
    RemoteExecution,
    #[display(fmt = "Google Apps Script 응답 형식 오류")]
    MalformedResponse,
}

// Posts one record per call to the configured Apps Script webhook.
// No retry; the caller decides how fatal a failure is.
pub struct SheetService {
    client: reqwest::Client,
    url: Option<String>,
}

impl SheetService {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub async fn forward(&self, record: &SheetRecord) -> Result<serde_json::Value, SheetError> {
        let Some(url) = &self.url else {
            return Err(SheetError::Unconfigured);
        };

        let response = self
            .client
            .post(url)
            .json(record)
            .send()
            .await
            .map_err(|err| SheetError::Request(err.to_string()))?;

        let status = response.status();
        let html_content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(false, |value| value.starts_with("text/html"));
        let body = response
            .text()
            .await
            .map_err(|err| SheetError::Request(err.to_string()))?;

        if !status.is_success() {
            return Err(SheetError::HttpStatus {
                code: status.as_u16(),
                body,
            });
        }

        interpret_response(&body, html_content_type)
    }
}

// A 200 from Apps Script can still be a failure: its error pages come back
// as HTML with a success status. The substring checks keep compatibility
// with the error page text that backend emits.
fn interpret_response(
    body: &str,
    html_content_type: bool,
) -> Result<serde_json::Value, SheetError> {
    match serde_json::from_str(body) {
        Ok(value) => Ok(value),
        Err(_)
            if html_content_type
                || body.contains("<!DOCTYPE html>")
                || body.contains("TypeError") =>
        {
            Err(SheetError::RemoteExecution)
        }
        Err(_) => Err(SheetError::MalformedResponse),
    }
}

#[cfg(test)]
mod test {
    use super::{interpret_response, SheetError};

    #[test]
    fn test_parsed_json_is_returned() {
        let value = interpret_response(r#"{"result":"ok","row":17}"#, false).unwrap();
        assert_eq!(value["result"], "ok");
        assert_eq!(value["row"], 17);
    }

    #[test]
    fn test_html_error_page_is_a_remote_execution_error() {
        let body = "<!DOCTYPE html><html><body>Script error</body></html>";
        assert!(matches!(
            interpret_response(body, false),
            Err(SheetError::RemoteExecution)
        ));
    }

    #[test]
    fn test_type_error_marker_is_a_remote_execution_error() {
        let body = "TypeError: Cannot read properties of undefined";
        assert!(matches!(
            interpret_response(body, false),
            Err(SheetError::RemoteExecution)
        ));
    }

    #[test]
    fn test_html_content_type_is_a_remote_execution_error() {
        assert!(matches!(
            interpret_response("<html>oops</html>", true),
            Err(SheetError::RemoteExecution)
        ));
    }

    #[test]
    fn test_other_junk_is_a_malformed_response() {
        assert!(matches!(
            interpret_response("row appended", false),
            Err(SheetError::MalformedResponse)
        ));
    }

    #[test]
    fn test_json_served_as_html_still_parses() {
        let value = interpret_response(r#"{"result":"ok"}"#, true).unwrap();
        assert_eq!(value["result"], "ok");
    }
}
