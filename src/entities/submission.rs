use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::utils::korean_timestamp;

pub const PREREGISTER_KIND: &str = "사전신청";

// One submission per request. Never persisted here; durable storage
// belongs to the sheet.
#[derive(Debug, Clone)]
pub struct Submission {
    pub email: String,
    pub submitted_at: DateTime<Local>,
    pub kind: String,
}

impl Submission {
    pub fn new(email: String, kind: Option<String>) -> Self {
        Self {
            email,
            submitted_at: Local::now(),
            kind: kind.unwrap_or_else(|| PREREGISTER_KIND.to_string()),
        }
    }

    pub fn submitted_at_display(&self) -> String {
        korean_timestamp(self.submitted_at)
    }

    // The sheet only ever sees these three fields.
    pub fn sheet_record(&self) -> SheetRecord {
        SheetRecord {
            email: self.email.clone(),
            timestamp: self.submitted_at_display(),
            kind: PREREGISTER_KIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRecord {
    pub email: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod test {
    use super::{Submission, PREREGISTER_KIND};

    #[test]
    fn test_sheet_record_always_carries_the_fixed_kind() {
        let submission = Submission::new("a@b.com".to_string(), Some("베타신청".to_string()));

        let record = submission.sheet_record();
        assert_eq!(record.email, "a@b.com");
        assert_eq!(record.kind, PREREGISTER_KIND);
        assert_eq!(record.timestamp, submission.submitted_at_display());
    }

    #[test]
    fn test_kind_defaults_when_absent() {
        let submission = Submission::new("a@b.com".to_string(), None);
        assert_eq!(submission.kind, PREREGISTER_KIND);
    }

    #[test]
    fn test_sheet_record_serializes_kind_as_type() {
        let record = Submission::new("a@b.com".to_string(), None).sheet_record();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["type"], PREREGISTER_KIND);
        assert!(json.get("kind").is_none());
    }
}
