use chrono::{DateTime, Datelike, Local, Timelike};

// Renders the moment the way the sheet expects it, matching
// JS `toLocaleString("ko-KR")`: "2026. 8. 6. 오후 2:05:09".
pub fn korean_timestamp(at: DateTime<Local>) -> String {
    let meridiem = if at.hour() < 12 { "오전" } else { "오후" };
    let hour = match at.hour() % 12 {
        0 => 12,
        hour => hour,
    };

    format!(
        "{}. {}. {}. {} {}:{:02}:{:02}",
        at.year(),
        at.month(),
        at.day(),
        meridiem,
        hour,
        at.minute(),
        at.second()
    )
}
