use chrono::{DateTime, Utc};

/// New emergency case id: `EMG-<unix millis>-<0..999>`.
#[must_use]
pub fn new_case_id() -> String {
    format_case_id(Utc::now(), rand::random_range(0..1000))
}

fn format_case_id(at: DateTime<Utc>, suffix: u16) -> String {
    format!("EMG-{}-{suffix}", at.timestamp_millis())
}
