use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Quality bucket reported for meetings without a rating.
pub const UNRATED_QUALITY: &str = "unrated";

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Meeting {
    pub id: i32,
    pub sdr_name: String,
    pub closer_name: Option<String>,
    pub lead_source: String,
    pub lead_quality: Option<String>,
    pub scheduled_at: NaiveDateTime,
    pub status: MeetingStatus,
    pub outcome: Option<String>,
}

impl Meeting {
    pub fn is_won(&self) -> bool {
        self.outcome
            .as_deref()
            .is_some_and(|outcome| outcome.trim().eq_ignore_ascii_case("won"))
    }

    /// Quality bucket, falling back to [`UNRATED_QUALITY`].
    pub fn quality_bucket(&self) -> &str {
        self.lead_quality
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(UNRATED_QUALITY)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MeetingStatus {
    Scheduled,
    Showed,
    NoShow,
    Cancelled,
    Rescheduled,
    Other(String),
}

impl Display for MeetingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetingStatus::Scheduled => write!(f, "scheduled"),
            MeetingStatus::Showed => write!(f, "showed"),
            MeetingStatus::NoShow => write!(f, "no_show"),
            MeetingStatus::Cancelled => write!(f, "cancelled"),
            MeetingStatus::Rescheduled => write!(f, "rescheduled"),
            MeetingStatus::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for MeetingStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => MeetingStatus::Scheduled,
            "showed" => MeetingStatus::Showed,
            "no_show" => MeetingStatus::NoShow,
            "cancelled" => MeetingStatus::Cancelled,
            "rescheduled" => MeetingStatus::Rescheduled,
            _ => MeetingStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for MeetingStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

/// Per-person meeting counters aggregated in SQL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeetingCounts {
    pub name: String,
    pub scheduled: i64,
    pub showed: i64,
    pub no_show: i64,
    pub won: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_known_values_and_keeps_unknown() {
        assert_eq!(MeetingStatus::from("No_Show"), MeetingStatus::NoShow);
        assert_eq!(MeetingStatus::NoShow.to_string(), "no_show");
        assert_eq!(
            MeetingStatus::from("tentative"),
            MeetingStatus::Other("tentative".to_string())
        );
    }

    #[test]
    fn padded_status_and_outcome_are_recognized() {
        assert_eq!(MeetingStatus::from(" showed "), MeetingStatus::Showed);

        let meeting = Meeting {
            id: 1,
            sdr_name: "alice".into(),
            closer_name: None,
            lead_source: "webinar".into(),
            lead_quality: None,
            scheduled_at: chrono::NaiveDate::from_ymd_opt(2026, 3, 2)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .expect("valid timestamp"),
            status: MeetingStatus::Showed,
            outcome: Some(" Won ".into()),
        };
        assert!(meeting.is_won());
    }
}
