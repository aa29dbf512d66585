//! Diesel models for meeting rows.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};

use crate::domain::meeting::{Meeting as DomainMeeting, MeetingCounts as DomainMeetingCounts};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::meetings)]
/// Diesel model for [`crate::domain::meeting::Meeting`].
pub struct Meeting {
    pub id: i32,
    pub sdr_name: String,
    pub closer_name: Option<String>,
    pub lead_source: String,
    pub lead_quality: Option<String>,
    pub scheduled_at: NaiveDateTime,
    pub status: String,
    pub outcome: Option<String>,
}

#[derive(Debug, QueryableByName)]
/// Row of the grouped meeting counters query.
pub struct MeetingCounts {
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = BigInt)]
    pub scheduled: i64,
    #[diesel(sql_type = BigInt)]
    pub showed: i64,
    #[diesel(sql_type = BigInt)]
    pub no_show: i64,
    #[diesel(sql_type = BigInt)]
    pub won: i64,
}

impl From<Meeting> for DomainMeeting {
    fn from(meeting: Meeting) -> Self {
        Self {
            id: meeting.id,
            sdr_name: meeting.sdr_name,
            closer_name: meeting.closer_name,
            lead_source: meeting.lead_source,
            lead_quality: meeting.lead_quality,
            scheduled_at: meeting.scheduled_at,
            status: meeting.status.into(),
            outcome: meeting.outcome,
        }
    }
}

impl From<MeetingCounts> for DomainMeetingCounts {
    fn from(row: MeetingCounts) -> Self {
        Self {
            name: row.name,
            scheduled: row.scheduled,
            showed: row.showed,
            no_show: row.no_show,
            won: row.won,
        }
    }
}
