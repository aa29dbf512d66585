use chrono::{NaiveDateTime, NaiveTime};
use diesel::prelude::*;
use diesel::sql_types::Timestamp;

use crate::{
    domain::{
        meeting::{Meeting, MeetingCounts},
        types::{DateRange, SalesRole},
    },
    models::meeting::{Meeting as DbMeeting, MeetingCounts as DbMeetingCounts},
    repository::{DieselRepository, MeetingReader, errors::RepositoryResult},
};

/// Half-open `[start, end)` timestamp bounds covering every day of `range`.
fn timestamp_bounds(range: &DateRange) -> (NaiveDateTime, NaiveDateTime) {
    (
        range.start().and_time(NaiveTime::MIN),
        range.end_exclusive().and_time(NaiveTime::MIN),
    )
}

fn person_column(role: SalesRole) -> &'static str {
    match role {
        SalesRole::Sdr => "sdr_name",
        SalesRole::Closer => "closer_name",
    }
}

impl MeetingReader for DieselRepository {
    fn list_meetings(&self, range: &DateRange) -> RepositoryResult<Vec<Meeting>> {
        use crate::schema::meetings;

        let mut conn = self.conn()?;
        let (from, until) = timestamp_bounds(range);

        let rows = meetings::table
            .filter(meetings::scheduled_at.ge(from))
            .filter(meetings::scheduled_at.lt(until))
            .order((meetings::scheduled_at.asc(), meetings::id.asc()))
            .select(DbMeeting::as_select())
            .load::<DbMeeting>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn meeting_counts_by_person(
        &self,
        range: &DateRange,
        role: SalesRole,
    ) -> RepositoryResult<Vec<MeetingCounts>> {
        let mut conn = self.conn()?;
        let (from, until) = timestamp_bounds(range);
        let column = person_column(role);

        let sql = format!(
            "SELECT {column} AS name, \
                COUNT(*) AS scheduled, \
                COALESCE(SUM(CASE WHEN lower(trim(status)) = 'showed' THEN 1 ELSE 0 END), 0) AS showed, \
                COALESCE(SUM(CASE WHEN lower(trim(status)) = 'no_show' THEN 1 ELSE 0 END), 0) AS no_show, \
                COALESCE(SUM(CASE WHEN lower(trim(outcome)) = 'won' THEN 1 ELSE 0 END), 0) AS won \
             FROM meetings \
             WHERE scheduled_at >= ? AND scheduled_at < ? \
                AND {column} IS NOT NULL AND trim({column}) <> '' \
             GROUP BY {column} \
             ORDER BY {column}"
        );

        let rows = diesel::sql_query(sql)
            .bind::<Timestamp, _>(from)
            .bind::<Timestamp, _>(until)
            .load::<DbMeetingCounts>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
