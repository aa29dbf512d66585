use diesel::prelude::*;
use diesel::sql_types::Date;

use crate::{
    domain::{activity::SdrActivity, types::DateRange},
    models::aggregates::SdrActivity as DbSdrActivity,
    repository::{ActivityReader, DieselRepository, errors::RepositoryResult},
};

impl ActivityReader for DieselRepository {
    fn sdr_activity_totals(&self, range: &DateRange) -> RepositoryResult<Vec<SdrActivity>> {
        let mut conn = self.conn()?;

        let rows = diesel::sql_query(
            "SELECT sdr_name AS name, \
                COALESCE(SUM(dials), 0) AS dials, \
                COALESCE(SUM(connects), 0) AS connects, \
                COALESCE(SUM(conversations), 0) AS conversations, \
                COALESCE(SUM(meetings_booked), 0) AS meetings_booked \
             FROM sdr_call_logs \
             WHERE call_date BETWEEN ? AND ? \
                AND trim(sdr_name) <> '' \
             GROUP BY sdr_name \
             ORDER BY sdr_name",
        )
        .bind::<Date, _>(range.start())
        .bind::<Date, _>(range.end())
        .load::<DbSdrActivity>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
