use diesel::prelude::*;

use crate::{
    domain::{lead_metrics::DailyLeadMetric, types::DateRange},
    models::lead_metrics::DailyLeadMetric as DbDailyLeadMetric,
    repository::{DieselRepository, LeadMetricsReader, errors::RepositoryResult},
};

impl LeadMetricsReader for DieselRepository {
    fn list_daily_lead_metrics(&self, range: &DateRange) -> RepositoryResult<Vec<DailyLeadMetric>> {
        use crate::schema::daily_lead_metrics;

        let mut conn = self.conn()?;

        let rows = daily_lead_metrics::table
            .filter(daily_lead_metrics::metric_date.between(range.start(), range.end()))
            .order(daily_lead_metrics::metric_date.asc())
            .select(DbDailyLeadMetric::as_select())
            .load::<DbDailyLeadMetric>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
