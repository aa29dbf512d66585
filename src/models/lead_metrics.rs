//! Diesel model for the daily funnel counters.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::lead_metrics::DailyLeadMetric as DomainDailyLeadMetric;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::daily_lead_metrics)]
pub struct DailyLeadMetric {
    pub id: i32,
    pub metric_date: NaiveDate,
    pub leads_generated: i32,
    pub leads_contacted: i32,
    pub leads_qualified: i32,
    pub meetings_booked: i32,
    pub meetings_held: i32,
    pub deals_closed: i32,
}

impl From<DailyLeadMetric> for DomainDailyLeadMetric {
    fn from(row: DailyLeadMetric) -> Self {
        Self {
            metric_date: row.metric_date,
            leads_generated: row.leads_generated.into(),
            leads_contacted: row.leads_contacted.into(),
            leads_qualified: row.leads_qualified.into(),
            meetings_booked: row.meetings_booked.into(),
            meetings_held: row.meetings_held.into(),
            deals_closed: row.deals_closed.into(),
        }
    }
}
