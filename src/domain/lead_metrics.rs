use chrono::NaiveDate;
use serde::Serialize;

/// One day of funnel counters.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct DailyLeadMetric {
    pub metric_date: NaiveDate,
    pub leads_generated: i64,
    pub leads_contacted: i64,
    pub leads_qualified: i64,
    pub meetings_booked: i64,
    pub meetings_held: i64,
    pub deals_closed: i64,
}
