//! JSON payloads returned by the report endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::metrics::Trend;
use crate::domain::types::DateRange;

/// Sums of the six daily funnel counters.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct FunnelCounts {
    pub leads_generated: i64,
    pub leads_contacted: i64,
    pub leads_qualified: i64,
    pub meetings_booked: i64,
    pub meetings_held: i64,
    pub deals_closed: i64,
}

/// Stage-to-stage conversion percentages.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct FunnelRates {
    pub contact_rate: f64,
    pub qualification_rate: f64,
    pub booking_rate: f64,
    pub show_rate: f64,
    pub close_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct FunnelTrends {
    pub leads_generated: Trend,
    pub meetings_held: Trend,
    pub deals_closed: Trend,
    pub close_rate: Trend,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunnelWeek {
    /// ISO week label, e.g. `2026-W10`.
    pub week: String,
    pub week_start: NaiveDate,
    #[serde(flatten)]
    pub counts: FunnelCounts,
    #[serde(flatten)]
    pub rates: FunnelRates,
    pub trends: FunnelTrends,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FunnelTotals {
    #[serde(flatten)]
    pub counts: FunnelCounts,
    #[serde(flatten)]
    pub rates: FunnelRates,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunnelReport {
    pub range: DateRange,
    pub weeks: Vec<FunnelWeek>,
    pub totals: FunnelTotals,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SdrProductivityRow {
    pub rank: u32,
    pub name: String,
    pub dials: i64,
    pub connects: i64,
    pub conversations: i64,
    pub meetings_booked: i64,
    /// Meetings on the calendar attributed to this SDR.
    pub meetings_scheduled: i64,
    pub showed: i64,
    pub no_show: i64,
    pub connect_rate: f64,
    pub conversation_rate: f64,
    pub booking_rate: f64,
    pub show_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SdrProductivityReport {
    pub range: DateRange,
    pub sdrs: Vec<SdrProductivityRow>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CloserProductivityRow {
    pub rank: u32,
    pub name: String,
    pub meetings: i64,
    pub showed: i64,
    pub no_show: i64,
    pub won: i64,
    pub deals: i64,
    pub units: i64,
    pub revenue: f64,
    pub show_rate: f64,
    pub close_rate: f64,
    pub average_deal: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CloserProductivityReport {
    pub range: DateRange,
    pub closers: Vec<CloserProductivityRow>,
}

/// Meetings counted by status. `total` includes every status.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: i64,
    pub scheduled: i64,
    pub showed: i64,
    pub no_show: i64,
    pub cancelled: i64,
    pub rescheduled: i64,
    pub other: i64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ShowRateSummary {
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub show_rate: f64,
    pub no_show_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShowRateWeek {
    pub week: String,
    pub week_start: NaiveDate,
    #[serde(flatten)]
    pub summary: ShowRateSummary,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShowRatesReport {
    pub range: DateRange,
    pub sdr_name: Option<String>,
    pub closer_name: Option<String>,
    pub totals: ShowRateSummary,
    pub weeks: Vec<ShowRateWeek>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LeadQualityBucket {
    pub name: String,
    pub meetings: i64,
    pub showed: i64,
    pub no_show: i64,
    pub won: i64,
    pub share: f64,
    pub show_rate: f64,
    pub close_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeadQualityReport {
    pub range: DateRange,
    pub total_meetings: i64,
    pub by_quality: Vec<LeadQualityBucket>,
    pub by_source: Vec<LeadQualityBucket>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProductSalesRow {
    pub product: String,
    pub units: i64,
    pub deals: i64,
    pub revenue: f64,
    pub revenue_share: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct SalesTotalsRow {
    pub units: i64,
    pub deals: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalesSummaryReport {
    pub range: DateRange,
    pub products: Vec<ProductSalesRow>,
    pub totals: SalesTotalsRow,
}
