//! Weekly lead funnel built from the daily counters.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::lead_metrics::DailyLeadMetric;
use crate::domain::metrics::{Trend, percentage};
use crate::domain::types::DateRange;
use crate::domain::week::{WeekKey, weeks_in};
use crate::dto::reports::{
    FunnelCounts, FunnelRates, FunnelReport, FunnelTotals, FunnelTrends, FunnelWeek,
};
use crate::forms::reports::ReportRangeForm;
use crate::repository::LeadMetricsReader;
use crate::services::ServiceResult;

/// Loads the funnel for the requested window, one entry per ISO week.
pub fn funnel_report<R>(
    repo: &R,
    form: ReportRangeForm,
    today: NaiveDate,
) -> ServiceResult<FunnelReport>
where
    R: LeadMetricsReader + ?Sized,
{
    let range = form.into_range(today)?;
    let metrics = repo.list_daily_lead_metrics(&range)?;
    Ok(build_funnel(range, &metrics))
}

fn add_metric(counts: &mut FunnelCounts, metric: &DailyLeadMetric) {
    counts.leads_generated += metric.leads_generated;
    counts.leads_contacted += metric.leads_contacted;
    counts.leads_qualified += metric.leads_qualified;
    counts.meetings_booked += metric.meetings_booked;
    counts.meetings_held += metric.meetings_held;
    counts.deals_closed += metric.deals_closed;
}

fn funnel_rates(counts: &FunnelCounts) -> FunnelRates {
    FunnelRates {
        contact_rate: percentage(counts.leads_contacted, counts.leads_generated),
        qualification_rate: percentage(counts.leads_qualified, counts.leads_contacted),
        booking_rate: percentage(counts.meetings_booked, counts.leads_qualified),
        show_rate: percentage(counts.meetings_held, counts.meetings_booked),
        close_rate: percentage(counts.deals_closed, counts.meetings_held),
    }
}

fn funnel_trends(
    previous: Option<&(FunnelCounts, FunnelRates)>,
    counts: &FunnelCounts,
    rates: &FunnelRates,
) -> FunnelTrends {
    let Some((prev_counts, prev_rates)) = previous else {
        return FunnelTrends::default();
    };

    FunnelTrends {
        leads_generated: Trend::between(
            prev_counts.leads_generated as f64,
            counts.leads_generated as f64,
        ),
        meetings_held: Trend::between(
            prev_counts.meetings_held as f64,
            counts.meetings_held as f64,
        ),
        deals_closed: Trend::between(prev_counts.deals_closed as f64, counts.deals_closed as f64),
        close_rate: Trend::between(prev_rates.close_rate, rates.close_rate),
    }
}

pub(crate) fn build_funnel(range: DateRange, metrics: &[DailyLeadMetric]) -> FunnelReport {
    let mut by_week: BTreeMap<WeekKey, FunnelCounts> = weeks_in(&range)
        .into_iter()
        .map(|week| (week, FunnelCounts::default()))
        .collect();
    let mut totals = FunnelCounts::default();

    for metric in metrics.iter().filter(|m| range.contains(m.metric_date)) {
        add_metric(by_week.entry(WeekKey::of(metric.metric_date)).or_default(), metric);
        add_metric(&mut totals, metric);
    }

    let mut previous: Option<(FunnelCounts, FunnelRates)> = None;
    let mut weeks = Vec::with_capacity(by_week.len());
    for (week, counts) in by_week {
        let rates = funnel_rates(&counts);
        let trends = funnel_trends(previous.as_ref(), &counts, &rates);
        weeks.push(FunnelWeek {
            week: week.label(),
            week_start: week.start(),
            counts,
            rates,
            trends,
        });
        previous = Some((counts, rates));
    }

    FunnelReport {
        range,
        weeks,
        totals: FunnelTotals {
            rates: funnel_rates(&totals),
            counts: totals,
        },
    }
}
