//! Meeting attendance by week.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::meeting::{Meeting, MeetingStatus};
use crate::domain::metrics::{Trend, percentage};
use crate::domain::types::SalesRole;
use crate::domain::user_mapping::NameResolver;
use crate::domain::week::{WeekKey, weeks_in};
use crate::dto::reports::{ShowRateSummary, ShowRateWeek, ShowRatesReport, StatusCounts};
use crate::forms::reports::{ShowRatesForm, ShowRatesPayload};
use crate::repository::errors::RepositoryResult;
use crate::repository::{MeetingReader, UserMappingReader};
use crate::services::ServiceResult;

/// Show and no-show rates for the window.
///
/// Database failures are logged and answered with an all-zero report so the
/// dashboard keeps rendering; only malformed input is an error.
pub fn show_rates<R>(
    repo: &R,
    form: ShowRatesForm,
    today: NaiveDate,
) -> ServiceResult<ShowRatesReport>
where
    R: MeetingReader + UserMappingReader + ?Sized,
{
    let payload = form.into_payload(today)?;

    let meetings = match load_meetings(repo, &payload) {
        Ok(meetings) => meetings,
        Err(err) => {
            log::error!("Failed to load meetings for show rates: {err}");
            Vec::new()
        }
    };

    Ok(build_show_rates(payload, &meetings))
}

/// Meetings of the window, narrowed to the requested people. Names are
/// matched after mapping, the same way the leaderboards attribute them.
fn load_meetings<R>(repo: &R, payload: &ShowRatesPayload) -> RepositoryResult<Vec<Meeting>>
where
    R: MeetingReader + UserMappingReader + ?Sized,
{
    let mut meetings = repo.list_meetings(&payload.range)?;

    if payload.sdr_name.is_none() && payload.closer_name.is_none() {
        return Ok(meetings);
    }

    let mappings = repo.list_user_mappings(None)?;
    if let Some(name) = &payload.sdr_name {
        let sdrs = NameResolver::for_role(&mappings, SalesRole::Sdr);
        meetings.retain(|m| sdrs.resolves_to(&m.sdr_name, name));
    }
    if let Some(name) = &payload.closer_name {
        let closers = NameResolver::for_role(&mappings, SalesRole::Closer);
        meetings.retain(|m| {
            m.closer_name
                .as_deref()
                .is_some_and(|closer| closers.resolves_to(closer, name))
        });
    }

    Ok(meetings)
}

fn tally(counts: &mut StatusCounts, status: &MeetingStatus) {
    counts.total += 1;
    match status {
        MeetingStatus::Scheduled => counts.scheduled += 1,
        MeetingStatus::Showed => counts.showed += 1,
        MeetingStatus::NoShow => counts.no_show += 1,
        MeetingStatus::Cancelled => counts.cancelled += 1,
        MeetingStatus::Rescheduled => counts.rescheduled += 1,
        MeetingStatus::Other(_) => counts.other += 1,
    }
}

fn summarize(counts: StatusCounts) -> ShowRateSummary {
    let attended = counts.showed + counts.no_show;
    ShowRateSummary {
        counts,
        show_rate: percentage(counts.showed, attended),
        no_show_rate: percentage(counts.no_show, attended),
    }
}

pub(crate) fn build_show_rates(payload: ShowRatesPayload, meetings: &[Meeting]) -> ShowRatesReport {
    let range = payload.range;
    let mut by_week: BTreeMap<WeekKey, StatusCounts> = weeks_in(&range)
        .into_iter()
        .map(|week| (week, StatusCounts::default()))
        .collect();
    let mut totals = StatusCounts::default();

    for meeting in meetings {
        let day = meeting.scheduled_at.date();
        if !range.contains(day) {
            continue;
        }
        tally(by_week.entry(WeekKey::of(day)).or_default(), &meeting.status);
        tally(&mut totals, &meeting.status);
    }

    let mut previous: Option<f64> = None;
    let weeks = by_week
        .into_iter()
        .map(|(week, counts)| {
            let summary = summarize(counts);
            let trend = Trend::since(previous, summary.show_rate);
            previous = Some(summary.show_rate);
            ShowRateWeek {
                week: week.label(),
                week_start: week.start(),
                summary,
                trend,
            }
        })
        .collect();

    ShowRatesReport {
        range,
        sdr_name: payload.sdr_name.map(Into::into),
        closer_name: payload.closer_name.map(Into::into),
        totals: summarize(totals),
        weeks,
    }
}
