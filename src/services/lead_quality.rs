//! Meeting outcomes broken down by lead quality and lead source.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::meeting::{Meeting, MeetingStatus};
use crate::domain::metrics::percentage;
use crate::domain::types::DateRange;
use crate::dto::reports::{LeadQualityBucket, LeadQualityReport};
use crate::forms::reports::ReportRangeForm;
use crate::repository::MeetingReader;
use crate::services::ServiceResult;

const UNKNOWN_SOURCE: &str = "unknown";

/// Lead-quality breakdown for the window.
///
/// Like the show-rate report, database failures are logged and produce an
/// empty report instead of an error.
pub fn lead_quality<R>(
    repo: &R,
    form: ReportRangeForm,
    today: NaiveDate,
) -> ServiceResult<LeadQualityReport>
where
    R: MeetingReader + ?Sized,
{
    let range = form.into_range(today)?;

    let meetings = match repo.list_meetings(&range) {
        Ok(meetings) => meetings,
        Err(err) => {
            log::error!("Failed to load meetings for lead quality: {err}");
            Vec::new()
        }
    };

    Ok(build_lead_quality(range, &meetings))
}

fn source_of(meeting: &Meeting) -> &str {
    let source = meeting.lead_source.trim();
    if source.is_empty() {
        UNKNOWN_SOURCE
    } else {
        source
    }
}

fn buckets<'a, F>(meetings: &'a [Meeting], total: i64, key: F) -> Vec<LeadQualityBucket>
where
    F: Fn(&'a Meeting) -> &'a str,
{
    let mut grouped: BTreeMap<&str, LeadQualityBucket> = BTreeMap::new();

    for meeting in meetings {
        let name = key(meeting);
        let bucket = grouped.entry(name).or_insert_with(|| LeadQualityBucket {
            name: name.to_string(),
            ..LeadQualityBucket::default()
        });
        bucket.meetings += 1;
        match meeting.status {
            MeetingStatus::Showed => bucket.showed += 1,
            MeetingStatus::NoShow => bucket.no_show += 1,
            _ => {}
        }
        if meeting.is_won() {
            bucket.won += 1;
        }
    }

    let mut rows: Vec<LeadQualityBucket> = grouped
        .into_values()
        .map(|mut bucket| {
            bucket.share = percentage(bucket.meetings, total);
            bucket.show_rate = percentage(bucket.showed, bucket.showed + bucket.no_show);
            bucket.close_rate = percentage(bucket.won, bucket.showed);
            bucket
        })
        .collect();

    rows.sort_by(|a, b| b.meetings.cmp(&a.meetings).then_with(|| a.name.cmp(&b.name)));
    rows
}

pub(crate) fn build_lead_quality(range: DateRange, meetings: &[Meeting]) -> LeadQualityReport {
    let meetings: Vec<Meeting> = meetings
        .iter()
        .filter(|m| range.contains(m.scheduled_at.date()))
        .cloned()
        .collect();
    let total = meetings.len() as i64;

    LeadQualityReport {
        range,
        total_meetings: total,
        by_quality: buckets(&meetings, total, Meeting::quality_bucket),
        by_source: buckets(&meetings, total, source_of),
    }
}
