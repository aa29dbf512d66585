//! SDR and closer leaderboards.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::metrics::{average_amount, percentage, rank_descending, round_to};
use crate::domain::types::SalesRole;
use crate::domain::user_mapping::NameResolver;
use crate::dto::reports::{
    CloserProductivityReport, CloserProductivityRow, SdrProductivityReport, SdrProductivityRow,
};
use crate::forms::reports::ReportRangeForm;
use crate::repository::{ActivityReader, MeetingReader, SalesReader, UserMappingReader};
use crate::services::ServiceResult;

fn resolver<R>(repo: &R, role: SalesRole) -> ServiceResult<NameResolver>
where
    R: UserMappingReader + ?Sized,
{
    let mappings = repo.list_user_mappings(Some(role))?;
    Ok(NameResolver::for_role(&mappings, role))
}

/// Call activity and meeting outcomes per SDR, ranked by meetings booked.
pub fn sdr_productivity<R>(
    repo: &R,
    form: ReportRangeForm,
    today: NaiveDate,
) -> ServiceResult<SdrProductivityReport>
where
    R: ActivityReader + MeetingReader + UserMappingReader + ?Sized,
{
    let range = form.into_range(today)?;
    let names = resolver(repo, SalesRole::Sdr)?;

    let mut rows: BTreeMap<String, SdrProductivityRow> = BTreeMap::new();

    for activity in repo.sdr_activity_totals(&range)? {
        let name = names.resolve(&activity.name);
        let row = rows.entry(name.clone()).or_default();
        row.name = name;
        row.dials += activity.dials;
        row.connects += activity.connects;
        row.conversations += activity.conversations;
        row.meetings_booked += activity.meetings_booked;
    }

    for counts in repo.meeting_counts_by_person(&range, SalesRole::Sdr)? {
        let name = names.resolve(&counts.name);
        let row = rows.entry(name.clone()).or_default();
        row.name = name;
        row.meetings_scheduled += counts.scheduled;
        row.showed += counts.showed;
        row.no_show += counts.no_show;
    }

    let mut sdrs: Vec<SdrProductivityRow> = rows
        .into_values()
        .map(|mut row| {
            row.connect_rate = percentage(row.connects, row.dials);
            row.conversation_rate = percentage(row.conversations, row.connects);
            row.booking_rate = percentage(row.meetings_booked, row.conversations);
            row.show_rate = percentage(row.showed, row.showed + row.no_show);
            row
        })
        .collect();

    let ranks = rank_descending(&mut sdrs, |r| r.meetings_booked as f64, |r| r.name.as_str());
    for (row, rank) in sdrs.iter_mut().zip(ranks) {
        row.rank = rank;
    }

    Ok(SdrProductivityReport { range, sdrs })
}

/// Meeting outcomes and revenue per closer, ranked by revenue.
pub fn closer_productivity<R>(
    repo: &R,
    form: ReportRangeForm,
    today: NaiveDate,
) -> ServiceResult<CloserProductivityReport>
where
    R: MeetingReader + SalesReader + UserMappingReader + ?Sized,
{
    let range = form.into_range(today)?;
    let names = resolver(repo, SalesRole::Closer)?;

    let mut rows: BTreeMap<String, CloserProductivityRow> = BTreeMap::new();

    for counts in repo.meeting_counts_by_person(&range, SalesRole::Closer)? {
        let name = names.resolve(&counts.name);
        let row = rows.entry(name.clone()).or_default();
        row.name = name;
        row.meetings += counts.scheduled;
        row.showed += counts.showed;
        row.no_show += counts.no_show;
        row.won += counts.won;
    }

    for sales in repo.sales_by_closer(&range)? {
        let name = names.resolve(&sales.key);
        let row = rows.entry(name.clone()).or_default();
        row.name = name;
        row.deals += sales.deals;
        row.units += sales.units;
        row.revenue += sales.revenue;
    }

    let mut closers: Vec<CloserProductivityRow> = rows
        .into_values()
        .map(|mut row| {
            row.revenue = round_to(row.revenue, 2);
            row.show_rate = percentage(row.showed, row.showed + row.no_show);
            row.close_rate = percentage(row.won, row.showed);
            row.average_deal = average_amount(row.revenue, row.deals);
            row
        })
        .collect();

    let ranks = rank_descending(&mut closers, |r| r.revenue, |r| r.name.as_str());
    for (row, rank) in closers.iter_mut().zip(ranks) {
        row.rank = rank;
    }

    Ok(CloserProductivityReport { range, closers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::SdrActivity;
    use crate::domain::meeting::MeetingCounts;
    use crate::domain::sales::SalesTotals;
    use crate::domain::types::{PersonName, UserMappingId};
    use crate::domain::user_mapping::UserMapping;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    fn form() -> ReportRangeForm {
        ReportRangeForm {
            start_date: Some("2026-03-02".into()),
            end_date: Some("2026-03-29".into()),
        }
    }

    fn mapping(id: i32, source: &str, display: &str, role: SalesRole) -> UserMapping {
        UserMapping {
            id: UserMappingId::new(id).expect("valid id"),
            source_name: PersonName::new(source).expect("valid name"),
            display_name: PersonName::new(display).expect("valid name"),
            role,
            active: true,
        }
    }

    fn activity(name: &str, dials: i64, connects: i64, conversations: i64, booked: i64) -> SdrActivity {
        SdrActivity {
            name: name.into(),
            dials,
            connects,
            conversations,
            meetings_booked: booked,
        }
    }

    fn counts(name: &str, scheduled: i64, showed: i64, no_show: i64, won: i64) -> MeetingCounts {
        MeetingCounts {
            name: name.into(),
            scheduled,
            showed,
            no_show,
            won,
        }
    }

    #[test]
    fn sdr_rows_merge_mapped_names_and_share_ranks() {
        let mut repo = MockRepository::new();
        repo.expect_list_user_mappings()
            .withf(|role| *role == Some(SalesRole::Sdr))
            .returning(|_| {
                Ok(vec![
                    mapping(1, "asmith", "Alice Smith", SalesRole::Sdr),
                    mapping(2, "alice", "Alice Smith", SalesRole::Sdr),
                ])
            });
        repo.expect_sdr_activity_totals().returning(|_| {
            Ok(vec![
                activity("alice", 50, 10, 5, 2),
                activity("asmith", 100, 40, 20, 8),
                activity("bob", 80, 20, 10, 10),
                activity("carl", 30, 6, 3, 1),
            ])
        });
        repo.expect_meeting_counts_by_person()
            .withf(|_, role| *role == SalesRole::Sdr)
            .returning(|_, _| {
                Ok(vec![
                    counts("asmith", 12, 8, 2, 0),
                    counts("bob", 10, 5, 5, 0),
                    counts("dana", 3, 1, 0, 0),
                ])
            });

        let report = sdr_productivity(&repo, form(), today()).expect("report");

        let summary: Vec<_> = report
            .sdrs
            .iter()
            .map(|r| (r.rank, r.name.as_str(), r.meetings_booked))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "Alice Smith", 10),
                (1, "bob", 10),
                (3, "carl", 1),
                (4, "dana", 0),
            ]
        );

        let alice = &report.sdrs[0];
        assert_eq!(alice.dials, 150);
        assert_eq!(alice.connect_rate, 33.3);
        assert_eq!(alice.conversation_rate, 50.0);
        assert_eq!(alice.booking_rate, 40.0);
        assert_eq!(alice.show_rate, 80.0);
        assert_eq!(alice.meetings_scheduled, 12);

        let bob = &report.sdrs[1];
        assert_eq!(bob.connect_rate, 25.0);
        assert_eq!(bob.booking_rate, 100.0);
        assert_eq!(bob.show_rate, 50.0);

        let dana = &report.sdrs[3];
        assert_eq!(dana.connect_rate, 0.0);
        assert_eq!(dana.show_rate, 100.0);
    }

    #[test]
    fn closer_rows_combine_meetings_and_revenue() {
        let mut repo = MockRepository::new();
        repo.expect_list_user_mappings()
            .returning(|_| Ok(vec![mapping(1, "cj", "Carla Jones", SalesRole::Closer)]));
        repo.expect_meeting_counts_by_person()
            .withf(|_, role| *role == SalesRole::Closer)
            .returning(|_, _| {
                Ok(vec![
                    counts("cj", 10, 8, 2, 4),
                    counts("dave", 6, 3, 3, 1),
                ])
            });
        repo.expect_sales_by_closer().returning(|_| {
            Ok(vec![
                SalesTotals {
                    key: "Carla Jones".into(),
                    deals: 3,
                    units: 5,
                    revenue: 1000.0,
                },
                SalesTotals {
                    key: "dave".into(),
                    deals: 1,
                    units: 1,
                    revenue: 1500.5,
                },
                SalesTotals {
                    key: "erin".into(),
                    deals: 1,
                    units: 2,
                    revenue: 1000.0,
                },
            ])
        });

        let report = closer_productivity(&repo, form(), today()).expect("report");

        let summary: Vec<_> = report
            .closers
            .iter()
            .map(|r| (r.rank, r.name.as_str(), r.revenue))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "dave", 1500.5),
                (2, "Carla Jones", 1000.0),
                (2, "erin", 1000.0),
            ]
        );

        let carla = &report.closers[1];
        assert_eq!(carla.meetings, 10);
        assert_eq!(carla.close_rate, 50.0);
        assert_eq!(carla.show_rate, 80.0);
        assert_eq!(carla.average_deal, 333.33);

        let dave = &report.closers[0];
        assert_eq!(dave.close_rate, 33.3);
        assert_eq!(dave.average_deal, 1500.5);

        let erin = &report.closers[2];
        assert_eq!(erin.meetings, 0);
        assert_eq!(erin.close_rate, 0.0);
    }

    #[test]
    fn repository_failure_is_an_error() {
        let mut repo = MockRepository::new();
        repo.expect_list_user_mappings().returning(|_| Ok(vec![]));
        repo.expect_sdr_activity_totals()
            .returning(|_| Err(RepositoryError::DatabaseError("no such table".into())));

        let result = sdr_productivity(&repo, form(), today());

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
