use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::table::DATE_FORMAT;
use crate::domain::types::{DateRange, PersonName};
use crate::domain::week::monday_weeks_back;
use crate::forms::{FormError, non_blank};

/// Whole weeks preceding the current one in the default window.
pub const DEFAULT_WEEKS_BACK: u64 = 7;

#[derive(Debug, Default, Clone, Deserialize)]
/// Date window shared by every report request.
pub struct ReportRangeForm {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

fn parse_date(value: Option<String>, field: &'static str) -> Result<Option<NaiveDate>, FormError> {
    non_blank(value)
        .map(|v| NaiveDate::parse_from_str(&v, DATE_FORMAT).map_err(|_| FormError::InvalidDate(field)))
        .transpose()
}

impl ReportRangeForm {
    /// Resolves the requested window. A missing end is `today`; a missing
    /// start is the Monday [`DEFAULT_WEEKS_BACK`] weeks before the end.
    pub fn into_range(self, today: NaiveDate) -> Result<DateRange, FormError> {
        let start = parse_date(self.start_date, "start_date")?;
        let end = parse_date(self.end_date, "end_date")?.unwrap_or(today);
        let start = start.unwrap_or_else(|| monday_weeks_back(end, DEFAULT_WEEKS_BACK));

        DateRange::new(start, end).map_err(FormError::InvalidRange)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ShowRatesForm {
    #[serde(flatten)]
    pub range: ReportRangeForm,
    #[serde(default)]
    pub sdr_name: Option<String>,
    #[serde(default)]
    pub closer_name: Option<String>,
}

pub struct ShowRatesPayload {
    pub range: DateRange,
    pub sdr_name: Option<PersonName>,
    pub closer_name: Option<PersonName>,
}

impl ShowRatesForm {
    pub fn into_payload(self, today: NaiveDate) -> Result<ShowRatesPayload, FormError> {
        let name = |value: Option<String>| {
            non_blank(value)
                .map(|v| PersonName::new(v).map_err(|_| FormError::InvalidName))
                .transpose()
        };

        Ok(ShowRatesPayload {
            range: self.range.into_range(today)?,
            sdr_name: name(self.sdr_name)?,
            closer_name: name(self.closer_name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn missing_dates_default_to_eight_weeks() {
        let range = ReportRangeForm::default()
            .into_range(date(2026, 10, 21))
            .expect("default range");
        assert_eq!(range.start(), date(2026, 8, 31));
        assert_eq!(range.end(), date(2026, 10, 21));
    }

    #[test]
    fn explicit_dates_are_used_verbatim() {
        let form = ReportRangeForm {
            start_date: Some("2026-03-02".into()),
            end_date: Some(" 2026-03-15 ".into()),
        };
        let range = form.into_range(date(2026, 10, 21)).expect("valid range");
        assert_eq!(range.start(), date(2026, 3, 2));
        assert_eq!(range.end(), date(2026, 3, 15));
    }

    #[test]
    fn blank_dates_count_as_missing() {
        let form = ReportRangeForm {
            start_date: Some("".into()),
            end_date: Some("2026-03-15".into()),
        };
        let range = form.into_range(date(2026, 10, 21)).expect("valid range");
        assert_eq!(range.start(), date(2026, 1, 19));
    }

    #[test]
    fn malformed_or_inverted_dates_are_rejected() {
        let form = ReportRangeForm {
            start_date: Some("03/02/2026".into()),
            end_date: None,
        };
        assert!(matches!(
            form.into_range(date(2026, 10, 21)),
            Err(FormError::InvalidDate("start_date"))
        ));

        let form = ReportRangeForm {
            start_date: Some("2026-03-10".into()),
            end_date: Some("2026-03-01".into()),
        };
        assert!(matches!(
            form.into_range(date(2026, 10, 21)),
            Err(FormError::InvalidRange(_))
        ));
    }

    #[test]
    fn show_rates_names_are_optional() {
        let form: ShowRatesForm = serde_json::from_str(
            r#"{"start_date": "2026-03-02", "end_date": "2026-03-08", "sdr_name": " Alice ", "closer_name": ""}"#,
        )
        .expect("valid json");
        let payload = form.into_payload(date(2026, 10, 21)).expect("valid payload");
        assert_eq!(payload.sdr_name.as_deref(), Some("Alice"));
        assert!(payload.closer_name.is_none());
    }
}
