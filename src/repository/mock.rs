//! Mock repository implementations for isolating services in tests.

use mockall::mock;
use serde_json::Value;

use crate::domain::activity::SdrActivity;
use crate::domain::form_option::{FormOption, NewFormOption, UpdateFormOption};
use crate::domain::lead_metrics::DailyLeadMetric;
use crate::domain::meeting::{Meeting, MeetingCounts};
use crate::domain::sales::SalesTotals;
use crate::domain::table::RowInsert;
use crate::domain::types::{DateRange, FormOptionId, SalesRole, UserMappingId};
use crate::domain::user_mapping::{NewUserMapping, UpdateUserMapping, UserMapping};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ActivityReader, FormOptionListQuery, FormOptionReader, FormOptionWriter, LeadMetricsReader,
    MeetingReader, SalesReader, TableQuery, TableReader, TableWriter,
    UserMappingReader, UserMappingWriter,
};

mock! {
    pub Repository {}

    impl LeadMetricsReader for Repository {
        fn list_daily_lead_metrics(&self, range: &DateRange) -> RepositoryResult<Vec<DailyLeadMetric>>;
    }

    impl MeetingReader for Repository {
        fn list_meetings(&self, range: &DateRange) -> RepositoryResult<Vec<Meeting>>;
        fn meeting_counts_by_person(
            &self,
            range: &DateRange,
            role: SalesRole,
        ) -> RepositoryResult<Vec<MeetingCounts>>;
    }

    impl ActivityReader for Repository {
        fn sdr_activity_totals(&self, range: &DateRange) -> RepositoryResult<Vec<SdrActivity>>;
    }

    impl SalesReader for Repository {
        fn sales_by_closer(&self, range: &DateRange) -> RepositoryResult<Vec<SalesTotals>>;
        fn sales_by_product(&self, range: &DateRange) -> RepositoryResult<Vec<SalesTotals>>;
    }

    impl UserMappingReader for Repository {
        fn list_user_mappings(&self, role: Option<SalesRole>) -> RepositoryResult<Vec<UserMapping>>;
        fn get_user_mapping(&self, id: UserMappingId) -> RepositoryResult<Option<UserMapping>>;
    }

    impl UserMappingWriter for Repository {
        fn create_user_mapping(&self, mapping: &NewUserMapping) -> RepositoryResult<UserMapping>;
        fn update_user_mapping(
            &self,
            id: UserMappingId,
            mapping: &UpdateUserMapping,
        ) -> RepositoryResult<UserMapping>;
        fn delete_user_mapping(&self, id: UserMappingId) -> RepositoryResult<()>;
    }

    impl FormOptionReader for Repository {
        fn list_form_options(&self, query: &FormOptionListQuery) -> RepositoryResult<Vec<FormOption>>;
    }

    impl FormOptionWriter for Repository {
        fn create_form_option(&self, option: &NewFormOption) -> RepositoryResult<FormOption>;
        fn update_form_option(
            &self,
            id: FormOptionId,
            option: &UpdateFormOption,
        ) -> RepositoryResult<FormOption>;
        fn delete_form_option(&self, id: FormOptionId) -> RepositoryResult<()>;
    }

    impl TableReader for Repository {
        fn count_table_rows(&self, query: &TableQuery) -> RepositoryResult<usize>;
        fn browse_table_rows(&self, query: &TableQuery) -> RepositoryResult<Vec<Value>>;
    }

    impl TableWriter for Repository {
        fn insert_table_row(&self, insert: &RowInsert) -> RepositoryResult<Value>;
    }
}
