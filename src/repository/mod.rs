use serde_json::Value;

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        activity::SdrActivity,
        form_option::{FormOption, NewFormOption, UpdateFormOption},
        lead_metrics::DailyLeadMetric,
        meeting::{Meeting, MeetingCounts},
        sales::SalesTotals,
        table::{CellValue, ColumnSpec, RowInsert, TableSpec},
        types::{DateRange, FormOptionId, OptionField, SalesRole, UserMappingId},
        user_mapping::{NewUserMapping, UpdateUserMapping, UserMapping},
    },
    repository::errors::RepositoryResult,
};

pub mod activity;
pub mod errors;
pub mod form_option;
pub mod lead_metrics;
pub mod meeting;
#[cfg(test)]
pub mod mock;
pub mod sales;
pub mod table;
pub mod user_mapping;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOptionListQuery {
    pub field: Option<OptionField>,
    pub active_only: bool,
}

impl FormOptionListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: OptionField) -> Self {
        self.field = Some(field);
        self
    }

    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }
}

/// Page request against one catalog table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub table: &'static TableSpec,
    /// Equality filter; a [`CellValue::Null`] matches `IS NULL`.
    pub filter: Option<(&'static ColumnSpec, CellValue)>,
    pub pagination: Pagination,
}

impl TableQuery {
    pub fn new(table: &'static TableSpec, page: usize, per_page: usize) -> Self {
        Self {
            table,
            filter: None,
            pagination: Pagination { page, per_page },
        }
    }

    pub fn filter(mut self, column: &'static ColumnSpec, value: CellValue) -> Self {
        self.filter = Some((column, value));
        self
    }
}

pub trait LeadMetricsReader {
    fn list_daily_lead_metrics(&self, range: &DateRange) -> RepositoryResult<Vec<DailyLeadMetric>>;
}

pub trait MeetingReader {
    /// Meetings scheduled on any day of `range`, oldest first.
    fn list_meetings(&self, range: &DateRange) -> RepositoryResult<Vec<Meeting>>;
    fn meeting_counts_by_person(
        &self,
        range: &DateRange,
        role: SalesRole,
    ) -> RepositoryResult<Vec<MeetingCounts>>;
}

pub trait ActivityReader {
    fn sdr_activity_totals(&self, range: &DateRange) -> RepositoryResult<Vec<SdrActivity>>;
}

pub trait SalesReader {
    fn sales_by_closer(&self, range: &DateRange) -> RepositoryResult<Vec<SalesTotals>>;
    fn sales_by_product(&self, range: &DateRange) -> RepositoryResult<Vec<SalesTotals>>;
}

pub trait UserMappingReader {
    fn list_user_mappings(&self, role: Option<SalesRole>) -> RepositoryResult<Vec<UserMapping>>;
    fn get_user_mapping(&self, id: UserMappingId) -> RepositoryResult<Option<UserMapping>>;
}

pub trait UserMappingWriter {
    fn create_user_mapping(&self, mapping: &NewUserMapping) -> RepositoryResult<UserMapping>;
    fn update_user_mapping(
        &self,
        id: UserMappingId,
        mapping: &UpdateUserMapping,
    ) -> RepositoryResult<UserMapping>;
    fn delete_user_mapping(&self, id: UserMappingId) -> RepositoryResult<()>;
}

pub trait FormOptionReader {
    fn list_form_options(&self, query: &FormOptionListQuery) -> RepositoryResult<Vec<FormOption>>;
}

pub trait FormOptionWriter {
    fn create_form_option(&self, option: &NewFormOption) -> RepositoryResult<FormOption>;
    fn update_form_option(
        &self,
        id: FormOptionId,
        option: &UpdateFormOption,
    ) -> RepositoryResult<FormOption>;
    fn delete_form_option(&self, id: FormOptionId) -> RepositoryResult<()>;
}

pub trait TableReader {
    fn count_table_rows(&self, query: &TableQuery) -> RepositoryResult<usize>;
    fn browse_table_rows(&self, query: &TableQuery) -> RepositoryResult<Vec<Value>>;
}

pub trait TableWriter {
    fn insert_table_row(&self, insert: &RowInsert) -> RepositoryResult<Value>;
}
