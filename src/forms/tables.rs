use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::table::{CellValue, RowInsert, find_table};
use crate::forms::{FormError, non_blank};
use crate::repository::TableQuery;

pub const DEFAULT_PER_PAGE: usize = 50;
pub const MAX_PER_PAGE: usize = 200;
pub const MAX_PAGE: usize = 1_000_000;

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Request for one page of a catalog table.
pub struct BrowseTableForm {
    #[validate(length(min = 1, max = 64))]
    pub table: String,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 1_000_000))]
    pub page: usize,
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 200))]
    pub per_page: usize,
    /// Column compared for equality with `filter_value`.
    #[serde(default)]
    pub filter_column: Option<String>,
    #[serde(default)]
    pub filter_value: Option<Value>,
}

impl TryFrom<BrowseTableForm> for TableQuery {
    type Error = FormError;

    fn try_from(form: BrowseTableForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let table = find_table(&form.table)?;
        let mut query = TableQuery::new(table, form.page, form.per_page);

        if let Some(name) = non_blank(form.filter_column) {
            let column = table.column(&name)?;
            let value = match form.filter_value {
                None | Some(Value::Null) => CellValue::Null,
                Some(value) => column.coerce(&value)?,
            };
            query = query.filter(column, value);
        }

        Ok(query)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// New row for a catalog table, keyed by column name.
pub struct InsertRowForm {
    #[validate(length(min = 1, max = 64))]
    pub table: String,
    pub values: Map<String, Value>,
}

impl TryFrom<InsertRowForm> for RowInsert {
    type Error = FormError;

    fn try_from(form: InsertRowForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let table = find_table(&form.table)?;
        Ok(table.prepare_insert(&form.values)?)
    }
}
