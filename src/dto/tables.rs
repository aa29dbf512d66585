//! DTOs returned by the table browser.

use serde::Serialize;
use serde_json::Value;

use crate::pagination::Paginated;

/// A page of rows from one catalog table.
#[derive(Debug, Serialize)]
pub struct TablePage {
    pub table: &'static str,
    pub columns: Vec<&'static str>,
    #[serde(flatten)]
    pub rows: Paginated<Value>,
}

/// Row echoed back after a successful insert.
#[derive(Debug, Serialize)]
pub struct InsertedRow {
    pub table: &'static str,
    pub row: Value,
}
