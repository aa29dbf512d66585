//! Catalog of tables exposed to the admin table browser.
//!
//! Table and column identifiers used in dynamic SQL come exclusively from
//! [`TABLES`]; user input only ever selects entries from it or ends up as a
//! bound value.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::types::{OptionLabel, SalesRole};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error, PartialEq)]
pub enum TableAccessError {
    #[error("unknown table: {0}")]
    UnknownTable(String),
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("column cannot be written: {0}")]
    ColumnNotInsertable(String),
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error("column {0} cannot be null")]
    NullNotAllowed(String),
    #[error("column {column} expects {expected}")]
    InvalidValue {
        column: String,
        expected: &'static str,
    },
    #[error("no values to insert")]
    EmptyRow,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// 32-bit signed integer.
    Integer,
    /// Non-negative 32-bit counter.
    Count,
    Real,
    Text,
    /// Trimmed, non-empty text such as a person or option name.
    Name,
    /// `sdr` or `closer`.
    Role,
    /// Option label, sanitized of markup.
    Label,
    Date,
    Timestamp,
    Boolean,
}

impl ColumnKind {
    fn expectation(self) -> &'static str {
        match self {
            ColumnKind::Integer => "a 32-bit integer",
            ColumnKind::Count => "a non-negative 32-bit integer",
            ColumnKind::Real => "a number",
            ColumnKind::Text => "a string",
            ColumnKind::Name => "a non-empty string",
            ColumnKind::Role => "sdr or closer",
            ColumnKind::Label => "a non-empty label",
            ColumnKind::Date => "a date formatted YYYY-MM-DD",
            ColumnKind::Timestamp => "a timestamp formatted YYYY-MM-DD HH:MM:SS",
            ColumnKind::Boolean => "a boolean",
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub nullable: bool,
    /// The database fills the column when it is omitted.
    pub has_default: bool,
    pub insertable: bool,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
}

/// Typed value ready to be bound to a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
}

/// Validated insert for one catalog table, cells in catalog order.
#[derive(Debug, PartialEq)]
pub struct RowInsert {
    pub table: &'static TableSpec,
    pub cells: Vec<(&'static ColumnSpec, CellValue)>,
}

const fn column(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec {
        name,
        kind,
        nullable: false,
        has_default: false,
        insertable: true,
    }
}

const fn nullable(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec {
        name,
        kind,
        nullable: true,
        has_default: false,
        insertable: true,
    }
}

const fn defaulted(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec {
        name,
        kind,
        nullable: false,
        has_default: true,
        insertable: true,
    }
}

const ID: ColumnSpec = ColumnSpec {
    name: "id",
    kind: ColumnKind::Integer,
    nullable: false,
    has_default: true,
    insertable: false,
};

pub static TABLES: &[TableSpec] = &[
    TableSpec {
        name: "meetings",
        columns: &[
            ID,
            column("sdr_name", ColumnKind::Name),
            nullable("closer_name", ColumnKind::Name),
            defaulted("lead_source", ColumnKind::Text),
            nullable("lead_quality", ColumnKind::Text),
            column("scheduled_at", ColumnKind::Timestamp),
            defaulted("status", ColumnKind::Text),
            nullable("outcome", ColumnKind::Text),
        ],
    },
    TableSpec {
        name: "sdr_call_logs",
        columns: &[
            ID,
            column("sdr_name", ColumnKind::Name),
            column("call_date", ColumnKind::Date),
            defaulted("dials", ColumnKind::Count),
            defaulted("connects", ColumnKind::Count),
            defaulted("conversations", ColumnKind::Count),
            defaulted("meetings_booked", ColumnKind::Count),
        ],
    },
    TableSpec {
        name: "daily_lead_metrics",
        columns: &[
            ID,
            column("metric_date", ColumnKind::Date),
            defaulted("leads_generated", ColumnKind::Count),
            defaulted("leads_contacted", ColumnKind::Count),
            defaulted("leads_qualified", ColumnKind::Count),
            defaulted("meetings_booked", ColumnKind::Count),
            defaulted("meetings_held", ColumnKind::Count),
            defaulted("deals_closed", ColumnKind::Count),
        ],
    },
    TableSpec {
        name: "product_sales",
        columns: &[
            ID,
            column("sale_date", ColumnKind::Date),
            column("closer_name", ColumnKind::Name),
            column("product", ColumnKind::Name),
            defaulted("quantity", ColumnKind::Count),
            defaulted("amount", ColumnKind::Real),
        ],
    },
    TableSpec {
        name: "user_name_mappings",
        columns: &[
            ID,
            column("source_name", ColumnKind::Name),
            column("display_name", ColumnKind::Name),
            column("role", ColumnKind::Role),
            defaulted("active", ColumnKind::Boolean),
        ],
    },
    TableSpec {
        name: "meeting_form_options",
        columns: &[
            ID,
            column("field", ColumnKind::Name),
            column("value", ColumnKind::Name),
            column("label", ColumnKind::Label),
            defaulted("sort_order", ColumnKind::Count),
            defaulted("active", ColumnKind::Boolean),
        ],
    },
];

/// Looks a table up by its exact name.
pub fn find_table(name: &str) -> Result<&'static TableSpec, TableAccessError> {
    let name = name.trim();
    TABLES
        .iter()
        .find(|table| table.name == name)
        .ok_or_else(|| TableAccessError::UnknownTable(name.to_string()))
}

impl TableSpec {
    pub fn column(&self, name: &str) -> Result<&'static ColumnSpec, TableAccessError> {
        let name = name.trim();
        let columns: &'static [ColumnSpec] = self.columns;
        columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| TableAccessError::UnknownColumn(name.to_string()))
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Validates and types a JSON object of column values for insertion.
    pub fn prepare_insert(
        &'static self,
        values: &Map<String, Value>,
    ) -> Result<RowInsert, TableAccessError> {
        if values.is_empty() {
            return Err(TableAccessError::EmptyRow);
        }

        for (name, _) in values {
            let column = self.column(name)?;
            if !column.insertable {
                return Err(TableAccessError::ColumnNotInsertable(name.clone()));
            }
        }

        let columns: &'static [ColumnSpec] = self.columns;
        let mut cells = Vec::new();
        for column in columns.iter().filter(|c| c.insertable) {
            match values.get(column.name) {
                Some(value) => cells.push((column, column.coerce(value)?)),
                None if column.nullable || column.has_default => {}
                None => return Err(TableAccessError::MissingColumn(column.name.to_string())),
            }
        }

        Ok(RowInsert { table: self, cells })
    }

    /// Rewrites SQLite's 0/1 booleans in a fetched row as JSON booleans.
    pub fn normalize_row(&self, mut row: Value) -> Value {
        if let Value::Object(map) = &mut row {
            for column in self.columns.iter().filter(|c| c.kind == ColumnKind::Boolean) {
                if let Some(value) = map.get_mut(column.name) {
                    if let Some(number) = value.as_i64() {
                        *value = Value::Bool(number != 0);
                    }
                }
            }
        }
        row
    }
}

impl ColumnSpec {
    /// Converts a JSON value into the bind value of this column.
    pub fn coerce(&self, value: &Value) -> Result<CellValue, TableAccessError> {
        if value.is_null() {
            return if self.nullable {
                Ok(CellValue::Null)
            } else {
                Err(TableAccessError::NullNotAllowed(self.name.to_string()))
            };
        }

        let cell = match self.kind {
            ColumnKind::Integer => integer(value)
                .and_then(|n| i32::try_from(n).ok())
                .map(|n| CellValue::Integer(n.into())),
            ColumnKind::Count => integer(value)
                .and_then(|n| i32::try_from(n).ok())
                .filter(|n| *n >= 0)
                .map(|n| CellValue::Integer(n.into())),
            ColumnKind::Real => match value {
                Value::Number(n) => n.as_f64().map(CellValue::Real),
                Value::String(s) => s.trim().parse().ok().map(CellValue::Real),
                _ => None,
            },
            ColumnKind::Text => match value {
                Value::String(s) => Some(CellValue::Text(s.trim().to_string())),
                Value::Number(n) => Some(CellValue::Text(n.to_string())),
                _ => None,
            },
            ColumnKind::Name => value
                .as_str()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| CellValue::Text(s.to_string())),
            ColumnKind::Role => value
                .as_str()
                .and_then(|s| s.parse::<SalesRole>().ok())
                .map(|role| CellValue::Text(role.as_str().to_string())),
            ColumnKind::Label => value
                .as_str()
                .and_then(|s| OptionLabel::new(s).ok())
                .map(|label| CellValue::Text(label.into_inner())),
            ColumnKind::Date => value
                .as_str()
                .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
                .map(|d| CellValue::Text(d.format(DATE_FORMAT).to_string())),
            ColumnKind::Timestamp => value
                .as_str()
                .and_then(|s| parse_timestamp(s.trim()))
                .map(|t| CellValue::Text(t.format(TIMESTAMP_FORMAT).to_string())),
            ColumnKind::Boolean => match value {
                Value::Bool(b) => Some(CellValue::Boolean(*b)),
                Value::Number(n) => match n.as_i64() {
                    Some(0) => Some(CellValue::Boolean(false)),
                    Some(1) => Some(CellValue::Boolean(true)),
                    _ => None,
                },
                Value::String(s) => match s.trim().to_lowercase().as_str() {
                    "true" | "1" => Some(CellValue::Boolean(true)),
                    "false" | "0" => Some(CellValue::Boolean(false)),
                    _ => None,
                },
                _ => None,
            },
        };

        cell.ok_or_else(|| TableAccessError::InvalidValue {
            column: self.name.to_string(),
            expected: self.kind.expectation(),
        })
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .ok()
}
