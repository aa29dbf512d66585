//! Rows produced by the grouped `SUM`/`COUNT` queries.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Text};

use crate::domain::activity::SdrActivity as DomainSdrActivity;
use crate::domain::sales::SalesTotals as DomainSalesTotals;

#[derive(Debug, QueryableByName)]
pub struct SdrActivity {
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = BigInt)]
    pub dials: i64,
    #[diesel(sql_type = BigInt)]
    pub connects: i64,
    #[diesel(sql_type = BigInt)]
    pub conversations: i64,
    #[diesel(sql_type = BigInt)]
    pub meetings_booked: i64,
}

#[derive(Debug, QueryableByName)]
pub struct SalesTotals {
    #[diesel(sql_type = Text)]
    pub group_key: String,
    #[diesel(sql_type = BigInt)]
    pub deals: i64,
    #[diesel(sql_type = BigInt)]
    pub units: i64,
    #[diesel(sql_type = Double)]
    pub revenue: f64,
}

#[derive(QueryableByName)]
pub struct RowCount {
    #[diesel(sql_type = BigInt)]
    pub count: i64,
}

/// A table row rendered by SQLite's `json_object`.
#[derive(QueryableByName)]
pub struct JsonRow {
    #[diesel(sql_type = Text)]
    pub row_json: String,
}

impl From<SdrActivity> for DomainSdrActivity {
    fn from(row: SdrActivity) -> Self {
        Self {
            name: row.name,
            dials: row.dials,
            connects: row.connects,
            conversations: row.conversations,
            meetings_booked: row.meetings_booked,
        }
    }
}

impl From<SalesTotals> for DomainSalesTotals {
    fn from(row: SalesTotals) -> Self {
        Self {
            key: row.group_key,
            deals: row.deals,
            units: row.units,
            revenue: row.revenue,
        }
    }
}
