//! Catalog-driven access to arbitrary reporting tables.
//!
//! Identifiers spliced into SQL come from [`crate::domain::table::TABLES`]
//! only. Every user-supplied value is bound.

use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{BigInt, Bool, Double, Nullable, Text};
use diesel::sqlite::Sqlite;
use serde_json::Value;

use crate::{
    domain::table::{CellValue, RowInsert, TableSpec},
    models::aggregates::{JsonRow, RowCount},
    repository::{
        DieselRepository, TableQuery, TableReader, TableWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

type BoxedQuery = BoxedSqlQuery<'static, Sqlite, SqlQuery>;

fn bind_cell(query: BoxedQuery, cell: &CellValue) -> BoxedQuery {
    match cell {
        CellValue::Null => query.bind::<Nullable<Text>, _>(None::<String>),
        CellValue::Integer(value) => query.bind::<BigInt, _>(*value),
        CellValue::Real(value) => query.bind::<Double, _>(*value),
        CellValue::Text(value) => query.bind::<Text, _>(value.clone()),
        CellValue::Boolean(value) => query.bind::<Bool, _>(*value),
    }
}

/// `json_object('a', "a", 'b', "b")` over every catalog column of `table`.
fn json_projection(table: &TableSpec) -> String {
    let pairs = table
        .columns
        .iter()
        .map(|column| format!("'{0}', \"{0}\"", column.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("json_object({pairs})")
}

/// `WHERE` clause for the optional filter, with at most one placeholder.
fn where_clause(query: &TableQuery) -> String {
    match &query.filter {
        Some((column, CellValue::Null)) => format!(" WHERE \"{}\" IS NULL", column.name),
        Some((column, _)) => format!(" WHERE \"{}\" = ?", column.name),
        None => String::new(),
    }
}

fn bind_filter(sql: BoxedQuery, query: &TableQuery) -> BoxedQuery {
    match &query.filter {
        Some((_, CellValue::Null)) | None => sql,
        Some((_, value)) => bind_cell(sql, value),
    }
}

fn parse_row(table: &TableSpec, row: JsonRow) -> RepositoryResult<Value> {
    let value: Value = serde_json::from_str(&row.row_json)?;
    Ok(table.normalize_row(value))
}

impl TableReader for DieselRepository {
    fn count_table_rows(&self, query: &TableQuery) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let sql = format!(
            "SELECT COUNT(*) AS count FROM \"{}\"{}",
            query.table.name,
            where_clause(query)
        );
        let statement = bind_filter(diesel::sql_query(sql).into_boxed(), query);
        let total = statement.get_result::<RowCount>(&mut conn)?;

        usize::try_from(total.count)
            .map_err(|e| RepositoryError::Unexpected(format!("Invalid row count: {e}")))
    }

    fn browse_table_rows(&self, query: &TableQuery) -> RepositoryResult<Vec<Value>> {
        let mut conn = self.conn()?;

        let sql = format!(
            "SELECT {} AS row_json FROM \"{}\"{} ORDER BY id DESC LIMIT ? OFFSET ?",
            json_projection(query.table),
            query.table.name,
            where_clause(query)
        );

        let limit = i64::try_from(query.pagination.per_page).unwrap_or(i64::MAX);
        let offset = i64::try_from(query.pagination.offset()).unwrap_or(i64::MAX);

        let statement = bind_filter(diesel::sql_query(sql).into_boxed(), query)
            .bind::<BigInt, _>(limit)
            .bind::<BigInt, _>(offset);

        statement
            .load::<JsonRow>(&mut conn)?
            .into_iter()
            .map(|row| parse_row(query.table, row))
            .collect()
    }
}

impl TableWriter for DieselRepository {
    fn insert_table_row(&self, insert: &RowInsert) -> RepositoryResult<Value> {
        let mut conn = self.conn()?;
        let table = insert.table;

        let sql = if insert.cells.is_empty() {
            format!(
                "INSERT INTO \"{}\" DEFAULT VALUES RETURNING {} AS row_json",
                table.name,
                json_projection(table)
            )
        } else {
            let columns = insert
                .cells
                .iter()
                .map(|(column, _)| format!("\"{}\"", column.name))
                .collect::<Vec<_>>()
                .join(", ");
            let placeholders = vec!["?"; insert.cells.len()].join(", ");
            format!(
                "INSERT INTO \"{}\" ({columns}) VALUES ({placeholders}) RETURNING {} AS row_json",
                table.name,
                json_projection(table)
            )
        };

        let statement = insert
            .cells
            .iter()
            .fold(diesel::sql_query(sql).into_boxed(), |statement, (_, cell)| {
                bind_cell(statement, cell)
            });

        let row = statement.get_result::<JsonRow>(&mut conn)?;
        parse_row(table, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::find_table;

    #[test]
    fn projection_lists_every_catalog_column() {
        let table = find_table("user_name_mappings").expect("known table");
        assert_eq!(
            json_projection(table),
            "json_object('id', \"id\", 'source_name', \"source_name\", \
             'display_name', \"display_name\", 'role', \"role\", 'active', \"active\")"
        );
    }

    #[test]
    fn null_filter_uses_is_null() {
        let table = find_table("meetings").expect("known table");
        let column = table.column("outcome").expect("known column");
        let query = TableQuery::new(table, 1, 50).filter(column, CellValue::Null);
        assert_eq!(where_clause(&query), " WHERE \"outcome\" IS NULL");

        let query = TableQuery::new(table, 1, 50)
            .filter(column, CellValue::Text("won".to_string()));
        assert_eq!(where_clause(&query), " WHERE \"outcome\" = ?");
    }
}
