//! Ad-hoc browsing and insertion over the table catalog.

use crate::domain::table::{RowInsert, TABLES};
use crate::dto::admin::TableCatalog;
use crate::dto::tables::{InsertedRow, TablePage};
use crate::forms::tables::{BrowseTableForm, InsertRowForm};
use crate::pagination::Paginated;
use crate::repository::{TableQuery, TableReader, TableWriter};
use crate::services::ServiceResult;

pub fn list_tables() -> TableCatalog {
    TableCatalog { tables: TABLES }
}

/// Newest rows first.
pub fn browse_table<R>(repo: &R, form: BrowseTableForm) -> ServiceResult<TablePage>
where
    R: TableReader + ?Sized,
{
    let query = TableQuery::try_from(form)?;

    let total = repo.count_table_rows(&query)?;
    let rows = repo.browse_table_rows(&query)?;

    Ok(TablePage {
        table: query.table.name,
        columns: query.table.column_names(),
        rows: Paginated::new(
            rows,
            query.pagination.page,
            query.pagination.per_page,
            total,
        ),
    })
}

pub fn insert_table_row<R>(repo: &R, form: InsertRowForm) -> ServiceResult<InsertedRow>
where
    R: TableWriter + ?Sized,
{
    let insert = RowInsert::try_from(form)?;
    let row = repo.insert_table_row(&insert)?;

    log::info!("Inserted a row into {}", insert.table.name);

    Ok(InsertedRow {
        table: insert.table.name,
        row,
    })
}
