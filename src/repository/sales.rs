use diesel::prelude::*;
use diesel::sql_types::Date;

use crate::{
    db::DbConnection,
    domain::{sales::SalesTotals, types::DateRange},
    models::aggregates::SalesTotals as DbSalesTotals,
    repository::{DieselRepository, SalesReader, errors::RepositoryResult},
};

/// Sums `product_sales` grouped by `column`, which must be a trusted identifier.
fn grouped_sales(
    conn: &mut DbConnection,
    column: &'static str,
    range: &DateRange,
) -> RepositoryResult<Vec<SalesTotals>> {
    let sql = format!(
        "SELECT {column} AS group_key, \
            COUNT(*) AS deals, \
            COALESCE(SUM(quantity), 0) AS units, \
            CAST(COALESCE(SUM(amount), 0) AS REAL) AS revenue \
         FROM product_sales \
         WHERE sale_date BETWEEN ? AND ? \
         GROUP BY {column} \
         ORDER BY {column}"
    );

    let rows = diesel::sql_query(sql)
        .bind::<Date, _>(range.start())
        .bind::<Date, _>(range.end())
        .load::<DbSalesTotals>(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}

impl SalesReader for DieselRepository {
    fn sales_by_closer(&self, range: &DateRange) -> RepositoryResult<Vec<SalesTotals>> {
        let mut conn = self.conn()?;
        grouped_sales(&mut conn, "closer_name", range)
    }

    fn sales_by_product(&self, range: &DateRange) -> RepositoryResult<Vec<SalesTotals>> {
        let mut conn = self.conn()?;
        grouped_sales(&mut conn, "product", range)
    }
}
