//! Revenue per product.

use chrono::NaiveDate;

use crate::domain::metrics::{percentage_of_amount, round_to};
use crate::dto::reports::{ProductSalesRow, SalesSummaryReport, SalesTotalsRow};
use crate::forms::reports::ReportRangeForm;
use crate::repository::SalesReader;
use crate::services::ServiceResult;

pub fn sales_summary<R>(
    repo: &R,
    form: ReportRangeForm,
    today: NaiveDate,
) -> ServiceResult<SalesSummaryReport>
where
    R: SalesReader + ?Sized,
{
    let range = form.into_range(today)?;
    let sales = repo.sales_by_product(&range)?;

    let mut totals = SalesTotalsRow::default();
    for row in &sales {
        totals.units += row.units;
        totals.deals += row.deals;
        totals.revenue += row.revenue;
    }

    let mut products: Vec<ProductSalesRow> = sales
        .into_iter()
        .map(|row| ProductSalesRow {
            revenue_share: percentage_of_amount(row.revenue, totals.revenue),
            revenue: round_to(row.revenue, 2),
            product: row.key,
            units: row.units,
            deals: row.deals,
        })
        .collect();
    products.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.product.cmp(&b.product))
    });

    totals.revenue = round_to(totals.revenue, 2);

    Ok(SalesSummaryReport {
        range,
        products,
        totals,
    })
}
