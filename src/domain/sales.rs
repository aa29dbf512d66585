/// Sales totals grouped by closer or by product.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SalesTotals {
    /// Closer name or product name depending on the grouping.
    pub key: String,
    pub deals: i64,
    pub units: i64,
    pub revenue: f64,
}
