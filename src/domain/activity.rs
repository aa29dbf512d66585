/// Call-log totals of one SDR over a date range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SdrActivity {
    pub name: String,
    pub dials: i64,
    pub connects: i64,
    pub conversations: i64,
    pub meetings_booked: i64,
}
