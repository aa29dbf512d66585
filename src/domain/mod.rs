//! Domain values shared by the reporting and admin services.

pub mod activity;
pub mod form_option;
pub mod lead_metrics;
pub mod meeting;
pub mod metrics;
pub mod sales;
pub mod table;
pub mod types;
pub mod user_mapping;
pub mod week;
