//! Database models mapping the reporting tables.

pub mod aggregates;
pub mod config;
pub mod form_option;
pub mod lead_metrics;
pub mod meeting;
pub mod user_mapping;
