//! Response payloads serialized by the HTTP layer.

pub mod admin;
pub mod reports;
pub mod tables;
