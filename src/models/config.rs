//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_pool_size() -> u32 {
    8
}

fn default_busy_timeout_ms() -> u64 {
    30_000
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP server and its database.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// Directory holding the built dashboard bundle, served at `/` when present.
    #[serde(default)]
    pub static_dir: Option<String>,
}
