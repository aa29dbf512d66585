use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use salesops_dashboard::db::{DbPool, PoolSettings, establish_connection_pool};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated SQLite database living in a temporary directory that is removed
/// on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url, &PoolSettings::default())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool.get().expect("Failed to get SQLite connection.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");

        TestDb { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
