//! Database migration management.

use sqlx::{Pool, Sqlite};

/// Applies the SQLx migrations shipped in the crate's `migrations/` directory.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), anyhow::Error> {
    let migrations_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    sqlx::migrate::Migrator::new(migrations_dir.as_path())
        .await?
        .run(pool)
        .await?;
    Ok(())
}
