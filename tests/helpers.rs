// Shared test helpers for database setup and scripted collaborators.

use std::sync::Mutex;

use sqlx::SqlitePool;
use std::path::Path;

use iss_tracker::{
    run_migrations, CountryId, CountryResolution, CountryResolver, PositionError, PositionSource,
    Sample,
};

/// Creates a file-backed test database pool with migrations applied.
/// The file is created first; SQLite requires it to exist or be creatable.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool_with_path(db_path: &Path) -> SqlitePool {
    std::fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .read(true)
        .open(db_path)
        .expect("Failed to create/open database file");

    let pool = SqlitePool::connect(&format!("sqlite:{}", db_path.to_string_lossy()))
        .await
        .expect("Failed to create test database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Position source replaying a fixed sequence of samples.
pub struct ScriptedSource {
    samples: Mutex<Vec<Sample>>,
}

impl ScriptedSource {
    #[allow(dead_code)] // Used by other test files
    pub fn new(samples: Vec<Sample>) -> Self {
        Self {
            samples: Mutex::new(samples),
        }
    }
}

impl PositionSource for ScriptedSource {
    async fn fetch(&self) -> Result<Sample, PositionError> {
        let mut samples = self.samples.lock().unwrap();
        if samples.is_empty() {
            return Err(PositionError::Malformed("script exhausted".into()));
        }
        Ok(samples.remove(0))
    }
}

/// Resolver mapping integer longitudes to country names; anything else is
/// the unknown sentinel.
pub struct TableResolver {
    entries: Vec<(i64, &'static str)>,
}

impl TableResolver {
    #[allow(dead_code)] // Used by other test files
    pub fn new(entries: &[(f64, &'static str)]) -> Self {
        Self {
            entries: entries.iter().map(|(lon, name)| (*lon as i64, *name)).collect(),
        }
    }
}

impl CountryResolver for TableResolver {
    fn resolve(&self, _latitude: f64, longitude: f64) -> CountryResolution {
        self.entries
            .iter()
            .find(|(lon, _)| *lon == longitude as i64)
            .map(|(_, name)| CountryResolution::Country(CountryId::from(*name)))
            .unwrap_or(CountryResolution::Unknown)
    }
}

/// Builds a sample at the equator with the given timestamp and longitude.
#[allow(dead_code)] // Used by other test files
pub fn sample(timestamp: i64, longitude: f64) -> Sample {
    Sample {
        timestamp,
        latitude: 0.0,
        longitude,
    }
}
