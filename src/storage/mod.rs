//! Persistence layer: SQLite pool, migrations, and the visit store.

mod migrations;
mod pool;
#[cfg(test)]
pub(crate) mod test_helpers;
mod visits;

pub use migrations::run_migrations;
pub use pool::init_db_pool_with_path;
pub use visits::{CountryStats, VisitStore};
