mod postgres;
mod sqlite;

pub use postgres::{PostgresBackend, PostgresConfig};
pub use sqlite::{SqliteBackend, VINTAGE_FILE_EXTENSION};
