mod backend;

pub use backend::{PostgresBackend, PostgresConfig, SqliteBackend, VINTAGE_FILE_EXTENSION};
pub use census_engine::{
    backend_error, open_census, Census, CensusBackend, CensusError, ChildLevel, ErrorCode,
    Geoid, GeographyMatch, LocatedGeography, Metric, MetricNumber, OpenCensusConfig,
    QueryResult, ResolvedGeography, RowKey, SqlDialect, StoredLocator, SummaryDocument,
    TableProjection, Value, Vintage, VintageCatalog, SEARCH_RESULT_LIMIT, SECTION_NAMES,
};
