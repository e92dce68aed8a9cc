pub mod aggregate;
mod backend;
mod census;
mod error;
mod error_classification;
pub mod errors;
mod geoid;
pub mod hierarchy;
mod locator;
pub mod resolve;
pub mod search;
pub mod storage;
pub mod summary;
pub mod table;
mod tables;
mod types;
mod vintage;

pub use backend::{CensusBackend, SqlDialect};
pub use census::{open_census, Census, OpenCensusConfig};
pub use error::CensusError;
pub use errors::{backend_error, ErrorCode};
pub use geoid::{ChildLevel, Geoid};
pub use locator::{LocatedGeography, ResolvedGeography, RowKey, StoredLocator};
pub use search::{GeographyMatch, SEARCH_RESULT_LIMIT};
pub use summary::{Metric, MetricNumber, SummaryDocument, SECTION_NAMES};
pub use table::TableProjection;
pub use types::{QueryResult, Value};
pub use vintage::{Vintage, VintageCatalog};
