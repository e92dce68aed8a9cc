pub mod resolve;
pub mod search;
pub mod summary;
pub mod table;
pub mod vintages;
