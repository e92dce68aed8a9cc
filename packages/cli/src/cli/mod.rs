pub mod geography;
pub mod root;
pub mod table;
