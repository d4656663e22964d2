//! Infrastructure layer - CSV loaders, table store, resolvers

pub mod csv_tables;
pub mod resolver;
pub mod table_store;

pub use csv_tables::{clean_code, load_snapshot, TablePaths};
pub use resolver::{SnapshotPlaceResolver, SnapshotRouteResolver};
pub use table_store::CsvTableStore;
