pub mod error;
pub mod sqlite;
pub mod tables;

pub use error::StoreError;
pub use sqlite::{Database, DbConn};
