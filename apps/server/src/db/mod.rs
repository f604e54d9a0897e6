//! Database layer - directory stores and data access

pub mod memory;
pub mod postgres;
pub mod traits;

pub use memory::InMemoryDirectoryStore;
pub use postgres::PostgresDirectoryStore;
pub use traits::DirectoryStore;
