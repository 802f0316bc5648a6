pub mod error;
pub mod ids;
pub mod repository;
pub mod store;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use repository::{CollectionReport, DocumentRepository, Record, Repository, RequestRepository};
pub use store::{CollectionStore, JsonFileStore, MemoryStore, StoreInfo};
