//! Landmark persistence over a key-value backend

pub mod error;
pub mod keyvalue;
pub mod landmarks;

pub use error::StorageError;
pub use keyvalue::{JsonFileStore, KeyValueStore, MemoryStore};
pub use landmarks::{LandmarkStore, LANDMARKS_KEY};
