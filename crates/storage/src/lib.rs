//! Storage abstraction and implementations for bloom.
//!
//! The cycle engine only consumes and produces plain records; this crate
//! loads and saves them. It provides a trait-based interface with a JSON
//! file backend and an in-memory backend.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod memory_storage;

pub use trait_::{Storage, StorageError, Result};
pub use json_storage::JsonStorage;
pub use memory_storage::MemoryStorage;
