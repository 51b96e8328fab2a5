//! Storage abstractions for service layer
//!
//! Holds the process-lifetime ordered list used by the catalogs.

pub mod memory_list_store;

pub use memory_list_store::MemoryListStore;
