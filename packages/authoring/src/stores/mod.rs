//! Storage implementations for the authoring library.
//!
//! Available backends:
//! - `MemoryStore` - In-memory storage (always available)
//! - `RemoteStore` - Skillet REST API storage (requires `skillet` feature)

pub mod memory;

pub use memory::MemoryStore;
