//! Record store implementations.
//!
//! The repository traits in the domain modules define the store
//! contract; this module ships an in-process implementation. Embedding
//! applications with their own storage implement the same traits
//! instead.

mod memory;

pub use memory::MemoryStore;
