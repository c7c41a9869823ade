//! Infrastructure Layer
//!
//! Store implementations.

pub mod memory;

pub use memory::MemoryAdminStore;
