//! Infrastructure Layer

pub mod fs;

pub use fs::FsPostRepository;
