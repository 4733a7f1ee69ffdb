//! Filesystem adapter backed by `std::fs`.

pub mod local;

pub use local::LocalFilesystem;
