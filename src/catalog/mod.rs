// file: src/catalog/mod.rs
// version: 1.0.0
// guid: 955f7bb8-cf0c-4b50-9922-9ae4be89e7d6

//! Command catalog: the record type, the registry and the bundled table

pub mod builtin;
pub mod description;
pub mod registry;

pub use description::CommandDescription;
pub use registry::CommandRegistry;
