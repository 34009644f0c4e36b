//! Input handling module

pub mod document_reader;
pub mod glob_resolver;

pub use document_reader::DocumentReader;
pub use glob_resolver::resolve_patterns;
