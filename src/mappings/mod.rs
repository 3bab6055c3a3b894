//! Mapping data: the decoded table and the pieces that describe a lookup.
//!
//! # Key Components
//!
//! - [`MappingTable`] - Class, method and field indices from one namespace to another
//! - [`EntityKind`] - Selects the index a lookup consults
//! - [`NamespacePair`] - The source and target namespace of a table
//! - [`decoder`] - Locates the mapping file inside a zip archive and decodes it
//! - [`tiny`] - Tiny v1 / v2 parser with header-based version detection

pub mod decoder;
pub mod tiny;

mod kind;
mod namespace;
mod table;

pub use kind::EntityKind;
pub use namespace::NamespacePair;
pub use table::{normalize_class_name, MappingTable};
