//! # tinymap Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the tinymap library. Import this module to get quick access to everything a host
//! needs to construct a mapping service and translate names.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all tinymap operations
pub use crate::Error;

/// The result type used throughout tinymap
pub use crate::Result;

/// Configuration of a mapping service
pub use crate::ServiceConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The lazily initialized mapping service and its host contract
pub use crate::{MappingService, NameMappingService};

/// Location of the bundled archive
pub use crate::Resource;

// ================================================================================================
// Mapping Data
// ================================================================================================

/// Lookup vocabulary and the decoded table
pub use crate::{EntityKind, MappingTable, NamespacePair};
