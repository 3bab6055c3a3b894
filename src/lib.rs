// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
// - 'file/physical.rs' uses mmap to map the mapping archive into memory

//! # tinymap
//!
//! A lazily initialized name-mapping service for JVM class transformation pipelines.
//!
//! `tinymap` answers one question for a host that loads and transforms classes at
//! runtime: *what is this class, method or field called in the other namespace?* The
//! answers come from a Tiny mapping table bundled inside a zip archive. The archive is
//! decoded once, on the first lookup that needs it, into three indices (classes, methods,
//! fields) and kept for the lifetime of the service.
//!
//! ## Features
//!
//! - **Lazy, single decode** - Nothing is read at construction; concurrent first lookups
//!   share one decode
//! - **Tiny v1 and v2** - The table version is detected from its header
//! - **Pass-through fallback** - Unmapped names are returned unchanged
//! - **Identity without data** - A missing archive or mapping entry yields an empty table
//! - **Lock-free reads** - After initialization lookups are plain shared borrows
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tinymap::prelude::*;
//!
//! let service = MappingService::from_file("mappings.zip");
//!
//! // Class names come back dotted
//! let class = service.lookup(EntityKind::Class, "net/minecraft/world/level/Level")?;
//! // Member names come back as written in the table
//! let method = service.lookup(EntityKind::Method, "m_46463_")?;
//! println!("{class}#{method}");
//! # Ok::<(), tinymap::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`file`] - Where the bundled archive lives and how its bytes are accessed
//! - [`mappings`] - The [`MappingTable`], the archive [`decoder`] and the [`tiny`] parser
//! - [`service`] - [`MappingService`] and the host-facing [`NameMappingService`] trait
//! - [`config`] - [`ServiceConfig`], fixing names, namespaces and the archive marker
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! A missing archive is not an error. A damaged archive or table is, and it is reported
//! by the lookup that triggered decoding and by every lookup after it:
//!
//! ```rust,no_run
//! use tinymap::{EntityKind, Error, MappingService};
//!
//! let service = MappingService::from_file("mappings.zip");
//! match service.lookup(EntityKind::Field, "f_46441_") {
//!     Ok(name) => println!("{name}"),
//!     Err(Error::Unavailable(cause)) => println!("Mappings are unusable: {cause}"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,no_run
/// use tinymap::prelude::*;
///
/// let service = MappingService::empty();
/// assert_eq!(service.lookup(EntityKind::Class, "a/b/C")?, "a/b/C");
/// # Ok::<(), tinymap::Error>(())
/// ```
pub mod prelude;

pub mod config;
pub mod file;
pub mod mappings;
pub mod service;

/// `tinymap` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `tinymap` Error type
pub use error::Error;

/// Service configuration
pub use config::ServiceConfig;

/// Location of the bundled mapping archive
pub use file::Resource;

/// Mapping data and its decoding
pub use mappings::{
    decoder, normalize_class_name, tiny, EntityKind, MappingTable, NamespacePair,
};

/// The mapping service and the host-facing contract it implements
pub use service::{MappingService, NameMappingService};
