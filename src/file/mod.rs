//! Access to the bundled mapping archive.
//!
//! The service never reads the archive until the first lookup, so construction only
//! records *where* the archive lives as a [`Resource`]. Opening a resource yields a
//! [`Backend`] that exposes the raw archive bytes, either from an owned buffer
//! ([`Memory`]) or from a read-only memory mapping of a file on disk ([`Physical`]).
//!
//! A resource that does not exist is not an error: [`Resource::open`] returns `None`
//! and the decoder turns that into an empty mapping table.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tinymap::Resource;
//!
//! let resource = Resource::file("run/mappings.zip");
//! match resource.open() {
//!     Some(backend) => println!("archive has {} bytes", backend.len()),
//!     None => println!("no mapping data bundled"),
//! }
//! ```

mod memory;
mod physical;

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

pub use memory::Memory;
pub use physical::Physical;

/// Read access to the bytes of an opened mapping archive.
///
/// Implementations must be `Send + Sync`, since the archive may be opened from whichever
/// host thread performs the first lookup.
pub trait Backend: Send + Sync {
    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    fn len(&self) -> usize;

    /// Returns `true` if the buffer holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The location of the bundled mapping archive, captured at service construction.
#[derive(Clone)]
pub enum Resource {
    /// Archive bytes that are already in memory.
    Memory(Arc<Memory>),
    /// Archive stored on disk; mapped into memory when opened.
    File(PathBuf),
    /// No archive is bundled.
    Absent,
}

impl Resource {
    /// Creates a resource from an in-memory archive.
    pub fn memory(data: Vec<u8>) -> Self {
        Resource::Memory(Arc::new(Memory::new(data)))
    }

    /// Creates a resource pointing at an archive on disk.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Resource::File(path.as_ref().to_path_buf())
    }

    /// Opens the resource.
    ///
    /// Returns `None` when the resource is absent or cannot be read. Both cases mean
    /// "no mapping data" to the decoder, so the reason is only logged.
    pub fn open(&self) -> Option<Arc<dyn Backend>> {
        match self {
            Resource::Memory(memory) => Some(memory.clone()),
            Resource::File(path) => match Physical::new(path) {
                Ok(physical) => Some(Arc::new(physical)),
                Err(error) => {
                    tracing::warn!(
                        "Mapping archive {} could not be opened, using identity mappings: {}",
                        path.display(),
                        error
                    );
                    None
                }
            },
            Resource::Absent => None,
        }
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Memory(memory) => write!(f, "Memory({} bytes)", memory.len()),
            Resource::File(path) => write!(f, "File({})", path.display()),
            Resource::Absent => write!(f, "Absent"),
        }
    }
}
