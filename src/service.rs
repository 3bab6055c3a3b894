//! The lazily initialized mapping service.
//!
//! [`MappingService`] is the object a host keeps for the lifetime of the process. It is
//! cheap to construct: only the configuration and the location of the bundled archive
//! are recorded. The archive is decoded by the first class, method or field lookup, on
//! whichever thread issues it, and the resulting [`MappingTable`] is shared by every
//! later lookup without locking.
//!
//! # Initialization
//!
//! The decoded state lives in a [`OnceLock`], so concurrent first lookups run exactly one
//! decode; the others block until it has finished and then see the same outcome. A
//! failed decode is cached as well. The service never retries, and every subsequent
//! lookup reports the original cause through [`Error::Unavailable`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use tinymap::{EntityKind, MappingService, NameMappingService};
//!
//! let service = MappingService::from_file("mappings.zip");
//! assert_eq!(service.provider_name(), "tinymap");
//!
//! let class = service.translate(EntityKind::Class, "net/minecraft/world/level/Level")?;
//! let method = service.translate_domain("METHOD", "m_46463_")?;
//! println!("{class} {method}");
//! # Ok::<(), tinymap::Error>(())
//! ```

use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, OnceLock,
    },
};

use crate::{
    decoder, EntityKind, Error, MappingTable, NamespacePair, Resource, Result, ServiceConfig,
};

/// The capability contract a plugin host expects from a name mapping provider.
///
/// Hosts call [`NameMappingService::translate`] from arbitrary worker threads, so
/// implementations must be `Send + Sync`.
pub trait NameMappingService: Send + Sync {
    /// Short, constant identifier of the provider
    fn provider_name(&self) -> &str;

    /// Constant version of the provider's mapping contract
    fn provider_version(&self) -> &str;

    /// The namespaces this provider translates between
    fn namespace_pair(&self) -> &NamespacePair;

    /// Translates `name` from the source to the target namespace.
    ///
    /// Names without a mapping are returned unchanged.
    ///
    /// # Errors
    /// Returns an error if the mapping data could not be decoded.
    fn translate<'a>(&'a self, kind: EntityKind, name: &'a str) -> Result<&'a str>;

    /// Like [`NameMappingService::translate`], with the entity kind given as the host's
    /// string name (`CLASS`, `METHOD`, `FIELD`, `OTHER`).
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedKind`] for an unknown kind, or any error of
    /// [`NameMappingService::translate`].
    fn translate_domain<'a>(&'a self, kind: &str, name: &'a str) -> Result<&'a str> {
        self.translate(EntityKind::from_domain(kind)?, name)
    }
}

type DecodeOutcome = std::result::Result<MappingTable, Arc<Error>>;

/// Mapping provider backed by a Tiny table inside a bundled zip archive.
pub struct MappingService {
    config: ServiceConfig,
    resource: Resource,
    state: OnceLock<DecodeOutcome>,
    decodes: AtomicUsize,
}

impl MappingService {
    /// Creates a service for the archive at `resource`. Nothing is read until the first
    /// lookup.
    pub fn new(config: ServiceConfig, resource: Resource) -> Self {
        MappingService {
            config,
            resource,
            state: OnceLock::new(),
            decodes: AtomicUsize::new(0),
        }
    }

    /// Creates a service with the default configuration over an in-memory archive.
    pub fn from_mem(data: Vec<u8>) -> Self {
        Self::new(ServiceConfig::default(), Resource::memory(data))
    }

    /// Creates a service with the default configuration over an archive on disk.
    ///
    /// A file that does not exist when the first lookup happens means "no mapping data".
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::new(ServiceConfig::default(), Resource::file(path))
    }

    /// Creates a service without mapping data; every lookup returns its input.
    pub fn empty() -> Self {
        Self::new(ServiceConfig::default(), Resource::Absent)
    }

    /// The configuration this service was created with
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The provider name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The provider version
    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// The namespace pair. Does not trigger decoding.
    pub fn namespace_pair(&self) -> &NamespacePair {
        &self.config.namespaces
    }

    /// Translates `name` for the given entity kind, falling back to `name` itself when
    /// the table has no entry for it.
    ///
    /// The first class, method or field lookup decodes the mapping archive.
    /// [`EntityKind::Other`] is answered immediately and never triggers decoding.
    ///
    /// # Errors
    /// Returns [`Error::Unavailable`] if decoding the mapping archive failed, on this or
    /// any earlier call.
    pub fn lookup<'a>(&'a self, kind: EntityKind, name: &'a str) -> Result<&'a str> {
        if !kind.is_mapped() {
            return Ok(name);
        }

        Ok(self.table()?.translate(kind, name))
    }

    /// Returns the decoded table, decoding the archive first if that has not happened yet.
    ///
    /// # Errors
    /// Returns [`Error::Unavailable`] if decoding failed.
    pub fn table(&self) -> Result<&MappingTable> {
        self.state
            .get_or_init(|| self.load())
            .as_ref()
            .map_err(|cause| Error::Unavailable(Arc::clone(cause)))
    }

    /// Returns `true` once a decode has completed, successfully or not.
    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    /// Number of times the archive has been decoded. Never exceeds one.
    pub fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::Acquire)
    }

    fn load(&self) -> DecodeOutcome {
        self.decodes.fetch_add(1, Ordering::AcqRel);

        let backend = self.resource.open();
        let archive = backend.as_deref().map(|backend| backend.data());

        match decoder::decode(archive, &self.config.marker, &self.config.namespaces) {
            Ok(table) => {
                tracing::info!(
                    "Loaded {} mappings ({} classes, {} methods, {} fields) from {:?}",
                    self.config.namespaces,
                    table.classes().len(),
                    table.methods().len(),
                    table.fields().len(),
                    self.resource
                );
                Ok(table)
            }
            Err(error) => {
                tracing::warn!(
                    "Failed to decode mappings from {:?}, lookups will fail: {}",
                    self.resource,
                    error
                );
                Err(Arc::new(error))
            }
        }
    }
}

impl NameMappingService for MappingService {
    fn provider_name(&self) -> &str {
        self.name()
    }

    fn provider_version(&self) -> &str {
        self.version()
    }

    fn namespace_pair(&self) -> &NamespacePair {
        MappingService::namespace_pair(self)
    }

    fn translate<'a>(&'a self, kind: EntityKind, name: &'a str) -> Result<&'a str> {
        self.lookup(kind, name)
    }
}

impl std::fmt::Debug for MappingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingService")
            .field("config", &self.config)
            .field("resource", &self.resource)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
