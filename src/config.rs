//! Service configuration
//!
//! A [`ServiceConfig`] fixes everything about a mapping service that the host can
//! observe without triggering a decode: the provider name and version it reports, the
//! namespace pair it translates between, and the marker used to find the mapping file
//! inside the bundled archive.

use crate::NamespacePair;

/// Path fragment identifying the mapping table inside the bundled archive
pub const DEFAULT_MARKER: &str = "mappings/mappings.tiny";

/// Provider name reported by default
pub const DEFAULT_NAME: &str = "tinymap";

/// Provider version reported by default
pub const DEFAULT_VERSION: &str = "1";

/// Configuration of a [`crate::MappingService`]
///
/// The default configuration is [`ServiceConfig::forge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Short identifier reported to the host as the provider name
    pub name: String,

    /// Version of the mapping contract reported to the host
    pub version: String,

    /// Namespace columns extracted from the table, and reported to the host
    pub namespaces: NamespacePair,

    /// Substring an archive entry's path must contain to be decoded as the mapping table
    pub marker: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::forge()
    }
}

impl ServiceConfig {
    /// Translates SRG names into named (deobfuscated) names, as used by Forge-style
    /// runtimes that load classes in SRG.
    #[must_use]
    pub fn forge() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            namespaces: NamespacePair::new("srg", "named"),
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Translates intermediary names into named names, as used by Fabric-style runtimes.
    #[must_use]
    pub fn intermediary() -> Self {
        Self {
            namespaces: NamespacePair::new("intermediary", "named"),
            ..Self::forge()
        }
    }

    /// Replaces the reported provider name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the reported provider version
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Replaces the namespace pair
    #[must_use]
    pub fn with_namespaces(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.namespaces = NamespacePair::new(source, target);
        self
    }

    /// Replaces the archive entry marker
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}
