use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::{Error, Result};

/// The kind of identifier a lookup is made for.
///
/// The kind selects which of the three mapping indices is consulted. [`EntityKind::Other`]
/// covers everything the mapping table has no names for (packages, resources, ...) and is
/// always answered with the input name.
///
/// Hosts usually hand the kind over as a string; [`EntityKind::from_domain`] parses it
/// case-insensitively and rejects anything unknown.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum EntityKind {
    /// A class name, e.g. `net/minecraft/world/entity/Entity`
    Class,
    /// A method name, e.g. `m_20182_`
    Method,
    /// A field name, e.g. `f_19853_`
    Field,
    /// Anything else; never mapped
    Other,
}

impl EntityKind {
    /// Parses the host's name for an entity kind.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedKind`] for any string other than `CLASS`,
    /// `METHOD`, `FIELD` or `OTHER` (ignoring case).
    pub fn from_domain(domain: &str) -> Result<EntityKind> {
        domain
            .parse()
            .map_err(|_| Error::UnsupportedKind(domain.to_string()))
    }

    /// Returns `true` if lookups of this kind consult a mapping index.
    #[must_use]
    pub fn is_mapped(self) -> bool {
        !matches!(self, EntityKind::Other)
    }
}
