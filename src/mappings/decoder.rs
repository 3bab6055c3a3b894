//! Decoding of bundled mapping archives.
//!
//! The mapping table ships inside a zip archive next to other files. The decoder walks
//! the archive entries in order, picks the first file whose path contains the marker
//! (for example `mappings/mappings.tiny`) and hands its text to the [`tiny`] parser.
//!
//! An archive without such an entry, or no archive at all, decodes to an empty
//! [`MappingTable`]. A broken archive or table is an error.
//!
//! Entries other than the selected one are only inspected by name, so they may use
//! compression methods or encryption this crate cannot read.
//!
//! The zip reader and the entry reader are owned by [`decode`] and dropped on every
//! return path, including the error paths of the table parser.

use std::io::{Cursor, ErrorKind, Read};

use zip::ZipArchive;

use crate::{
    mappings::{tiny, NamespacePair},
    MappingTable, Result,
};

/// Decodes the mapping table held by `archive`.
///
/// # Arguments
/// * `archive` - The raw zip bytes, or `None` if no archive is bundled
/// * `marker` - Substring identifying the mapping file's path inside the archive
/// * `namespaces` - The namespace columns to extract
///
/// # Errors
/// Returns [`crate::Error::Archive`] if the archive cannot be read,
/// [`crate::Error::FileError`] if the entry cannot be decompressed, and
/// [`crate::Error::Malformed`] if the entry is not valid UTF-8 or not a valid Tiny table.
///
/// # Examples
///
/// ```rust,no_run
/// use tinymap::{decoder::decode, EntityKind, NamespacePair};
///
/// let bytes = std::fs::read("mappings.zip")?;
/// let namespaces = NamespacePair::new("srg", "named");
/// let table = decode(Some(bytes.as_slice()), "mappings/mappings.tiny", &namespaces)?;
/// println!("{}", table.translate(EntityKind::Method, "m_46463_"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode(
    archive: Option<&[u8]>,
    marker: &str,
    namespaces: &NamespacePair,
) -> Result<MappingTable> {
    let Some(data) = archive else {
        tracing::debug!("No mapping archive bundled, using identity mappings");
        return Ok(MappingTable::new());
    };

    let mut zip = ZipArchive::new(Cursor::new(data))?;

    for index in 0..zip.len() {
        // Raw access only reads headers, so unrelated entries never need a decompressor
        let candidate = zip.by_index_raw(index)?;
        if candidate.is_dir() || !candidate.name().contains(marker) {
            continue;
        }
        drop(candidate);

        let mut entry = zip.by_index(index)?;
        tracing::debug!(
            "Decoding mapping table from archive entry '{}' ({} bytes)",
            entry.name(),
            entry.size()
        );

        let mut text = String::new();
        if let Err(error) = entry.read_to_string(&mut text) {
            return Err(match error.kind() {
                ErrorKind::InvalidData => malformed_error!(
                    "Mapping table entry '{}' is not valid UTF-8",
                    entry.name()
                ),
                _ => error.into(),
            });
        }

        return tiny::parse(&text, namespaces);
    }

    tracing::debug!(
        "Mapping archive has no entry matching '{}', using identity mappings",
        marker
    );
    Ok(MappingTable::new())
}
