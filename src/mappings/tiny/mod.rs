//! Parser for the Tiny mapping format.
//!
//! Tiny is a tab-separated, line-oriented format. The first line is a header that
//! declares the format version and the namespaces, one name column per namespace:
//!
//! ```text
//! v1	official	srg	named                   (Tiny v1)
//! tiny	2	0	official	srg	named           (Tiny v2.0)
//! ```
//!
//! The header is parsed first and selects the row grammar ([`TinyVersion`]); the
//! configured source and target namespaces are then resolved to column indices. Both
//! row grammars feed the same [`MappingTable`], so only the names of the two requested
//! namespaces are ever kept.
//!
//! # Name Resolution
//!
//! A name column may be empty. An empty name resolves to the name in the first
//! namespace column, which is how Tiny files express "unchanged in this namespace".
//! Rows whose resolved source name is still empty are skipped.

mod v1;
mod v2;

use crate::{mappings::NamespacePair, MappingTable, Result};

/// Format versions understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TinyVersion {
    /// `v1` header with `CLASS`/`METHOD`/`FIELD` rows
    V1,
    /// `tiny 2 <minor>` header with indentation-nested rows
    V2 {
        /// Minor version declared by the header
        minor: u32,
    },
}

/// The parsed header line of a Tiny file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    /// Detected format version
    pub version: TinyVersion,
    /// Namespaces in column order
    pub namespaces: Vec<&'a str>,
}

impl<'a> Header<'a> {
    /// Parses and validates a header line.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the line does not declare a supported version
    /// or declares fewer than two namespaces.
    pub fn parse(line: &'a str) -> Result<Header<'a>> {
        let mut parts = line.split('\t');

        let version = match parts.next() {
            Some("v1") => TinyVersion::V1,
            Some("tiny") => {
                let major = parts.next();
                let minor = parts.next();
                match (major, minor.map(str::parse::<u32>)) {
                    (Some("2"), Some(Ok(0))) => TinyVersion::V2 { minor: 0 },
                    (Some("2"), Some(Ok(minor))) => {
                        return Err(malformed_error!(
                            "Unsupported Tiny v2 minor version - {}",
                            minor
                        ))
                    }
                    _ => {
                        return Err(malformed_error!(
                            "Unsupported Tiny header version - '{}'",
                            line
                        ))
                    }
                }
            }
            _ => return Err(malformed_error!("Unrecognized mapping header - '{}'", line)),
        };

        let namespaces: Vec<&str> = parts.collect();
        if namespaces.len() < 2 {
            return Err(malformed_error!(
                "Mapping header declares {} namespace(s), at least 2 are required",
                namespaces.len()
            ));
        }

        if let Some(empty) = namespaces.iter().position(|ns| ns.is_empty()) {
            return Err(malformed_error!("Mapping header namespace {} is empty", empty));
        }

        Ok(Header {
            version,
            namespaces,
        })
    }
}

/// Column indices of the two namespaces that end up in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Columns {
    source: usize,
    target: usize,
    count: usize,
}

impl Columns {
    pub(crate) fn resolve(header: &Header<'_>, pair: &NamespacePair) -> Result<Columns> {
        let find = |namespace: &str| {
            header
                .namespaces
                .iter()
                .position(|declared| *declared == namespace)
                .ok_or_else(|| {
                    malformed_error!(
                        "Namespace '{}' is not declared by the mapping header ({})",
                        namespace,
                        header.namespaces.join(", ")
                    )
                })
        };

        Ok(Columns {
            source: find(pair.source())?,
            target: find(pair.target())?,
            count: header.namespaces.len(),
        })
    }

    /// Number of name columns every row must carry
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Picks the source and target names out of a row's name columns.
    ///
    /// Returns `Ok(None)` for rows without a usable source name.
    pub(crate) fn select<'n, S: AsRef<str>>(
        &self,
        names: &'n [S],
        line: usize,
    ) -> Result<Option<(&'n str, &'n str)>> {
        if names.len() < self.count() {
            return Err(malformed_error!(
                "Line {}: expected {} name columns, found {}",
                line,
                self.count(),
                names.len()
            ));
        }

        let primary = names[0].as_ref();
        let resolve = |index: usize| match names[index].as_ref() {
            "" => primary,
            name => name,
        };

        let source = resolve(self.source);
        if source.is_empty() {
            return Ok(None);
        }

        Ok(Some((source, resolve(self.target))))
    }
}

/// Parses a complete Tiny file into a [`MappingTable`] holding the `namespaces` pair.
///
/// # Errors
/// Returns [`crate::Error::Malformed`] for an empty input, an unsupported header, a
/// namespace missing from the header, or a row that does not follow the detected grammar.
pub fn parse(text: &str, namespaces: &NamespacePair) -> Result<MappingTable> {
    let mut lines = text.lines().enumerate().map(|(index, line)| (index + 1, line));

    let Some((_, header_line)) = lines.next() else {
        return Err(malformed_error!("Mapping table is empty"));
    };

    let header = Header::parse(header_line)?;
    let columns = Columns::resolve(&header, namespaces)?;

    tracing::debug!(
        "Detected Tiny {:?} table with namespaces [{}]",
        header.version,
        header.namespaces.join(", ")
    );

    let mut table = MappingTable::new();
    match header.version {
        TinyVersion::V1 => v1::parse(lines, &columns, &mut table)?,
        TinyVersion::V2 { .. } => v2::parse(lines, &columns, &mut table)?,
    }

    Ok(table)
}
