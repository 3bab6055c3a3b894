//! Tiny v1 row grammar.
//!
//! ```text
//! CLASS	<name>...
//! METHOD	<owner>	<descriptor>	<name>...
//! FIELD	<owner>	<descriptor>	<name>...
//! ```
//!
//! Members refer to their class through `owner`, the class name in the first namespace.
//! Blank lines and `#` comments are skipped.

use super::Columns;
use crate::{EntityKind, MappingTable, Result};

pub(super) fn parse<'a>(
    lines: impl Iterator<Item = (usize, &'a str)>,
    columns: &Columns,
    table: &mut MappingTable,
) -> Result<()> {
    for (line, text) in lines {
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut parts = text.split('\t');
        let kind = match parts.next() {
            Some("CLASS") => EntityKind::Class,
            Some("METHOD") => EntityKind::Method,
            Some("FIELD") => EntityKind::Field,
            Some(other) => {
                return Err(malformed_error!(
                    "Line {}: unknown Tiny v1 row type '{}'",
                    line,
                    other
                ))
            }
            None => continue,
        };

        if kind != EntityKind::Class {
            let owner = parts.next().unwrap_or_default();
            let descriptor = parts.next();
            if owner.is_empty() || descriptor.is_none() {
                return Err(malformed_error!(
                    "Line {}: {} row is missing its owner or descriptor",
                    line,
                    kind
                ));
            }
        }

        let names: Vec<&str> = parts.collect();
        if let Some((source, target)) = columns.select(names.as_slice(), line)? {
            table.insert(kind, source, target);
        }
    }

    Ok(())
}
