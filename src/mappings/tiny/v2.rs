//! Tiny v2 row grammar.
//!
//! Rows nest through leading tabs:
//!
//! ```text
//! 	escaped-names                       header property
//! c	<name>...                           class
//! 	m	<descriptor>	<name>...           method of the enclosing class
//! 	f	<descriptor>	<name>...           field of the enclosing class
//! 		p	<index>	<name>...           method parameter
//! 		v	<index>	<start>	<slot>	<name>...   local variable
//! 	c	<comment>                       class comment
//! 		c	<comment>                   member comment
//! 			c	<comment>               parameter / variable comment
//! ```
//!
//! Parameters, variables and comments have no place in the lookup table; they are
//! checked for correct nesting and otherwise skipped.

use std::borrow::Cow;

use super::Columns;
use crate::{EntityKind, MappingTable, Result};

/// Header property that turns on backslash escapes in names
const ESCAPED_NAMES: &str = "escaped-names";

/// The innermost open section, which decides what may be nested below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Still reading header properties
    Properties,
    Class,
    Member,
    Variable,
    /// A comment; nothing nests below it
    Leaf,
}

pub(super) fn parse<'a>(
    lines: impl Iterator<Item = (usize, &'a str)>,
    columns: &Columns,
    table: &mut MappingTable,
) -> Result<()> {
    let mut escaped = false;
    // Section open at each indentation level: [class level, member level, variable level]
    let mut open = [Section::Properties, Section::Leaf, Section::Leaf];

    for (line, text) in lines {
        if text.is_empty() {
            continue;
        }

        let depth = text.bytes().take_while(|&b| b == b'\t').count();
        let mut parts = text[depth..].split('\t');
        let section = parts.next().unwrap_or_default();

        match depth {
            0 => {
                if section != "c" {
                    return Err(malformed_error!(
                        "Line {}: unknown Tiny v2 section '{}'",
                        line,
                        section
                    ));
                }
                insert(EntityKind::Class, parts, columns, escaped, line, table)?;
                open = [Section::Class, Section::Leaf, Section::Leaf];
            }
            1 if open[0] == Section::Properties => {
                if section == ESCAPED_NAMES {
                    escaped = true;
                }
            }
            1 => {
                let kind = match section {
                    "m" => EntityKind::Method,
                    "f" => EntityKind::Field,
                    "c" => {
                        open[1] = Section::Leaf;
                        open[2] = Section::Leaf;
                        continue;
                    }
                    other => {
                        return Err(malformed_error!(
                            "Line {}: unknown Tiny v2 class member '{}'",
                            line,
                            other
                        ))
                    }
                };

                if parts.next().is_none() {
                    return Err(malformed_error!(
                        "Line {}: {} row is missing its descriptor",
                        line,
                        kind
                    ));
                }

                insert(kind, parts, columns, escaped, line, table)?;
                open[1] = Section::Member;
                open[2] = Section::Leaf;
            }
            2 if open[1] == Section::Member => {
                open[2] = match section {
                    "p" | "v" => Section::Variable,
                    "c" => Section::Leaf,
                    other => {
                        return Err(malformed_error!(
                            "Line {}: unknown Tiny v2 member section '{}'",
                            line,
                            other
                        ))
                    }
                };
            }
            3 if open[1] == Section::Member && open[2] == Section::Variable && section == "c" => {}
            _ => {
                return Err(malformed_error!(
                    "Line {}: '{}' is not nested under a matching section",
                    line,
                    section
                ))
            }
        }
    }

    Ok(())
}

fn insert<'a>(
    kind: EntityKind,
    parts: impl Iterator<Item = &'a str>,
    columns: &Columns,
    escaped: bool,
    line: usize,
    table: &mut MappingTable,
) -> Result<()> {
    let names = parts
        .map(|name| {
            if escaped {
                unescape(name, line)
            } else {
                Ok(Cow::Borrowed(name))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some((source, target)) = columns.select(names.as_slice(), line)? {
        table.insert(kind, source, target);
    }

    Ok(())
}

/// Resolves the escapes allowed in names of tables with the `escaped-names` property.
fn unescape(name: &str, line: usize) -> Result<Cow<'_, str>> {
    if !name.contains('\\') {
        return Ok(Cow::Borrowed(name));
    }

    let mut result = String::with_capacity(name.len());
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        result.push(match chars.next() {
            Some('\\') => '\\',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('0') => '\0',
            Some(other) => {
                return Err(malformed_error!(
                    "Line {}: invalid escape sequence '\\{}'",
                    line,
                    other
                ))
            }
            None => {
                return Err(malformed_error!(
                    "Line {}: name ends with a dangling escape",
                    line
                ))
            }
        });
    }

    Ok(Cow::Owned(result))
}
