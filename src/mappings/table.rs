use std::{borrow::Cow, collections::HashMap};

use super::EntityKind;

/// Converts an internal class name (`a/b/C`) into its dotted form (`a.b.C`).
///
/// Names without a `/` are returned borrowed.
#[must_use]
pub fn normalize_class_name(name: &str) -> Cow<'_, str> {
    if name.contains('/') {
        Cow::Owned(name.replace('/', "."))
    } else {
        Cow::Borrowed(name)
    }
}

/// The decoded mapping table: three independent indices from source-namespace names to
/// target-namespace names.
///
/// Class names are stored dotted on both sides. Method and field names are stored exactly
/// as written in the mapping file. A table is built once by the decoder and never changes
/// afterwards; everything public on it is read-only.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MappingTable {
    classes: HashMap<String, String>,
    methods: HashMap<String, String>,
    fields: HashMap<String, String>,
}

impl MappingTable {
    /// Creates an empty table, which maps every name to itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, kind: EntityKind, source: &str, target: &str) {
        match kind {
            EntityKind::Class => {
                self.classes.insert(
                    normalize_class_name(source).into_owned(),
                    normalize_class_name(target).into_owned(),
                );
            }
            EntityKind::Method => {
                self.methods.insert(source.to_string(), target.to_string());
            }
            EntityKind::Field => {
                self.fields.insert(source.to_string(), target.to_string());
            }
            EntityKind::Other => {}
        }
    }

    /// Looks up the target name for `name`, without any fallback.
    ///
    /// Class names may be given in either internal (`a/b/C`) or dotted (`a.b.C`) form.
    /// [`EntityKind::Other`] never has a mapping.
    #[must_use]
    pub fn get(&self, kind: EntityKind, name: &str) -> Option<&str> {
        let index = match kind {
            EntityKind::Class => {
                return self
                    .classes
                    .get(normalize_class_name(name).as_ref())
                    .map(String::as_str);
            }
            EntityKind::Method => &self.methods,
            EntityKind::Field => &self.fields,
            EntityKind::Other => return None,
        };

        index.get(name).map(String::as_str)
    }

    /// Translates `name`, returning it unchanged if the table has no entry for it.
    #[must_use]
    pub fn translate<'a>(&'a self, kind: EntityKind, name: &'a str) -> &'a str {
        self.get(kind, name).unwrap_or(name)
    }

    /// Class mappings, keyed by dotted source name
    #[must_use]
    pub fn classes(&self) -> &HashMap<String, String> {
        &self.classes
    }

    /// Method mappings, keyed by raw source name
    #[must_use]
    pub fn methods(&self) -> &HashMap<String, String> {
        &self.methods
    }

    /// Field mappings, keyed by raw source name
    #[must_use]
    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// Total number of entries over all three indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len() + self.methods.len() + self.fields.len()
    }

    /// Returns `true` if the table holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
