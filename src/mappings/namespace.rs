use std::fmt;

/// The two namespaces a mapping service translates between.
///
/// Namespace identifiers are opaque; they only have to match the column names declared
/// in the header of the bundled mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacePair {
    source: String,
    target: String,
}

impl NamespacePair {
    /// Creates a new pair translating from `source` to `target`.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        NamespacePair {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The namespace lookups are keyed by
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The namespace lookups resolve to
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the pair as `(source, target)`.
    #[must_use]
    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.source, &self.target)
    }
}

impl fmt::Display for NamespacePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
