use std::sync::Arc;

use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// A missing mapping archive is deliberately *not* represented here: the service treats
/// it as "no mapping data" and answers every lookup with the input name. Everything in
/// this enum is a real failure that reaches the caller of the lookup which triggered
/// decoding.
///
/// # Error Categories
///
/// ## Content Errors
/// - [`Error::Archive`] - The bundled zip archive could not be opened or iterated
/// - [`Error::FileError`] - An archive entry could not be read
/// - [`Error::Malformed`] - The mapping table header or a row could not be parsed
///
/// ## Contract Errors
/// - [`Error::UnsupportedKind`] - The host passed an entity kind this service does not know
///
/// ## Cached Failures
/// - [`Error::Unavailable`] - Decoding failed earlier; the failure is permanent for the service
///
/// # Examples
///
/// ```rust,no_run
/// use tinymap::{EntityKind, Error, MappingService, NameMappingService};
///
/// let service = MappingService::from_file("mappings.zip");
/// match service.translate(EntityKind::Class, "net/minecraft/world/level/Level") {
///     Ok(name) => println!("mapped to {name}"),
///     Err(Error::Unavailable(cause)) => eprintln!("mappings unusable: {cause}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The mapping table is damaged and could not be parsed.
    ///
    /// Raised for an unrecognized header, a namespace the header does not declare,
    /// a row with too few columns, or an entry that is not valid UTF-8. The error
    /// includes the source location where the malformation was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The mapping archive could not be opened or one of its entries could not be
    /// located or decompressed.
    #[error("Archive error - {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O error while reading an archive entry.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// The host asked for an entity kind outside of class, method, field and other.
    ///
    /// This is a contract violation by the caller and is never silently passed through.
    #[error("Unsupported entity kind - {0}")]
    UnsupportedKind(String),

    /// Decoding the mapping table failed on an earlier lookup.
    ///
    /// The service never retries a failed decode; every lookup after the failure
    /// reports the original cause through this variant.
    #[error("Mapping table unavailable - {0}")]
    Unavailable(Arc<Error>),
}

impl Error {
    /// Returns `true` if this error was caused by the content of the mapping archive,
    /// either directly or as the cached cause of an [`Error::Unavailable`].
    #[must_use]
    pub fn is_content_error(&self) -> bool {
        match self {
            Error::Malformed { .. } | Error::Archive(_) | Error::FileError(_) => true,
            Error::Unavailable(cause) => cause.is_content_error(),
            Error::UnsupportedKind(_) => false,
        }
    }
}
