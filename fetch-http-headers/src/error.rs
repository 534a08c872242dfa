use std::fmt;

/// Errors returned when mutating or constructing [`Headers`].
///
/// Classification and tokenizing never fail, so this error
/// only surfaces from explicit mutation or initialization calls.
///
/// [`Headers`]: crate::Headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadersError {
    /// The header name is empty or not a valid token.
    InvalidHeaderName {
        /// The offending name, as supplied by the caller.
        name: String,
    },
    /// The header value is empty after trimming, or contains
    /// a character outside of tab, printable ASCII and the Latin-1 range.
    InvalidHeaderValue {
        /// The name the value was supplied for, as supplied by the caller.
        name: String,
        /// The offending value, after whitespace normalization.
        value: String,
    },
    /// A mutation was attempted on headers guarded as immutable.
    Immutable,
    /// An initializer entry did not hold exactly one name and one value.
    MalformedInitializer {
        /// Zero-based position of the entry within the initializer.
        index: usize,
        /// Number of elements found in that entry.
        len: usize,
    },
}

impl HeadersError {
    pub(crate) fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidHeaderName { name: name.into() }
    }

    pub(crate) fn invalid_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidHeaderValue {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for HeadersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeaderName { name } => write!(f, "invalid header name: {name}"),
            Self::InvalidHeaderValue { name, value } => {
                write!(f, "invalid header value: {value} for header name: {name}")
            }
            Self::Immutable => f.write_str("immutable headers cannot be modified"),
            Self::MalformedInitializer { index, len } => write!(
                f,
                "header initializer entry #{index} has {len} elements, expected 2"
            ),
        }
    }
}

impl std::error::Error for HeadersError {}
