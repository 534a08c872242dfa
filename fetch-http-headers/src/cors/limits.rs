use super::contains_cors_unsafe_request_header_byte;
use crate::{HeaderList, mime_essence};
use fetch_utils::macros::{generate_set_and_with, match_ignore_ascii_case_str};
use serde::{Deserialize, Serialize};

/// Size thresholds applied when classifying CORS-safelisted request headers.
///
/// The [`Default`] values are the ones mandated by the Fetch standard,
/// which are also used by the free functions
/// [`is_cors_safelisted_request_header`] and [`cors_unsafe_request_header_names`].
///
/// Missing fields fall back to their default when deserializing:
///
/// ```
/// use fetch_http_headers::CorsSafelistLimits;
///
/// let limits: CorsSafelistLimits = serde_json::from_str(r#"{"max_total_len": 2048}"#).unwrap();
/// assert_eq!(limits.max_value_len(), 128);
/// assert_eq!(limits.max_total_len(), 2048);
/// ```
///
/// [`is_cors_safelisted_request_header`]: crate::is_cors_safelisted_request_header
/// [`cors_unsafe_request_header_names`]: crate::cors_unsafe_request_header_names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsSafelistLimits {
    max_value_len: usize,
    max_total_len: usize,
}

impl Default for CorsSafelistLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CorsSafelistLimits {
    /// The limits of the Fetch standard: 128 per value, 1024 in total.
    pub const DEFAULT: Self = Self {
        max_value_len: 128,
        max_total_len: 1024,
    };

    /// Create [`CorsSafelistLimits`] with the default thresholds.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Maximum length, in characters, of a single safelisted value.
    #[must_use]
    pub const fn max_value_len(&self) -> usize {
        self.max_value_len
    }

    /// Maximum combined length, in characters,
    /// of all potentially safelisted values of a header list.
    #[must_use]
    pub const fn max_total_len(&self) -> usize {
        self.max_total_len
    }

    generate_set_and_with! {
        /// Set the maximum length of a single safelisted value.
        pub const fn max_value_len(mut self, len: usize) -> Self {
            self.max_value_len = len;
            self
        }
    }

    generate_set_and_with! {
        /// Set the maximum combined length of all potentially safelisted values.
        pub const fn max_total_len(mut self, len: usize) -> Self {
            self.max_total_len = len;
            self
        }
    }

    /// Returns `true` if `(name, value)` is a CORS-safelisted request header
    /// under these limits.
    ///
    /// See [`is_cors_safelisted_request_header`] for the rules per name.
    ///
    /// [`is_cors_safelisted_request_header`]: crate::is_cors_safelisted_request_header
    pub fn is_safelisted_request_header(&self, name: &str, value: &str) -> bool {
        if value.chars().count() > self.max_value_len {
            return false;
        }

        match_ignore_ascii_case_str!(match (name) {
            "accept" => !contains_cors_unsafe_request_header_byte(value),
            "accept-language" | "content-language" => value.chars().all(|c| {
                matches!(c, '0'..='9' | 'A'..='Z' | 'a'..='z' | ' ' | '*' | ',' | '-' | '.' | ';' | '=')
            }),
            "content-type" => {
                !contains_cors_unsafe_request_header_byte(value)
                    && mime_essence(value).is_some_and(|essence| {
                        matches!(
                            essence.as_str(),
                            "application/x-www-form-urlencoded"
                                | "multipart/form-data"
                                | "text/plain"
                        )
                    })
            },
            _ => false,
        })
    }

    /// Collect the names of all headers in `list` which are not CORS-safelisted
    /// under these limits, lowercased, sorted and without duplicates.
    ///
    /// When the combined length of the safelisted values exceeds
    /// [`max_total_len`](Self::max_total_len) their names are returned as well.
    pub fn unsafe_request_header_names(&self, list: &HeaderList) -> Vec<String> {
        let mut unsafe_names = Vec::new();
        let mut potentially_unsafe_names = Vec::new();
        let mut safelist_value_size = 0;

        for (name, values) in list {
            let value = values.join(", ");
            if self.is_safelisted_request_header(name, &value) {
                safelist_value_size += value.chars().count();
                potentially_unsafe_names.push(name);
            } else {
                unsafe_names.push(name);
            }
        }

        if safelist_value_size > self.max_total_len {
            tracing::trace!(
                total = safelist_value_size,
                limit = self.max_total_len,
                count = potentially_unsafe_names.len(),
                "safelisted request header values exceed combined size limit: mark all as unsafe"
            );
            unsafe_names.append(&mut potentially_unsafe_names);
        }

        let mut names: Vec<String> = unsafe_names
            .into_iter()
            .map(str::to_ascii_lowercase)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
