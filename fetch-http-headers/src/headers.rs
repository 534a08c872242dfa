use crate::cors::{
    is_forbidden_request_header_name, is_forbidden_response_header_name,
    is_no_cors_safelisted_request_header, is_no_cors_safelisted_request_header_name,
    is_privileged_no_cors_request_header_name,
};
use crate::validate::{normalize_and_validate, normalize_and_validate_name};
use crate::{HeaderList, HeaderListIter, HeadersError};
use fetch_utils::collections::NonEmptyVec;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Restricts which mutations a [`Headers`] instance accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Guard {
    /// All valid mutations are accepted.
    #[default]
    None,
    /// Every mutation fails with [`HeadersError::Immutable`].
    Immutable,
    /// Mutations of [forbidden request header names] are dropped.
    ///
    /// [forbidden request header names]: crate::is_forbidden_request_header_name
    Request,
    /// Only no-CORS-safelisted request headers can be mutated,
    /// all other mutations are dropped. Privileged no-CORS request
    /// headers (`range`) are removed after each mutation.
    RequestNoCors,
    /// Mutations of [forbidden response header names] are dropped.
    ///
    /// [forbidden response header names]: crate::is_forbidden_response_header_name
    Response,
}

impl Guard {
    /// Name of the guard, as used by the Fetch standard.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Immutable => "immutable",
            Self::Request => "request",
            Self::RequestNoCors => "request-no-cors",
            Self::Response => "response",
        }
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial content of a [`Headers`] instance.
///
/// Deserializes from either an array of `[name, value]` arrays
/// or an object mapping names to values:
///
/// ```
/// use fetch_http_headers::{Headers, HeadersInit};
///
/// let init: HeadersInit = serde_json::from_str(r#"[["accept", "*/*"], ["accept", "text/html"]]"#).unwrap();
/// let headers = Headers::try_from_init(init).unwrap();
/// assert_eq!(headers.get("Accept").unwrap().as_deref(), Some("*/*, text/html"));
///
/// let init: HeadersInit = serde_json::from_str(r#"{"Content-Type": "text/plain"}"#).unwrap();
/// let headers = Headers::try_from_init(init).unwrap();
/// assert!(headers.has("content-type").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeadersInit {
    /// A sequence of entries, each of which must hold exactly a name and a value.
    Sequence(Vec<Vec<String>>),
    /// An ordered record of names and their value.
    Record(IndexMap<String, String>),
}

impl<N, V> FromIterator<(N, V)> for HeadersInit
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self::Sequence(
            iter.into_iter()
                .map(|(name, value)| vec![name.into(), value.into()])
                .collect(),
        )
    }
}

/// A [`HeaderList`] with a [`Guard`].
///
/// All operations normalize and validate their input first,
/// failing with [`HeadersError::InvalidHeaderName`] or
/// [`HeadersError::InvalidHeaderValue`]. Mutations are then checked against the guard:
/// [`Guard::Immutable`] fails, while the other guards silently drop
/// the mutations they do not permit.
///
/// ```
/// use fetch_http_headers::{Guard, Headers, HeadersError};
///
/// let mut headers = Headers::with_guard(Guard::Response);
/// headers.append("Content-Type", " text/plain ").unwrap();
/// headers.append("Set-Cookie", "id=1").unwrap();
///
/// assert_eq!(headers.get("content-type").unwrap().as_deref(), Some("text/plain"));
/// assert!(!headers.has("set-cookie").unwrap());
///
/// let init = [("Content-Type", "text/plain")].into_iter().collect();
/// let mut headers = Headers::try_from_init_with_guard(init, Guard::Immutable).unwrap();
/// assert_eq!(headers.delete("content-type"), Err(HeadersError::Immutable));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    list: HeaderList,
    guard: Guard,
}

#[derive(Clone, Copy)]
enum Mutation<'a> {
    Append { value: &'a str },
    Set { value: &'a str },
    Delete,
}

impl Headers {
    /// Create empty [`Headers`] guarded by [`Guard::None`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty [`Headers`] with the given [`Guard`].
    #[must_use]
    pub fn with_guard(guard: Guard) -> Self {
        Self {
            list: HeaderList::new(),
            guard,
        }
    }

    /// Create [`Headers`] guarded by [`Guard::None`], filled with `init`.
    pub fn try_from_init(init: HeadersInit) -> Result<Self, HeadersError> {
        Self::try_from_init_with_guard(init, Guard::None)
    }

    /// Create [`Headers`] filled with `init`, guarded by `guard` afterwards.
    ///
    /// The entries are appended without a guard, so forbidden names are kept
    /// and an [immutable](Guard::Immutable) result can still be filled.
    /// The guard cannot be changed once installed.
    pub fn try_from_init_with_guard(
        init: HeadersInit,
        guard: Guard,
    ) -> Result<Self, HeadersError> {
        let mut headers = Self::new();
        headers.fill(init)?;
        headers.guard = guard;
        Ok(headers)
    }

    /// [Append](Self::append) all entries of `init`, in order.
    ///
    /// Fails with [`HeadersError::MalformedInitializer`] for a sequence entry
    /// that does not hold exactly two elements. Entries before it remain appended.
    pub fn fill(&mut self, init: HeadersInit) -> Result<(), HeadersError> {
        match init {
            HeadersInit::Sequence(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    let [name, value] = entry.as_slice() else {
                        return Err(HeadersError::MalformedInitializer {
                            index,
                            len: entry.len(),
                        });
                    };
                    self.append(name, value)?;
                }
            }
            HeadersInit::Record(record) => {
                for (name, value) in &record {
                    self.append(name, value)?;
                }
            }
        }
        Ok(())
    }

    /// The [`Guard`] of these headers.
    #[must_use]
    pub fn guard(&self) -> Guard {
        self.guard
    }

    /// The underlying [`HeaderList`].
    #[must_use]
    pub fn header_list(&self) -> &HeaderList {
        &self.list
    }

    /// Append `value` to header `name`.
    pub fn append(&mut self, name: &str, value: &str) -> Result<(), HeadersError> {
        let (name, value) = normalize_and_validate(name, value)?;
        if self.permits(&name, Mutation::Append { value: &value })? {
            self.list.append(name, value);
            self.after_mutation();
        }
        Ok(())
    }

    /// Replace all values of header `name` with `value`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), HeadersError> {
        let (name, value) = normalize_and_validate(name, value)?;
        if self.permits(&name, Mutation::Set { value: &value })? {
            self.list.set(name, value);
            self.after_mutation();
        }
        Ok(())
    }

    /// Remove header `name`.
    pub fn delete(&mut self, name: &str) -> Result<(), HeadersError> {
        let name = normalize_and_validate_name(name)?;
        if self.permits(&name, Mutation::Delete)? && self.list.delete(&name).is_some() {
            self.after_mutation();
        }
        Ok(())
    }

    /// Get the values of header `name`, joined by `", "`.
    pub fn get(&self, name: &str) -> Result<Option<String>, HeadersError> {
        let name = normalize_and_validate_name(name)?;
        Ok(self.list.get(&name))
    }

    /// Returns `true` if header `name` is present.
    pub fn has(&self, name: &str) -> Result<bool, HeadersError> {
        let name = normalize_and_validate_name(name)?;
        Ok(self.list.contains(&name))
    }

    /// The values of all `set-cookie` headers, unjoined.
    #[must_use]
    pub fn get_set_cookie(&self) -> Vec<String> {
        self.list
            .get_all("set-cookie")
            .map(|values| values.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Iterate over all headers and their values, in insertion order.
    pub fn iter(&self) -> HeaderListIter<'_> {
        self.list.iter()
    }

    /// Check `mutation` of header `name` against the guard.
    ///
    /// Returns `Ok(false)` when the mutation has to be dropped.
    fn permits(&self, name: &str, mutation: Mutation<'_>) -> Result<bool, HeadersError> {
        let permitted = match self.guard {
            Guard::None => true,
            Guard::Immutable => return Err(HeadersError::Immutable),
            Guard::Request => !is_forbidden_request_header_name(name),
            Guard::RequestNoCors => match mutation {
                Mutation::Append { value } => match self.list.get(name) {
                    Some(existing) => {
                        is_no_cors_safelisted_request_header(name, &format!("{existing}, {value}"))
                    }
                    None => is_no_cors_safelisted_request_header(name, value),
                },
                Mutation::Set { value } => is_no_cors_safelisted_request_header(name, value),
                Mutation::Delete => {
                    is_no_cors_safelisted_request_header_name(name)
                        || is_privileged_no_cors_request_header_name(name)
                }
            },
            Guard::Response => !is_forbidden_response_header_name(name),
        };

        if !permitted {
            tracing::debug!(
                guard = %self.guard,
                header.name = name,
                "drop header mutation not permitted by guard"
            );
        }
        Ok(permitted)
    }

    fn after_mutation(&mut self) {
        if self.guard == Guard::RequestNoCors {
            self.list.delete("range");
        }
    }
}

impl TryFrom<HeadersInit> for Headers {
    type Error = HeadersError;

    fn try_from(init: HeadersInit) -> Result<Self, Self::Error> {
        Self::try_from_init(init)
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a NonEmptyVec<String>);
    type IntoIter = HeaderListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
