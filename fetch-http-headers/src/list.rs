use crate::structured::{StructuredField, StructuredFieldKind};
use crate::util::decode_and_split;
use fetch_error::OpaqueError;
use fetch_utils::collections::NonEmptyVec;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;

/// An ordered multi-map of lowercase header names to their values.
///
/// Each name maps to a non-empty sequence of values, in the order they
/// were appended. Entries keep the order in which their name was first added.
///
/// All operations take names case-insensitively. The list does not
/// validate names or values: that is done by [`Headers`] before delegating
/// to its list.
///
/// ```
/// use fetch_http_headers::HeaderList;
///
/// let mut list = HeaderList::new();
/// list.append("Accept", "text/html");
/// list.append("accept", "*/*");
/// list.combine("Vary", "accept");
///
/// assert_eq!(list.get("ACCEPT").as_deref(), Some("text/html, */*"));
/// assert_eq!(list.sorted_lowercase_names(), ["accept", "vary"]);
/// ```
///
/// [`Headers`]: crate::Headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    entries: IndexMap<String, NonEmptyVec<String>>,
}

fn lowercase_name(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

impl HeaderList {
    /// Create an empty [`HeaderList`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list contains no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a header named `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(lowercase_name(name).as_ref())
    }

    /// Get the values of header `name`, joined by `", "`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.get_all(name).map(|values| values.join(", "))
    }

    /// Get the values of header `name`, as they were added.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Option<&NonEmptyVec<String>> {
        self.entries.get(lowercase_name(name).as_ref())
    }

    /// Get the value of header `name`, split into its comma-separated parts.
    ///
    /// Commas within quoted-strings do not split.
    /// See [`decode_and_split`] for the details.
    ///
    /// ```
    /// use fetch_http_headers::HeaderList;
    ///
    /// let mut list = HeaderList::new();
    /// list.append("x-list", r#"a, "b, c""#);
    /// list.append("x-list", "d");
    /// assert_eq!(
    ///     list.get_decode_split("x-list").unwrap(),
    ///     ["a", r#""b, c""#, "d"],
    /// );
    /// ```
    ///
    /// [`decode_and_split`]: crate::util::decode_and_split
    #[must_use]
    pub fn get_decode_split(&self, name: &str) -> Option<Vec<String>> {
        self.get(name).map(|value| decode_and_split(&value))
    }

    /// Get header `name`, parsed as a structured field of the given `kind`.
    ///
    /// Returns `None` when the header is absent or does not parse.
    #[must_use]
    pub fn get_structured_field(
        &self,
        name: &str,
        kind: StructuredFieldKind,
    ) -> Option<StructuredField> {
        let value = self.get(name)?;
        match StructuredField::parse(&value, kind) {
            Ok(field) => Some(field),
            Err(err) => {
                tracing::debug!(
                    header.name = name,
                    error = %err,
                    "failed to parse header as structured field: treat as absent"
                );
                None
            }
        }
    }

    /// Serialize `field` and [`set`](Self::set) it as the value of header `name`.
    pub fn set_structured_field(
        &mut self,
        name: &str,
        field: &StructuredField,
    ) -> Result<(), OpaqueError> {
        let value = field.serialize()?;
        self.set(name, value);
        Ok(())
    }

    /// Add a value to header `name`, creating the header if absent.
    pub fn append(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let value = value.into();
        match self.entries.get_mut(lowercase_name(name.as_ref()).as_ref()) {
            Some(values) => values.push(value),
            None => {
                self.entries
                    .insert(name.as_ref().to_ascii_lowercase(), NonEmptyVec::new(value));
            }
        }
    }

    /// Replace all values of header `name` with `value`.
    ///
    /// An existing header keeps its position.
    pub fn set(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let value = NonEmptyVec::new(value.into());
        match self.entries.get_mut(lowercase_name(name.as_ref()).as_ref()) {
            Some(values) => *values = value,
            None => {
                self.entries
                    .insert(name.as_ref().to_ascii_lowercase(), value);
            }
        }
    }

    /// Remove header `name`, returning its values if it was present.
    ///
    /// The order of the other headers is preserved.
    pub fn delete(&mut self, name: &str) -> Option<NonEmptyVec<String>> {
        self.entries.shift_remove(lowercase_name(name).as_ref())
    }

    /// Combine `value` into header `name`.
    ///
    /// Unlike [`append`](Self::append), which adds a separate value,
    /// this concatenates `value` onto the first existing value as `"{first}, {value}"`.
    /// An absent header is created.
    pub fn combine(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) {
        let value = value.as_ref();
        match self.entries.get_mut(lowercase_name(name.as_ref()).as_ref()) {
            Some(values) => {
                let first = values.first_mut();
                first.push_str(", ");
                first.push_str(value);
            }
            None => {
                self.entries.insert(
                    name.as_ref().to_ascii_lowercase(),
                    NonEmptyVec::new(value.to_owned()),
                );
            }
        }
    }

    /// All header names, lowercase and sorted by code point.
    #[must_use]
    pub fn sorted_lowercase_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// All headers sorted by name, each with its values joined by `", "`.
    #[must_use]
    pub fn sort_and_combine(&self) -> Vec<(String, String)> {
        let mut headers: Vec<(String, String)> = self
            .entries
            .iter()
            .map(|(name, values)| (name.clone(), values.join(", ")))
            .collect();
        headers.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        headers
    }

    /// Iterate over all headers and their values, in insertion order.
    pub fn iter(&self) -> HeaderListIter<'_> {
        HeaderListIter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over all header names, in insertion order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

/// Iterator over the headers of a [`HeaderList`], see [`HeaderList::iter`].
#[derive(Debug, Clone)]
pub struct HeaderListIter<'a> {
    inner: indexmap::map::Iter<'a, String, NonEmptyVec<String>>,
}

impl<'a> Iterator for HeaderListIter<'a> {
    type Item = (&'a str, &'a NonEmptyVec<String>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, values)| (name.as_str(), values))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for HeaderListIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(name, values)| (name.as_str(), values))
    }
}

impl ExactSizeIterator for HeaderListIter<'_> {}

impl std::iter::FusedIterator for HeaderListIter<'_> {}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = (&'a str, &'a NonEmptyVec<String>);
    type IntoIter = HeaderListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N, V> Extend<(N, V)> for HeaderList
where
    N: AsRef<str>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderList
where
    N: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Serialize for HeaderList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HeaderList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = IndexMap::<String, NonEmptyVec<String>>::deserialize(deserializer)?;
        let mut list = Self::new();
        for (name, values) in entries {
            list.extend(values.into_iter().map(|value| (name.as_str(), value)));
        }
        Ok(list)
    }
}
