use serde::{
    Deserialize, Serialize,
    ser::{SerializeSeq, Serializer},
};

use std::convert::TryFrom;
use std::iter;
use std::vec;

/// Like the `vec!` macro, but enforces at least one argument. A nice short-hand
/// for constructing [`NonEmptyVec`] values.
///
/// ```
/// use fetch_utils::collections::{NonEmptyVec, non_empty_vec};
///
/// let v = non_empty_vec![1, 2, 3];
/// assert_eq!(v, NonEmptyVec { head: 1, tail: vec![2, 3]});
///
/// let v = non_empty_vec![1];
/// assert_eq!(v, NonEmptyVec::new(1));
///
/// // Accepts trailing commas
/// let v = non_empty_vec![1,];
/// assert_eq!(v, NonEmptyVec::new(1));
///
/// // Doesn't compile!
/// // let v = non_empty_vec![];
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __non_empty_vec {
    ($h:expr, $( $x:expr ),* $(,)?) => {{
        let tail = $crate::collections::__macro_support::vec![$($x),*];
        $crate::collections::NonEmptyVec { head: $h, tail }
    }};
    ($h:expr) => {
        $crate::collections::NonEmptyVec {
            head: $h,
            tail: $crate::collections::__macro_support::vec![],
        }
    };
}

/// A Non-empty growable vector.
///
/// The value sequence of a header entry is a [`NonEmptyVec`]:
/// an entry only exists while it holds at least one value,
/// so [`NonEmptyVec::first`] never returns an `Option`.
///
/// # Examples
///
/// ```
/// use fetch_utils::collections::{NonEmptyVec, non_empty_vec};
///
/// let l: NonEmptyVec<u32> = non_empty_vec![1, 2, 3];
/// assert_eq!(l.head, 1);
/// assert_eq!(l.len(), 3);
/// ```
///
/// # Caveats
///
/// Since `NonEmptyVec` must have a least one element, it is not possible to
/// implement the [`FromIterator`] trait for it. Use [`NonEmptyVec::collect`] instead.
#[derive(Deserialize)]
#[serde(try_from = "Vec<T>")]
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyVec<T> {
    pub head: T,
    pub tail: Vec<T>,
}

// Nb. `Serialize` is implemented manually, as serde's `into` container attribute
// requires a `T: Clone` bound which we'd like to avoid.
impl<T> Serialize for NonEmptyVec<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for e in self {
            seq.serialize_element(e)?;
        }
        seq.end()
    }
}

/// Iterator for [`NonEmptyVec`].
#[derive(Debug, Clone)]
pub struct NonEmptyVecIter<'a, T> {
    head: Option<&'a T>,
    tail: &'a [T],
}

impl<'a, T> Iterator for NonEmptyVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.head.take() {
            Some(value)
        } else if let Some((first, rest)) = self.tail.split_first() {
            self.tail = rest;
            Some(first)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for NonEmptyVecIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if let Some((last, rest)) = self.tail.split_last() {
            self.tail = rest;
            Some(last)
        } else {
            self.head.take()
        }
    }
}

impl<T> ExactSizeIterator for NonEmptyVecIter<'_, T> {
    fn len(&self) -> usize {
        self.tail.len() + usize::from(self.head.is_some())
    }
}

impl<T> std::iter::FusedIterator for NonEmptyVecIter<'_, T> {}

impl<T> NonEmptyVec<T> {
    /// Alias for [`NonEmptyVec::singleton`].
    pub const fn new(e: T) -> Self {
        Self::singleton(e)
    }

    /// Create a new non-empty list with an initial element.
    pub const fn singleton(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Attempt to convert an iterator into a `NonEmptyVec` vector.
    /// Returns `None` if the iterator was empty.
    pub fn collect<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let head = iter.next()?;
        Some(Self {
            head,
            tail: iter.collect(),
        })
    }

    /// Create a [`NonEmptyVec`] from a [`Vec`], returning `None` if it is empty.
    #[must_use]
    pub fn from_vec(mut vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(Self { head, tail: vec })
        }
    }

    /// Always returns false.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Get the first element. Never fails.
    pub const fn first(&self) -> &T {
        &self.head
    }

    /// Get the mutable reference to the first element. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use fetch_utils::collections::NonEmptyVec;
    ///
    /// let mut non_empty = NonEmptyVec::new(String::from("text/html"));
    /// non_empty.first_mut().push_str(", text/plain");
    /// assert_eq!(non_empty.first(), "text/html, text/plain");
    /// ```
    pub fn first_mut(&mut self) -> &mut T {
        &mut self.head
    }

    /// Push an element to the end of the list.
    pub fn push(&mut self, e: T) {
        self.tail.push(e)
    }

    /// Get the length of the list.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Iterate over the elements, head first.
    ///
    /// ```
    /// use fetch_utils::collections::NonEmptyVec;
    ///
    /// let l = NonEmptyVec::from((42, vec![36, 58]));
    ///
    /// let mut l_iter = l.iter();
    ///
    /// assert_eq!(l_iter.len(), 3);
    /// assert_eq!(l_iter.next(), Some(&42));
    /// assert_eq!(l_iter.next(), Some(&36));
    /// assert_eq!(l_iter.next(), Some(&58));
    /// assert_eq!(l_iter.next(), None);
    /// ```
    pub fn iter(&self) -> NonEmptyVecIter<'_, T> {
        NonEmptyVecIter {
            head: Some(&self.head),
            tail: &self.tail,
        }
    }
}

impl<T: AsRef<str>> NonEmptyVec<T> {
    /// Concatenate all elements, placing `sep` in between each pair.
    ///
    /// ```
    /// use fetch_utils::collections::non_empty_vec;
    ///
    /// let values = non_empty_vec!["gzip", "br"];
    /// assert_eq!(values.join(", "), "gzip, br");
    /// ```
    pub fn join(&self, sep: &str) -> String {
        let capacity =
            self.iter().map(|s| s.as_ref().len()).sum::<usize>() + sep.len() * self.tail.len();
        let mut output = String::with_capacity(capacity);
        output.push_str(self.head.as_ref());
        for s in &self.tail {
            output.push_str(sep);
            output.push_str(s.as_ref());
        }
        output
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    /// Turns a non-empty list into a Vec.
    fn from(non_empty_vec: NonEmptyVec<T>) -> Self {
        iter::once(non_empty_vec.head)
            .chain(non_empty_vec.tail)
            .collect()
    }
}

impl<T> From<(T, Vec<T>)> for NonEmptyVec<T> {
    /// Turns a pair of an element and a Vec into
    /// a NonEmptyVec.
    fn from((head, tail): (T, Vec<T>)) -> Self {
        Self { head, tail }
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = iter::Chain<iter::Once<T>, vec::IntoIter<Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = NonEmptyVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> Extend<A> for NonEmptyVec<A> {
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        self.tail.extend(iter)
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = NonEmptyVecEmptyError;

    fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(vec).ok_or(NonEmptyVecEmptyError)
    }
}

crate::macros::error::static_str_error! {
    pub struct NonEmptyVecEmptyError = "empty value cannot be turned into a NonEmptyVec";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::non_empty_vec;

    #[test]
    fn test_from_conversion() {
        let result = NonEmptyVec::from((1, vec![2, 3, 4, 5]));
        let expected = NonEmptyVec {
            head: 1,
            tail: vec![2, 3, 4, 5],
        };
        assert_eq!(result, expected);
    }

    #[test]
    fn test_into_iter() {
        let non_empty_vec = NonEmptyVec::from((0, vec![1, 2, 3]));
        for (i, n) in non_empty_vec.into_iter().enumerate() {
            assert_eq!(i as i32, n);
        }
    }

    #[test]
    fn test_iter_both_directions() {
        let non_empty_vec = non_empty_vec![0, 1, 2, 3];
        let forward: Vec<_> = non_empty_vec.iter().copied().collect();
        let backward: Vec<_> = non_empty_vec.iter().rev().copied().collect();
        assert_eq!(forward, vec![0, 1, 2, 3]);
        assert_eq!(backward, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_iter_both_directions_at_once() {
        let non_empty_vec = non_empty_vec![0, 1, 2, 3];
        let mut iter = non_empty_vec.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_collect_and_from_vec() {
        assert_eq!(NonEmptyVec::<u8>::collect(Vec::new()), None);
        assert_eq!(NonEmptyVec::collect([1, 2]), Some(non_empty_vec![1, 2]));
        assert_eq!(NonEmptyVec::from_vec(vec![3]), Some(NonEmptyVec::new(3)));
        assert!(NonEmptyVec::<u8>::try_from(Vec::new()).is_err());
    }

    #[test]
    fn test_join() {
        for (input, expected) in [
            (non_empty_vec![""], ""),
            (non_empty_vec!["a"], "a"),
            (non_empty_vec!["a", ""], "a, "),
            (non_empty_vec!["nosniff", "", "x"], "nosniff, , x"),
        ] {
            assert_eq!(input.join(", "), expected, "input: {input:?}");
        }
    }

    #[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
    struct SimpleSerializable(pub i32);

    #[test]
    fn test_simple_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let mut non_empty = NonEmptyVec::new(SimpleSerializable(42));
        non_empty.push(SimpleSerializable(777));

        let res = serde_json::from_str::<'_, NonEmptyVec<SimpleSerializable>>(
            &serde_json::to_string(&non_empty)?,
        )?;

        assert_eq!(res, non_empty);

        Ok(())
    }

    #[test]
    fn test_deserialize_empty_fails() {
        let res = serde_json::from_str::<'_, NonEmptyVec<u8>>("[]");
        assert!(res.is_err());
    }

    #[test]
    fn test_serialization() -> Result<(), Box<dyn std::error::Error>> {
        let ne = non_empty_vec![1, 2, 3, 4, 5];
        let ve = vec![1, 2, 3, 4, 5];

        assert_eq!(serde_json::to_string(&ne)?, serde_json::to_string(&ve)?);

        Ok(())
    }
}
