//! Structured Field Values for HTTP, as defined by [RFC 8941].
//!
//! Used by [`HeaderList::get_structured_field`] and
//! [`HeaderList::set_structured_field`]. Dates and display strings,
//! added to the format by RFC 9651, are not supported.
//!
//! [RFC 8941]: https://www.rfc-editor.org/rfc/rfc8941
//! [`HeaderList::get_structured_field`]: crate::HeaderList::get_structured_field
//! [`HeaderList::set_structured_field`]: crate::HeaderList::set_structured_field

use fetch_error::OpaqueError;
use indexmap::IndexMap;
use std::fmt;

mod parse;
mod serialize;

/// The top-level type a structured field is parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuredFieldKind {
    /// A single [`Item`] with parameters.
    Item,
    /// A comma-separated [`List`] of items and inner lists.
    List,
    /// A comma-separated [`Dictionary`] of keyed members.
    Dictionary,
}

impl StructuredFieldKind {
    /// Lowercase name of the kind, as used by the Fetch standard.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::List => "list",
            Self::Dictionary => "dictionary",
        }
    }
}

impl fmt::Display for StructuredFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed structured field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredField {
    /// See [`StructuredFieldKind::Item`].
    Item(Item),
    /// See [`StructuredFieldKind::List`].
    List(List),
    /// See [`StructuredFieldKind::Dictionary`].
    Dictionary(Dictionary),
}

impl StructuredField {
    /// Parse `input` as a structured field of the given `kind`.
    ///
    /// ```
    /// use fetch_http_headers::structured::{BareItem, StructuredField, StructuredFieldKind};
    ///
    /// let field = StructuredField::parse("42;q=?0", StructuredFieldKind::Item).unwrap();
    /// let StructuredField::Item(item) = field else { unreachable!() };
    /// assert_eq!(item.bare_item, BareItem::Integer(42));
    /// assert_eq!(item.params.get("q"), Some(&BareItem::Boolean(false)));
    /// ```
    pub fn parse(input: &str, kind: StructuredFieldKind) -> Result<Self, OpaqueError> {
        parse::parse(input, kind)
    }

    /// Serialize this value into its textual form.
    pub fn serialize(&self) -> Result<String, OpaqueError> {
        serialize::serialize(self)
    }

    /// The [`StructuredFieldKind`] of this value.
    #[must_use]
    pub const fn kind(&self) -> StructuredFieldKind {
        match self {
            Self::Item(_) => StructuredFieldKind::Item,
            Self::List(_) => StructuredFieldKind::List,
            Self::Dictionary(_) => StructuredFieldKind::Dictionary,
        }
    }
}

impl From<Item> for StructuredField {
    fn from(value: Item) -> Self {
        Self::Item(value)
    }
}

impl From<List> for StructuredField {
    fn from(value: List) -> Self {
        Self::List(value)
    }
}

impl From<Dictionary> for StructuredField {
    fn from(value: Dictionary) -> Self {
        Self::Dictionary(value)
    }
}

/// Ordered members of a structured list.
pub type List = Vec<ListMember>;

/// Ordered, keyed members of a structured dictionary.
pub type Dictionary = IndexMap<String, ListMember>;

/// Ordered, keyed parameters of an item or inner list.
pub type Parameters = IndexMap<String, BareItem>;

/// A member of a [`List`] or [`Dictionary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMember {
    Item(Item),
    InnerList(InnerList),
}

impl From<Item> for ListMember {
    fn from(value: Item) -> Self {
        Self::Item(value)
    }
}

impl From<InnerList> for ListMember {
    fn from(value: InnerList) -> Self {
        Self::InnerList(value)
    }
}

/// A [`BareItem`] with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub bare_item: BareItem,
    pub params: Parameters,
}

impl Item {
    /// Create an [`Item`] without parameters.
    #[must_use]
    pub fn new(bare_item: impl Into<BareItem>) -> Self {
        Self {
            bare_item: bare_item.into(),
            params: Parameters::new(),
        }
    }

    /// Add a parameter, replacing any previous value for `key`.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<BareItem>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// A parenthesized, space-separated list of items with its parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InnerList {
    pub items: Vec<Item>,
    pub params: Parameters,
}

impl InnerList {
    /// Create an [`InnerList`] without parameters.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            params: Parameters::new(),
        }
    }
}

/// The value of an item or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BareItem {
    Integer(i64),
    Decimal(Decimal),
    String(String),
    Token(String),
    ByteSequence(Vec<u8>),
    Boolean(bool),
}

impl From<i64> for BareItem {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for BareItem {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for BareItem {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<u8>> for BareItem {
    fn from(value: Vec<u8>) -> Self {
        Self::ByteSequence(value)
    }
}

/// A structured field decimal, stored as an exact number of thousandths.
///
/// ```
/// use fetch_http_headers::structured::Decimal;
///
/// assert_eq!(Decimal::from_thousandths(1500).to_string(), "1.5");
/// assert_eq!(Decimal::from_thousandths(-25).to_string(), "-0.025");
/// assert_eq!(Decimal::from_thousandths(0).to_string(), "0.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal(i64);

impl Decimal {
    /// Create a [`Decimal`] from a number of thousandths.
    #[must_use]
    pub const fn from_thousandths(thousandths: i64) -> Self {
        Self(thousandths)
    }

    /// The number of thousandths represented by this [`Decimal`].
    #[must_use]
    pub const fn as_thousandths(self) -> i64 {
        self.0
    }

    /// The integer component, truncated towards zero, without sign.
    pub(crate) const fn integer_component(self) -> u64 {
        self.0.unsigned_abs() / 1000
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let fraction = abs % 1000;
        write!(f, "{}.", abs / 1000)?;
        if fraction == 0 {
            return f.write_str("0");
        }
        let digits = format!("{fraction:03}");
        f.write_str(digits.trim_end_matches('0'))
    }
}
