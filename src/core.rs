//! Core traits and types for Collsort.
//!
//! This module defines:
//! - [`SortableValue`]: the closed value domain the comparator orders.
//! - [`AsSortable`]: the main trait element/key types implement to become sortable.
//! - [`SortOptions`] / [`SortOrder`] / [`Specials`]: per-call configuration.
//! - [`SortError`]: the error taxonomy.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use thiserror::Error;

/// A value the comparator knows how to order.
///
/// Values are discriminated once, at the boundary where they enter a sort
/// (via [`AsSortable`] or a selector), so the comparator operates on a closed
/// variant set instead of inspecting types at comparison time.
#[derive(Clone, Debug, PartialEq)]
pub enum SortableValue {
    /// Arbitrary-precision integer.
    Integer(BigInt),
    /// Floating-point number.
    Number(f64),
    /// Plain text, optionally compared numeric-aware.
    Text(String),
    /// Point in time, normalized to UTC.
    Timestamp(DateTime<Utc>),
}

impl SortableValue {
    /// Numeric view used for cross-kind comparison.
    ///
    /// Integers beyond the exact `f64` range lose precision here; this is an
    /// inherited boundary of the cross-kind ordering, not corrected silently.
    /// Timestamps convert to their millisecond offset from the Unix epoch.
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            SortableValue::Integer(value) => value.to_f64(),
            SortableValue::Number(value) => Some(*value),
            SortableValue::Timestamp(value) => Some(value.timestamp_millis() as f64),
            SortableValue::Text(_) => None,
        }
    }

    /// Textual representation used by the comparator's lexicographic fallback.
    pub(crate) fn as_text(&self) -> Cow<'_, str> {
        match self {
            SortableValue::Integer(value) => Cow::Owned(value.to_string()),
            SortableValue::Number(value) => Cow::Owned(value.to_string()),
            SortableValue::Text(value) => Cow::Borrowed(value),
            SortableValue::Timestamp(value) => Cow::Owned(value.to_rfc3339()),
        }
    }
}

impl fmt::Display for SortableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// One piece of a numeric-aware string decomposition.
///
/// Produced by [`dissect_numeric_string`](crate::algo::dissect_numeric_string):
/// digit runs become [`Segment::Integer`] values (leading zeros are
/// insignificant, `"007"` parses to `7`), everything between them becomes
/// [`Segment::Literal`] text.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// A span of non-digit characters.
    Literal(String),
    /// A maximal run of decimal digits, parsed by value.
    Integer(BigInt),
}

impl Segment {
    /// Textual form of the segment, used when segments of differing kinds meet.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Segment::Literal(text) => Cow::Borrowed(text),
            Segment::Integer(value) => Cow::Owned(value.to_string()),
        }
    }
}

/// A trait for converting element or key types into the sortable domain.
///
/// This is the seam that lets the sort functions operate on plain `Vec<i64>`,
/// `Vec<&str>`, `BTreeMap<String, V>`, or custom types, without the engine
/// ever inspecting concrete types.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use collsort::core::{AsSortable, SortableValue};
///
/// struct Release {
///     tag: String,
/// }
///
/// impl AsSortable for Release {
///     fn as_sortable(&self) -> SortableValue {
///         SortableValue::Text(self.tag.clone())
///     }
/// }
/// ```
pub trait AsSortable {
    /// Returns the sortable form of this value.
    fn as_sortable(&self) -> SortableValue;
}

/// Marker for types whose sortable form is numeric (integer or float).
///
/// Restricts [`sort_numerics`](crate::algo::sort_numerics) to the numeric
/// domain at compile time.
pub trait NumericSortable: AsSortable {}

/// Marker for types whose sortable form is text.
///
/// Restricts [`sort_strings`](crate::algo::sort_strings) to the string domain
/// at compile time.
pub trait TextSortable: AsSortable {}

impl AsSortable for BigInt {
    fn as_sortable(&self) -> SortableValue {
        SortableValue::Integer(self.clone())
    }
}
impl NumericSortable for BigInt {}

macro_rules! impl_integer_sortable {
    ($($ty:ty),+ $(,)?) => {$(
        impl AsSortable for $ty {
            fn as_sortable(&self) -> SortableValue {
                SortableValue::Integer(BigInt::from(*self))
            }
        }
        impl NumericSortable for $ty {}
    )+};
}

impl_integer_sortable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl AsSortable for f64 {
    fn as_sortable(&self) -> SortableValue {
        SortableValue::Number(*self)
    }
}
impl NumericSortable for f64 {}

impl AsSortable for f32 {
    fn as_sortable(&self) -> SortableValue {
        SortableValue::Number(f64::from(*self))
    }
}
impl NumericSortable for f32 {}

impl AsSortable for str {
    fn as_sortable(&self) -> SortableValue {
        SortableValue::Text(self.to_owned())
    }
}
impl TextSortable for str {}

impl AsSortable for String {
    fn as_sortable(&self) -> SortableValue {
        SortableValue::Text(self.clone())
    }
}
impl TextSortable for String {}

impl AsSortable for Cow<'_, str> {
    fn as_sortable(&self) -> SortableValue {
        SortableValue::Text(self.as_ref().to_owned())
    }
}
impl TextSortable for Cow<'_, str> {}

// Any timezone is accepted; comparison happens on the UTC instant.
impl<Tz: TimeZone> AsSortable for DateTime<Tz> {
    fn as_sortable(&self) -> SortableValue {
        SortableValue::Timestamp(self.with_timezone(&Utc))
    }
}

impl AsSortable for SortableValue {
    fn as_sortable(&self) -> SortableValue {
        self.clone()
    }
}

// Blanket implementation for references, so `Vec<&str>` and friends work
// without explicit conversions.
impl<T: AsSortable + ?Sized> AsSortable for &T {
    fn as_sortable(&self) -> SortableValue {
        (**self).as_sortable()
    }
}
impl<T: NumericSortable + ?Sized> NumericSortable for &T {}
impl<T: TextSortable + ?Sized> TextSortable for &T {}

/// Whether and how a group of items is reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
    /// Preserve the group's current relative order; no comparator is invoked.
    Keep,
}

impl SortOrder {
    const ALIASES: [(&'static str, SortOrder); 6] = [
        ("a", SortOrder::Ascending),
        ("ascending", SortOrder::Ascending),
        ("d", SortOrder::Descending),
        ("descending", SortOrder::Descending),
        ("k", SortOrder::Keep),
        ("keep", SortOrder::Keep),
    ];

    /// Resolves a raw directive name to its canonical order.
    ///
    /// Accepts the full names and the single-letter aliases `a`/`d`/`k`,
    /// case-sensitively. Anything else is a [`SortError::InvalidArgument`]
    /// naming the received value and the accepted set.
    ///
    /// # Examples
    ///
    /// ```
    /// use collsort::core::SortOrder;
    ///
    /// assert_eq!(SortOrder::resolve("d").unwrap(), SortOrder::Descending);
    /// assert!(SortOrder::resolve("Descending").is_err());
    /// ```
    pub fn resolve(value: &str) -> Result<Self, SortError> {
        Self::ALIASES
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, order)| *order)
            .ok_or_else(|| SortError::InvalidArgument {
                value: value.to_owned(),
                accepted: Self::accepted_values(),
            })
    }

    /// The accepted directive names, sorted and comma-joined.
    ///
    /// Sorted so the [`SortError::InvalidArgument`] message stays stable.
    pub fn accepted_values() -> String {
        let mut names: Vec<&str> = Self::ALIASES.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

/// Which elements (or mapping keys) are designated "special".
///
/// Specials are split off before the rest of the input is sorted and placed
/// as one block, first by default or last with
/// [`rest_place_first`](SortOptions::rest_place_first).
pub enum Specials<T> {
    /// Nothing is special; everything is "rest".
    None,
    /// An ordered designator list. Matched items are ranked by their
    /// designator's position in this list, not by input order. Designators
    /// absent from the input produce nothing.
    List(Vec<T>),
    /// A predicate; matched items keep their input-relative order.
    Predicate(Box<dyn Fn(&T) -> bool>),
}

impl<T> Default for Specials<T> {
    fn default() -> Self {
        Specials::None
    }
}

impl<T: fmt::Debug> fmt::Debug for Specials<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specials::None => f.write_str("None"),
            Specials::List(list) => f.debug_tuple("List").field(list).finish(),
            Specials::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl<T> From<Vec<T>> for Specials<T> {
    fn from(list: Vec<T>) -> Self {
        Specials::List(list)
    }
}

/// Per-call sort configuration.
///
/// `T` is the element type for element sorts and the key type for mapping
/// sorts. All fields have documented defaults; construct with
/// [`SortOptions::new`] and the chainable setters, or with struct-update
/// syntax over [`Default`].
///
/// # Examples
///
/// ```
/// use collsort::core::{SortOptions, SortOrder};
///
/// let options = SortOptions::new()
///     .rest_order(SortOrder::Descending)
///     .specials(vec!["readme"])
///     .smart_numeric(true);
/// assert_eq!(options.rest_order, SortOrder::Descending);
/// ```
#[derive(Debug)]
pub struct SortOptions<T> {
    /// Order applied to the non-special group. Default: [`SortOrder::Ascending`].
    pub rest_order: SortOrder,
    /// Whether the rest group precedes the special group in the output.
    /// Default: `false`.
    pub rest_place_first: bool,
    /// Which elements/keys are special. Default: [`Specials::None`].
    pub specials: Specials<T>,
    /// Order applied to the special group. Default: [`SortOrder::Keep`],
    /// which preserves designator-list priority (or input order for
    /// predicate specials).
    pub special_order: SortOrder,
    /// Compare embedded digit runs in strings by numeric value.
    /// Default: `false`. Inert for entry points with no string path.
    pub smart_numeric: bool,
}

impl<T> Default for SortOptions<T> {
    fn default() -> Self {
        Self {
            rest_order: SortOrder::Ascending,
            rest_place_first: false,
            specials: Specials::None,
            special_order: SortOrder::Keep,
            smart_numeric: false,
        }
    }
}

impl<T> SortOptions<T> {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the order for the non-special group.
    pub fn rest_order(mut self, order: SortOrder) -> Self {
        self.rest_order = order;
        self
    }

    /// Places the rest group before the special group.
    pub fn rest_place_first(mut self, place_first: bool) -> Self {
        self.rest_place_first = place_first;
        self
    }

    /// Designates specials by an ordered list.
    pub fn specials(mut self, list: impl Into<Vec<T>>) -> Self {
        self.specials = Specials::List(list.into());
        self
    }

    /// Designates specials by predicate.
    pub fn specials_where(mut self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.specials = Specials::Predicate(Box::new(predicate));
        self
    }

    /// Sets the order for the special group.
    pub fn special_order(mut self, order: SortOrder) -> Self {
        self.special_order = order;
        self
    }

    /// Enables numeric-aware string comparison.
    pub fn smart_numeric(mut self, enabled: bool) -> Self {
        self.smart_numeric = enabled;
        self
    }
}

/// Errors produced by the sort entry points and directive resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// An order directive outside the accepted set. The accepted names are
    /// listed sorted, so the message is deterministic.
    #[error("`{value}` is not a valid sort order! Only accept these values: {accepted}")]
    InvalidArgument {
        /// The rejected directive as received.
        value: String,
        /// The accepted names, sorted and comma-joined.
        accepted: String,
    },
    /// A mapping's keys are neither uniformly numeric nor uniformly string
    /// typed, so no homogeneous key sort exists.
    #[error("collection keys are not uniformly numeric or uniformly string typed")]
    TypeMismatch,
}
