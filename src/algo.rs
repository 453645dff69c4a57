//! Comparison and partition-sort-recompose algorithms.
//!
//! This module implements the three pieces every entry point is built from:
//! - **Generalized comparator**: a total order over [`SortableValue`]s of
//!   mixed kinds (arbitrary-precision integers, floats, strings, timestamps).
//! - **Numeric string decomposer**: splits a string into alternating literal
//!   and integer segments for "natural" comparison of embedded numbers.
//! - **Partition engine**: splits the input into caller-designated specials
//!   and the rest, orders each group independently, and recomposes them.
//!
//! The main entry points are [`sort_elements`], [`sort_numerics`],
//! [`sort_strings`], and the `sort_collection*` family.

use std::cmp::Ordering;

use num_bigint::BigInt;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{
    AsSortable, NumericSortable, Segment, SortError, SortOptions, SortOrder, SortableValue,
    Specials, TextSortable,
};

// Maximal decimal digit runs. ASCII only: a run must parse as an integer.
static DIGIT_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("digit run regex should compile"));

/// Compares two sortable values under the generalized total order.
///
/// Rules, in priority order:
///
/// 1. Two integers, two numbers, or two timestamps compare by
///    mathematical/temporal value.
/// 2. Two texts compare lexicographically by code point, or numeric-aware
///    when `smart_numeric` is set.
/// 3. Mixed integer/number/timestamp kinds convert both sides to `f64` and
///    compare by value. Integers beyond the exact `f64` range can lose
///    precision here; this is a documented boundary of the cross-kind order.
/// 4. Anything else compares by the values' textual representations,
///    lexicographically; equal representations compare equal.
///
/// Incomparable float pairs (NaN on either side) compare equal.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use collsort::algo::compare_values;
/// use collsort::core::SortableValue;
///
/// let integer = SortableValue::Integer(1.into());
/// let number = SortableValue::Number(1.0);
/// assert_eq!(compare_values(&integer, &number, false), Ordering::Equal);
///
/// let three = SortableValue::Text("3n".to_owned());
/// let eleven = SortableValue::Text("11n".to_owned());
/// assert_eq!(compare_values(&three, &eleven, true), Ordering::Less);
/// ```
pub fn compare_values(a: &SortableValue, b: &SortableValue, smart_numeric: bool) -> Ordering {
    match (a, b) {
        (SortableValue::Integer(x), SortableValue::Integer(y)) => x.cmp(y),
        (SortableValue::Number(x), SortableValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (SortableValue::Timestamp(x), SortableValue::Timestamp(y)) => x.cmp(y),
        (SortableValue::Text(x), SortableValue::Text(y)) => {
            if smart_numeric {
                compare_smart_numeric(x, y)
            } else {
                x.cmp(y)
            }
        }
        _ => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => a.as_text().cmp(&b.as_text()),
        },
    }
}

/// Splits a string into alternating literal-text and integer segments.
///
/// Maximal decimal digit runs become [`Segment::Integer`] values; the spans
/// between and around them become [`Segment::Literal`] text. Interior empty
/// literals are omitted, but the trailing literal is always emitted, possibly
/// empty. A string without digits is a single literal; an empty string is a
/// single empty literal. Leading zeros carry no meaning: `"007"` and `"7"`
/// dissect to the same integer value.
///
/// # Examples
///
/// ```
/// use collsort::algo::dissect_numeric_string;
/// use collsort::core::Segment;
///
/// assert_eq!(
///     dissect_numeric_string("sample10.png"),
///     vec![
///         Segment::Literal("sample".to_owned()),
///         Segment::Integer(10.into()),
///         Segment::Literal(".png".to_owned()),
///     ],
/// );
/// ```
pub fn dissect_numeric_string(item: &str) -> Vec<Segment> {
    let mut result = Vec::new();
    let mut cursor = 0;
    for run in DIGIT_RUNS.find_iter(item) {
        if cursor < run.start() {
            result.push(Segment::Literal(item[cursor..run.start()].to_owned()));
        }
        let value = run
            .as_str()
            .parse::<BigInt>()
            .expect("digit run should parse as an integer");
        result.push(Segment::Integer(value));
        cursor = run.end();
    }
    result.push(Segment::Literal(item[cursor..].to_owned()));
    result
}

/// Numeric-aware comparison of two strings via their decompositions.
///
/// Walks both segment sequences position by position: a missing segment
/// sorts its side first, equal segments continue, two integers compare by
/// value, and mismatched segments fall back to the textual form of each.
fn compare_smart_numeric(a: &str, b: &str) -> Ordering {
    let a_segments = dissect_numeric_string(a);
    let b_segments = dissect_numeric_string(b);
    let sections = a_segments.len().max(b_segments.len());
    for index in 0..sections {
        match (a_segments.get(index), b_segments.get(index)) {
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => break,
            (Some(x), Some(y)) => {
                if x == y {
                    continue;
                }
                if let (Segment::Integer(m), Segment::Integer(n)) = (x, y) {
                    return m.cmp(n);
                }
                let ordering = x.as_text().cmp(&y.as_text());
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
    Ordering::Equal
}

/// The two groups one input splits into. Every input item lands in exactly
/// one group; nothing is duplicated or dropped.
struct PartitionResult<I> {
    specials: Vec<I>,
    rests: Vec<I>,
}

/// Classifies items as special or rest.
///
/// `key_of` projects the part of an item the designators refer to: the item
/// itself for element sorts, the key for entry sorts. List designators rank
/// the special group by designator position; predicate specials keep input
/// order.
fn partition_items<I, X, K>(items: Vec<I>, designators: &Specials<X>, key_of: K) -> PartitionResult<I>
where
    X: PartialEq,
    K: Fn(&I) -> &X,
{
    match designators {
        Specials::None => PartitionResult {
            specials: Vec::new(),
            rests: items,
        },
        Specials::List(list) => {
            let (mut specials, rests): (Vec<I>, Vec<I>) = items
                .into_iter()
                .partition(|item| list.contains(key_of(item)));
            specials.sort_by_key(|item| list.iter().position(|d| d == key_of(item)));
            PartitionResult { specials, rests }
        }
        Specials::Predicate(predicate) => {
            let (specials, rests) = items.into_iter().partition(|item| predicate(key_of(item)));
            PartitionResult { specials, rests }
        }
    }
}

/// Applies one order directive to one group.
///
/// `Keep` returns the group untouched. Otherwise each item's sort key is
/// selected once, the group is stable-sorted ascending, and reversed for
/// `Descending` (so ties keep their reversed relative order, matching the
/// descending-equals-reversed-ascending contract).
fn order_items<I, S>(items: Vec<I>, order: SortOrder, smart_numeric: bool, select: &S) -> Vec<I>
where
    S: Fn(&I) -> SortableValue,
{
    match order {
        SortOrder::Keep => items,
        SortOrder::Ascending | SortOrder::Descending => {
            let mut keyed: Vec<(SortableValue, I)> = items
                .into_iter()
                .map(|item| (select(&item), item))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| compare_values(a, b, smart_numeric));
            if order == SortOrder::Descending {
                keyed.reverse();
            }
            keyed.into_iter().map(|(_, item)| item).collect()
        }
    }
}

/// Partition, order both groups, recompose.
fn sort_sequence<I, X, K, S>(
    items: Vec<I>,
    options: &SortOptions<X>,
    key_of: K,
    select: S,
) -> Vec<I>
where
    X: PartialEq,
    K: Fn(&I) -> &X,
    S: Fn(&I) -> SortableValue,
{
    let PartitionResult { specials, rests } = partition_items(items, &options.specials, key_of);
    let specials = order_items(specials, options.special_order, options.smart_numeric, &select);
    let rests = order_items(rests, options.rest_order, options.smart_numeric, &select);
    let (mut leading, trailing) = if options.rest_place_first {
        (rests, specials)
    } else {
        (specials, rests)
    };
    leading.extend(trailing);
    leading
}

/// Sorts the elements of a collection.
///
/// The input is consumed and a freshly ordered collection of the same kind is
/// returned: `Vec` in, `Vec` out; `VecDeque` in, `VecDeque` out. Containers
/// with an inherent iteration order (`BTreeSet`, `HashSet`) rebuild under
/// their own rules.
///
/// # Examples
///
/// ```
/// use collsort::sort_elements;
/// use collsort::core::SortOptions;
///
/// let sorted = sort_elements(vec![3, 1, 2, 4, 5], &SortOptions::new().specials(vec![3]));
/// assert_eq!(sorted, vec![3, 1, 2, 4, 5]);
///
/// let sorted = sort_elements(vec![1.1, 1.2, 0.5], &SortOptions::new());
/// assert_eq!(sorted, vec![0.5, 1.1, 1.2]);
/// ```
pub fn sort_elements<C, T>(elements: C, options: &SortOptions<T>) -> C
where
    C: IntoIterator<Item = T> + FromIterator<T>,
    T: AsSortable + PartialEq,
{
    let items: Vec<T> = elements.into_iter().collect();
    sort_sequence(items, options, |item| item, |item: &T| item.as_sortable())
        .into_iter()
        .collect()
}

/// Sorts the elements of a collection by a projected sort key.
///
/// The selector maps each element to the [`SortableValue`] it is ordered by;
/// elements whose projected keys compare equal keep their relative order.
///
/// # Examples
///
/// ```
/// use collsort::sort_elements_by_selector;
/// use collsort::core::{AsSortable, SortOptions};
///
/// let sorted = sort_elements_by_selector(
///     vec![("b", 2), ("a", 1)],
///     |pair| pair.0.as_sortable(),
///     &SortOptions::new(),
/// );
/// assert_eq!(sorted, vec![("a", 1), ("b", 2)]);
/// ```
pub fn sort_elements_by_selector<C, T, F>(elements: C, selector: F, options: &SortOptions<T>) -> C
where
    C: IntoIterator<Item = T> + FromIterator<T>,
    T: PartialEq,
    F: Fn(&T) -> SortableValue,
{
    let items: Vec<T> = elements.into_iter().collect();
    sort_sequence(items, options, |item| item, |item: &T| selector(item))
        .into_iter()
        .collect()
}

/// Sorts a collection of numerics (integers or floats).
///
/// Restricted to the numeric domain; `smart_numeric` has no effect here
/// because no string path exists.
///
/// # Examples
///
/// ```
/// use collsort::sort_numerics;
/// use collsort::core::{SortOptions, SortOrder};
///
/// let sorted = sort_numerics(vec![3, 1, 2], &SortOptions::new().rest_order(SortOrder::Descending));
/// assert_eq!(sorted, vec![3, 2, 1]);
/// ```
pub fn sort_numerics<C, T>(items: C, options: &SortOptions<T>) -> C
where
    C: IntoIterator<Item = T> + FromIterator<T>,
    T: NumericSortable + PartialEq,
{
    let items: Vec<T> = items.into_iter().collect();
    sort_sequence(items, options, |item| item, |item: &T| item.as_sortable())
        .into_iter()
        .collect()
}

/// Sorts a collection of strings.
///
/// Restricted to the string domain; honors `smart_numeric` for natural
/// ordering of embedded numbers.
///
/// # Examples
///
/// ```
/// use collsort::sort_strings;
/// use collsort::core::SortOptions;
///
/// let files = vec!["sample10.png", "sample3.png", "sample2.png"];
/// let sorted = sort_strings(files, &SortOptions::new().smart_numeric(true));
/// assert_eq!(sorted, vec!["sample2.png", "sample3.png", "sample10.png"]);
/// ```
pub fn sort_strings<C, T>(items: C, options: &SortOptions<T>) -> C
where
    C: IntoIterator<Item = T> + FromIterator<T>,
    T: TextSortable + PartialEq,
{
    let items: Vec<T> = items.into_iter().collect();
    sort_sequence(items, options, |item| item, |item: &T| item.as_sortable())
        .into_iter()
        .collect()
}

/// Sorts the entries of a key/value collection by key.
///
/// The keys must be homogeneous: all numeric or all string. Anything else
/// (timestamp keys included, or a numeric/string mix) is a
/// [`SortError::TypeMismatch`]. String keys honor `smart_numeric`; specials
/// designate keys.
///
/// # Examples
///
/// ```
/// use collsort::sort_collection_by_keys;
/// use collsort::core::SortOptions;
///
/// let table = vec![("d", 4), ("b", 2), ("c", 3), ("a", 1)];
/// let sorted = sort_collection_by_keys(table, &SortOptions::new().specials(vec!["c"])).unwrap();
/// assert_eq!(sorted, vec![("c", 3), ("a", 1), ("b", 2), ("d", 4)]);
/// ```
pub fn sort_collection_by_keys<C, K, V>(
    collection: C,
    options: &SortOptions<K>,
) -> Result<C, SortError>
where
    C: IntoIterator<Item = (K, V)> + FromIterator<(K, V)>,
    K: AsSortable + PartialEq,
{
    let entries: Vec<(K, V)> = collection.into_iter().collect();
    let mut all_numeric = true;
    let mut all_text = true;
    for (key, _) in &entries {
        match key.as_sortable() {
            SortableValue::Integer(_) | SortableValue::Number(_) => all_text = false,
            SortableValue::Text(_) => all_numeric = false,
            SortableValue::Timestamp(_) => {
                all_numeric = false;
                all_text = false;
            }
        }
    }
    if !all_numeric && !all_text {
        return Err(SortError::TypeMismatch);
    }
    Ok(
        sort_sequence(entries, options, |entry| &entry.0, |entry: &(K, V)| {
            entry.0.as_sortable()
        })
        .into_iter()
        .collect(),
    )
}

/// Sorts the entries of a key/value collection by value.
///
/// Values are ordered by the generalized comparator (mixed kinds allowed);
/// specials still designate keys.
///
/// # Examples
///
/// ```
/// use collsort::sort_collection_by_values;
/// use collsort::core::SortOptions;
///
/// let table = vec![("a", 3), ("b", 1)];
/// let sorted = sort_collection_by_values(table, &SortOptions::new());
/// assert_eq!(sorted, vec![("b", 1), ("a", 3)]);
/// ```
pub fn sort_collection_by_values<C, K, V>(collection: C, options: &SortOptions<K>) -> C
where
    C: IntoIterator<Item = (K, V)> + FromIterator<(K, V)>,
    K: PartialEq,
    V: AsSortable,
{
    sort_collection(collection, |_, value| value.as_sortable(), options)
}

/// Sorts the entries of a key/value collection by a projection of the value.
pub fn sort_collection_by_values_selector<C, K, V, F>(
    collection: C,
    selector: F,
    options: &SortOptions<K>,
) -> C
where
    C: IntoIterator<Item = (K, V)> + FromIterator<(K, V)>,
    K: PartialEq,
    F: Fn(&V) -> SortableValue,
{
    sort_collection(collection, |_, value| selector(value), options)
}

/// Sorts the entries of a key/value collection by a projection of key and
/// value together.
///
/// # Examples
///
/// ```
/// use collsort::sort_collection;
/// use collsort::core::{SortOptions, SortableValue};
///
/// let table = vec![("banana", 1), ("fig", 2)];
/// let sorted = sort_collection(
///     table,
///     |key, _value| SortableValue::Integer(key.len().into()),
///     &SortOptions::new(),
/// );
/// assert_eq!(sorted, vec![("fig", 2), ("banana", 1)]);
/// ```
pub fn sort_collection<C, K, V, F>(collection: C, selector: F, options: &SortOptions<K>) -> C
where
    C: IntoIterator<Item = (K, V)> + FromIterator<(K, V)>,
    K: PartialEq,
    F: Fn(&K, &V) -> SortableValue,
{
    let entries: Vec<(K, V)> = collection.into_iter().collect();
    sort_sequence(entries, options, |entry| &entry.0, |entry: &(K, V)| {
        selector(&entry.0, &entry.1)
    })
    .into_iter()
    .collect()
}
