//! # Collsort
//!
//! `collsort` is a customizable sorting library for collections: sequences,
//! sets, and key/value mappings.
//!
//! Its core is a generalized comparison and partitioning algorithm: a total
//! order over mixed sortable kinds (arbitrary-precision integers, floats,
//! strings, timestamps), numeric-aware "natural" ordering of strings with
//! embedded numbers, and stable placement of caller-designated "special"
//! elements or keys relative to the rest.
//!
//! ## Key Features
//!
//! - **Mixed numeric ordering**: integers (arbitrary precision, via
//!   [`num_bigint::BigInt`]) and floats compare by mathematical value, not
//!   representation, so `0`, `1`, `1.1`, `1.2` interleave correctly.
//! - **Smart numeric strings**: `"sample2.png"` sorts before
//!   `"sample10.png"` when [`smart_numeric`](core::SortOptions::smart_numeric)
//!   is enabled; digit runs compare by value, `"007"` equals `"7"`.
//! - **Special placement**: designate elements or keys by list (sorted by
//!   designator priority) or by predicate, and place the group before or
//!   after the rest.
//! - **Container preservation**: entry points are generic over
//!   `IntoIterator + FromIterator`, so a `Vec` comes back as a `Vec`, a
//!   `VecDeque` as a `VecDeque`, a `BTreeMap` as a `BTreeMap`.
//! - **Key projection**: the [`AsSortable`](core::AsSortable) trait and the
//!   selector variants sort arbitrary element types by any projected key.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use collsort::sort_strings;
//! use collsort::core::SortOptions;
//!
//! let files = vec!["sample10.png", "sample3.png", "sample2.png"];
//!
//! let plain = sort_strings(files.clone(), &SortOptions::new());
//! assert_eq!(plain, vec!["sample10.png", "sample2.png", "sample3.png"]);
//!
//! let natural = sort_strings(files, &SortOptions::new().smart_numeric(true));
//! assert_eq!(natural, vec!["sample2.png", "sample3.png", "sample10.png"]);
//! ```
//!
//! ### Special Elements
//!
//! Specials are pulled out of the input, ordered by their position in the
//! designator list, and placed ahead of the ascending rest (or behind it,
//! with [`rest_place_first`](core::SortOptions::rest_place_first)):
//!
//! ```rust
//! use collsort::sort_collection_by_keys;
//! use collsort::core::SortOptions;
//!
//! let table = vec![("d", 0), ("b", 1), ("c", 2), ("a", 3)];
//!
//! let sorted = sort_collection_by_keys(table, &SortOptions::new().specials(vec!["c"])).unwrap();
//! let keys: Vec<&str> = sorted.iter().map(|(key, _)| *key).collect();
//! assert_eq!(keys, vec!["c", "a", "b", "d"]);
//! ```
//!
//! ### Custom Types
//!
//! Implement [`AsSortable`](core::AsSortable) to sort custom types directly,
//! or use the selector variants for one-off projections:
//!
//! ```rust
//! use collsort::sort_elements_by_selector;
//! use collsort::core::{AsSortable, SortOptions};
//!
//! #[derive(PartialEq)]
//! struct Track {
//!     title: String,
//! }
//!
//! let tracks = vec![
//!     Track { title: "Track 10".to_owned() },
//!     Track { title: "Track 2".to_owned() },
//! ];
//!
//! let sorted = sort_elements_by_selector(
//!     tracks,
//!     |track| track.title.as_sortable(),
//!     &SortOptions::new().smart_numeric(true),
//! );
//! assert_eq!(sorted[0].title, "Track 2");
//! ```
//!
//! ## Semantics
//!
//! Every call is pure with respect to its input: the collection is consumed
//! and a freshly ordered one is returned, no shared state exists between
//! calls, and the underlying sort is stable. `descending` is exactly the
//! reverse of `ascending`, and the `keep` directive never invokes the
//! comparator. Cross-kind numeric comparison goes through `f64`, so integers
//! beyond the exact `f64` range can lose precision there; this boundary is
//! documented on [`compare_values`](algo::compare_values) rather than
//! silently corrected.

pub mod algo;
pub mod core;
pub use algo::{
    compare_values, dissect_numeric_string, sort_collection, sort_collection_by_keys,
    sort_collection_by_values, sort_collection_by_values_selector, sort_elements,
    sort_elements_by_selector, sort_numerics, sort_strings,
};
pub use core::{
    AsSortable, NumericSortable, Segment, SortError, SortOptions, SortOrder, SortableValue,
    Specials, TextSortable,
};

pub mod prelude {
    pub use crate::algo::{
        compare_values, dissect_numeric_string, sort_collection, sort_collection_by_keys,
        sort_collection_by_values, sort_collection_by_values_selector, sort_elements,
        sort_elements_by_selector, sort_numerics, sort_strings,
    };
    pub use crate::core::{
        AsSortable, NumericSortable, Segment, SortError, SortOptions, SortOrder, SortableValue,
        Specials, TextSortable,
    };
}
