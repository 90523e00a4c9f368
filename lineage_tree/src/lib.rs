// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Tree: positional addressing for family trees.
//!
//! Lineage Tree turns a nested family record into an indexed tree that the rest of
//! a genealogy viewer can query without holding references into it.
//!
//! - Every person gets an [`Address`]: the path of sibling positions from the root.
//!   The root is `[0]`, its second child `[0, 1]`, and so on.
//! - Color hints are inherited from parent to child at indexing time.
//! - Lookups, ancestor chains, and descendant queries work from addresses alone, so
//!   the tree stays plain owned data with no parent back-references.
//!
//! ## Where this fits
//!
//! - Lineage Tree: record model, indexing, navigation, display names (this crate).
//! - `lineage_kinship`: relationship terms between two addressed people.
//! - `lineage_selection`: which people are selected and what is highlighted.
//!
//! Rendering, layout in pixels, and loading the record from storage belong to the
//! host application.
//!
//! ## API overview
//!
//! - [`PersonRecord`]: a person as loaded, children nested.
//! - [`assign_index`] → [`Person`]: the same tree with addresses and resolved colors.
//! - [`find_person_by_index`]: address → person, `None` for malformed or stale addresses.
//! - [`get_highlighted_ancestors`]: the chain of prefixes from the root down to a node.
//! - [`get_descendants`]: every address below a node.
//! - [`get_highlighted_descendants`]: a single first-child line of descent below a node.
//! - [`generations`]: addresses grouped into generation rows.
//! - [`format_person_name`] / [`display_name`]: `First (Nickname) Last [and Spouse]`.
//! - [`IndexMemo`]: re-index only when handed a different record.
//!
//! ## Example
//!
//! ```rust
//! use lineage_tree::{
//!     Address, PersonRecord, assign_index, find_person_by_index, get_highlighted_ancestors,
//! };
//!
//! let record = PersonRecord::new("Cornelius").with_child(
//!     PersonRecord::new("John")
//!         .with_child(PersonRecord::new("Con"))
//!         .with_child(PersonRecord::new("Bridget")),
//! );
//! let tree = assign_index(&record);
//!
//! let bridget = Address::from([0, 0, 1]);
//! assert_eq!(find_person_by_index(&tree, &bridget).unwrap().first_name, "Bridget");
//! assert_eq!(
//!     get_highlighted_ancestors(&bridget),
//!     vec![Address::from([0]), Address::from([0, 0])]
//! );
//! assert!(find_person_by_index(&tree, &Address::from([0, 3])).is_none());
//! ```
//!
//! ## Features
//!
//! - `json` *(default)*: [`PersonRecord::from_json_str`] and
//!   [`PersonRecord::from_json_or_placeholder`] via `serde_json`. Implies `serde`.
//! - `serde`: `Serialize`/`Deserialize` for [`PersonRecord`], [`Gender`], and [`LifeEvent`].
//! - `tracing`: `tracing` events when a tree is re-indexed or a placeholder is used.
//!
//! Input records are assumed to be trees. Cycles and shared children are not detected.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod address;
mod indexer;
#[cfg(feature = "json")]
mod json;
mod memo;
mod name;
mod navigate;
mod person;
#[cfg(test)]
mod test_util;

pub use address::{Address, ParseAddressError, is_index_equal};
pub use indexer::assign_index;
pub use memo::IndexMemo;
pub use name::{display_name, format_person_name};
pub use navigate::{
    find_person_by_index, generations, get_descendants, get_highlighted_ancestors,
    get_highlighted_descendants,
};
pub use person::{Gender, Iter, LifeEvent, Person, PersonRecord};
