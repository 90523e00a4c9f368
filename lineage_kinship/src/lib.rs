// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Kinship: natural-language relationship terms between two people.
//!
//! Given two people of one indexed family tree (see `lineage_tree`), this crate works
//! out what each is to the other, in both directions and under two naming conventions.
//!
//! ## How terms are derived
//!
//! 1. The lowest common ancestor is the longest common prefix of the two addresses.
//! 2. Each side's distance to it (`up_a`, `up_b`) classifies the pair as a [`Kinship`]:
//!    direct line, siblings, cousins, aunt/uncle and niece/nephew, or removed cousins.
//! 3. The kinship is named, gendered by the person being described:
//!    "great-grandmother", "second cousin", "first cousin once removed", ...
//!
//! ## Conventions
//!
//! [`Convention::American`] names every collateral relation past aunt/uncle as a cousin.
//! [`Convention::Irish`] differs in one place: a parent's first cousin is called an aunt
//! or uncle, and a first cousin's child a nephew or niece. The override is applied per
//! direction.
//!
//! ## Example
//!
//! ```rust
//! use lineage_tree::{Address, Gender};
//! use lineage_kinship::relate_addresses;
//!
//! // A child of the root, and a grandchild through a different child.
//! let r = relate_addresses(
//!     &Address::from([0, 0]),
//!     Gender::Female,
//!     &Address::from([0, 1, 0]),
//!     Gender::Male,
//! );
//! assert_eq!(r.person_a.american, "nephew");
//! assert_eq!(r.person_b.american, "aunt");
//! assert_eq!(r.lca, Address::root());
//! ```
//!
//! [`summarize`] packages a compared pair for display, detecting the same person
//! before any term is computed.
//!
//! ## Features
//!
//! - `tracing`: a `debug` event for every resolved relationship.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod kinship;
mod relate;
mod summary;
#[cfg(test)]
mod test_util;

pub use kinship::{Convention, Kinship, ordinal};
pub use relate::{Relation, Relationship, relate, relate_addresses};
pub use summary::{RelationSummary, summarize};
