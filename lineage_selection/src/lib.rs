// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Selection: who is selected in a family tree view, and what lights up.
//!
//! A family tree view lets the user click people. The clicked person is selected,
//! the chain of ancestors up to the root is highlighted, and so is a single line of
//! descent below them. In comparison mode two people are selected and their
//! relationship is shown.
//!
//! This crate models that as a small state record, [`SelectionState`], updated by a
//! pure reducer: [`SelectionState::reduce`] takes the current state, the indexed tree,
//! and a [`SelectionEvent`], and returns the next state with every highlight set
//! recomputed. Pointer plumbing and rendering stay with the host; it feeds events in
//! and reads addresses, [`HighlightFlags`], and display names out.
//!
//! ## Modes
//!
//! - [`SelectionMode::Single`]: one selection.
//! - [`SelectionMode::Dual`]: two [`Slot`]s. Clicking a node fills the active slot;
//!   clicking the inactive selection card ([`SelectionEvent::ActivateSlot`]) makes it
//!   the one the next click fills. [`SelectionState::compare`] summarizes how the two
//!   selected people are related.
//!
//! ## Example
//!
//! ```rust
//! use lineage_selection::{HighlightFlags, SelectionEvent, SelectionMode, SelectionState, Slot};
//! use lineage_tree::{Address, Gender, PersonRecord, assign_index};
//!
//! let tree = assign_index(
//!     &PersonRecord::new("Cornelius")
//!         .with_child(PersonRecord::new("John").with_child(
//!             PersonRecord::new("Con").with_gender(Gender::Male),
//!         ))
//!         .with_child(PersonRecord::new("Margaret").with_child(
//!             PersonRecord::new("Michael").with_gender(Gender::Male),
//!         )),
//! );
//!
//! let mut state = SelectionState::new(&tree, SelectionMode::Dual);
//! state.apply(&tree, &SelectionEvent::Click(Address::from([0, 0, 0])));
//! state.apply(&tree, &SelectionEvent::ActivateSlot(Slot::Secondary));
//! state.apply(&tree, &SelectionEvent::Click(Address::from([0, 1, 0])));
//!
//! assert_eq!(state.flags(&Address::from([0, 1])), HighlightFlags::ANCESTOR);
//! assert_eq!(state.flags(&Address::from([0, 0, 0])), HighlightFlags::COMPARED);
//! assert_eq!(state.compare(&tree).unwrap().to_string(), "first cousins");
//! ```
//!
//! ## Features
//!
//! - `tracing`: a `debug` event for every transition.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod state;
#[cfg(test)]
mod test_util;
mod types;

pub use state::SelectionState;
pub use types::{HighlightFlags, Highlights, SelectionEvent, SelectionMode, Slot};
