// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection modes, slots, events, and highlight sets.

use alloc::vec::Vec;

use hashbrown::HashSet;
use lineage_tree::{
    Address, Person, find_person_by_index, get_highlighted_ancestors, get_highlighted_descendants,
};

/// How many people can be selected at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// One selected person.
    #[default]
    Single,
    /// Two selected people for comparison; one of them is active and
    /// receives the next click.
    Dual,
}

/// One of the two selection slots of [`SelectionMode::Dual`].
///
/// Single mode only ever uses [`Slot::Primary`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The first selection.
    #[default]
    Primary,
    /// The second selection.
    Secondary,
}

impl Slot {
    /// The other slot.
    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

/// Input to [`SelectionState::reduce`](crate::SelectionState::reduce).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A person's node was clicked.
    Click(Address),
    /// An inactive selection card was clicked: make that slot receive the
    /// next node click. Ignored in single mode.
    ActivateSlot(Slot),
    /// Drop every selection and highlight.
    Clear,
}

bitflags::bitflags! {
    /// How a node should be styled for the current selection.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HighlightFlags: u8 {
        /// The active selection.
        const SELECTED   = 0b0000_0001;
        /// On the chain from the root down to the active selection.
        const ANCESTOR   = 0b0000_0010;
        /// On the highlighted line of descent below the active selection.
        const DESCENDANT = 0b0000_0100;
        /// The inactive slot's selection in dual mode.
        const COMPARED   = 0b0000_1000;
    }
}

/// Highlight sets derived from one selected address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
    selected: Option<Address>,
    ancestors: Vec<Address>,
    descendants: Vec<Address>,
    persons: HashSet<Address>,
}

impl Highlights {
    /// Derive the highlight sets for `address`.
    ///
    /// An address that does not resolve in `tree` highlights nothing.
    pub fn for_address(tree: &Person, address: &Address) -> Self {
        let Some(node) = find_person_by_index(tree, address) else {
            return Self::default();
        };
        let ancestors = get_highlighted_ancestors(address);
        let descendants = get_highlighted_descendants(node);
        let persons = ancestors
            .iter()
            .chain(core::iter::once(address))
            .chain(descendants.iter())
            .cloned()
            .collect();
        Self {
            selected: Some(address.clone()),
            ancestors,
            descendants,
            persons,
        }
    }

    /// The address these highlights were derived from.
    pub fn selected(&self) -> Option<&Address> {
        self.selected.as_ref()
    }

    /// Ancestors of the selection, root first.
    pub fn ancestors(&self) -> &[Address] {
        &self.ancestors
    }

    /// The highlighted line of descent below the selection, top first.
    pub fn descendants(&self) -> &[Address] {
        &self.descendants
    }

    /// Ancestors, the selection itself, and the descendant line.
    pub fn persons(&self) -> &HashSet<Address> {
        &self.persons
    }

    /// Whether `address` is highlighted at all.
    pub fn contains(&self, address: &Address) -> bool {
        self.persons.contains(address)
    }

    /// Whether nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Flags for `address`, without [`HighlightFlags::COMPARED`].
    pub fn flags(&self, address: &Address) -> HighlightFlags {
        let mut flags = HighlightFlags::empty();
        if !self.contains(address) {
            return flags;
        }
        flags.set(
            HighlightFlags::SELECTED,
            self.selected.as_ref() == Some(address),
        );
        flags.set(HighlightFlags::ANCESTOR, self.ancestors.contains(address));
        flags.set(
            HighlightFlags::DESCENDANT,
            self.descendants.contains(address),
        );
        flags
    }
}
