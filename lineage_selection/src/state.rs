// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection state machine.

use alloc::string::String;

use lineage_kinship::{RelationSummary, summarize};
use lineage_tree::{Address, Person, display_name, find_person_by_index};

use crate::types::{HighlightFlags, Highlights, SelectionEvent, SelectionMode, Slot};

/// Selected addresses and the highlights derived from the active one.
///
/// The state holds addresses only, never people. Node content is looked up
/// in the indexed tree on demand, so a state never holds stale copies.
///
/// Transitions are pure: [`SelectionState::reduce`] takes the current state
/// and an event and returns a whole new state, with highlights recomputed
/// from scratch. There is no partially updated state to observe.
///
/// ## Transitions
///
/// - [`SelectionEvent::Click`]: the active slot takes the clicked address and
///   highlights are derived from it. Clicks on addresses that do not resolve
///   are ignored.
/// - [`SelectionEvent::ActivateSlot`] (dual mode): the given slot becomes
///   active and highlights are derived from its stored address. Stored
///   addresses are unchanged.
/// - [`SelectionEvent::Clear`]: both slots become empty, the primary slot
///   becomes active, and nothing is highlighted.
///
/// ```rust
/// use lineage_selection::{SelectionEvent, SelectionMode, SelectionState};
/// use lineage_tree::{Address, PersonRecord, assign_index};
///
/// let tree = assign_index(
///     &PersonRecord::new("Cornelius").with_child(
///         PersonRecord::new("John").with_child(PersonRecord::new("Con")),
///     ),
/// );
///
/// let state = SelectionState::new(&tree, SelectionMode::Single);
/// assert_eq!(state.active_address(), Some(&Address::root()));
///
/// let state = state.reduce(&tree, &SelectionEvent::Click(Address::from([0, 0])));
/// assert_eq!(state.highlights().ancestors(), &[Address::root()]);
/// assert_eq!(state.highlights().descendants(), &[Address::from([0, 0, 0])]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    mode: SelectionMode,
    primary: Option<Address>,
    secondary: Option<Address>,
    active: Slot,
    highlights: Highlights,
}

impl SelectionState {
    /// Initial state: the root is selected in the primary slot.
    pub fn new(tree: &Person, mode: SelectionMode) -> Self {
        let root = Address::root();
        Self {
            mode,
            highlights: Highlights::for_address(tree, &root),
            primary: Some(root),
            secondary: None,
            active: Slot::Primary,
        }
    }

    /// A state with nothing selected.
    pub fn empty(mode: SelectionMode) -> Self {
        Self {
            mode,
            primary: None,
            secondary: None,
            active: Slot::Primary,
            highlights: Highlights::default(),
        }
    }

    /// The state after `event`.
    pub fn reduce(&self, tree: &Person, event: &SelectionEvent) -> Self {
        let next = match event {
            SelectionEvent::Click(address) => {
                if find_person_by_index(tree, address).is_none() {
                    return self.clone();
                }
                let mut next = Self {
                    highlights: Highlights::for_address(tree, address),
                    ..self.clone()
                };
                *next.slot_mut(self.active) = Some(address.clone());
                next
            }
            SelectionEvent::ActivateSlot(slot) => {
                if self.mode == SelectionMode::Single {
                    return self.clone();
                }
                let highlights = self
                    .address(*slot)
                    .map(|address| Highlights::for_address(tree, address))
                    .unwrap_or_default();
                Self {
                    active: *slot,
                    highlights,
                    ..self.clone()
                }
            }
            SelectionEvent::Clear => Self::empty(self.mode),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "selection.transition",
            event = ?event,
            active = ?next.active,
            selected = ?next.active_address(),
            highlighted = next.highlights.persons().len(),
        );

        next
    }

    /// Replace this state with the state after `event`.
    pub fn apply(&mut self, tree: &Person, event: &SelectionEvent) {
        *self = self.reduce(tree, event);
    }

    /// Single or dual selection.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The slot that receives the next click.
    pub fn active_slot(&self) -> Slot {
        self.active
    }

    /// Address stored in `slot`.
    ///
    /// Single mode has no secondary selection.
    pub fn address(&self, slot: Slot) -> Option<&Address> {
        match (self.mode, slot) {
            (_, Slot::Primary) => self.primary.as_ref(),
            (SelectionMode::Dual, Slot::Secondary) => self.secondary.as_ref(),
            (SelectionMode::Single, Slot::Secondary) => None,
        }
    }

    /// Address stored in the active slot.
    pub fn active_address(&self) -> Option<&Address> {
        self.address(self.active)
    }

    /// The person selected in `slot`, looked up in `tree`.
    pub fn person<'a>(&self, tree: &'a Person, slot: Slot) -> Option<&'a Person> {
        find_person_by_index(tree, self.address(slot)?)
    }

    /// Highlights of the active selection.
    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    /// Styling flags for the node at `address`.
    pub fn flags(&self, address: &Address) -> HighlightFlags {
        let mut flags = self.highlights.flags(address);
        let other = self.address(self.active.other());
        if self.mode == SelectionMode::Dual && other == Some(address) {
            flags |= HighlightFlags::COMPARED;
        }
        flags
    }

    /// Display name of the node at `address`, with the spouse shown when the
    /// node is highlighted.
    pub fn display_name(&self, tree: &Person, address: &Address) -> Option<String> {
        let person = find_person_by_index(tree, address)?;
        Some(display_name(person, self.highlights.contains(address)))
    }

    /// The relationship between the two selected people in dual mode.
    ///
    /// `None` in single mode or while either slot is empty.
    pub fn compare(&self, tree: &Person) -> Option<RelationSummary> {
        if self.mode != SelectionMode::Dual {
            return None;
        }
        summarize(
            self.person(tree, Slot::Primary),
            self.person(tree, Slot::Secondary),
        )
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Address> {
        match slot {
            Slot::Primary => &mut self.primary,
            Slot::Secondary => &mut self.secondary,
        }
    }
}
