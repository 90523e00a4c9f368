// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Address assignment and color inheritance.

use alloc::string::String;
use alloc::vec::Vec;

use crate::address::Address;
use crate::person::{Person, PersonRecord};

/// Index a family record.
///
/// The root gets `[0]` and the `n`-th child of the node at `P` gets
/// `P ++ [n]`, following the given sibling order exactly. Color hints are
/// resolved top-down: a node whose own `background_color` or `text_color`
/// is absent or empty takes its parent's already-resolved value. The root
/// keeps whatever it has. Nothing else is changed.
///
/// Indexing is deterministic: the same record always yields the same
/// addresses. Recursion depth is bounded by the depth of the tree.
///
/// ```rust
/// use lineage_tree::{Address, PersonRecord, assign_index};
///
/// let record = PersonRecord::new("Cornelius")
///     .with_colors("#2d6a4f", "white")
///     .with_child(PersonRecord::new("John"))
///     .with_child(PersonRecord::new("Mary").with_child(PersonRecord::new("Kate")));
///
/// let root = assign_index(&record);
/// assert_eq!(root.index, Address::root());
/// assert_eq!(root.children[1].children[0].index, Address::from([0, 1, 0]));
/// assert_eq!(root.children[1].children[0].text_color.as_deref(), Some("white"));
/// ```
pub fn assign_index(record: &PersonRecord) -> Person {
    index_node(
        record,
        Address::root(),
        record.background_color.clone(),
        record.text_color.clone(),
    )
}

/// `background_color` and `text_color` are this node's resolved values.
fn index_node(
    record: &PersonRecord,
    index: Address,
    background_color: Option<String>,
    text_color: Option<String>,
) -> Person {
    let children = record
        .children
        .iter()
        .enumerate()
        .map(|(position, child)| {
            index_node(
                child,
                index.child(position),
                inherit(&child.background_color, &background_color),
                inherit(&child.text_color, &text_color),
            )
        })
        .collect::<Vec<_>>();

    Person {
        index,
        first_name: record.first_name.clone(),
        nickname: record.nickname.clone(),
        last_name: record.last_name.clone(),
        spouse: record.spouse.clone(),
        gender: record.gender,
        birth: record.birth.clone(),
        death: record.death.clone(),
        background_color,
        text_color,
        children,
    }
}

fn inherit(own: &Option<String>, parent: &Option<String>) -> Option<String> {
    match own {
        Some(value) if !value.is_empty() => Some(value.clone()),
        _ => parent.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::odonovan;

    #[test]
    fn root_is_zero_and_children_append_position() {
        let root = assign_index(&odonovan());
        assert_eq!(root.index, Address::root());
        assert_eq!(root.children[0].index, Address::from([0, 0]));
        assert_eq!(root.children[1].index, Address::from([0, 1]));
        let con = &root.children[0].children[0];
        assert_eq!(con.index, Address::from([0, 0, 0]));
        assert_eq!(con.children[1].index, Address::from([0, 0, 0, 1]));
    }

    #[test]
    fn indexing_is_deterministic() {
        let record = odonovan();
        assert_eq!(assign_index(&record), assign_index(&record));
    }

    #[test]
    fn colors_inherit_transitively() {
        let plain = PersonRecord::new("Plain");
        let record = PersonRecord::new("Root")
            .with_colors("green", "white")
            .with_child(plain.with_child(PersonRecord::new("Grandchild")))
            .with_child(
                PersonRecord::new("Own")
                    .with_colors("red", "")
                    .with_child(PersonRecord::new("Inherits red")),
            );
        let root = assign_index(&record);

        let grandchild = &root.children[0].children[0];
        assert_eq!(grandchild.background_color.as_deref(), Some("green"));
        assert_eq!(grandchild.text_color.as_deref(), Some("white"));

        let own = &root.children[1];
        assert_eq!(own.background_color.as_deref(), Some("red"));
        // Empty counts as absent.
        assert_eq!(own.text_color.as_deref(), Some("white"));
        let inherits = &own.children[0];
        assert_eq!(inherits.background_color.as_deref(), Some("red"));
    }

    #[test]
    fn root_without_colors_stays_without() {
        let record = PersonRecord::new("Root");
        let root = assign_index(&record.with_child(PersonRecord::new("Child")));
        assert_eq!(root.background_color, None);
        assert_eq!(root.children[0].text_color, None);
    }

    #[test]
    fn placeholder_indexes_as_single_node() {
        let root = assign_index(&PersonRecord::placeholder());
        assert_eq!(root.index, Address::root());
        assert!(root.is_leaf());
        assert_eq!(root.iter().count(), 1);
    }

    #[test]
    fn other_fields_are_copied() {
        let record = odonovan();
        let root = assign_index(&record);
        let con = &root.children[0].children[0];
        let con_record = &record.children[0].children[0];
        assert_eq!(con.first_name, con_record.first_name);
        assert_eq!(con.nickname, con_record.nickname);
        assert_eq!(con.spouse, con_record.spouse);
        assert_eq!(con.gender, con_record.gender);
        assert_eq!(con.birth, con_record.birth);
    }
}
