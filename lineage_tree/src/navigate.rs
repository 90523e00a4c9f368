// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookups and ancestor/descendant queries over an indexed tree.
//!
//! Everything here is total: a bad address yields `None` or an empty result,
//! never a panic.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::address::Address;
use crate::person::Person;

/// Find the node at `address`.
///
/// Returns `None` when the address is empty, does not start at the root
/// (`0`), or steps past the end of some node's children. For any address
/// produced by [`assign_index`](crate::assign_index) over the same tree the
/// lookup succeeds and returns the node carrying that exact address.
pub fn find_person_by_index<'a>(root: &'a Person, address: &Address) -> Option<&'a Person> {
    let (&first, rest) = address.as_slice().split_first()?;
    if first != 0 {
        return None;
    }
    rest.iter()
        .try_fold(root, |node, &position| node.children.get(position))
}

/// Every proper, non-empty prefix of `address`, nearest the root first.
///
/// `[0, 2, 1]` yields `[[0], [0, 2]]`; the root yields nothing. The result
/// always has `len - 1` entries.
pub fn get_highlighted_ancestors(address: &Address) -> Vec<Address> {
    (1..address.len()).map(|len| address.prefix(len)).collect()
}

/// Addresses of every node strictly below `person`.
pub fn get_descendants(person: &Person) -> HashSet<Address> {
    person
        .iter()
        .skip(1)
        .map(|node| node.index.clone())
        .collect()
}

/// A single line of descent below `person`, down to a leaf.
///
/// At each level only the child whose address has the smallest last
/// component is followed (the first such child on ties). This is one
/// traceable path, not the whole subtree; see [`get_descendants`] for that.
pub fn get_highlighted_descendants(person: &Person) -> Vec<Address> {
    let mut path = Vec::new();
    let mut node = person;
    while let Some(next) = first_child(node) {
        path.push(next.index.clone());
        node = next;
    }
    path
}

/// The child with the smallest last address component, first on ties.
fn first_child(person: &Person) -> Option<&Person> {
    let position = |child: &&Person| child.index.last().unwrap_or(usize::MAX);
    person.children.iter().min_by_key(position)
}

/// Addresses grouped into generation rows, root row first.
///
/// Within a row, nodes appear left to right in depth-first sibling order,
/// which is the order a presentation layer lays them out in.
pub fn generations(root: &Person) -> Vec<Vec<Address>> {
    let mut rows: Vec<Vec<Address>> = Vec::new();
    for node in root {
        let depth = node.index.len().saturating_sub(root.index.len());
        if rows.len() <= depth {
            rows.resize_with(depth + 1, Vec::new);
        }
        rows[depth].push(node.index.clone());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign_index;
    use crate::test_util::odonovan;
    use alloc::vec;

    fn at(components: &[usize]) -> Address {
        Address::from_slice(components)
    }

    #[test]
    fn every_indexed_address_round_trips() {
        let root = assign_index(&odonovan());
        for node in &root {
            let found = find_person_by_index(&root, &node.index).unwrap();
            assert_eq!(found.index, node.index);
            assert_eq!(found.first_name, node.first_name);
        }
    }

    #[test]
    fn malformed_addresses_miss() {
        let root = assign_index(&odonovan());
        let misses = [
            Address::empty(),
            at(&[1]),
            at(&[1, 0]),
            at(&[0, 2]),
            at(&[0, 0, 1, 0]),
        ];
        for address in &misses {
            assert!(find_person_by_index(&root, address).is_none());
        }
        let found = find_person_by_index(&root, &Address::root());
        assert_eq!(found.map(|p| &p.index), Some(&Address::root()));
    }

    #[test]
    fn ancestors_are_increasing_prefixes() {
        let address = at(&[0, 2, 1]);
        let expected = vec![at(&[0]), at(&[0, 2])];
        assert_eq!(get_highlighted_ancestors(&address), expected);
        for short in [Address::root(), Address::empty()] {
            assert!(get_highlighted_ancestors(&short).is_empty());
        }

        let deep = at(&[0, 0, 0, 1, 0]);
        let ancestors = get_highlighted_ancestors(&deep);
        assert_eq!(ancestors.len(), deep.len() - 1);
        for (i, ancestor) in ancestors.iter().enumerate() {
            assert_eq!(ancestor.len(), i + 1);
            assert!(ancestor.is_ancestor_of(&deep));
        }
    }

    #[test]
    fn descendants_cover_full_subtree() {
        let root = assign_index(&odonovan());
        let all = get_descendants(&root);
        assert_eq!(all.len(), root.iter().count() - 1);
        assert!(!all.contains(&Address::root()));

        let john = &root.children[0];
        let expected: HashSet<Address> = [
            at(&[0, 0, 0]),
            at(&[0, 0, 0, 0]),
            at(&[0, 0, 0, 1]),
            at(&[0, 0, 0, 1, 0]),
            at(&[0, 0, 1]),
        ]
        .into_iter()
        .collect();
        assert_eq!(get_descendants(john), expected);

        let niamh = &root.children[1].children[0].children[0];
        assert!(get_descendants(niamh).is_empty());
    }

    #[test]
    fn highlighted_descendants_follow_first_child() {
        let root = assign_index(&odonovan());
        let expected = vec![at(&[0, 0]), at(&[0, 0, 0]), at(&[0, 0, 0, 0])];
        assert_eq!(get_highlighted_descendants(&root), expected);

        // Each step is parent to child; it stops at a leaf.
        let path = get_highlighted_descendants(&root.children[1]);
        assert_eq!(path, vec![at(&[0, 1, 0]), at(&[0, 1, 0, 0])]);
        let last = find_person_by_index(&root, path.last().unwrap());
        assert!(last.unwrap().is_leaf());
    }

    #[test]
    fn highlighted_descendants_use_minimum_last_component() {
        let mut root = assign_index(&odonovan());
        // Out-of-order, non-contiguous sibling addresses.
        let john = &mut root.children[0];
        john.children[0].index = at(&[0, 0, 7]);
        john.children[1].index = at(&[0, 0, 3]);
        let path = get_highlighted_descendants(&root.children[0]);
        assert_eq!(path, vec![at(&[0, 0, 3])]);
    }

    #[test]
    fn generation_rows() {
        let root = assign_index(&odonovan());
        let rows = generations(&root);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], vec![Address::root()]);
        assert_eq!(rows[1], vec![at(&[0, 0]), at(&[0, 1])]);
        let third = vec![at(&[0, 0, 0]), at(&[0, 0, 1]), at(&[0, 1, 0])];
        assert_eq!(rows[2], third);
        assert_eq!(rows[4], vec![at(&[0, 0, 0, 1, 0])]);
    }
}
