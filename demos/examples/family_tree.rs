// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print a family tree by generation and highlight one person's line.
//!
//! The family file is indexed once, then the given address is clicked. Each row
//! lists one generation; highlighted people are marked and show their spouse.
//!
//! Markers: `*` selected, `^` ancestor, `v` descendant.
//!
//! Run:
//! - `cargo run -p lineage_demos --example family_tree`
//! - `cargo run -p lineage_demos --example family_tree -- 0.0.0.1`
//! - `cargo run -p lineage_demos --example family_tree -- 0.1 path/to/family.json`
//!
//! Set `RUST_LOG=debug` to watch the indexing and selection events.

mod common;

use std::path::PathBuf;
use std::rc::Rc;

use lineage_selection::{HighlightFlags, SelectionEvent, SelectionMode, SelectionState};
use lineage_tree::{Address, IndexMemo, Person, find_person_by_index, generations};

fn marker(flags: HighlightFlags) -> &'static str {
    if flags.contains(HighlightFlags::SELECTED) {
        "*"
    } else if flags.contains(HighlightFlags::ANCESTOR) {
        "^"
    } else if flags.contains(HighlightFlags::DESCENDANT) {
        "v"
    } else {
        " "
    }
}

fn print_details(person: &Person) {
    println!("Generation {}", person.generation() + 1);
    let spouse = person.spouse.as_deref().unwrap_or_default();
    if !spouse.is_empty() {
        println!("  spouse: {spouse}");
    }
    for (label, event) in [("born", &person.birth), ("died", &person.death)] {
        let Some(event) = event else { continue };
        let date = event.date.as_deref().unwrap_or("?");
        match event.location.as_deref() {
            Some(location) => println!("  {label}: {date}, {location}"),
            None => println!("  {label}: {date}"),
        }
    }
    if let Some(color) = &person.background_color {
        println!("  card color: {color}");
    }
    println!("  children: {}", person.children.len());
}

fn main() {
    common::init_tracing();

    let mut args = std::env::args().skip(1);
    let address = args
        .next()
        .map(|arg| common::parse_address(&arg))
        .unwrap_or_else(Address::root);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(common::DEFAULT_FAMILY));

    let record = Rc::new(common::load_family(&path));
    let mut memo = IndexMemo::new();
    let tree = memo.get(&record);

    let state = SelectionState::new(&tree, SelectionMode::Single)
        .reduce(&tree, &SelectionEvent::Click(address.clone()));
    if state.active_address() != Some(&address) {
        println!("No one at {address}; keeping the root selected.\n");
    }

    for (depth, row) in generations(&tree).iter().enumerate() {
        println!("Generation {}", depth + 1);
        for index in row {
            let name = state.display_name(&tree, index).unwrap_or_default();
            let mark = marker(state.flags(index));
            println!("  {mark} {index:<10} {name}");
        }
    }

    let selected = state.active_address();
    let person = selected.and_then(|at| find_person_by_index(&tree, at));
    if let (Some(selected), Some(person)) = (selected, person) {
        println!();
        let name = state.display_name(&tree, selected).unwrap_or_default();
        println!("Selected {selected}: {name}");
        print_details(person);
    }

    // Indexing the same record again is served from the memo.
    let again = memo.get(&record);
    debug_assert!(Rc::ptr_eq(&tree, &again));
}
