// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name the relationship between two people in a family tree.
//!
//! Both addresses are selected in dual mode, as a user would by clicking the
//! first person, activating the second selection card and clicking the second
//! person. The summary is printed along with each direction under both
//! naming conventions.
//!
//! Run:
//! - `cargo run -p lineage_demos --example compare -- 0.0.0 0.1.0`
//! - `cargo run -p lineage_demos --example compare -- 0.0 0.0.0.1.0 path/to/family.json`

mod common;

use std::path::PathBuf;

use lineage_kinship::{Convention, RelationSummary, Relationship, relate};
use lineage_selection::{SelectionEvent, SelectionMode, SelectionState, Slot};
use lineage_tree::{PersonRecord, assign_index, find_person_by_index, format_person_name};

fn print_direction(arrow: &str, relationship: &Relationship) {
    let american = relationship.term(Convention::American);
    if relationship.differs() {
        let irish = relationship.term(Convention::Irish);
        println!("  {arrow} {irish} (American usage: {american})");
    } else {
        println!("  {arrow} {american}");
    }
}

fn main() {
    common::init_tracing();

    let mut args = std::env::args().skip(1);
    let (Some(first), Some(second)) = (args.next(), args.next()) else {
        eprintln!("usage: compare <address> <address> [family.json]");
        std::process::exit(2);
    };
    let first = common::parse_address(&first);
    let second = common::parse_address(&second);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(common::DEFAULT_FAMILY));

    let record: PersonRecord = common::load_family(&path);
    let tree = assign_index(&record);
    for address in [&first, &second] {
        if find_person_by_index(&tree, address).is_none() {
            eprintln!("No one at {address}.");
            std::process::exit(1);
        }
    }

    let mut state = SelectionState::new(&tree, SelectionMode::Dual);
    for event in [
        SelectionEvent::Click(first.clone()),
        SelectionEvent::ActivateSlot(Slot::Secondary),
        SelectionEvent::Click(second.clone()),
    ] {
        state.apply(&tree, &event);
    }
    let a = state.person(&tree, Slot::Primary);
    let b = state.person(&tree, Slot::Secondary);
    let (Some(a), Some(b)) = (a, b) else {
        return;
    };

    println!("{} [{first}]", format_person_name(a));
    println!("{} [{second}]", format_person_name(b));
    let Some(summary) = state.compare(&tree) else {
        return;
    };
    println!("\n{summary}");
    if summary == RelationSummary::SamePerson {
        return;
    }

    let relation = relate(a, b);
    let ancestor = find_person_by_index(&tree, &relation.lca)
        .map(format_person_name)
        .unwrap_or_default();
    println!("\nClosest common ancestor: {ancestor} [{}]", relation.lca);
    let (a, b) = (&a.first_name, &b.first_name);
    print_direction(&format!("{b} is {a}'s"), &relation.person_a);
    print_direction(&format!("{a} is {b}'s"), &relation.person_b);
}
