// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lineage_tree::{Gender, Person, PersonRecord, assign_index};

fn named(first_name: &str, last_name: &str, gender: Gender) -> PersonRecord {
    PersonRecord::new(first_name)
        .with_last_name(last_name)
        .with_gender(gender)
}

/// ```text
/// [0]         Cornelius O'Donovan  m. Mary Smith
/// [0,0]         John               m. Ellen O'Neill
/// [0,0,0]         Con
/// [0,0,0,0]         Sean
/// [0,0,0,1]         Nell
/// [0,0,1]         Bridget
/// [0,1]         Margaret Walsh     m. Patrick Walsh
/// [0,1,0]         Michael Walsh
/// [0,1,0,0]         Niamh Walsh
/// ```
pub(crate) fn tree() -> Person {
    use Gender::{Female, Male};

    let nell = named("Ellen", "O'Donovan", Female).with_nickname("Nell");
    let con = named("Cornelius", "O'Donovan", Male)
        .with_nickname("Con")
        .with_child(named("Sean", "O'Donovan", Male))
        .with_child(nell);
    let john = named("John", "O'Donovan", Male)
        .with_spouse("Ellen O'Neill")
        .with_child(con)
        .with_child(named("Bridget", "O'Donovan", Female));
    let michael = named("Michael", "Walsh", Male);
    let margaret = named("Margaret", "Walsh", Female)
        .with_spouse("Patrick Walsh")
        .with_child(michael.with_child(named("Niamh", "Walsh", Female)));

    let record = named("Cornelius", "O'Donovan", Male)
        .with_spouse("Mary Smith")
        .with_child(john)
        .with_child(margaret);
    assign_index(&record)
}
