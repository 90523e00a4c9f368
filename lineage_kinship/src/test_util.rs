// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lineage_tree::{Gender, Person, PersonRecord, assign_index};

fn named(first_name: &str, gender: Gender) -> PersonRecord {
    PersonRecord::new(first_name).with_gender(gender)
}

/// ```text
/// [0]         Cornelius (m)
/// [0,0]         John (m)
/// [0,0,0]         Con (m)
/// [0,0,0,0]         Sean (m)
/// [0,0,0,1]         Nell (f)
/// [0,0,0,1,0]         Aoife (f)
/// [0,0,1]         Bridget (f)
/// [0,1]         Margaret (f)
/// [0,1,0]         Michael (m)
/// [0,1,0,0]         Niamh (f)
/// ```
pub(crate) fn tree() -> Person {
    use Gender::{Female, Male};

    let nell = named("Nell", Female).with_child(named("Aoife", Female));
    let con = named("Con", Male)
        .with_child(named("Sean", Male))
        .with_child(nell);
    let john = named("John", Male)
        .with_child(con)
        .with_child(named("Bridget", Female));
    let michael = named("Michael", Male).with_child(named("Niamh", Female));
    let margaret = named("Margaret", Female).with_child(michael);
    let record = named("Cornelius", Male).with_child(john);
    assign_index(&record.with_child(margaret))
}
