// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display names.

use alloc::string::String;
use core::fmt::Write;

use crate::person::Person;

/// `First (Nickname) Last`, or `First Last` without a nickname.
///
/// Absent and empty parts are skipped, so no empty parentheses or doubled
/// spaces appear.
///
/// ```rust
/// use lineage_tree::{PersonRecord, assign_index, format_person_name};
///
/// let con = assign_index(
///     &PersonRecord::new("Cornelius").with_nickname("Con").with_last_name("O'Donovan"),
/// );
/// assert_eq!(format_person_name(&con), "Cornelius (Con) O'Donovan");
/// ```
pub fn format_person_name(person: &Person) -> String {
    let mut name = String::new();
    let parts = [
        Some(person.first_name.as_str()),
        non_empty(&person.nickname),
        non_empty(&person.last_name),
    ];
    for (i, part) in parts.into_iter().enumerate() {
        let Some(part) = part.map(str::trim).filter(|p| !p.is_empty()) else {
            continue;
        };
        if !name.is_empty() {
            name.push(' ');
        }
        if i == 1 {
            let _ = write!(name, "({part})");
        } else {
            name.push_str(part);
        }
    }
    name
}

/// The formatted name, followed by ` and {spouse}` when `show_spouse` is set
/// and the person has a spouse.
///
/// Hosts pass `show_spouse` for nodes on the highlighted path.
pub fn display_name(person: &Person, show_spouse: bool) -> String {
    let mut name = format_person_name(person);
    let spouse = non_empty(&person.spouse).filter(|_| show_spouse);
    if let Some(spouse) = spouse {
        let _ = write!(name, " and {}", spouse.trim());
    }
    name
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
