// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What to show for a compared pair.

use alloc::format;
use alloc::string::String;
use core::fmt;

use lineage_tree::{Person, is_index_equal};

use crate::relate::{Relationship, relate};

/// The relationship line shown for two selected people.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelationSummary {
    /// Both selections point at the same person. No terms are computed.
    SamePerson,
    /// Both directions share one Irish-usage term, e.g. "first cousin".
    Mutual {
        /// The shared term, singular.
        term: String,
    },
    /// The two directions differ, e.g. "uncle" and "niece".
    Directional {
        /// What the secondary person is to the primary one.
        forward: Relationship,
        /// What the primary person is to the secondary one.
        backward: Relationship,
    },
}

/// Summarize the relationship between two selected people.
///
/// Returns `None` when either side is missing. The same-person check runs
/// before any terms are computed.
pub fn summarize(primary: Option<&Person>, secondary: Option<&Person>) -> Option<RelationSummary> {
    let (primary, secondary) = (primary?, secondary?);
    if is_index_equal(Some(&primary.index), Some(&secondary.index)) {
        return Some(RelationSummary::SamePerson);
    }
    let relation = relate(primary, secondary);
    if relation.person_a.irish == relation.person_b.irish {
        return Some(RelationSummary::Mutual {
            term: relation.person_a.irish,
        });
    }
    Some(RelationSummary::Directional {
        forward: relation.person_a,
        backward: relation.person_b,
    })
}

impl fmt::Display for RelationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SamePerson => f.write_str("Same person selected"),
            Self::Mutual { term } => f.write_str(&plural(term)),
            Self::Directional { forward, backward } => {
                write_direction(f, "->", forward)?;
                f.write_str("; ")?;
                write_direction(f, "<-", backward)
            }
        }
    }
}

/// "first cousin" reads "first cousins", "second cousin once removed" reads
/// "second cousins once removed", and "sister" reads "sisters".
fn plural(term: &str) -> String {
    match term.split_once("cousin") {
        Some((degree, removal)) => format!("{degree}cousins{removal}"),
        None => format!("{term}s"),
    }
}

/// The Irish term, with the American one in parentheses when they differ.
fn write_direction(f: &mut fmt::Formatter<'_>, arrow: &str, r: &Relationship) -> fmt::Result {
    write!(f, "{arrow} {}", r.irish)?;
    if r.differs() {
        write!(f, " ({})", r.american)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::tree;
    use alloc::string::ToString;
    use lineage_tree::{Address, find_person_by_index};

    fn person<'a>(tree: &'a Person, components: &[usize]) -> Option<&'a Person> {
        find_person_by_index(tree, &Address::from_slice(components))
    }

    #[test]
    fn missing_side_shows_nothing() {
        let tree = tree();
        let root = person(&tree, &[0]);
        assert_eq!(summarize(root, None), None);
        assert_eq!(summarize(None, root), None);
        assert_eq!(summarize(person(&tree, &[0, 9]), root), None);
    }

    #[test]
    fn same_person_short_circuits() {
        let tree = tree();
        let nell = person(&tree, &[0, 0, 0, 1]);
        let summary = summarize(nell, nell).unwrap();
        assert_eq!(summary, RelationSummary::SamePerson);
        assert_eq!(summary.to_string(), "Same person selected");
    }

    #[test]
    fn mutual_terms_are_pluralised() {
        let tree = tree();
        let con = person(&tree, &[0, 0, 0]);
        let michael = person(&tree, &[0, 1, 0]);
        let summary = summarize(con, michael).unwrap();
        let term = "first cousin".into();
        assert_eq!(summary, RelationSummary::Mutual { term });
        assert_eq!(summary.to_string(), "first cousins");
    }

    #[test]
    fn removed_cousins_pluralise_the_noun() {
        let tree = tree();
        let niamh = person(&tree, &[0, 1, 0, 0]);
        let aoife = person(&tree, &[0, 0, 0, 1, 0]);
        let summary = summarize(niamh, aoife).unwrap();
        let term = "second cousin once removed".into();
        assert_eq!(summary, RelationSummary::Mutual { term });
        assert_eq!(summary.to_string(), "second cousins once removed");
    }

    #[test]
    fn plurals() {
        assert_eq!(plural("sibling"), "siblings");
        assert_eq!(plural("third cousin"), "third cousins");
        let removed = plural("first cousin twice removed");
        assert_eq!(removed, "first cousins twice removed");
    }

    #[test]
    fn directional_terms_note_american_usage() {
        let tree = tree();
        let con = person(&tree, &[0, 0, 0]);
        let niamh = person(&tree, &[0, 1, 0, 0]);
        let summary = summarize(con, niamh).unwrap();
        let cousin = "first cousin once removed";
        let expected = format!("-> niece ({cousin}); <- uncle ({cousin})");
        assert_eq!(summary.to_string(), expected);

        let sean = person(&tree, &[0, 0, 0, 0]);
        let nell = person(&tree, &[0, 0, 0, 1]);
        let summary = summarize(sean, nell).unwrap();
        assert_eq!(summary.to_string(), "-> sister; <- brother");
    }
}
