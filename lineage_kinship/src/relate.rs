// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bidirectional relationship terms for a pair of people.

use alloc::string::String;

use lineage_tree::{Address, Gender, Person};

use crate::kinship::{Convention, Kinship};

/// One direction of a relationship under both naming conventions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relationship {
    /// Generic term, e.g. "first cousin once removed".
    pub american: String,
    /// Irish usage, e.g. "uncle" for the same relation.
    pub irish: String,
}

impl Relationship {
    /// The term under `convention`.
    pub fn term(&self, convention: Convention) -> &str {
        match convention {
            Convention::American => &self.american,
            Convention::Irish => &self.irish,
        }
    }

    /// Whether the two conventions disagree for this relation.
    pub fn differs(&self) -> bool {
        self.american != self.irish
    }
}

/// The result of [`relate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    /// What person B is to person A, gendered by B.
    pub person_a: Relationship,
    /// What person A is to person B, gendered by A.
    pub person_b: Relationship,
    /// Address of the lowest common ancestor.
    pub lca: Address,
}

/// Name the relationship between two people of the same indexed tree.
///
/// Callers should check for the same person first (see
/// [`lineage_tree::is_index_equal`]); this function answers "self" both
/// ways in that case rather than treating it specially.
///
/// ```rust
/// use lineage_tree::{Gender, PersonRecord, assign_index};
/// use lineage_kinship::relate;
///
/// let tree = assign_index(
///     &PersonRecord::new("Cornelius").with_gender(Gender::Male).with_child(
///         PersonRecord::new("John")
///             .with_gender(Gender::Male)
///             .with_child(PersonRecord::new("Nell").with_gender(Gender::Female)),
///     ),
/// );
/// let nell = &tree.children[0].children[0];
///
/// let relation = relate(&tree, nell);
/// assert_eq!(relation.person_a.american, "granddaughter");
/// assert_eq!(relation.person_b.american, "grandfather");
/// ```
pub fn relate(a: &Person, b: &Person) -> Relation {
    relate_addresses(&a.index, a.gender, &b.index, b.gender)
}

/// [`relate`] from bare addresses and gender tags.
pub fn relate_addresses(a: &Address, gender_a: Gender, b: &Address, gender_b: Gender) -> Relation {
    let split = a.common_prefix_len(b);
    let up_a = a.len() - split;
    let up_b = b.len() - split;

    let relation = Relation {
        person_a: name(Kinship::classify(up_a, up_b), gender_b),
        person_b: name(Kinship::classify(up_b, up_a), gender_a),
        lca: a.prefix(split),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "kinship.relate",
        a = %a,
        b = %b,
        lca = %relation.lca,
        up_a,
        up_b,
    );

    relation
}

fn name(kinship: Kinship, other: Gender) -> Relationship {
    Relationship {
        american: kinship.under(Convention::American).term(other),
        irish: kinship.under(Convention::Irish).term(other),
    }
}
