// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification of a pair by generation distances, and naming.

use alloc::format;
use alloc::string::{String, ToString};

use lineage_tree::Gender;

/// Naming convention for relationship terms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Convention {
    /// Generic usage: every collateral relation beyond aunt/uncle is a cousin.
    #[default]
    American,
    /// Irish usage: a parent's first cousin is an aunt or uncle, and a first
    /// cousin's child is a nephew or niece.
    Irish,
}

/// What the other person is to oneself.
///
/// Built from the number of generations each person sits below their
/// lowest common ancestor; see [`Kinship::classify`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kinship {
    /// Both sides are the same person.
    Same,
    /// The other person is `generations` below oneself in a direct line.
    Descendant {
        /// Generations between the two, at least 1.
        generations: usize,
    },
    /// The other person is `generations` above oneself in a direct line.
    Ancestor {
        /// Generations between the two, at least 1.
        generations: usize,
    },
    /// Children of the same parent.
    Sibling,
    /// Same generation, common ancestor `degree + 1` generations up.
    Cousin {
        /// 1 for first cousins, 2 for second cousins, ...
        degree: usize,
    },
    /// The other person is a sibling of one's parent, grandparent, ...
    AuntUncle {
        /// Number of "great-" prefixes.
        greats: usize,
    },
    /// The other person is a child, grandchild, ... of one's sibling.
    NieceNephew {
        /// Number of "great-" prefixes.
        greats: usize,
    },
    /// Cousins of different generations.
    CousinRemoved {
        /// Cousin degree counted from the generation nearer the common ancestor.
        degree: usize,
        /// Generations between the two.
        removed: usize,
        /// Whether the other person is in the elder generation.
        elder: bool,
    },
}

impl Kinship {
    /// Classify a pair by how many generations each side sits below their
    /// lowest common ancestor: `up_self` for oneself, `up_other` for the
    /// other person.
    pub fn classify(up_self: usize, up_other: usize) -> Self {
        let closer = up_self.min(up_other);
        let removed = up_self.abs_diff(up_other);
        let elder = up_self > up_other;
        let degree = closer.saturating_sub(1);
        let greats = removed.saturating_sub(1);
        match (closer, removed) {
            (0, 0) => Self::Same,
            (0, generations) if elder => Self::Ancestor { generations },
            (0, generations) => Self::Descendant { generations },
            (1, 0) => Self::Sibling,
            (_, 0) => Self::Cousin { degree },
            (1, _) if elder => Self::AuntUncle { greats },
            (1, _) => Self::NieceNephew { greats },
            _ => Self::CousinRemoved {
                degree,
                removed,
                elder,
            },
        }
    }

    /// Apply a naming convention.
    ///
    /// Irish usage only differs for first cousins once removed, which it
    /// names as the aunt/uncle or nephew/niece they resemble.
    pub fn under(self, convention: Convention) -> Self {
        let irish = convention == Convention::Irish;
        match self {
            Self::CousinRemoved {
                degree: 1,
                removed: 1,
                elder: true,
            } if irish => Self::AuntUncle { greats: 0 },
            Self::CousinRemoved {
                degree: 1,
                removed: 1,
                elder: false,
            } if irish => Self::NieceNephew { greats: 0 },
            kinship => kinship,
        }
    }

    /// The term for this relation, gendered by the other person.
    pub fn term(self, other: Gender) -> String {
        match self {
            Self::Same => "self".to_string(),
            Self::Descendant { generations } => {
                let names = ("son", "daughter", "child");
                line_term(generations, other, names)
            }
            Self::Ancestor { generations } => {
                let names = ("father", "mother", "parent");
                line_term(generations, other, names)
            }
            Self::Sibling => other.pick("brother", "sister", "sibling").to_string(),
            Self::Cousin { degree } => format!("{} cousin", ordinal(degree)),
            Self::AuntUncle { greats } => {
                let p = greats_prefix(greats);
                let (uncle, aunt) = (format!("{p}uncle"), format!("{p}aunt"));
                let either = format!("{aunt} / {uncle}");
                other.pick(uncle, aunt, either)
            }
            Self::NieceNephew { greats } => {
                let p = greats_prefix(greats);
                let (nephew, niece) = (format!("{p}nephew"), format!("{p}niece"));
                let either = format!("{nephew} / {niece}");
                other.pick(nephew, niece, either)
            }
            Self::CousinRemoved { degree, removed, .. } => {
                let (degree, removed) = (ordinal(degree), times(removed));
                format!("{degree} cousin {removed} removed")
            }
        }
    }
}

/// "son", "grandson", "great-grandson", "great-great-grandson", ...
fn line_term(generations: usize, other: Gender, names: (&str, &str, &str)) -> String {
    let (male, female, neutral) = names;
    let word = other.pick(male, female, neutral);
    if generations <= 1 {
        return word.to_string();
    }
    let greats = greats_prefix(generations - 2);
    format!("{greats}grand{word}")
}

fn greats_prefix(count: usize) -> String {
    "great-".repeat(count)
}

/// `first` through `tenth`, then `11th`, `12th`, ...
pub fn ordinal(n: usize) -> String {
    let word = match n {
        1 => "first",
        2 => "second",
        3 => "third",
        4 => "fourth",
        5 => "fifth",
        6 => "sixth",
        7 => "seventh",
        8 => "eighth",
        9 => "ninth",
        10 => "tenth",
        _ => return format!("{n}th"),
    };
    word.to_string()
}

/// How many times removed: `once`, `twice`, then `3 times`, ...
fn times(n: usize) -> String {
    match n {
        1 => "once".to_string(),
        2 => "twice".to_string(),
        _ => format!("{n} times"),
    }
}
