// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The family record as loaded, and the indexed tree built from it.

use alloc::string::String;
use alloc::vec::Vec;

use crate::address::Address;

/// Gender tag used to pick gendered relationship terms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Gender {
    /// "son", "father", "uncle", ...
    Male,
    /// "daughter", "mother", "aunt", ...
    Female,
    /// "child", "parent", "aunt / uncle", ...
    #[default]
    Neutral,
}

impl Gender {
    /// Pick the term matching this gender.
    pub fn pick<T>(self, male: T, female: T, neutral: T) -> T {
        match self {
            Self::Male => male,
            Self::Female => female,
            Self::Neutral => neutral,
        }
    }
}

/// A dated, located life event (birth or death). Either part may be unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifeEvent {
    /// Free-form date text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub date: Option<String>,
    /// Free-form place text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<String>,
}

/// One person of the family record, before indexing.
///
/// The record is a rooted, ordered tree: sibling order is meaningful and is
/// preserved by indexing. Spouses are display labels only and never become
/// nodes. The record is assumed to be acyclic; this is not checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonRecord {
    /// Given name.
    pub first_name: String,
    /// Name the person was known by, shown in parentheses.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nickname: Option<String>,
    /// Family name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_name: Option<String>,
    /// Spouse's name, a display label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spouse: Option<String>,
    /// Gender tag for relationship terms.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gender: Gender,
    /// Birth details.
    #[cfg_attr(feature = "serde", serde(default))]
    pub birth: Option<LifeEvent>,
    /// Death details.
    #[cfg_attr(feature = "serde", serde(default))]
    pub death: Option<LifeEvent>,
    /// Box color hint. Inherited from the parent when absent or empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub background_color: Option<String>,
    /// Text color hint. Inherited from the parent when absent or empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_color: Option<String>,
    /// Children in sibling order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Self>,
}

impl PersonRecord {
    /// First name shown by the placeholder record.
    pub const PLACEHOLDER_NAME: &'static str = "Family Data Not Found";

    /// A record with just a first name.
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..Self::default()
        }
    }

    /// The single-node tree shown when the family record cannot be loaded.
    pub fn placeholder() -> Self {
        Self::new(Self::PLACEHOLDER_NAME)
    }

    /// Set the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Set the last name.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the nickname.
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Set the spouse label.
    pub fn with_spouse(mut self, spouse: impl Into<String>) -> Self {
        self.spouse = Some(spouse.into());
        self
    }

    /// Set both color hints.
    pub fn with_colors(mut self, background: impl Into<String>, text: impl Into<String>) -> Self {
        self.background_color = Some(background.into());
        self.text_color = Some(text.into());
        self
    }

    /// Append a child after the existing ones.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}

/// A person of an indexed tree.
///
/// Produced by [`assign_index`](crate::assign_index). Every node carries its
/// [`Address`] and its resolved color hints. The tree is treated as
/// immutable once built; anything that depends on it (selection,
/// highlights) holds addresses and resolves them again on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    /// Position of this node in the tree.
    pub index: Address,
    /// Given name.
    pub first_name: String,
    /// Name the person was known by.
    pub nickname: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Spouse's name, a display label.
    pub spouse: Option<String>,
    /// Gender tag for relationship terms.
    pub gender: Gender,
    /// Birth details.
    pub birth: Option<LifeEvent>,
    /// Death details.
    pub death: Option<LifeEvent>,
    /// Resolved box color hint.
    pub background_color: Option<String>,
    /// Resolved text color hint.
    pub text_color: Option<String>,
    /// Children in sibling order.
    pub children: Vec<Self>,
}

impl Person {
    /// Generations below the root (the root is generation 0).
    pub fn generation(&self) -> usize {
        self.index.generation().unwrap_or(0)
    }

    /// Whether this person has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first, pre-order iterator over this node and everything below it.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: alloc::vec![self],
        }
    }
}

impl<'a> IntoIterator for &'a Person {
    type Item = &'a Person;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator returned by [`Person::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Person>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Person;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
