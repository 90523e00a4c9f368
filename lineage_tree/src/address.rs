// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positional node addresses.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::str::FromStr;

use smallvec::SmallVec;

/// Path from the root to a node, one sibling position per generation.
///
/// The root is `[0]`. The `n`-th child (0-based) of the node at `P` lives at
/// `P ++ [n]`. Addresses are positional identity only: they are recomputed
/// every time a record is indexed and are not stable across edits of the
/// record.
///
/// Most family trees are shallow, so addresses up to eight generations deep
/// are stored inline.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(SmallVec<[usize; 8]>);

impl Address {
    /// The root address, `[0]`.
    pub fn root() -> Self {
        Self(smallvec::smallvec![0])
    }

    /// The zero-length address. It never resolves to a node.
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Build an address from its components.
    pub fn from_slice(components: &[usize]) -> Self {
        Self(SmallVec::from_slice(components))
    }

    /// The components of this address.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the zero-length address.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this is the root address `[0]`.
    pub fn is_root(&self) -> bool {
        self.0.as_slice() == [0]
    }

    /// Address of the `position`-th child of this node.
    pub fn child(&self, position: usize) -> Self {
        let mut components = self.0.clone();
        components.push(position);
        Self(components)
    }

    /// Address of the parent, or `None` for the root and the empty address.
    pub fn parent(&self) -> Option<Self> {
        (self.len() > 1).then(|| self.prefix(self.len() - 1))
    }

    /// Sibling position of this node under its parent (the last component).
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Generations below the root: `0` for the root, `None` for the empty address.
    pub fn generation(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// The first `len` components, clamped to the length of this address.
    pub fn prefix(&self, len: usize) -> Self {
        Self::from_slice(&self.0[..len.min(self.len())])
    }

    /// Length of the longest common prefix of two addresses.
    pub fn common_prefix_len(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// The longest common prefix, i.e. the address of the lowest common ancestor.
    pub fn common_prefix(&self, other: &Self) -> Self {
        self.prefix(self.common_prefix_len(other))
    }

    /// Whether `self` is a proper prefix of `other`.
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        !self.is_empty() && self.len() < other.len() && other.0.starts_with(&self.0)
    }
}

/// Compare two optional addresses.
///
/// Returns `false` when either side is absent, so an empty selection never
/// compares equal to anything (including another empty selection).
pub fn is_index_equal(a: Option<&Address>, b: Option<&Address>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl From<&[usize]> for Address {
    fn from(components: &[usize]) -> Self {
        Self::from_slice(components)
    }
}

impl<const N: usize> From<[usize; N]> for Address {
    fn from(components: [usize; N]) -> Self {
        Self::from_slice(&components)
    }
}

impl From<Vec<usize>> for Address {
    fn from(components: Vec<usize>) -> Self {
        Self(SmallVec::from_vec(components))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Dotted form, for example `0.2.1`. Width and alignment apply to the whole
/// address.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dotted = String::new();
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                dotted.push('.');
            }
            write!(dotted, "{component}")?;
        }
        f.pad(&dotted)
    }
}

/// Error returned when parsing an [`Address`] from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseAddressError {
    /// The input held no components.
    Empty,
    /// A component was not a non-negative integer.
    InvalidComponent(String),
}

impl fmt::Display for ParseAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("address has no components"),
            Self::InvalidComponent(c) => write!(f, "invalid address component `{c}`"),
        }
    }
}

impl core::error::Error for ParseAddressError {}

/// Accepts `0.2.1`, `0,2,1` and `[0, 2, 1]`.
///
/// Parsing does not check that the address starts at the root; such an
/// address simply fails to resolve later.
impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);
        if inner.trim().is_empty() {
            return Err(ParseAddressError::Empty);
        }
        inner
            .split(['.', ','])
            .map(|part| {
                let part = part.trim();
                part.parse::<usize>()
                    .map_err(|_| ParseAddressError::InvalidComponent(part.into()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}
