// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Re-indexing memoized on record identity.

use alloc::rc::Rc;

use crate::indexer::assign_index;
use crate::person::{Person, PersonRecord};

/// Caches the indexed tree for the last record it was given.
///
/// The cache key is the identity of the shared record (`Rc::ptr_eq`), not
/// its contents: handing in the same `Rc` again is free, while a new record
/// object is always indexed, even if it happens to be equal.
///
/// ```rust
/// use std::rc::Rc;
/// use lineage_tree::{IndexMemo, PersonRecord};
///
/// let record = Rc::new(PersonRecord::new("Cornelius"));
/// let mut memo = IndexMemo::new();
/// let first = memo.get(&record);
/// let second = memo.get(&record);
/// assert!(Rc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Default)]
pub struct IndexMemo {
    cached: Option<(Rc<PersonRecord>, Rc<Person>)>,
}

impl IndexMemo {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The indexed tree for `record`, indexing it only if it is not the
    /// record seen last.
    pub fn get(&mut self, record: &Rc<PersonRecord>) -> Rc<Person> {
        let cached = self.cached.as_ref();
        let hit = cached.filter(|(source, _)| Rc::ptr_eq(source, record));
        if let Some((_, indexed)) = hit {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "index.memo_hit");
            return Rc::clone(indexed);
        }
        let indexed = Rc::new(assign_index(record));
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "index.rebuilt", nodes = indexed.iter().count());
        self.cached = Some((Rc::clone(record), Rc::clone(&indexed)));
        indexed
    }

    /// Drop the cached tree.
    pub fn clear(&mut self) {
        self.cached = None;
    }
}
