//! Record collections: append-only while loading, frozen afterwards.

use std::ops::Index;
use std::sync::Arc;

use super::Character;

/// Identity of a record: its position in the frozen collection.
///
/// Two rows with equal field values are still different rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub(crate) usize);

impl RowId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Accumulates records page by page during a load.
#[derive(Debug, Default)]
pub struct RecordCollection {
    records: Vec<Character>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page of records in source order.
    pub fn push_page(&mut self, page: impl IntoIterator<Item = Character>) {
        self.records.extend(page);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Freezes the collection. No further records can be added.
    pub fn freeze(self) -> Records {
        Records {
            records: self.records.into(),
        }
    }
}

/// A frozen, cheaply cloneable record collection.
#[derive(Debug, Clone, Default)]
pub struct Records {
    records: Arc<[Character]>,
}

impl Records {
    /// Returns the record with the given identity.
    pub fn get(&self, id: RowId) -> Option<&Character> {
        self.records.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records with their identities, in source order.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, &Character)> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (RowId(index), record))
    }
}

impl Index<RowId> for Records {
    type Output = Character;

    fn index(&self, id: RowId) -> &Character {
        &self.records[id.0]
    }
}

impl From<Vec<Character>> for Records {
    fn from(records: Vec<Character>) -> Self {
        Self {
            records: records.into(),
        }
    }
}
