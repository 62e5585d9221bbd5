use crate::seq::record::SeqRecord;
use std::collections::HashMap;

/// Ordered mapping from sequence id to its record.
///
/// Records keep the position of the first appearance of their id. Inserting
/// an id that is already present replaces the stored record in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceCollection {
    records: Vec<SeqRecord>,
    index: HashMap<Box<str>, usize>,
}

impl SequenceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the record it replaced, if any.
    pub fn insert(&mut self, record: SeqRecord) -> Option<SeqRecord> {
        let existing = self.index.get(record.id()).copied();
        match existing {
            Some(i) => Some(std::mem::replace(&mut self.records[i], record)),
            None => {
                self.index.insert(record.id.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SeqRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn records(&self) -> &[SeqRecord] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id())
    }

    /// Iterate `(id, sequence)` pairs in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.records.iter().map(|r| (r.id(), r.seq()))
    }
}

impl FromIterator<SeqRecord> for SequenceCollection {
    fn from_iter<I: IntoIterator<Item = SeqRecord>>(iter: I) -> Self {
        let mut out = Self::new();
        for record in iter {
            out.insert(record);
        }
        out
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for SequenceCollection {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(id, seq)| SeqRecord::new(id, seq.as_bytes()))
            .collect()
    }
}

/// Ordered mapping from sequence id to a value derived from that sequence.
///
/// Produced by the per-sequence analyses; entries follow the order of the
/// collection they were computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerSequence<V> {
    entries: Vec<(Box<str>, V)>,
}

impl<V> PerSequence<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, id: impl Into<Box<str>>, value: V) {
        self.entries.push((id.into(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == id)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_ref())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn map<U>(&self, mut f: impl FnMut(&V) -> U) -> PerSequence<U> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), f(v)))
            .collect()
    }
}

impl<V> Default for PerSequence<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<Box<str>>, V> FromIterator<(K, V)> for PerSequence<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<V> IntoIterator for PerSequence<V> {
    type Item = (Box<str>, V);
    type IntoIter = std::vec::IntoIter<(Box<str>, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
