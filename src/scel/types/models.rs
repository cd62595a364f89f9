//! Core data structures for decoded `.scel` content.
//!
//! This module defines the types handed back to callers after a decode:
//! - Dictionary metadata from the fixed header area
//! - The index → syllable pinyin table
//! - Words grouped by composite pinyin, in file order

use std::collections::BTreeMap;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

/// Descriptive metadata stored in the fixed-size text fields of the header area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScelInfo {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Sample words shown by the input method's dictionary browser.
    pub examples: String,
}

/// Lookup table from a 16-bit pinyin index to its syllable.
///
/// Indices need not be contiguous. Iteration is in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PinyinTable {
    syllables: BTreeMap<u16, String>,
}

impl PinyinTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a syllable; a repeated index overwrites the earlier one.
    pub fn insert(&mut self, index: u16, syllable: String) {
        self.syllables.insert(index, syllable);
    }

    pub fn get(&self, index: u16) -> Option<&str> {
        self.syllables.get(&index).map(String::as_str)
    }

    /// Concatenates the syllables for `indices` in order.
    ///
    /// Unknown indices contribute nothing rather than failing, so files that
    /// reference a few unlisted syllables still decode.
    pub fn resolve(&self, indices: &[u16]) -> String {
        indices
            .iter()
            .filter_map(|&index| self.get(index))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> + '_ {
        self.syllables.iter().map(|(&index, s)| (index, s.as_str()))
    }
}

/// Words grouped by their composite pinyin.
///
/// Keys keep first-seen file order and are never duplicated; each group's
/// words keep file order and may repeat. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl WordGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the word list for `pinyin`, registering the key on first sight.
    pub fn group_mut(&mut self, pinyin: String) -> &mut Vec<String> {
        match self.groups.entry(pinyin) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(Vec::new()),
        }
    }

    pub fn get(&self, pinyin: &str) -> Option<&[String]> {
        self.groups.get(pinyin).map(Vec::as_slice)
    }

    /// Distinct pinyin keys in the order they first appear in the file.
    pub fn pinyin_order(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.keys().map(String::as_str)
    }

    /// `(pinyin, words)` groups in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct pinyin keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of words across all groups.
    pub fn word_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub(crate) fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.groups
    }
}

/// The fully decoded contents of a `.scel` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScelDict {
    pub info: ScelInfo,
    pub pinyin_table: PinyinTable,
    pub words: WordGroups,
}

impl ScelDict {
    /// Total number of words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.words.word_count()
    }
}
