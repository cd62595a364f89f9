//! Flat iteration over decoded dictionary entries.
//!
//! [`WordGroups`] keeps words grouped by pinyin. Callers that want one
//! `(pinyin, word)` pair per word, in file order, use [`EntryIterator`]
//! (owned) or [`ScelDict::entries`] (borrowed).

use indexmap::map::IntoIter as GroupsIntoIter;
use std::vec::IntoIter;

use super::types::models::{ScelDict, WordGroups};

/// Owning iterator over `(pinyin, word)` pairs.
///
/// Created by [`ScelDict::into_entries`].
pub struct EntryIterator {
    groups: GroupsIntoIter<String, Vec<String>>,
    current: Option<(String, IntoIter<String>)>,
}

impl EntryIterator {
    pub(super) fn new(words: WordGroups) -> Self {
        Self {
            groups: words.into_inner().into_iter(),
            current: None,
        }
    }
}

impl Iterator for EntryIterator {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((pinyin, words)) = self.current.as_mut()
                && let Some(word) = words.next()
            {
                return Some((pinyin.clone(), word));
            }

            // Groups with no words are skipped
            let (pinyin, words) = self.groups.next()?;
            self.current = Some((pinyin, words.into_iter()));
        }
    }
}

impl ScelDict {
    /// Consumes the dictionary, yielding `(pinyin, word)` pairs in file order.
    pub fn into_entries(self) -> EntryIterator {
        EntryIterator::new(self.words)
    }

    /// Borrowing variant of [`into_entries`](Self::into_entries).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.words
            .iter()
            .flat_map(|(pinyin, words)| words.iter().map(move |word| (pinyin, word.as_str())))
    }
}
