//! In-memory builder for synthetic `.scel` files.

#![allow(dead_code)]

use std::ops::Range;

use scel_reader::scel::format::{
    CATEGORY_RANGE, DESCRIPTION_RANGE, EXAMPLES_RANGE, MAGIC, NAME_RANGE, PINYIN_TABLE_HEADER,
    PINYIN_TABLE_RANGE, WORD_LIST_OFFSET,
};

/// Index used for the record that pads the pinyin table to its fixed size.
pub const FILLER_INDEX: u16 = 0xFFFF;

pub struct Word {
    pub text: String,
    pub ext: Vec<u8>,
}

pub struct Group {
    pub indices: Vec<u16>,
    pub words: Vec<Word>,
}

pub fn group(indices: &[u16], words: &[&str]) -> Group {
    Group {
        indices: indices.to_vec(),
        words: words
            .iter()
            .map(|w| Word {
                text: w.to_string(),
                ext: vec![0x0A, 0x00, 0x2D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            })
            .collect(),
    }
}

pub struct ScelBuilder {
    pub name: String,
    pub category: String,
    pub description: String,
    pub examples: String,
    pub syllables: Vec<(u16, String)>,
    pub raw_table: Option<Vec<u8>>,
    pub groups: Vec<Group>,
}

impl Default for ScelBuilder {
    fn default() -> Self {
        Self {
            name: "军事词汇大全【官方推荐】".to_string(),
            category: "军事".to_string(),
            description: "官方推荐，词库来源于网友上传！".to_string(),
            examples: "军事 士兵 战争".to_string(),
            syllables: vec![
                (0, "a".to_string()),
                (103, "jun".to_string()),
                (204, "min".to_string()),
                (318, "shi".to_string()),
                (390, "zhe".to_string()),
                (395, "zhan".to_string()),
                (396, "zheng".to_string()),
            ],
            raw_table: None,
            groups: vec![
                group(&[103, 318], &["军事", "军士"]),
                group(&[390, 204], &["哲民"]),
                group(&[395, 396], &["战争"]),
            ],
        }
    }
}

impl ScelBuilder {
    pub fn build(&self) -> Vec<u8> {
        self.build_with_boundaries().0
    }

    /// Builds the file and returns the end offset of every word group.
    pub fn build_with_boundaries(&self) -> (Vec<u8>, Vec<usize>) {
        let mut data = vec![0u8; WORD_LIST_OFFSET];
        data[..MAGIC.len()].copy_from_slice(&MAGIC);
        write_field(&mut data, NAME_RANGE, &self.name);
        write_field(&mut data, CATEGORY_RANGE, &self.category);
        write_field(&mut data, DESCRIPTION_RANGE, &self.description);
        write_field(&mut data, EXAMPLES_RANGE, &self.examples);

        let table = self.raw_table.clone().unwrap_or_else(|| self.table_bytes());
        assert_eq!(table.len(), PINYIN_TABLE_RANGE.len(), "pinyin table must fill its region");
        data[PINYIN_TABLE_RANGE].copy_from_slice(&table);

        let mut boundaries = Vec::new();
        for g in &self.groups {
            push_u16(&mut data, g.words.len() as u16);
            push_u16(&mut data, (g.indices.len() * 2) as u16);
            for &index in &g.indices {
                push_u16(&mut data, index);
            }
            for word in &g.words {
                let text = utf16(&word.text);
                push_u16(&mut data, text.len() as u16);
                data.extend_from_slice(&text);
                push_u16(&mut data, word.ext.len() as u16);
                data.extend_from_slice(&word.ext);
            }
            boundaries.push(data.len());
        }
        (data, boundaries)
    }

    fn table_bytes(&self) -> Vec<u8> {
        let mut table = PINYIN_TABLE_HEADER.to_vec();
        for (index, syllable) in &self.syllables {
            let text = utf16(syllable);
            push_u16(&mut table, *index);
            push_u16(&mut table, text.len() as u16);
            table.extend_from_slice(&text);
        }
        let remaining = PINYIN_TABLE_RANGE.len() - table.len();
        assert!(remaining >= 4, "not enough room for the filler record");
        push_u16(&mut table, FILLER_INDEX);
        push_u16(&mut table, (remaining - 4) as u16);
        table.resize(PINYIN_TABLE_RANGE.len(), 0);
        table
    }
}

pub fn utf16(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

pub fn push_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn write_field(data: &mut [u8], range: Range<usize>, text: &str) {
    let bytes = utf16(text);
    assert!(bytes.len() <= range.len(), "field text too long");
    data[range.start..range.start + bytes.len()].copy_from_slice(&bytes);
}
