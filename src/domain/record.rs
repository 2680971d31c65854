use serde::Serialize;

use crate::domain::month::contains_month;

/// One title/url pairing pulled from the results page, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPair {
    pub title: String,
    pub displayed_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    /// 1-based position within its own keyword's result list.
    pub rank: usize,
    pub keyword: String,
    pub title: String,
    pub url: String,
    pub contains_month: bool,
}

/// Turns extracted pairs into classified records for one keyword. Ranks start
/// at 1 and restart for every keyword.
pub fn assemble_records(keyword: &str, pairs: Vec<ResultPair>) -> Vec<ClassifiedRecord> {
    pairs
        .into_iter()
        .enumerate()
        .map(|(index, pair)| {
            let contains_month = contains_month(&pair.title);
            ClassifiedRecord {
                rank: index + 1,
                keyword: keyword.to_string(),
                title: pair.title,
                url: pair.displayed_url,
                contains_month,
            }
        })
        .collect()
}

pub fn month_count(records: &[ClassifiedRecord]) -> usize {
    records.iter().filter(|record| record.contains_month).count()
}

/// Records accumulated across one or more keywords, appended in scan order.
#[derive(Debug, Default)]
pub struct ResultSet {
    records: Vec<ClassifiedRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, records: Vec<ClassifiedRecord>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[ClassifiedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn month_count(&self) -> usize {
        month_count(&self.records)
    }
}
