// WHY: Statement significance is the average, over distinct words, of each word's
// least frequent normal form in the document

use serde::Serialize;
use tracing::{debug, info};

use crate::frequency::FrequencyTable;
use crate::normalizer::WordFormMap;
use crate::segmenter::Statement;

/// A statement with its form map and significance score
#[derive(Debug, Clone, Serialize)]
pub struct ScoredStatement {
    #[serde(flatten)]
    pub statement: Statement,
    pub word_forms: WordFormMap,
    pub score: f64,
}

impl ScoredStatement {
    pub fn index(&self) -> usize {
        self.statement.index
    }

    pub fn text(&self) -> &str {
        &self.statement.text
    }
}

/// Minimum table count among a word's normal forms
fn min_form_count<'a, I>(forms: I, table: &FrequencyTable) -> u32
where
    I: IntoIterator<Item = &'a String>,
{
    forms
        .into_iter()
        .map(|form| table.count(form))
        .min()
        .unwrap_or(0)
}

/// Score one statement; a map without words scores 0
pub fn score(word_forms: &WordFormMap, table: &FrequencyTable) -> f64 {
    if word_forms.is_empty() {
        return 0.0;
    }

    let total: u64 = word_forms
        .iter()
        .map(|(_, forms)| u64::from(min_form_count(forms, table)))
        .sum();

    total as f64 / word_forms.len() as f64
}

/// Score every statement against the document table
pub fn score_statements(
    normalized: Vec<(Statement, WordFormMap)>,
    table: &FrequencyTable,
) -> Vec<ScoredStatement> {
    let scored: Vec<ScoredStatement> = normalized
        .into_iter()
        .map(|(statement, word_forms)| {
            let score = score(&word_forms, table);
            debug!(statement = statement.index, words = word_forms.len(), score, "Scored statement");
            ScoredStatement { statement, word_forms, score }
        })
        .collect();

    info!("Scored {} statements", scored.len());
    scored
}
