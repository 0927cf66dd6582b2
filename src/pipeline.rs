// WHY: One synchronous pass per text: segment, normalize, count, score, select
// Each stage is fully materialized before the next one starts

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use crate::frequency::FrequencyTable;
use crate::morphology::{Dictionary, DictionaryLookup, LemmaLookup};
use crate::normalizer::Normalizer;
use crate::scorer::{score_statements, ScoredStatement};
use crate::segmenter::Segmenter;
use crate::selector::{join_texts, select};

/// Lemma resources for a run
#[derive(Debug, Clone, Default)]
pub struct MorphologyConfig {
    /// TSV lemma dictionary for Latin-script words
    pub latin_dictionary: Option<PathBuf>,
    /// TSV lemma dictionary for Cyrillic-script words
    pub cyrillic_dictionary: Option<PathBuf>,
}

impl MorphologyConfig {
    /// Load the configured dictionaries; missing ones fall back to Snowball
    pub fn build_lookup(&self) -> Result<DictionaryLookup> {
        let latin = self
            .latin_dictionary
            .as_ref()
            .map(Dictionary::from_path)
            .transpose()?;
        let cyrillic = self
            .cyrillic_dictionary
            .as_ref()
            .map(Dictionary::from_path)
            .transpose()?;

        Ok(DictionaryLookup::new(latin, cyrillic))
    }
}

/// Result of one summarization run
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Rate the summary was built with
    pub rate: f64,
    /// Every statement of the document with its score, in reading order
    pub statements: Vec<ScoredStatement>,
    /// Indices of the selected statements, ascending
    pub selected: Vec<usize>,
    /// Selected statement texts joined by single spaces
    pub text: String,
    pub frequency_table: FrequencyTable,
}

impl Summary {
    /// Selected statements in reading order
    pub fn selected_statements(&self) -> impl Iterator<Item = &ScoredStatement> {
        self.selected.iter().map(move |&index| &self.statements[index])
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.binary_search(&index).is_ok()
    }
}

/// Summarizer owning the lemma lookup used for every word of a run
pub struct Summarizer<L> {
    segmenter: Segmenter,
    lookup: L,
}

impl<L: LemmaLookup> Summarizer<L> {
    pub fn new(lookup: L) -> Result<Self> {
        Ok(Self {
            segmenter: Segmenter::new()?,
            lookup,
        })
    }

    /// Summarize `text`, keeping `floor(N * rate)` statements
    ///
    /// `rate` is expected in `[0, 1]`. Lookup failures abort the run.
    pub fn summarize(&self, text: &str, rate: f64) -> Result<Summary> {
        let start = Instant::now();

        let statements = self.segmenter.segment(text);

        let normalizer = Normalizer::new(&self.lookup);
        let mut normalized = Vec::with_capacity(statements.len());
        for statement in statements {
            let word_forms = normalizer
                .normalize(&statement)
                .with_context(|| format!("Failed to normalize statement {}", statement.index))?;
            normalized.push((statement, word_forms));
        }

        let frequency_table = FrequencyTable::from_word_form_maps(normalized.iter().map(|(_, m)| m));
        let statements = score_statements(normalized, &frequency_table);

        let selected_refs = select(&statements, rate);
        let text = join_texts(&selected_refs);
        let selected: Vec<usize> = selected_refs.iter().map(|s| s.index()).collect();

        info!(
            "Summarized {} statements into {} in {}ms",
            statements.len(),
            selected.len(),
            start.elapsed().as_millis()
        );

        Ok(Summary {
            rate,
            statements,
            selected,
            text,
            frequency_table,
        })
    }
}

/// Summarize with the default Snowball-backed lookup built for this run
pub fn summarize(text: &str, rate: f64) -> Result<Summary> {
    let lookup = MorphologyConfig::default().build_lookup()?;
    Summarizer::new(lookup)?.summarize(text, rate)
}
