// WHY: Maps each distinct word of a statement to its normal forms through a borrowed lookup
// Words left without any normal form are dropped from the map entirely

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::morphology::{LemmaLookup, MorphologyError, Script};
use crate::segmenter::Statement;

/// Distinct word of one statement to its non-empty set of normal forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordFormMap {
    forms: BTreeMap<String, BTreeSet<String>>,
}

impl WordFormMap {
    /// Number of distinct surviving words
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.forms.get(word)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.forms.contains_key(word)
    }

    /// Words with their normal-form sets
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.forms.iter().map(|(word, forms)| (word.as_str(), forms))
    }

    /// Union of all normal forms in this statement
    pub fn normal_forms(&self) -> BTreeSet<&str> {
        self.forms
            .values()
            .flat_map(|forms| forms.iter().map(String::as_str))
            .collect()
    }

    /// Insert a word unless its form set is empty; returns whether it was stored
    fn insert(&mut self, word: &str, forms: BTreeSet<String>) -> bool {
        if forms.is_empty() {
            return false;
        }
        self.forms.insert(word.to_string(), forms);
        true
    }
}

impl<W, F, I> FromIterator<(W, I)> for WordFormMap
where
    W: Into<String>,
    I: IntoIterator<Item = F>,
    F: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (W, I)>>(iter: T) -> Self {
        let mut map = WordFormMap::default();
        for (word, forms) in iter {
            let forms: BTreeSet<String> = forms.into_iter().map(Into::into).collect();
            let word: String = word.into();
            map.insert(&word, forms);
        }
        map
    }
}

/// Normalizer borrowing one lemma lookup for a whole run
pub struct Normalizer<'a> {
    lookup: &'a dyn LemmaLookup,
}

impl<'a> Normalizer<'a> {
    pub fn new(lookup: &'a dyn LemmaLookup) -> Self {
        Self { lookup }
    }

    /// Build the word form map of one statement
    pub fn normalize(&self, statement: &Statement) -> Result<WordFormMap, MorphologyError> {
        let mut map = WordFormMap::default();
        let mut seen = BTreeSet::new();

        for word in &statement.words {
            if !seen.insert(word.as_str()) {
                continue;
            }

            let forms = self.normal_forms(word)?;
            if !map.insert(word, forms) {
                debug!(
                    statement = statement.index,
                    word = word.as_str(),
                    "Dropped word without content normal forms"
                );
            }
        }

        Ok(map)
    }

    /// Resolve one word to its normal forms according to its script
    pub fn normal_forms(&self, word: &str) -> Result<BTreeSet<String>, MorphologyError> {
        let forms: BTreeSet<String> = match Script::of_word(word) {
            Some(Script::Latin) => self
                .lookup
                .lookup(word, Script::Latin)?
                .into_iter()
                .map(|candidate| candidate.lemma)
                .collect(),
            Some(Script::Cyrillic) => self
                .lookup
                .lookup(word, Script::Cyrillic)?
                .into_iter()
                .filter(|candidate| match candidate.non_content_category() {
                    Some(category) => {
                        debug!(word, lemma = candidate.lemma.as_str(), ?category, "Filtered non-content form");
                        false
                    }
                    None => true,
                })
                .map(|candidate| candidate.lemma)
                .collect(),
            None => BTreeSet::from([word.to_string()]),
        };

        Ok(forms
            .into_iter()
            .filter(|form| !form.is_empty())
            .collect())
    }
}
