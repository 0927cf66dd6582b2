// WHY: Default lemma lookup that needs no external resource files
// Snowball stems stand in for dictionary lemmas; Russian function words get category tags

use rust_stemmers::{Algorithm, Stemmer};
use tracing::debug;

use super::{ensure_script, ClosedClassTable, LemmaCandidate, LemmaLookup, MorphologyError, Script};

/// Snowball-based lookup for English (Latin) and Russian (Cyrillic) words
pub struct SnowballLookup {
    english: Stemmer,
    russian: Stemmer,
    closed_class: ClosedClassTable,
}

impl SnowballLookup {
    pub fn new() -> Self {
        let closed_class = ClosedClassTable::new();
        debug!("Initialized Snowball lookup with {} closed-class words", closed_class.len());

        Self {
            english: Stemmer::create(Algorithm::English),
            russian: Stemmer::create(Algorithm::Russian),
            closed_class,
        }
    }
}

impl Default for SnowballLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl LemmaLookup for SnowballLookup {
    fn lookup(&self, word: &str, script: Script) -> Result<Vec<LemmaCandidate>, MorphologyError> {
        ensure_script(word, script)?;

        let candidate = match script {
            Script::Latin => LemmaCandidate::plain(self.english.stem(word)),
            Script::Cyrillic => match self.closed_class.category(word) {
                Some(category) => LemmaCandidate::tagged(word, [category.code()]),
                None => LemmaCandidate::plain(self.russian.stem(word)),
            },
        };

        Ok(vec![candidate])
    }
}
