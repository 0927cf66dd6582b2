// WHY: User-supplied lemma dictionaries override the Snowball fallback word by word
// Format: one `surface<TAB>lemma[|TAGS]` entry per line, `#` comments, blank lines ignored

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::{ensure_script, LemmaCandidate, LemmaLookup, MorphologyError, Script, SnowballLookup};

/// In-memory lemma dictionary for one script
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<LemmaCandidate>>,
}

impl Dictionary {
    /// Parse dictionary text; `resource` names the source in error messages
    pub fn parse(content: &str, resource: &str) -> Result<Self, MorphologyError> {
        let mut entries: HashMap<String, Vec<LemmaCandidate>> = HashMap::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let malformed = |reason: &str| MorphologyError::Initialization {
                resource: resource.to_string(),
                reason: format!("line {}: {}", line_no + 1, reason),
            };

            let (surface, info) = line
                .split_once('\t')
                .ok_or_else(|| malformed("expected `surface<TAB>lemma`"))?;
            let surface = surface.trim();
            if surface.is_empty() {
                return Err(malformed("empty surface form"));
            }

            let candidate = LemmaCandidate::from_annotated(info);
            if candidate.lemma.is_empty() {
                return Err(malformed("empty lemma"));
            }

            entries
                .entry(surface.to_lowercase())
                .or_default()
                .push(candidate);
        }

        debug!("Parsed {} dictionary surfaces from {}", entries.len(), resource);
        Ok(Self { entries })
    }

    /// Load a dictionary file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MorphologyError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MorphologyError::Initialization {
            resource: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let dictionary = Self::parse(&content, &path.display().to_string())?;
        info!("Loaded {} dictionary entries from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Candidates recorded for a surface form
    pub fn get(&self, word: &str) -> Option<&[LemmaCandidate]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Dictionary-first lookup falling back to Snowball for unknown words
pub struct DictionaryLookup {
    latin: Option<Dictionary>,
    cyrillic: Option<Dictionary>,
    fallback: SnowballLookup,
}

impl DictionaryLookup {
    pub fn new(latin: Option<Dictionary>, cyrillic: Option<Dictionary>) -> Self {
        Self {
            latin,
            cyrillic,
            fallback: SnowballLookup::new(),
        }
    }

    fn dictionary(&self, script: Script) -> Option<&Dictionary> {
        match script {
            Script::Latin => self.latin.as_ref(),
            Script::Cyrillic => self.cyrillic.as_ref(),
        }
    }
}

impl LemmaLookup for DictionaryLookup {
    fn lookup(&self, word: &str, script: Script) -> Result<Vec<LemmaCandidate>, MorphologyError> {
        ensure_script(word, script)?;

        match self.dictionary(script).and_then(|d| d.get(word)) {
            Some(candidates) => Ok(candidates.to_vec()),
            None => self.fallback.lookup(word, script),
        }
    }
}
