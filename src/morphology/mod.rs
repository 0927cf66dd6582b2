// WHY: Lemma lookup is an injected capability so the normalizer never owns linguistic resources
// One lookup instance is built per run and borrowed for every word of that run

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

pub mod closed_class;
pub mod dictionary;
pub mod snowball;

pub use closed_class::ClosedClassTable;
pub use dictionary::{Dictionary, DictionaryLookup};
pub use snowball::SnowballLookup;

/// Separates the lemma from its grammar tags in an annotated candidate
pub const TAG_DELIMITER: char = '|';

/// Alphabet a word is written in, which selects the lookup resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Cyrillic,
}

impl Script {
    /// Classify a lowercase word; `None` for empty or mixed words
    pub fn of_word(word: &str) -> Option<Script> {
        if word.is_empty() {
            None
        } else if word.chars().all(|c| c.is_ascii_lowercase()) {
            Some(Script::Latin)
        } else if word.chars().all(|c| ('а'..='я').contains(&c)) {
            Some(Script::Cyrillic)
        } else {
            None
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Latin => write!(f, "latin"),
            Script::Cyrillic => write!(f, "cyrillic"),
        }
    }
}

/// Grammatical categories that never count as content words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonContentCategory {
    Interjection,
    Preposition,
    Particle,
    Pronoun,
}

impl NonContentCategory {
    pub const ALL: [NonContentCategory; 4] = [
        NonContentCategory::Interjection,
        NonContentCategory::Preposition,
        NonContentCategory::Particle,
        NonContentCategory::Pronoun,
    ];

    /// Tag code used by Russian morphology dictionaries
    pub fn code(&self) -> &'static str {
        match self {
            NonContentCategory::Interjection => "МЕЖД",
            NonContentCategory::Preposition => "ПРЕДЛ",
            NonContentCategory::Particle => "ЧАСТ",
            NonContentCategory::Pronoun => "МС",
        }
    }

    /// Match a tag to a category; sub-categories such as `МС-П` belong to their parent
    pub fn from_tag(tag: &str) -> Option<NonContentCategory> {
        Self::ALL.into_iter().find(|category| {
            let code = category.code();
            tag == code
                || tag
                    .strip_prefix(code)
                    .is_some_and(|rest| rest.starts_with('-'))
        })
    }
}

/// One admissible normal form returned by a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemmaCandidate {
    pub lemma: String,
    /// Grammar tags, absent when the lookup does not tag its forms
    pub tags: Option<BTreeSet<String>>,
}

impl LemmaCandidate {
    /// Untagged candidate
    pub fn plain(lemma: impl Into<String>) -> Self {
        Self { lemma: lemma.into(), tags: None }
    }

    /// Candidate carrying the given tags
    pub fn tagged<I, S>(lemma: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lemma: lemma.into(),
            tags: Some(tags.into_iter().map(Into::into).collect()),
        }
    }

    /// Parse `lemma|Xx МС 1л,ед,им`: lemma before the first delimiter, tags after it
    pub fn from_annotated(info: &str) -> Self {
        match info.split_once(TAG_DELIMITER) {
            Some((lemma, rest)) => Self {
                lemma: lemma.trim().to_string(),
                tags: Some(
                    rest.split(|c: char| c.is_whitespace() || c == ',')
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect(),
                ),
            },
            None => Self::plain(info.trim()),
        }
    }

    /// First non-content category found among the tags
    pub fn non_content_category(&self) -> Option<NonContentCategory> {
        self.tags
            .as_ref()?
            .iter()
            .find_map(|tag| NonContentCategory::from_tag(tag))
    }
}

/// Failures of the lemma lookup capability; both variants abort the run
#[derive(Error, Debug)]
pub enum MorphologyError {
    #[error("Failed to initialize morphology resource {resource}: {reason}")]
    Initialization { resource: String, reason: String },

    #[error("Lemma lookup failed for '{word}' ({script}): {reason}")]
    Lookup {
        word: String,
        script: Script,
        reason: String,
    },
}

/// Synchronous lemma lookup keyed by script
pub trait LemmaLookup {
    /// Return the admissible normal forms of `word` read in `script`
    fn lookup(&self, word: &str, script: Script) -> Result<Vec<LemmaCandidate>, MorphologyError>;
}

impl<T: LemmaLookup + ?Sized> LemmaLookup for &T {
    fn lookup(&self, word: &str, script: Script) -> Result<Vec<LemmaCandidate>, MorphologyError> {
        (**self).lookup(word, script)
    }
}

impl<T: LemmaLookup + ?Sized> LemmaLookup for Box<T> {
    fn lookup(&self, word: &str, script: Script) -> Result<Vec<LemmaCandidate>, MorphologyError> {
        (**self).lookup(word, script)
    }
}

/// Reject words whose characters do not belong to the requested script
pub(crate) fn ensure_script(word: &str, script: Script) -> Result<(), MorphologyError> {
    if Script::of_word(word) == Some(script) {
        Ok(())
    } else {
        Err(MorphologyError::Lookup {
            word: word.to_string(),
            script,
            reason: "word contains characters outside the script alphabet".to_string(),
        })
    }
}
