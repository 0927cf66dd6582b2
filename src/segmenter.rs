// WHY: Statement segmentation and word extraction share one compiled regex pair
// Compiled once per Segmenter and reused for every statement of a run

use anyhow::{Context, Result};
use regex_automata::meta::Regex;
use serde::Serialize;
use tracing::{debug, info, warn};

/// A maximal run of non-terminators followed by exactly one of `!`, `?`, `.`
pub const STATEMENT_PATTERN: &str = r"[^!?.]+[!?.]";

/// Lowercase Latin or Cyrillic letters (`ё` lies outside `а-я` and acts as a separator)
pub const WORD_PATTERN: &str = r"[a-zа-я]+";

/// A sentence-like unit of the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    /// 0-based position in the document, assigned at segmentation time
    pub index: usize,
    /// Trimmed statement text including its terminator
    pub text: String,
    /// Lowercase word tokens in reading order, duplicates kept
    pub words: Vec<String>,
}

/// Splits raw text into statements and statements into words
pub struct Segmenter {
    statement_re: Regex,
    word_re: Regex,
}

impl Segmenter {
    /// Compile the statement and word patterns
    pub fn new() -> Result<Self> {
        let statement_re = Regex::new(STATEMENT_PATTERN)
            .context("Failed to compile statement pattern")?;
        let word_re = Regex::new(WORD_PATTERN)
            .context("Failed to compile word pattern")?;

        debug!("Compiled segmenter patterns: {} / {}", STATEMENT_PATTERN, WORD_PATTERN);

        Ok(Self { statement_re, word_re })
    }

    /// Split text into ordered statements
    ///
    /// A trailing fragment without a terminator yields no statement.
    pub fn segment(&self, text: &str) -> Vec<Statement> {
        let mut statements = Vec::new();
        let mut consumed = 0;

        for found in self.statement_re.find_iter(text) {
            let raw = &text[found.range()];
            consumed = found.end();

            let trimmed = raw.trim();
            statements.push(Statement {
                index: statements.len(),
                text: trimmed.to_string(),
                words: self.extract_words(trimmed),
            });
        }

        let remainder = text[consumed..].trim();
        if !remainder.is_empty() && !remainder.chars().all(|c| matches!(c, '!' | '?' | '.')) {
            warn!(
                "Dropping {} trailing characters without a sentence terminator",
                remainder.chars().count()
            );
        }

        info!("Segmented text into {} statements", statements.len());
        statements
    }

    /// Extract lowercase Latin/Cyrillic words in left-to-right order
    pub fn extract_words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word_re
            .find_iter(&lowered)
            .map(|m| lowered[m.range()].to_string())
            .collect()
    }
}

/// Convenience wrapper compiling a fresh segmenter for a single text
pub fn segment(text: &str) -> Result<Vec<Statement>> {
    Ok(Segmenter::new()?.segment(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> Segmenter {
        Segmenter::new().unwrap()
    }

    #[test]
    fn test_segment_order_and_indices() {
        let statements = segmenter().segment("A cat sat. It ran! Why?");

        assert_eq!(statements.len(), 3);
        let texts: Vec<&str> = statements.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["A cat sat.", "It ran!", "Why?"]);
        let indices: Vec<usize> = statements.iter().map(|s| s.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_word_extraction_separators() {
        let words = segmenter().extract_words("Foo-Bar 123 baz.");
        assert_eq!(words, ["foo", "bar", "baz"]);
    }

    #[test]
    fn test_words_keep_duplicates() {
        let statements = segmenter().segment("The cat sat on the cat.");
        assert_eq!(statements[0].words, ["the", "cat", "sat", "on", "the", "cat"]);
    }

    #[test]
    fn test_trailing_fragment_is_dropped() {
        let statements = segmenter().segment("First one. Second without end");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].text, "First one.");
    }

    #[test]
    fn test_empty_and_unterminated_input() {
        assert!(segmenter().segment("").is_empty());
        assert!(segmenter().segment("   \n ").is_empty());
        assert!(segmenter().segment("no terminator at all").is_empty());
    }

    #[test]
    fn test_multiline_statement_is_trimmed() {
        let statements = segmenter().segment("\n  Line one\ncontinues here.\n\nNext?  ");
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].text, "Line one\ncontinues here.");
        assert_eq!(statements[1].text, "Next?");
    }

    #[test]
    fn test_consecutive_terminators() {
        // Each extra terminator has no preceding run, so it never forms a statement
        let statements = segmenter().segment("Really?! Yes...");
        let texts: Vec<&str> = statements.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["Really?", "Yes."]);
    }

    #[test]
    fn test_cyrillic_words_and_excluded_letters() {
        let words = segmenter().extract_words("Мама мыла раму, café ёлка.");
        // 'é' and 'ё' fall outside the letter ranges and split words
        assert_eq!(words, ["мама", "мыла", "раму", "caf", "лка"]);
    }

    #[test]
    fn test_segment_convenience_wrapper() {
        let statements = segment("One. Two.").unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1].words, ["two"]);
    }
}
