// WHY: Document-wide normal form counts built as a single fold over statement form maps
// A form counts at most once per statement; counts accumulate across statements

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use crate::normalizer::WordFormMap;

/// Normal form to the number of statements containing it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u32>,
}

impl FrequencyTable {
    /// Fold statement form maps into an immutable table
    pub fn from_word_form_maps<'a, I>(maps: I) -> Self
    where
        I: IntoIterator<Item = &'a WordFormMap>,
    {
        let counts = maps.into_iter().fold(BTreeMap::<String, u32>::new(), |mut counts, map| {
            for form in map.normal_forms() {
                *counts.entry(form.to_string()).or_insert(0) += 1;
            }
            counts
        });

        let table = Self { counts };
        info!("Built frequency table with {} normal forms", table.len());
        table
    }

    /// Count of a normal form; forms never seen count as 0
    pub fn count(&self, form: &str) -> u32 {
        match self.counts.get(form) {
            Some(&count) => count,
            None => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Forms in lexical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(form, &count)| (form.as_str(), count))
    }

    /// Forms by count descending, ties by form ascending
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut rows: Vec<(&str, u32)> = self.iter().collect();
        // Stable sort over lexically ordered rows keeps form order for equal counts
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }

    pub fn into_inner(self) -> BTreeMap<String, u32> {
        self.counts
    }
}

/// Build the frequency table of a document from its statement form maps
pub fn build_frequency_table<'a, I>(maps: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a WordFormMap>,
{
    FrequencyTable::from_word_form_maps(maps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> WordFormMap {
        entries
            .iter()
            .map(|(word, forms)| (*word, forms.iter().copied()))
            .collect()
    }

    #[test]
    fn test_repeated_word_counts_once_per_statement() {
        // Words ["cat", "sat", "cat"] normalize to two distinct keys
        let statement = map(&[("cat", &["cat"]), ("sat", &["sit"])]);
        let table = build_frequency_table([&statement]);
        assert_eq!(table.count("cat"), 1);
        assert_eq!(table.count("sit"), 1);
    }

    #[test]
    fn test_counts_accumulate_across_statements() {
        let maps = [
            map(&[("cat", &["cat"])]),
            map(&[("cats", &["cat"]), ("dog", &["dog"])]),
            map(&[("cat", &["cat"]), ("cats", &["cat"])]),
        ];
        let table = build_frequency_table(maps.iter());
        assert_eq!(table.count("cat"), 3);
        assert_eq!(table.count("dog"), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_every_form_of_ambiguous_word_counts() {
        let statement = map(&[("стали", &["сталь", "стать"])]);
        let table = build_frequency_table([&statement]);
        assert_eq!(table.count("сталь"), 1);
        assert_eq!(table.count("стать"), 1);
    }

    #[test]
    fn test_unknown_form_counts_zero() {
        let table = build_frequency_table([&map(&[("cat", &["cat"])])]);
        assert_eq!(table.count("unicorn"), 0);
    }

    #[test]
    fn test_empty_document() {
        let table = build_frequency_table(std::iter::empty());
        assert!(table.is_empty());
        assert!(table.ranked().is_empty());
    }

    #[test]
    fn test_ranked_order() {
        let maps = [
            map(&[("b", &["b"]), ("a", &["a"]), ("c", &["c"])]),
            map(&[("c", &["c"]), ("b", &["b"])]),
        ];
        let table = build_frequency_table(maps.iter());
        assert_eq!(table.ranked(), vec![("b", 2), ("c", 2), ("a", 1)]);
    }
}
