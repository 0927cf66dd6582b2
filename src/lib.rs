pub mod frequency;
pub mod morphology;
pub mod normalizer;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod scorer;
pub mod segmenter;
pub mod selector;

// Re-export main types for convenient access
pub use frequency::{build_frequency_table, FrequencyTable};
pub use morphology::{
    Dictionary, DictionaryLookup, LemmaCandidate, LemmaLookup, MorphologyError, Script,
    SnowballLookup,
};
pub use normalizer::{Normalizer, WordFormMap};
pub use pipeline::{summarize, MorphologyConfig, Summarizer, Summary};
pub use scorer::{score, ScoredStatement};
pub use segmenter::{Segmenter, Statement};
pub use selector::select;
