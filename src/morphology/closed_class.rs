// WHY: Closed-class Russian function words tagged with their grammatical category
// Lets the default lookup mark non-content words without a full morphology dictionary

use std::collections::HashMap;

use super::NonContentCategory;

pub const PREPOSITIONS: &[&str] = &[
    "без", "в", "во", "для", "до", "за", "из", "изо", "к", "ко", "между", "на", "над",
    "надо", "о", "об", "обо", "около", "от", "ото", "перед", "по", "под", "подо", "при",
    "про", "ради", "с", "со", "сквозь", "среди", "у", "через",
];

pub const PARTICLES: &[&str] = &[
    "бы", "б", "ведь", "вот", "вон", "даже", "же", "ж", "ли", "ль", "лишь", "не", "ни",
    "разве", "уж", "неужели", "только", "именно", "пусть",
];

pub const PRONOUNS: &[&str] = &[
    "я", "меня", "мне", "мной", "мною", "ты", "тебя", "тебе", "тобой", "он", "его", "ему",
    "им", "нем", "она", "ее", "ей", "ней", "нее", "оно", "мы", "нас", "нам", "нами", "вы",
    "вас", "вам", "вами", "они", "их", "ими", "них", "ним", "ними", "нему", "себя", "себе",
    "собой", "кто", "кого", "кому", "что", "чего", "чему", "чем", "этот", "эта", "это",
    "эти", "этого", "этой", "тот", "та", "то", "те", "того", "той", "мой", "моя", "мое",
    "мои", "твой", "твоя", "наш", "наша", "ваш", "ваша", "свой", "своя", "свое", "свои",
    "который", "которая", "которое", "которые", "весь", "вся", "все", "всего", "всех",
];

pub const INTERJECTIONS: &[&str] = &[
    "ах", "ох", "эх", "ой", "ай", "ух", "увы", "ура", "эй", "ого", "ага", "фу", "ну",
];

/// Word to category lookup over the closed lists
pub struct ClosedClassTable {
    categories: HashMap<&'static str, NonContentCategory>,
}

impl ClosedClassTable {
    pub fn new() -> Self {
        let lists = [
            (PREPOSITIONS, NonContentCategory::Preposition),
            (PARTICLES, NonContentCategory::Particle),
            (PRONOUNS, NonContentCategory::Pronoun),
            (INTERJECTIONS, NonContentCategory::Interjection),
        ];

        let mut categories = HashMap::new();
        for (words, category) in lists {
            for &word in words {
                // First list wins for homographs
                categories.entry(word).or_insert(category);
            }
        }

        Self { categories }
    }

    /// Category of a lowercase Cyrillic word, if it is a function word
    pub fn category(&self, word: &str) -> Option<NonContentCategory> {
        self.categories.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for ClosedClassTable {
    fn default() -> Self {
        Self::new()
    }
}
