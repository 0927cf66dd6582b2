// Test fixtures with known texts and expected summaries
// WHY: Golden-output testing requires deterministic input/output pairs

/// Three statements from the segmentation example
pub const SIMPLE_TEXT: &str = "A cat sat. It ran! Why?";

/// Ten statements where the three best-scoring ones are not in reading order by score
/// Scores with an identity lookup: "Alpha." = 3.0, both "Alpha beta" statements = 2.5, the rest = 1.0
pub const TEN_STATEMENTS: &str = "One. Two. Alpha beta. Three. Four. Alpha beta! Six. Alpha. Eight. Nine.";

/// Expected summary of TEN_STATEMENTS at rate 0.35
pub const TEN_STATEMENTS_EXPECTED: &str = "Alpha beta. Alpha beta! Alpha.";

/// English text for the default Snowball lookup
pub const ENGLISH_TEXT: &str = "The cat sat on the mat. A dog barked at the cat. \
The cat ran to the mat. Birds sing in the morning. The dog slept.";

/// Russian text mixing content and function words
/// The first statement consists only of pronouns and prepositions
pub const RUSSIAN_TEXT: &str = "Он на ней. Кошка спит на диване. Кошка ест рыбу. Собака лает.";

/// Input with a trailing fragment that has no terminator
pub const UNTERMINATED_TEXT: &str = "Complete statement here. Trailing fragment without end";
