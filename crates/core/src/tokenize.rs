//! Lexical tokenization without external NLP models.
//!
//! Sentence splitting is a heuristic: a break is inserted after `. `, `! `
//! and `? `, so abbreviations ("Dr. Smith") and some decimals followed by a
//! space are split too. Claim extraction depends on this exact behavior.

/// Splits text into lowercase word tokens.
///
/// Every ASCII punctuation character is replaced with whitespace before
/// splitting, so "don't" becomes `["don", "t"]`.
///
/// ```rust
/// use credence_core::tokenize::tokenize_words;
///
/// assert_eq!(tokenize_words("Hello, World!"), vec!["hello", "world"]);
/// ```
pub fn tokenize_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();

    cleaned.split_whitespace().map(str::to_lowercase).collect()
}

/// Splits text into trimmed, non-empty sentences.
///
/// Existing line breaks also end a sentence. Whitespace-only input yields an
/// empty vector.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    let marked = text.replace(". ", ".\n").replace("! ", "!\n").replace("? ", "?\n");

    marked
        .split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits on whitespace only, keeping punctuation and case.
pub fn split_headline_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
