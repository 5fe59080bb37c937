//! Extraction of sentences that look like checkable factual claims.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::tokenize::tokenize_sentences;

/// Maximum number of claims returned by [`extract_claims`].
pub const MAX_CLAIMS: usize = 5;

const MIN_CLAIM_CHARS: usize = 20;
const MAX_CLAIM_WORDS: usize = 50;
const SIGNATURE_WORDS: usize = 5;
const INFORMATIVE_MIN_WORDS: usize = 6;
const INFORMATIVE_MAX_WORDS: usize = 40;
const INFORMATIVE_TAKE: usize = 3;
const LEADING_TAKE: usize = 3;
const LEADING_MIN_CHARS: usize = 30;

/// Lexical claim indicators, matched case-insensitively.
const CLAIM_INDICATORS: &[&str] = &[
    // attribution
    r"(?i)(according to|said|says|claimed|reported|confirmed|announced|revealed|stated|disclosed|asserted)",
    // superlatives
    r"(?i)(is|are|was|were) (the first|the best|the largest|the only|the highest|the lowest|the most|the least)",
    // statistical deltas
    r"(?i)(increased|decreased|grew|fell|rose|declined|jumped|plunged|surged|dropped) by",
    // numeric magnitudes
    r"(?i)(more than|less than|about|approximately|nearly|over|under|around) \d+",
    // quantifiers
    r"(?i)(all|none|most|many|some|few|several) of the",
    // research
    r"(?i)(research|study|survey|poll|analysis|data) (shows|indicates|suggests|confirms|proves|reveals|demonstrates|finds)",
    // certainty
    r"(?i)(in fact|actually|certainly|definitely|undoubtedly|clearly|obviously)",
    // causal
    r"(?i)(causes|leads to|results in|because of|due to|consequently)",
    // dated references
    r"(?i)\b(in|on|during) (january|february|march|april|may|june|july|august|september|october|november|december) \d{1,2}(st|nd|rd|th)?, \d{4}\b",
    // percentages
    r"(?i)\d+(\.\d+)?\s?(%|percent)",
    // policy mandates
    r"(?i)(policy|law|regulation|legislation|bill|act) (requires|mandates|prohibits|allows|restricts)",
];

/// Title followed by a capitalized full name; case matters here.
const TITLED_PERSON: &str = r"(President|CEO|Director|Secretary|Minister|Dr\.|Professor|Sen\.|Rep\.) [A-Z][a-z]+ [A-Z][a-z]+";

static INDICATOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CLAIM_INDICATORS
        .iter()
        .chain(std::iter::once(&TITLED_PERSON))
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"["“”].*?["“”]"#).unwrap());
static FULL_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z][a-z]+ [A-Z][a-z]+").unwrap());

/// Finds up to five sentences that resemble verifiable factual claims.
///
/// Sentences matching a claim indicator are returned in order of first
/// appearance, deduplicated by their first five words. When nothing matches,
/// the most informative sentences are used instead, and failing that the
/// first sentences longer than 30 characters.
///
/// ```rust
/// use credence_core::extract_claims;
///
/// let claims = extract_claims("Unemployment fell by 2 percent last year. It rained.");
/// assert_eq!(claims, vec!["Unemployment fell by 2 percent last year."]);
/// ```
pub fn extract_claims(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let sentences = tokenize_sentences(text);

    let mut seen = HashSet::new();
    let mut claims: Vec<String> = sentences
        .iter()
        .filter(|s| is_claim_like(s))
        .filter(|s| seen.insert(signature(s)))
        .cloned()
        .collect();

    if claims.is_empty() {
        claims = most_informative(&sentences);
    }

    if claims.is_empty() {
        claims = sentences
            .iter()
            .take(LEADING_TAKE)
            .filter(|s| s.chars().count() > LEADING_MIN_CHARS)
            .cloned()
            .collect();
    }

    claims.truncate(MAX_CLAIMS);
    claims
}

fn is_claim_like(sentence: &str) -> bool {
    sentence.chars().count() > MIN_CLAIM_CHARS
        && sentence.split_whitespace().count() <= MAX_CLAIM_WORDS
        && INDICATOR_PATTERNS.iter().any(|p| p.is_match(sentence))
}

/// Lowercase first-five-word prefix used to drop near-duplicate claims.
fn signature(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .take(SIGNATURE_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn informativeness(sentence: &str, word_count: usize) -> f64 {
    let mut score = word_count as f64;
    if DIGIT.is_match(sentence) {
        score *= 1.5;
    }
    if QUOTED.is_match(sentence) {
        score *= 1.3;
    }
    if FULL_NAME.is_match(sentence) {
        score *= 1.2;
    }
    score
}

fn most_informative(sentences: &[String]) -> Vec<String> {
    let mut scored: Vec<(&String, f64)> = sentences
        .iter()
        .filter_map(|s| {
            let words = s.split_whitespace().count();
            (INFORMATIVE_MIN_WORDS..=INFORMATIVE_MAX_WORDS)
                .contains(&words)
                .then(|| (s, informativeness(s, words)))
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.into_iter().take(INFORMATIVE_TAKE).map(|(s, _)| s.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_claims() {
        assert!(extract_claims("").is_empty());
        assert!(extract_claims("   ").is_empty());
    }

    #[test]
    fn test_attribution_claims_in_order() {
        let text = "The minister said the plan would cut costs. Weather was mild. \
            Officials confirmed the bridge will reopen in May.";
        let claims = extract_claims(text);
        assert_eq!(
            claims,
            vec!["The minister said the plan would cut costs.", "Officials confirmed the bridge will reopen in May."]
        );
    }

    #[test]
    fn test_short_sentences_are_skipped() {
        let claims = extract_claims("He said so. Prices rose by 4 percent across the region.");
        assert_eq!(claims, vec!["Prices rose by 4 percent across the region."]);
    }

    #[test]
    fn test_long_sentences_are_skipped() {
        let long = format!("The report said {}.", "very ".repeat(60));
        let text = format!("{long} Exports grew by 3 percent this year.");
        let claims = extract_claims(&text);
        assert_eq!(claims, vec!["Exports grew by 3 percent this year."]);
    }

    #[test]
    fn test_duplicate_signatures_removed() {
        let text = "The company said profits doubled this quarter. \
            The company said profits doubled despite the slowdown.";
        let claims = extract_claims(text);
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0], "The company said profits doubled this quarter.");
    }

    #[test]
    fn test_signature_is_case_insensitive() {
        assert_eq!(signature("The Company Said Profits Doubled today"), "the company said profits doubled");
    }

    #[test]
    fn test_capped_at_five() {
        let text = (1..=8)
            .map(|i| format!("Report number {i} confirmed growth in region {i}."))
            .collect::<Vec<_>>()
            .join(" ");
        let claims = extract_claims(&text);
        assert_eq!(claims.len(), MAX_CLAIMS);
        assert!(claims[0].contains("number 1"));
    }

    #[test]
    fn test_titled_person_is_case_sensitive() {
        let claims = extract_claims("Yesterday President Jane Doe toured the flooded town.");
        assert_eq!(claims.len(), 1);
        assert!(INDICATOR_PATTERNS.last().unwrap().is_match("President Jane Doe toured"));
        assert!(!INDICATOR_PATTERNS.last().unwrap().is_match("president jane doe toured"));
    }

    #[test]
    fn test_dated_reference_matches_capitalized_month() {
        assert!(is_claim_like("The treaty was signed on March 3rd, 2021 in Geneva"));
    }

    #[test]
    fn test_informative_fallback() {
        let text = "Short one here. \
            The new library opened downtown with 40000 books on its shelves. \
            Residents lined up early outside the brick building on Main Street. \
            People seemed to like the coffee there.";
        let claims = extract_claims(text);
        assert_eq!(
            claims,
            vec![
                "The new library opened downtown with 40000 books on its shelves.",
                "Residents lined up early outside the brick building on Main Street.",
                "People seemed to like the coffee there.",
            ]
        );
    }

    #[test]
    fn test_leading_sentence_fallback() {
        let text = "Supercalifragilisticexpialidocious extraordinarily.\nTiny.";
        let claims = extract_claims(text);
        assert_eq!(claims, vec!["Supercalifragilisticexpialidocious extraordinarily."]);
    }

    #[test]
    fn test_nothing_qualifies() {
        assert!(extract_claims("Hi there. Bye now.").is_empty());
    }
}
