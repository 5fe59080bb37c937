//! Lexical text metrics: counts, complexity, topics and headline clickbait.

use std::collections::HashMap;

use serde::Serialize;

use crate::lexicon::{CLICKBAIT_PHRASES, is_stopword};
use crate::tokenize::{split_headline_words, tokenize_sentences, tokenize_words};

/// Sentinel topic used when no keyword repeats.
pub const UNKNOWN_TOPIC: &str = "Unknown";

/// Default number of keywords handed to the fact checker.
pub const DEFAULT_KEYWORD_LIMIT: usize = 15;

const MAX_TOPICS: usize = 5;
const CLICKBAIT_PHRASE_WEIGHT: f64 = 0.2;
const ALL_CAPS_WEIGHT: f64 = 0.3;
const QUESTION_WEIGHT: f64 = 0.2;
const EXCLAMATION_WEIGHT: f64 = 0.3;

/// Lexical metrics for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Words per sentence, 0 when there are no sentences.
    pub avg_sentence_length: f64,
    /// Mean word length scaled to 0-10.
    pub complexity_score: f64,
    /// Up to five repeated keywords, or `["Unknown"]`.
    pub topics: Vec<String>,
    /// Headline sensationalism estimate, 0-1.
    pub clickbait_score: f64,
    pub all_caps_percentage: f64,
    pub question_percentage: f64,
    pub exclamation_percentage: f64,
}

impl Default for TextAnalysis {
    fn default() -> Self {
        Self {
            word_count: 0,
            sentence_count: 0,
            avg_sentence_length: 0.0,
            complexity_score: 0.0,
            topics: vec![UNKNOWN_TOPIC.to_string()],
            clickbait_score: 0.0,
            all_caps_percentage: 0.0,
            question_percentage: 0.0,
            exclamation_percentage: 0.0,
        }
    }
}

/// Headline-level clickbait signals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct HeadlineSignals {
    score: f64,
    all_caps: f64,
    question: f64,
    exclamation: f64,
}

/// Computes [`TextAnalysis`] for a document.
///
/// Clickbait heuristics look at the first sentence only, which is treated
/// as the headline. Empty input returns the default analysis.
///
/// ```rust
/// use credence_core::analyze_text;
///
/// let analysis = analyze_text("Markets rallied today. Markets closed higher.");
/// assert_eq!(analysis.sentence_count, 2);
/// assert_eq!(analysis.topics, vec!["markets"]);
/// ```
pub fn analyze_text(text: &str) -> TextAnalysis {
    if text.trim().is_empty() {
        return TextAnalysis::default();
    }

    let sentences = tokenize_sentences(text);
    let words = tokenize_words(text);

    let word_count = words.len();
    let sentence_count = sentences.len();

    let avg_sentence_length = if sentence_count > 0 { word_count as f64 / sentence_count as f64 } else { 0.0 };

    let complexity_score = if word_count > 0 {
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        (total_chars as f64 / word_count as f64 * 1.5).min(10.0)
    } else {
        0.0
    };

    let topics: Vec<String> = ranked_terms(&words, |w| w.chars().count() > 2 && !is_stopword(w))
        .into_iter()
        .take(MAX_TOPICS)
        .filter(|(_, count)| *count > 1)
        .map(|(word, _)| word.to_string())
        .collect();

    let headline = sentences.first().map(String::as_str).unwrap_or_default();
    let signals = headline_signals(headline);

    TextAnalysis {
        word_count,
        sentence_count,
        avg_sentence_length,
        complexity_score,
        topics: if topics.is_empty() { vec![UNKNOWN_TOPIC.to_string()] } else { topics },
        clickbait_score: signals.score.clamp(0.0, 1.0),
        all_caps_percentage: signals.all_caps.clamp(0.0, 1.0),
        question_percentage: signals.question.clamp(0.0, 1.0),
        exclamation_percentage: signals.exclamation.clamp(0.0, 1.0),
    }
}

/// Extracts the most frequent significant words of a text.
///
/// Stop words, words of two characters or fewer and pure numbers are
/// skipped. Ties keep the order of first appearance.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let words = tokenize_words(text);
    ranked_terms(&words, |w| {
        w.chars().count() > 2 && !is_stopword(w) && !w.chars().all(|c| c.is_ascii_digit())
    })
    .into_iter()
    .take(limit)
    .map(|(word, _)| word.to_string())
    .collect()
}

/// Counts the words accepted by `keep`, ordered by count descending and
/// then by first appearance.
fn ranked_terms<'a>(words: &'a [String], keep: impl Fn(&str) -> bool) -> Vec<(&'a str, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (index, word) in words.iter().enumerate() {
        if !keep(word) {
            continue;
        }
        counts.entry(word.as_str()).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> =
        counts.into_iter().map(|(word, (count, first))| (word, count, first)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked.into_iter().map(|(word, count, _)| (word, count)).collect()
}

fn headline_signals(headline: &str) -> HeadlineSignals {
    if headline.is_empty() {
        return HeadlineSignals::default();
    }

    let lower = headline.to_lowercase();
    let mut signals = HeadlineSignals::default();

    let phrase_hits = CLICKBAIT_PHRASES.iter().filter(|phrase| lower.contains(*phrase)).count();
    signals.score += phrase_hits as f64 * CLICKBAIT_PHRASE_WEIGHT;

    let raw_words = split_headline_words(headline);
    let caps_count = raw_words.iter().filter(|w| w.chars().count() > 1 && is_all_caps(w)).count();
    signals.all_caps = caps_count as f64 / raw_words.len().max(1) as f64;
    signals.score += signals.all_caps * ALL_CAPS_WEIGHT;

    let length = headline.chars().count() as f64;

    let questions = headline.matches('?').count();
    if questions > 0 {
        signals.question = questions as f64 / length;
        signals.score += signals.question * QUESTION_WEIGHT;
    }

    let exclamations = headline.matches('!').count();
    if exclamations > 0 {
        signals.exclamation = exclamations as f64 / length;
        signals.score += signals.exclamation * EXCLAMATION_WEIGHT;
    }

    signals
}

/// True when the word has at least one cased letter and no lowercase ones.
fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
