//! Lexicon-based sentiment, bias indicators and news emotion profile.
//!
//! Polarity follows a VADER-like scheme: fixed positive and negative word
//! sets, a one-token negation window and a one-token intensifier window.
//! The bias score is a capped sum of independent signals on a 0-10 scale.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::lexicon::{
    EMOTIONAL_WORDS, LOADED_LANGUAGE, NEGATIVE_WORDS, NEGATORS, PERSUASIVE_WORDS, POLARITY_INTENSIFIERS,
    POSITIVE_WORDS, SUBJECTIVE_INTENSIFIERS, WEASEL_WORDS, emotion_words,
};

/// Bias scores above this value mark a text as biased.
pub const BIAS_THRESHOLD: f64 = 6.0;

const INTENSIFIER_FACTOR: f64 = 1.8;
const NEGATED_NEGATIVE_WEIGHT: f64 = 0.5;
const EMOTION_FLOOR: f64 = 0.05;

/// Characters removed by the polarity tokenizer.
const POLARITY_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\''];

const OPINION_PATTERNS: &[&str] = &[
    r"(?i)\b(I|we) (think|believe|feel|suggest|argue|assert)\b",
    r"(?i)\bin my opinion\b",
    r"(?i)\bin my view\b",
    r"(?i)\bmy understanding\b",
];

static OPINION_REGEXES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| OPINION_PATTERNS.iter().map(|p| Regex::new(p).unwrap()).collect());

/// One whole-word alternation per emotion, in [`Emotion::ALL`] order.
static EMOTION_REGEXES: LazyLock<Vec<(Emotion, Regex)>> = LazyLock::new(|| {
    Emotion::ALL
        .iter()
        .map(|&emotion| {
            let words: Vec<String> = emotion_words(emotion).iter().map(|w| regex::escape(w)).collect();
            let pattern = format!(r"\b(?:{})\b", words.join("|"));
            (emotion, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// The six emotion categories tracked for news content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Fear,
    Anger,
    Joy,
    Sadness,
    Surprise,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 6] =
        [Emotion::Fear, Emotion::Anger, Emotion::Joy, Emotion::Sadness, Emotion::Surprise, Emotion::Disgust];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Fear => "fear",
            Emotion::Anger => "anger",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
        }
    }
}

/// Emotion proportions; always contains all six keys and sums to 1.0.
pub type EmotionDistribution = BTreeMap<Emotion, f64>;

/// Raw polarity scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScores {
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    /// Normalized balance of positive and negative weight, -1 to 1.
    pub compound: f64,
}

impl Default for PolarityScores {
    fn default() -> Self {
        Self { pos: 0.0, neg: 0.0, neu: 1.0, compound: 0.0 }
    }
}

/// Word-level signals of subjective or slanted writing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BiasIndicators {
    pub emotional_words: Vec<String>,
    pub persuasive_words: Vec<String>,
    pub loaded_language: Vec<String>,
    pub weasel_words: Vec<String>,
    /// Number of distinct intensifiers present.
    pub subjective_intensifiers: usize,
    /// Number of first-person opinion phrases.
    pub opinion_phrases: usize,
}

/// Sentiment and bias profile of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentAnalysis {
    pub compound_score: f64,
    pub positivity: f64,
    pub negativity: f64,
    pub neutrality: f64,
    pub is_biased: bool,
    /// 0-10, higher is more biased.
    pub bias_score: f64,
    pub emotional_words: Vec<String>,
    pub persuasive_words: Vec<String>,
    pub loaded_language: Vec<String>,
    pub weasel_words: Vec<String>,
    pub subjective_intensifiers: usize,
    pub opinion_phrases: usize,
    pub emotion_categories: EmotionDistribution,
}

impl Default for SentimentAnalysis {
    fn default() -> Self {
        let polarity = PolarityScores::default();
        Self {
            compound_score: polarity.compound,
            positivity: polarity.pos,
            negativity: polarity.neg,
            neutrality: polarity.neu,
            is_biased: false,
            bias_score: 0.0,
            emotional_words: Vec::new(),
            persuasive_words: Vec::new(),
            loaded_language: Vec::new(),
            weasel_words: Vec::new(),
            subjective_intensifiers: 0,
            opinion_phrases: 0,
            emotion_categories: uniform_emotions(),
        }
    }
}

/// Analyzes sentiment, bias and emotions of a text.
///
/// Empty input returns a neutral analysis with a uniform emotion profile.
///
/// ```rust
/// use credence_core::analyze_sentiment;
///
/// let analysis = analyze_sentiment("The results were excellent and the team was pleased.");
/// assert!(analysis.compound_score > 0.0);
/// assert!(!analysis.is_biased);
/// ```
pub fn analyze_sentiment(text: &str) -> SentimentAnalysis {
    if text.trim().is_empty() {
        return SentimentAnalysis::default();
    }

    let polarity = polarity_scores(text);
    let indicators = detect_bias_indicators(text);
    let bias_score = calculate_bias_score(&polarity, &indicators).clamp(0.0, 10.0);

    SentimentAnalysis {
        compound_score: polarity.compound.clamp(-1.0, 1.0),
        positivity: polarity.pos,
        negativity: polarity.neg,
        neutrality: polarity.neu,
        is_biased: bias_score > BIAS_THRESHOLD,
        bias_score,
        emotional_words: indicators.emotional_words,
        persuasive_words: indicators.persuasive_words,
        loaded_language: indicators.loaded_language,
        weasel_words: indicators.weasel_words,
        subjective_intensifiers: indicators.subjective_intensifiers,
        opinion_phrases: indicators.opinion_phrases,
        emotion_categories: analyze_news_emotions(text),
    }
}

/// Lowercases and strips the polarity punctuation set, then splits on whitespace.
/// `n't` contractions are expanded to `not` first so they still negate the
/// next word.
fn polarity_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace("n't", " not")
        .replace("n\u{2019}t", " not")
        .replace(POLARITY_PUNCTUATION, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Computes lexicon polarity with negation and intensifier handling.
pub fn polarity_scores(text: &str) -> PolarityScores {
    let tokens = polarity_tokens(text);
    if tokens.is_empty() {
        return PolarityScores::default();
    }

    let mut positive = 0.0;
    let mut negative = 0.0;

    for (i, token) in tokens.iter().enumerate() {
        let previous = i.checked_sub(1).map(|p| tokens[p].as_str());
        let negated = previous.is_some_and(|p| NEGATORS.contains(&p));
        let intensified = previous.is_some_and(|p| POLARITY_INTENSIFIERS.contains(&p));
        let factor = if intensified { INTENSIFIER_FACTOR } else { 1.0 };

        if POSITIVE_WORDS.contains(&token.as_str()) {
            if negated {
                negative += factor;
            } else {
                positive += factor;
            }
        } else if NEGATIVE_WORDS.contains(&token.as_str()) {
            if negated {
                positive += NEGATED_NEGATIVE_WEIGHT;
            } else {
                negative += factor;
            }
        }
    }

    let count = tokens.len() as f64;
    let pos = positive / count;
    let neg = negative / count;
    let compound = if pos + neg == 0.0 { 0.0 } else { (pos - neg) / (pos + neg) };

    PolarityScores {
        pos: pos.min(1.0),
        neg: neg.min(1.0),
        neu: (1.0 - (pos + neg)).clamp(0.0, 1.0),
        compound,
    }
}

/// Scans a text for emotional, persuasive, loaded and weasel language.
pub fn detect_bias_indicators(text: &str) -> BiasIndicators {
    let tokens = polarity_tokens(text);
    let lower = text.to_lowercase();

    let weasel_words = ordered_by_position(WEASEL_WORDS.iter().filter_map(|w| lower.find(w).map(|pos| (pos, *w))));

    let opinion_phrases = OPINION_REGEXES.iter().map(|re| re.find_iter(text).count()).sum();

    BiasIndicators {
        emotional_words: matched_terms(&tokens, EMOTIONAL_WORDS),
        persuasive_words: matched_terms(&tokens, PERSUASIVE_WORDS),
        loaded_language: matched_terms(&tokens, LOADED_LANGUAGE),
        weasel_words,
        subjective_intensifiers: SUBJECTIVE_INTENSIFIERS.iter().filter(|w| tokens.iter().any(|t| t == *w)).count(),
        opinion_phrases,
    }
}

/// Terms of `lexicon` found in `tokens`, ordered by first appearance.
/// Multi-word terms must appear as a contiguous token run.
fn matched_terms(tokens: &[String], lexicon: &[&str]) -> Vec<String> {
    ordered_by_position(lexicon.iter().filter_map(|term| first_token_run(tokens, term).map(|pos| (pos, *term))))
}

fn first_token_run(tokens: &[String], term: &str) -> Option<usize> {
    let parts: Vec<&str> = term.split_whitespace().collect();
    if parts.is_empty() || parts.len() > tokens.len() {
        return None;
    }
    tokens.windows(parts.len()).position(|window| window.iter().zip(&parts).all(|(t, p)| t == p))
}

fn ordered_by_position<'a>(hits: impl Iterator<Item = (usize, &'a str)>) -> Vec<String> {
    let mut hits: Vec<(usize, &str)> = hits.collect();
    hits.sort_by_key(|(pos, _)| *pos);
    hits.into_iter().map(|(_, term)| term.to_string()).collect()
}

/// Combines polarity and indicators into a 0-10 bias score.
///
/// Each signal is capped so that no single indicator dominates:
///
/// | signal              | weight | cap  |
/// |---------------------|--------|------|
/// | \|compound\|        | 2.0    | 2.0  |
/// | emotional words     | 0.4    | 2.0  |
/// | persuasive words    | 0.3    | 1.5  |
/// | loaded language     | 0.5    | 2.0  |
/// | weasel words        | 0.2    | 1.0  |
/// | intensifiers        | 0.15   | 0.75 |
/// | opinion phrases     | 0.25   | 0.75 |
pub fn calculate_bias_score(polarity: &PolarityScores, indicators: &BiasIndicators) -> f64 {
    let capped = |count: usize, weight: f64, cap: f64| (count as f64 * weight).min(cap);

    (polarity.compound.abs() * 2.0).min(2.0)
        + capped(indicators.emotional_words.len(), 0.4, 2.0)
        + capped(indicators.persuasive_words.len(), 0.3, 1.5)
        + capped(indicators.loaded_language.len(), 0.5, 2.0)
        + capped(indicators.weasel_words.len(), 0.2, 1.0)
        + capped(indicators.subjective_intensifiers, 0.15, 0.75)
        + capped(indicators.opinion_phrases, 0.25, 0.75)
}

/// Measures the share of each emotion among emotion-bearing words.
///
/// Every category is floored at 0.05 before renormalizing, so no category
/// is ever zero. Text without emotion words gets a uniform profile.
pub fn analyze_news_emotions(text: &str) -> EmotionDistribution {
    let lower = text.to_lowercase();

    let counts: Vec<(Emotion, usize)> =
        EMOTION_REGEXES.iter().map(|(emotion, re)| (*emotion, re.find_iter(&lower).count())).collect();
    let total: usize = counts.iter().map(|(_, c)| c).sum();

    if total == 0 {
        return uniform_emotions();
    }

    let floored: EmotionDistribution = counts
        .into_iter()
        .map(|(emotion, count)| (emotion, (count as f64 / total as f64).max(EMOTION_FLOOR)))
        .collect();

    let sum: f64 = floored.values().sum();
    floored.into_iter().map(|(emotion, share)| (emotion, share / sum)).collect()
}

fn uniform_emotions() -> EmotionDistribution {
    let share = 1.0 / Emotion::ALL.len() as f64;
    Emotion::ALL.iter().map(|&emotion| (emotion, share)).collect()
}
