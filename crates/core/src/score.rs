//! Credibility aggregation.
//!
//! Four component scores, each on a 0-100 scale, are combined into one
//! weighted overall score:
//!
//! | Component          | Weight | Input                          |
//! |--------------------|--------|--------------------------------|
//! | Source Credibility | 0.25   | reputation of the URL's domain |
//! | Content Analysis   | 0.25   | [`TextAnalysis`]               |
//! | Fact Checking      | 0.30   | fact-check verdicts            |
//! | Bias Assessment    | 0.20   | [`SentimentAnalysis`] bias     |

use serde::Serialize;

use crate::factcheck::FactCheckResult;
use crate::sentiment::SentimentAnalysis;
use crate::source::{NEUTRAL_SCORE, SourceEvaluator};
use crate::text::TextAnalysis;

const CONTENT_BASE: f64 = 50.0;

/// Weights of the four components. They should sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    pub source: f64,
    pub content: f64,
    pub fact_check: f64,
    pub bias: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { source: 0.25, content: 0.25, fact_check: 0.30, bias: 0.20 }
    }
}

/// Component scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "Source Credibility")]
    pub source_credibility: f64,
    #[serde(rename = "Content Analysis")]
    pub content_analysis: f64,
    #[serde(rename = "Fact Checking")]
    pub fact_checking: f64,
    #[serde(rename = "Bias Assessment")]
    pub bias_assessment: f64,
}

impl ScoreBreakdown {
    /// Display names paired with values, in weight-table order.
    pub fn components(&self) -> [(&'static str, f64); 4] {
        [
            ("Source Credibility", self.source_credibility),
            ("Content Analysis", self.content_analysis),
            ("Fact Checking", self.fact_checking),
            ("Bias Assessment", self.bias_assessment),
        ]
    }
}

/// Overall score and the components behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CredibilityResult {
    pub overall_score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Content quality from text metrics, 0-100.
///
/// Starts at 50. Complex writing and longer articles gain points,
/// clickbait headlines and very short texts lose them.
pub fn evaluate_content(text: &TextAnalysis) -> f64 {
    let mut score = CONTENT_BASE;

    if text.complexity_score > 7.0 {
        score += 10.0;
    } else if text.complexity_score > 5.0 {
        score += 5.0;
    }

    if text.clickbait_score > 0.7 {
        score -= 30.0;
    } else if text.clickbait_score > 0.4 {
        score -= 15.0;
    }

    if text.word_count > 800 {
        score += 15.0;
    } else if text.word_count > 400 {
        score += 10.0;
    } else if text.word_count < 100 {
        score -= 15.0;
    }

    score.clamp(0.0, 100.0)
}

/// Mean verdict score, or 50 when nothing was checked.
pub fn evaluate_fact_checks(results: &[FactCheckResult]) -> f64 {
    if results.is_empty() {
        return NEUTRAL_SCORE;
    }

    let total: f64 = results.iter().map(|r| r.rating_class().score()).sum();
    total / results.len() as f64
}

/// Inverts the 0-10 bias score onto 0-100.
pub fn bias_assessment(sentiment: &SentimentAnalysis) -> f64 {
    (100.0 - sentiment.bias_score * 10.0).clamp(0.0, 100.0)
}

/// Combines the components with `weights`.
///
/// The overall score rounds half to even and is clamped to 0-100.
pub fn combine_scores(
    source: f64, text: &TextAnalysis, sentiment: &SentimentAnalysis, facts: &[FactCheckResult], weights: &ScoreWeights,
) -> CredibilityResult {
    let breakdown = ScoreBreakdown {
        source_credibility: source.clamp(0.0, 100.0),
        content_analysis: evaluate_content(text),
        fact_checking: evaluate_fact_checks(facts),
        bias_assessment: bias_assessment(sentiment),
    };

    let weighted = breakdown.source_credibility * weights.source
        + breakdown.content_analysis * weights.content
        + breakdown.fact_checking * weights.fact_check
        + breakdown.bias_assessment * weights.bias;

    CredibilityResult { overall_score: weighted.round_ties_even().clamp(0.0, 100.0) as u8, breakdown }
}

/// Scores a document, looking up the source when a URL is known.
pub struct CredibilityScorer {
    evaluator: SourceEvaluator,
    weights: ScoreWeights,
}

impl CredibilityScorer {
    pub fn new(evaluator: SourceEvaluator) -> Self {
        Self { evaluator, weights: ScoreWeights::default() }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn evaluator(&self) -> &SourceEvaluator {
        &self.evaluator
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub async fn calculate_credibility_score(
        &self, text: &TextAnalysis, sentiment: &SentimentAnalysis, facts: &[FactCheckResult], url: Option<&str>,
    ) -> CredibilityResult {
        let source = match url {
            Some(url) => self.evaluator.evaluate_source_credibility(url).await,
            None => NEUTRAL_SCORE,
        };

        let result = combine_scores(source, text, sentiment, facts, &self.weights);
        tracing::debug!(overall = result.overall_score, breakdown = ?result.breakdown, "credibility scored");
        result
    }
}

impl Default for CredibilityScorer {
    fn default() -> Self {
        Self::new(SourceEvaluator::default())
    }
}
