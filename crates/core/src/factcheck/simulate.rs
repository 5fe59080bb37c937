//! Placeholder fact checks and alternative sources.
//!
//! Used when no live service is configured or every call failed. Results
//! carry `url = "#"` and the report sets `fallback_used`, so callers can tell
//! them apart from real verdicts.

use chrono::{Days, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{AlternativeSource, FactCheckResult, PUBLISHED_FORMAT};
use crate::rating::Rating;

const FACT_CHECKERS: &[&str] =
    &["FactCheck.org", "PolitiFact", "Snopes", "Reuters Fact Check", "AP Fact Check", "USA Today Fact Check"];

const REPUTABLE_OUTLETS: &[&str] = &[
    "Reuters",
    "Associated Press",
    "NPR",
    "BBC News",
    "The Wall Street Journal",
    "The New York Times",
    "The Washington Post",
    "The Economist",
    "Time Magazine",
    "The Atlantic",
];

const TITLE_TEMPLATES: &[&str] = &[
    "Analysis: Understanding the facts about {}",
    "Fact Check: What's true and false about {}",
    "Explainer: The complete context on {}",
    "In Depth: Examining the evidence on {}",
];

const MAX_AGE_DAYS: u64 = 14;

/// Generates simulated results from an injectable random source.
#[derive(Debug)]
pub struct Simulator {
    rng: Mutex<StdRng>,
}

impl Simulator {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self { rng: Mutex::new(StdRng::from_os_rng()) }
    }

    /// Deterministic output for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// One random verdict per claim.
    pub fn fact_checks(&self, claims: &[String]) -> Vec<FactCheckResult> {
        let mut rng = self.rng.lock();

        claims
            .iter()
            .map(|claim| {
                let rating = Rating::SIMULATED[rng.random_range(0..Rating::SIMULATED.len())];
                let source = FACT_CHECKERS[rng.random_range(0..FACT_CHECKERS.len())];

                FactCheckResult {
                    claim: claim.clone(),
                    claimant: "Source in article".to_string(),
                    rating: rating.label().to_string(),
                    source: source.to_string(),
                    url: "#".to_string(),
                    explanation: explanation(rating).to_string(),
                }
            })
            .collect()
    }

    /// One suggestion for each of the first `count` keywords, dated within
    /// the last two weeks.
    pub fn alternative_sources(&self, keywords: &[String], count: usize) -> Vec<AlternativeSource> {
        let mut rng = self.rng.lock();
        let today = Utc::now().date_naive();

        keywords
            .iter()
            .take(count)
            .map(|keyword| {
                let outlet = REPUTABLE_OUTLETS[rng.random_range(0..REPUTABLE_OUTLETS.len())];
                let template = TITLE_TEMPLATES[rng.random_range(0..TITLE_TEMPLATES.len())];
                let age = rng.random_range(0..=MAX_AGE_DAYS);
                let date = today.checked_sub_days(Days::new(age)).unwrap_or(today);

                AlternativeSource {
                    title: template.replace("{}", keyword),
                    url: "#".to_string(),
                    source: outlet.to_string(),
                    published: date.format(PUBLISHED_FORMAT).to_string(),
                }
            })
            .collect()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

fn explanation(rating: Rating) -> &'static str {
    match rating {
        Rating::True | Rating::MostlyTrue => {
            "Our research confirms this claim. Multiple sources corroborate the information."
        }
        Rating::HalfTrue | Rating::Unverified => {
            "This claim contains some accurate elements but is missing important context or has unverified aspects."
        }
        Rating::MostlyFalse | Rating::False => {
            "This claim contains significant factual errors or misrepresentations based on our research."
        }
        _ => "This claim requires additional context to be properly evaluated.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn claims(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Claim number {i} about the budget.")).collect()
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let a = Simulator::with_seed(42).fact_checks(&claims(3));
        let b = Simulator::with_seed(42).fact_checks(&claims(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fact_checks_shape() {
        let results = Simulator::with_seed(1).fact_checks(&claims(2));

        assert_eq!(results.len(), 2);
        for (result, claim) in results.iter().zip(claims(2)) {
            assert_eq!(result.claim, claim);
            assert_eq!(result.claimant, "Source in article");
            assert_eq!(result.url, "#");
            assert!(FACT_CHECKERS.contains(&result.source.as_str()));
            assert!(Rating::SIMULATED.contains(&result.rating_class()));
            assert_eq!(result.explanation, explanation(result.rating_class()));
        }
    }

    #[test]
    fn test_explanations_follow_rating() {
        assert!(explanation(Rating::MostlyTrue).starts_with("Our research confirms"));
        assert!(explanation(Rating::Unverified).contains("unverified aspects"));
        assert!(explanation(Rating::False).contains("significant factual errors"));
        assert!(explanation(Rating::Misleading).contains("additional context"));
        assert!(explanation(Rating::LacksContext).contains("additional context"));
    }

    #[test]
    fn test_alternative_sources_shape() {
        let keywords: Vec<String> = ["budget", "council", "vote", "city"].iter().map(|s| s.to_string()).collect();
        let sources = Simulator::with_seed(9).alternative_sources(&keywords, 3);
        let today = Utc::now().date_naive();

        assert_eq!(sources.len(), 3);
        for (source, keyword) in sources.iter().zip(&keywords) {
            assert!(source.title.ends_with(keyword.as_str()));
            assert!(REPUTABLE_OUTLETS.contains(&source.source.as_str()));
            assert_eq!(source.url, "#");

            let date = NaiveDate::parse_from_str(&source.published, PUBLISHED_FORMAT).unwrap();
            assert!(date <= today);
            assert!((today - date).num_days() <= 15);
        }
    }

    #[test]
    fn test_fewer_keywords_than_count() {
        let keywords = vec!["budget".to_string()];
        assert_eq!(Simulator::with_seed(3).alternative_sources(&keywords, 3).len(), 1);
    }
}
