//! End-to-end analysis pipeline.
//!
//! [`Analyzer`] runs text metrics, sentiment, keyword extraction, fact
//! checking and credibility scoring over one document and returns an
//! [`AnalysisReport`].
//!
//! # Example
//!
//! ```rust
//! use credence_core::Analyzer;
//!
//! let analyzer = Analyzer::builder().seed(7).build();
//! let report = tokio::runtime::Runtime::new().unwrap().block_on(analyzer.analyze("", None));
//! assert_eq!(report.text.word_count, 0);
//! assert!(report.fact_checks.claims.is_empty());
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::factcheck::{FactCheckConfig, FactCheckReport, FactCheckService, FactChecker, NewsSearchService, Simulator};
use crate::fetch::ContentFetcher;
use crate::score::{CredibilityResult, CredibilityScorer, ScoreWeights};
use crate::sentiment::{SentimentAnalysis, analyze_sentiment};
use crate::source::{MetadataFetcher, SourceEvaluator, UnreliableSourceStore};
use crate::text::{DEFAULT_KEYWORD_LIMIT, TextAnalysis, analyze_text, extract_keywords};
use crate::{CredenceError, Result};

/// The complete output of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub text: TextAnalysis,
    pub sentiment: SentimentAnalysis,
    pub keywords: Vec<String>,
    pub fact_checks: FactCheckReport,
    pub credibility: CredibilityResult,
    pub source_url: Option<String>,
}

/// Runs the full credibility analysis for one document at a time.
pub struct Analyzer {
    fact_checker: FactChecker,
    scorer: CredibilityScorer,
    content_fetcher: Option<Arc<dyn ContentFetcher>>,
    keyword_limit: usize,
}

impl Analyzer {
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn new() -> Self {
        AnalyzerBuilder::new().build()
    }

    /// Analyzes `text`. The source URL, when known, feeds the source
    /// reputation score.
    pub async fn analyze(&self, text: &str, url: Option<&str>) -> AnalysisReport {
        let text_analysis = analyze_text(text);
        let sentiment = analyze_sentiment(text);
        let keywords = extract_keywords(text, self.keyword_limit);
        tracing::debug!(
            words = text_analysis.word_count,
            bias = sentiment.bias_score,
            keywords = keywords.len(),
            "text analyzed"
        );

        let fact_checks = self.fact_checker.check_facts(text, &keywords).await;
        let credibility = self
            .scorer
            .calculate_credibility_score(&text_analysis, &sentiment, &fact_checks.claims, url)
            .await;

        AnalysisReport {
            text: text_analysis,
            sentiment,
            keywords,
            fact_checks,
            credibility,
            source_url: url.map(str::to_string),
        }
    }

    /// Fetches the article at `url` and analyzes it.
    ///
    /// # Errors
    ///
    /// Fails only when the page cannot be fetched, or when no content
    /// fetcher is configured.
    pub async fn analyze_url(&self, url: &str) -> Result<AnalysisReport> {
        let fetcher = self
            .content_fetcher
            .as_ref()
            .ok_or_else(|| CredenceError::InvalidUrl(format!("no content fetcher configured for {url}")))?;

        let text = fetcher.fetch(url).await?;
        Ok(self.analyze(&text, Some(url)).await)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for Analyzer.
///
/// Services left unset fall back to simulated fact checks and sources. With
/// the `fetch` feature, the content fetcher defaults to
/// [`HttpContentFetcher`](crate::fetch::HttpContentFetcher).
#[derive(Default)]
pub struct AnalyzerBuilder {
    fact_check_service: Option<Arc<dyn FactCheckService>>,
    news_search_service: Option<Arc<dyn NewsSearchService>>,
    metadata_fetcher: Option<Arc<dyn MetadataFetcher>>,
    content_fetcher: Option<Arc<dyn ContentFetcher>>,
    dataset: Option<UnreliableSourceStore>,
    simulator: Option<Arc<Simulator>>,
    fact_check_config: FactCheckConfig,
    weights: ScoreWeights,
    keyword_limit: Option<usize>,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fact_check_service(mut self, service: Arc<dyn FactCheckService>) -> Self {
        self.fact_check_service = Some(service);
        self
    }

    pub fn news_search_service(mut self, service: Arc<dyn NewsSearchService>) -> Self {
        self.news_search_service = Some(service);
        self
    }

    pub fn metadata_fetcher(mut self, fetcher: Arc<dyn MetadataFetcher>) -> Self {
        self.metadata_fetcher = Some(fetcher);
        self
    }

    pub fn content_fetcher(mut self, fetcher: Arc<dyn ContentFetcher>) -> Self {
        self.content_fetcher = Some(fetcher);
        self
    }

    /// Unreliable-source dataset. Defaults to an empty dataset.
    pub fn dataset(mut self, store: UnreliableSourceStore) -> Self {
        self.dataset = Some(store);
        self
    }

    pub fn simulator(mut self, simulator: Arc<Simulator>) -> Self {
        self.simulator = Some(simulator);
        self
    }

    /// Shorthand for a simulator seeded with `seed`.
    pub fn seed(self, seed: u64) -> Self {
        self.simulator(Arc::new(Simulator::with_seed(seed)))
    }

    pub fn fact_check_config(mut self, config: FactCheckConfig) -> Self {
        self.fact_check_config = config;
        self
    }

    pub fn weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn keyword_limit(mut self, limit: usize) -> Self {
        self.keyword_limit = Some(limit);
        self
    }

    pub fn build(self) -> Analyzer {
        let mut fact_checker = FactChecker::new(self.fact_check_config);
        if let Some(service) = self.fact_check_service {
            fact_checker = fact_checker.with_fact_check_service(service);
        }
        if let Some(service) = self.news_search_service {
            fact_checker = fact_checker.with_news_service(service);
        }
        if let Some(simulator) = self.simulator {
            fact_checker = fact_checker.with_simulator(simulator);
        }

        let mut evaluator = SourceEvaluator::new(self.dataset.unwrap_or_else(UnreliableSourceStore::empty));
        if let Some(fetcher) = self.metadata_fetcher {
            evaluator = evaluator.with_metadata_fetcher(fetcher);
        }

        Analyzer {
            fact_checker,
            scorer: CredibilityScorer::new(evaluator).with_weights(self.weights),
            content_fetcher: self.content_fetcher.or_else(default_content_fetcher),
            keyword_limit: self.keyword_limit.unwrap_or(DEFAULT_KEYWORD_LIMIT),
        }
    }
}

#[cfg(feature = "fetch")]
fn default_content_fetcher() -> Option<Arc<dyn ContentFetcher>> {
    Some(Arc::new(crate::fetch::HttpContentFetcher::default()))
}

#[cfg(not(feature = "fetch"))]
fn default_content_fetcher() -> Option<Arc<dyn ContentFetcher>> {
    None
}
