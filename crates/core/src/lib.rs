pub mod analyzer;
pub mod claims;
pub mod error;
pub mod factcheck;
pub mod fetch;
pub mod lexicon;
pub mod metadata;
pub mod parse;
pub mod rating;
pub mod score;
pub mod sentiment;
pub mod source;
pub mod text;
pub mod tokenize;

pub use analyzer::{AnalysisReport, Analyzer, AnalyzerBuilder};
pub use claims::{MAX_CLAIMS, extract_claims};
pub use error::{CredenceError, Result};
#[cfg(feature = "fetch")]
pub use factcheck::{GoogleFactCheckClient, NewsApiClient};
pub use factcheck::{
    AlternativeSource, ClaimReview, FactCheckConfig, FactCheckConfigBuilder, FactCheckReport, FactCheckResult,
    FactCheckService, FactChecker, NewsArticle, NewsSearchService, Simulator,
};
#[cfg(feature = "fetch")]
pub use fetch::{HttpContentFetcher, HttpMetadataFetcher, fetch_url};
pub use fetch::{ContentFetcher, FetchConfig, extract_text, fetch_file, fetch_stdin};
pub use metadata::ArticleMetadata;
pub use parse::Document;
pub use rating::Rating;
pub use score::{
    CredibilityResult, CredibilityScorer, ScoreBreakdown, ScoreWeights, bias_assessment, combine_scores,
    evaluate_content, evaluate_fact_checks,
};
pub use sentiment::{
    BiasIndicators, Emotion, EmotionDistribution, PolarityScores, SentimentAnalysis, analyze_news_emotions,
    analyze_sentiment, calculate_bias_score, detect_bias_indicators, polarity_scores,
};
pub use source::{
    MetadataFetcher, ReputationTier, SourceCategory, SourceEvaluator, UnreliableSourceStore, extract_domain,
};
pub use text::{TextAnalysis, analyze_text, extract_keywords};
