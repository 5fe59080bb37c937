//! Source reputation scoring.
//!
//! A domain is scored from three inputs, in order:
//!
//! 1. The unreliable-source dataset. A hit here is authoritative.
//! 2. Static reputation tiers for well known outlets.
//! 3. A small bonus when the page names its author and publication date.
//!
//! # Example
//!
//! ```rust
//! use credence_core::source::{SourceEvaluator, UnreliableSourceStore};
//!
//! let evaluator = SourceEvaluator::new(UnreliableSourceStore::from_rows([("hoax.example", "fake")]));
//! assert_eq!(evaluator.check_source_reliability("apnews.com"), 90.0);
//! assert_eq!(evaluator.check_source_reliability("hoax.example"), 0.0);
//! ```

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::{ArticleMetadata, CredenceError, Result};

/// Score for domains without any reputation information.
pub const NEUTRAL_SCORE: f64 = 50.0;

const AUTHOR_BONUS: f64 = 5.0;
const DATE_BONUS: f64 = 5.0;

const DATASET_FILE: &str = "unreliable_sources.csv";

const HIGHLY_RELIABLE: &[&str] = &[
    "reuters.com",
    "apnews.com",
    "npr.org",
    "bbc.com",
    "bbc.co.uk",
    "economist.com",
    "wsj.com",
    "nytimes.com",
    "washingtonpost.com",
    "time.com",
    "theatlantic.com",
    "nature.com",
    "science.org",
    "scientificamerican.com",
    "nationalgeographic.com",
    "newyorker.com",
    "ft.com",
    "theguardian.com",
    "independent.co.uk",
    "pbs.org",
    "cspan.org",
    "france24.com",
    "dw.com",
];

const GENERALLY_RELIABLE: &[&str] = &[
    "cnn.com",
    "nbcnews.com",
    "abcnews.go.com",
    "cbsnews.com",
    "usatoday.com",
    "latimes.com",
    "chicagotribune.com",
    "politico.com",
    "thehill.com",
    "bloomberg.com",
    "businessinsider.com",
    "forbes.com",
    "fortune.com",
    "vox.com",
    "slate.com",
    "axios.com",
    "fivethirtyeight.com",
    "propublica.org",
    "aljazeera.com",
    "msnbc.com",
    "foxnews.com",
    "cnbc.com",
    "nymag.com",
    "thedailybeast.com",
    "buzzfeednews.com",
    "motherjones.com",
];

const MIXED_RELIABILITY: &[&str] = &[
    "medium.com",
    "huffpost.com",
    "vice.com",
    "salon.com",
    "newsweek.com",
    "dailymail.co.uk",
    "nypost.com",
    "washingtontimes.com",
    "reason.com",
    "spectator.co.uk",
    "theintercept.com",
    "nationalreview.com",
];

/// Reputation tier of a domain absent from the unreliable-source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReputationTier {
    HighlyReliable,
    GenerallyReliable,
    MixedReliability,
    Unknown,
}

impl ReputationTier {
    pub fn of(domain: &str) -> Self {
        if HIGHLY_RELIABLE.contains(&domain) {
            ReputationTier::HighlyReliable
        } else if GENERALLY_RELIABLE.contains(&domain) {
            ReputationTier::GenerallyReliable
        } else if MIXED_RELIABILITY.contains(&domain) {
            ReputationTier::MixedReliability
        } else {
            ReputationTier::Unknown
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            ReputationTier::HighlyReliable => 90.0,
            ReputationTier::GenerallyReliable => 80.0,
            ReputationTier::MixedReliability => 60.0,
            ReputationTier::Unknown => NEUTRAL_SCORE,
        }
    }
}

/// Category assigned to a domain by the unreliable-source dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceCategory {
    Fake,
    Hate,
    Conspiracy,
    Satire,
    Questionable,
    JunkSci,
    Political,
    Other(String),
}

impl SourceCategory {
    /// Case-insensitive parse; unrecognized labels are kept as [`SourceCategory::Other`].
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "fake" => SourceCategory::Fake,
            "hate" => SourceCategory::Hate,
            "conspiracy" => SourceCategory::Conspiracy,
            "satire" => SourceCategory::Satire,
            "questionable" => SourceCategory::Questionable,
            "junksci" => SourceCategory::JunkSci,
            "political" => SourceCategory::Political,
            other => SourceCategory::Other(other.to_string()),
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            SourceCategory::Fake | SourceCategory::Hate => 0.0,
            SourceCategory::Conspiracy => 5.0,
            SourceCategory::Satire => 10.0,
            SourceCategory::Questionable | SourceCategory::JunkSci => 20.0,
            SourceCategory::Political => 30.0,
            SourceCategory::Other(_) => 25.0,
        }
    }
}

/// Reads article metadata for a URL. Implementations never fail; on any
/// problem they return [`ArticleMetadata::default`].
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn get_metadata(&self, url: &str) -> ArticleMetadata;
}

/// Lazily loaded domain → category table of unreliable sources.
///
/// The table is read at most once per store, on first lookup. Concurrent
/// first lookups block on the same load.
#[derive(Debug, Default)]
pub struct UnreliableSourceStore {
    path: Option<PathBuf>,
    cache: OnceLock<HashMap<String, SourceCategory>>,
}

impl UnreliableSourceStore {
    /// A store that reads the CSV at `path` on first use.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()), cache: OnceLock::new() }
    }

    /// A store backed by the default dataset location, or an empty store
    /// when no dataset file exists.
    pub fn from_default_location() -> Self {
        match Self::default_path() {
            Some(path) => Self::from_path(path),
            None => Self::empty(),
        }
    }

    /// A store with no entries.
    pub fn empty() -> Self {
        Self::from_rows(std::iter::empty::<(&str, &str)>())
    }

    /// A preloaded store, mostly useful in tests.
    pub fn from_rows<I, D, C>(rows: I) -> Self
    where
        I: IntoIterator<Item = (D, C)>,
        D: AsRef<str>,
        C: AsRef<str>,
    {
        let table: HashMap<String, SourceCategory> = rows
            .into_iter()
            .map(|(domain, category)| (domain.as_ref().trim().to_lowercase(), SourceCategory::parse(category.as_ref())))
            .collect();
        Self { path: None, cache: OnceLock::from(table) }
    }

    /// First existing of `./data/unreliable_sources.csv` and
    /// `<config dir>/credence/unreliable_sources.csv`.
    pub fn default_path() -> Option<PathBuf> {
        let local = PathBuf::from("data").join(DATASET_FILE);
        let user = dirs::config_dir().map(|dir| dir.join("credence").join(DATASET_FILE));

        std::iter::once(local).chain(user).find(|p| p.is_file())
    }

    pub fn lookup(&self, domain: &str) -> Option<&SourceCategory> {
        self.table().get(domain)
    }

    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    fn table(&self) -> &HashMap<String, SourceCategory> {
        self.cache.get_or_init(|| match &self.path {
            Some(path) => load_table(path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "unreliable source dataset unreadable");
                HashMap::new()
            }),
            None => HashMap::new(),
        })
    }
}

/// Loads a `domain,category` CSV. The first row is a header. A missing file
/// is an empty dataset.
fn load_table(path: &Path) -> Result<HashMap<String, SourceCategory>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no unreliable source dataset");
        return Ok(HashMap::new());
    }

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| CredenceError::Dataset(e.to_string()))?;
    let table = parse_dataset(reader);
    tracing::debug!(path = %path.display(), entries = table.len(), "loaded unreliable source dataset");
    Ok(table)
}

/// Rows with fewer than two fields, an empty domain, or bad encoding are
/// skipped; the rest of the file still loads.
fn parse_dataset<R: io::Read>(mut reader: csv::Reader<R>) -> HashMap<String, SourceCategory> {
    let mut table = HashMap::new();

    for (index, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(row = index + 2, error = %e, "skipping unreadable dataset row");
                continue;
            }
        };

        let (Some(domain), Some(category)) = (record.get(0), record.get(1)) else {
            tracing::debug!(row = index + 2, "skipping dataset row without a category");
            continue;
        };

        if domain.is_empty() {
            continue;
        }

        table.insert(domain.to_lowercase(), SourceCategory::parse(category));
    }

    table
}

/// Host of a URL, lowercased and without a leading `www.`.
///
/// # Errors
///
/// Returns [`CredenceError::InvalidUrl`] when the URL does not parse or has
/// no host.
pub fn extract_domain(url: &str) -> Result<String> {
    let parsed = Url::parse(url.trim()).map_err(|e| CredenceError::InvalidUrl(e.to_string()))?;
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| CredenceError::InvalidUrl(format!("no host in {url}")))?
        .to_lowercase();

    Ok(host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
}

/// Scores the credibility of the site an article comes from.
pub struct SourceEvaluator {
    store: Arc<UnreliableSourceStore>,
    metadata_fetcher: Option<Arc<dyn MetadataFetcher>>,
}

impl SourceEvaluator {
    pub fn new(store: UnreliableSourceStore) -> Self {
        Self::with_shared_store(Arc::new(store))
    }

    pub fn with_shared_store(store: Arc<UnreliableSourceStore>) -> Self {
        Self { store, metadata_fetcher: None }
    }

    /// Enables the author/date bonus.
    pub fn with_metadata_fetcher(mut self, fetcher: Arc<dyn MetadataFetcher>) -> Self {
        self.metadata_fetcher = Some(fetcher);
        self
    }

    pub fn store(&self) -> &UnreliableSourceStore {
        &self.store
    }

    /// Credibility of the source behind `url`, 0-100.
    ///
    /// Malformed URLs score the neutral 50.
    pub async fn evaluate_source_credibility(&self, url: &str) -> f64 {
        let domain = match extract_domain(url) {
            Ok(domain) => domain,
            Err(e) => {
                tracing::debug!(url, error = %e, "cannot score source");
                return NEUTRAL_SCORE;
            }
        };

        let base = self.check_source_reliability(&domain);
        let adjustment = self.metadata_adjustment(url).await;
        tracing::debug!(domain = %domain, base, adjustment, "source scored");

        (base + adjustment).clamp(0.0, 100.0)
    }

    /// Reputation of a bare domain, without metadata bonus.
    pub fn check_source_reliability(&self, domain: &str) -> f64 {
        if let Some(category) = self.store.lookup(domain) {
            return category.score();
        }

        ReputationTier::of(domain).score()
    }

    async fn metadata_adjustment(&self, url: &str) -> f64 {
        let Some(fetcher) = &self.metadata_fetcher else {
            return 0.0;
        };

        metadata_bonus(&fetcher.get_metadata(url).await)
    }
}

impl Default for SourceEvaluator {
    fn default() -> Self {
        Self::new(UnreliableSourceStore::empty())
    }
}

/// +5 for a named author longer than three characters, +5 for a date.
pub fn metadata_bonus(metadata: &ArticleMetadata) -> f64 {
    let mut bonus = 0.0;
    if metadata.has_author() {
        bonus += AUTHOR_BONUS;
    }
    if metadata.has_date() {
        bonus += DATE_BONUS;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    struct FixedMetadata(ArticleMetadata);

    #[async_trait]
    impl MetadataFetcher for FixedMetadata {
        async fn get_metadata(&self, _url: &str) -> ArticleMetadata {
            self.0.clone()
        }
    }

    fn write_dataset(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[rstest]
    #[case("https://www.apnews.com/article/1", "apnews.com")]
    #[case("http://News.Example.COM/path?q=1", "news.example.com")]
    #[case("https://www2.example.org", "www2.example.org")]
    fn test_extract_domain(#[case] url: &str, #[case] domain: &str) {
        assert_eq!(extract_domain(url).unwrap(), domain);
    }

    #[rstest]
    #[case("not a url")]
    #[case("apnews.com/article")]
    #[case("mailto:editor@example.com")]
    fn test_extract_domain_malformed(#[case] url: &str) {
        assert!(matches!(extract_domain(url), Err(CredenceError::InvalidUrl(_))));
    }

    #[rstest]
    #[case("apnews.com", 90.0)]
    #[case("bbc.co.uk", 90.0)]
    #[case("politico.com", 80.0)]
    #[case("foxnews.com", 80.0)]
    #[case("medium.com", 60.0)]
    #[case("blog.example.net", 50.0)]
    fn test_static_tiers(#[case] domain: &str, #[case] score: f64) {
        assert_eq!(SourceEvaluator::default().check_source_reliability(domain), score);
    }

    #[rstest]
    #[case("fake", 0.0)]
    #[case("HATE", 0.0)]
    #[case("conspiracy", 5.0)]
    #[case("satire", 10.0)]
    #[case("questionable", 20.0)]
    #[case("junksci", 20.0)]
    #[case("political", 30.0)]
    #[case("clickbait", 25.0)]
    fn test_category_scores(#[case] label: &str, #[case] score: f64) {
        assert_eq!(SourceCategory::parse(label).score(), score);
    }

    #[test]
    fn test_dataset_is_authoritative() {
        let store = UnreliableSourceStore::from_rows([("medium.com", "satire")]);
        let evaluator = SourceEvaluator::new(store);
        assert_eq!(evaluator.check_source_reliability("medium.com"), 10.0);
    }

    #[test]
    fn test_store_loads_csv() {
        let file = write_dataset("domain,category\nHoax.Example,fake\n\nsatire.example, Satire\n");
        let store = UnreliableSourceStore::from_path(file.path());

        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("hoax.example"), Some(&SourceCategory::Fake));
        assert_eq!(store.lookup("satire.example"), Some(&SourceCategory::Satire));
    }

    #[test]
    fn test_store_loads_once() {
        let file = write_dataset("domain,category\nhoax.example,fake\n");
        let store = UnreliableSourceStore::from_path(file.path());
        assert_eq!(store.len(), 1);

        std::fs::write(file.path(), "domain,category\nhoax.example,fake\nother.example,hate\n").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_dataset_is_empty() {
        let store = UnreliableSourceStore::from_path("/nonexistent/unreliable_sources.csv");
        assert!(store.is_empty());
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let file = write_dataset("domain,category\nhoax.example,fake\njust-a-domain\nconspire.example,conspiracy\n");
        let evaluator = SourceEvaluator::new(UnreliableSourceStore::from_path(file.path()));

        assert_eq!(evaluator.store().len(), 2);
        assert_eq!(evaluator.check_source_reliability("hoax.example"), 0.0);
        assert_eq!(evaluator.check_source_reliability("conspire.example"), 5.0);
    }

    #[test]
    fn test_quoted_fields_and_extra_columns() {
        let file = write_dataset(
            "domain,category,notes\n\"apnews.com\",\"fake\",\"a, b\"\n\"satire.example\", satire\n",
        );
        let store = UnreliableSourceStore::from_path(file.path());

        assert_eq!(store.lookup("apnews.com"), Some(&SourceCategory::Fake));
        assert_eq!(store.lookup("satire.example"), Some(&SourceCategory::Satire));
    }

    #[test]
    fn test_concurrent_first_access() {
        let file = write_dataset("domain,category\nhoax.example,fake\n");
        let store = Arc::new(UnreliableSourceStore::from_path(file.path()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.lookup("hoax.example").cloned())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(SourceCategory::Fake));
        }
    }

    #[tokio::test]
    async fn test_malformed_url_is_neutral() {
        let evaluator = SourceEvaluator::default();
        assert_eq!(evaluator.evaluate_source_credibility("::not a url::").await, 50.0);
    }

    #[tokio::test]
    async fn test_metadata_bonus_applied() {
        let metadata = ArticleMetadata {
            author: "Jane Smith".to_string(),
            date: "2024-01-15".to_string(),
            ..Default::default()
        };
        let evaluator = SourceEvaluator::default().with_metadata_fetcher(Arc::new(FixedMetadata(metadata)));

        assert_eq!(evaluator.evaluate_source_credibility("https://apnews.com/a").await, 100.0);
        assert_eq!(evaluator.evaluate_source_credibility("https://unknown.example/a").await, 60.0);
    }

    #[tokio::test]
    async fn test_short_author_gets_no_bonus() {
        let metadata = ArticleMetadata { author: "AP".to_string(), ..Default::default() };
        let evaluator = SourceEvaluator::default().with_metadata_fetcher(Arc::new(FixedMetadata(metadata)));

        assert_eq!(evaluator.evaluate_source_credibility("https://politico.com/x").await, 80.0);
    }

    #[tokio::test]
    async fn test_scoring_is_deterministic() {
        let evaluator = SourceEvaluator::new(UnreliableSourceStore::from_rows([("hoax.example", "fake")]));
        for _ in 0..3 {
            assert_eq!(evaluator.evaluate_source_credibility("https://www.hoax.example/story").await, 0.0);
        }
    }
}
