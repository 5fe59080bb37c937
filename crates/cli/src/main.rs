use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use credence_core::{
    Analyzer, FetchConfig, GoogleFactCheckClient, HttpContentFetcher, HttpMetadataFetcher, NewsApiClient,
    UnreliableSourceStore, extract_text, fetch_file, fetch_stdin,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Estimate the credibility of a news article
#[derive(Parser, Debug)]
#[command(name = "credence")]
#[command(author = "Credence Contributors")]
#[command(version)]
#[command(about = "Estimate the credibility of news articles", long_about = None)]
struct Args {
    /// URL to fetch, local text/HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Source URL of the article when INPUT is a file or stdin
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Unreliable-source dataset (CSV with domain,category columns)
    #[arg(long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// Google Fact Check Tools API key
    #[arg(long, env = "FACT_CHECK_API_KEY", value_name = "KEY", hide_env_values = true)]
    fact_check_key: Option<String>,

    /// NewsAPI key for alternative sources
    #[arg(long, env = "NEWS_API_KEY", value_name = "KEY", hide_env_values = true)]
    news_api_key: Option<String>,

    /// Seed for simulated fact checks and sources
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "credence_core=debug,credence=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

fn is_html_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// Plain text of stdin, or of a file; HTML files are reduced to article text.
fn read_local_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let content = fetch_stdin().context("Failed to read from stdin")?;
        return Ok(if content.trim_start().starts_with('<') { extract_text(&content) } else { content });
    }

    let content = fetch_file(input).with_context(|| format!("Failed to read file: {}", input))?;
    Ok(if is_html_file(input) { extract_text(&content) } else { content })
}

/// Page metadata is only fetched when INPUT itself is a URL; `--url` alone never
/// triggers a request.
fn build_analyzer(args: &Args, fetch_config: &FetchConfig) -> anyhow::Result<Analyzer> {
    let dataset = match &args.dataset {
        Some(path) => {
            anyhow::ensure!(path.is_file(), "Dataset not found: {}", path.display());
            UnreliableSourceStore::from_path(path)
        }
        None => UnreliableSourceStore::from_default_location(),
    };

    let mut builder = Analyzer::builder()
        .dataset(dataset)
        .content_fetcher(Arc::new(HttpContentFetcher::new(fetch_config.clone())));

    if is_url(&args.input) {
        builder = builder.metadata_fetcher(Arc::new(HttpMetadataFetcher::new(fetch_config.clone())));
    }

    if let Some(key) = args.fact_check_key.as_deref().filter(|k| !k.is_empty()) {
        let client =
            GoogleFactCheckClient::with_timeout(key, args.timeout).context("Failed to build fact-check client")?;
        builder = builder.fact_check_service(Arc::new(client));
    }

    if let Some(key) = args.news_api_key.as_deref().filter(|k| !k.is_empty()) {
        let client = NewsApiClient::with_timeout(key, args.timeout).context("Failed to build news client")?;
        builder = builder.news_search_service(Arc::new(client));
    }

    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    Ok(builder.build())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
    };
    let analyzer = build_analyzer(&args, &fetch_config)?;
    tracing::debug!(input = %args.input, format = ?args.format, seed = ?args.seed, "analyzer ready");

    if args.verbose {
        if args.fact_check_key.is_none() {
            echo::print_warning("No fact-check API key, fact checks will be simulated");
        }
        if args.news_api_key.is_none() {
            echo::print_warning("No news API key, alternative sources will be simulated");
        }
    }

    let report = if is_url(&args.input) {
        if args.verbose {
            echo::print_step(1, 2, &format!("Fetching and analyzing {}", args.input.bright_white().underline()));
        }
        analyzer.analyze_url(&args.input).await.context("Failed to fetch URL")?
    } else {
        let text = read_local_input(&args.input)?;
        if args.verbose {
            echo::print_step(1, 2, &format!("Analyzing {}", args.input.bright_white()));
            eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(text.len()).bright_white());
        }

        let source_url = args.url.as_deref().map(str::trim).filter(|u| !u.is_empty());
        analyzer.analyze(&text, source_url).await
    };

    if args.verbose {
        echo::print_score(report.credibility.overall_score);
        eprintln!();
        echo::print_step(2, 2, "Writing output");
        eprintln!("  {} {}", "Format:".dimmed(), format!("{:?}", args.format).bright_white());
        eprintln!();
    }

    let output = match args.format {
        OutputFormat::Text => echo::render_text(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report).context("Failed to serialize report")? + "\n",
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
