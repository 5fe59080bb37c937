use std::fmt::Write;

use credence_core::AnalysisReport;
use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!("\n{} {} {}", "Credence".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "Estimate the credibility of news articles\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print the overall score, colored by band
pub fn print_score(score: u8) {
    let label = format!("{}/100 ({})", score, verdict(score));
    match score {
        70.. => eprintln!("  {} {}", "Credibility:".dimmed(), label.bright_green()),
        40..=69 => eprintln!("  {} {}", "Credibility:".dimmed(), label.bright_yellow()),
        _ => eprintln!("  {} {}", "Credibility:".dimmed(), label.bright_red()),
    }
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

pub fn verdict(score: u8) -> &'static str {
    match score {
        80.. => "high",
        60..=79 => "moderate",
        40..=59 => "low",
        _ => "very low",
    }
}

/// Plain-text report, suitable for a terminal or a file.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    let score = report.credibility.overall_score;
    let _ = writeln!(out, "Credibility Score: {}/100 ({})", score, verdict(score));
    if let Some(url) = &report.source_url {
        let _ = writeln!(out, "Source: {}", url);
    }

    let _ = writeln!(out, "\n{rule}\nBreakdown\n{rule}");
    for (name, value) in report.credibility.breakdown.components() {
        let _ = writeln!(out, "  {:<20}{:>6.1}", format!("{}:", name), value);
    }

    let text = &report.text;
    let _ = writeln!(out, "\n{rule}\nText Analysis\n{rule}");
    let _ = writeln!(out, "  Words:              {}", text.word_count);
    let _ = writeln!(out, "  Sentences:          {}", text.sentence_count);
    let _ = writeln!(out, "  Avg sentence:       {:.1} words", text.avg_sentence_length);
    let _ = writeln!(out, "  Complexity:         {:.1}/10", text.complexity_score);
    let _ = writeln!(out, "  Clickbait:          {:.2}", text.clickbait_score);
    let _ = writeln!(out, "  Topics:             {}", text.topics.join(", "));

    let sentiment = &report.sentiment;
    let _ = writeln!(out, "\n{rule}\nSentiment & Bias\n{rule}");
    let _ = writeln!(out, "  Compound:           {:+.2}", sentiment.compound_score);
    let _ = writeln!(
        out,
        "  Bias score:         {:.2}/10{}",
        sentiment.bias_score,
        if sentiment.is_biased { " (biased)" } else { "" }
    );
    for (label, words) in [
        ("Emotional words", &sentiment.emotional_words),
        ("Persuasive words", &sentiment.persuasive_words),
        ("Loaded language", &sentiment.loaded_language),
        ("Weasel words", &sentiment.weasel_words),
    ] {
        if !words.is_empty() {
            let _ = writeln!(out, "  {:<20}{}", format!("{}:", label), words.join(", "));
        }
    }
    let emotions = sentiment
        .emotion_categories
        .iter()
        .map(|(emotion, share)| format!("{} {:.0}%", emotion.as_str(), share * 100.0))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "  Emotions:           {}", emotions);

    let facts = &report.fact_checks;
    let heading = if facts.fallback_used { "Fact Checks (simulated)" } else { "Fact Checks" };
    let _ = writeln!(out, "\n{rule}\n{heading}\n{rule}");
    if facts.claims.is_empty() {
        let _ = writeln!(out, "  No checkable claims found.");
    }
    for result in &facts.claims {
        let _ = writeln!(out, "  [{}] {}", result.rating, result.claim);
        let _ = writeln!(out, "      {} - {}", result.source, result.explanation);
    }

    if !facts.alternative_sources.is_empty() {
        let _ = writeln!(out, "\n{rule}\nAlternative Sources\n{rule}");
        for source in &facts.alternative_sources {
            let _ = writeln!(out, "  {} ({}, {})", source.title, source.source, source.published);
            if source.url != "#" {
                let _ = writeln!(out, "      {}", source.url);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_bands() {
        assert_eq!(verdict(95), "high");
        assert_eq!(verdict(80), "high");
        assert_eq!(verdict(79), "moderate");
        assert_eq!(verdict(45), "low");
        assert_eq!(verdict(12), "very low");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
