use std::io::{self, Write};

use chrono::{DateTime, Utc};
use finmedia_signals::{DashboardReport, SentimentLabel};

const BAR_WIDTH: usize = 40;
const CLOUD_LINE_WIDTH: usize = 78;

pub struct DashboardRenderer {
    /// Article rows printed per report; 0 prints all of them
    preview_rows: usize,
}

impl DashboardRenderer {
    pub fn new(preview_rows: usize) -> Self {
        Self { preview_rows }
    }

    pub fn render<W: Write>(&self, report: &DashboardReport, out: &mut W) -> io::Result<()> {
        self.render_at(report, Utc::now(), out)
    }

    fn render_at<W: Write>(&self, report: &DashboardReport, generated: DateTime<Utc>, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", "=".repeat(80))?;
        writeln!(out, "FINANCIAL NEWS SENTIMENT ANALYSIS DASHBOARD")?;
        writeln!(out, "{}", "=".repeat(80))?;
        writeln!(out, "Generated: {}", generated.format("%Y-%m-%d %H:%M:%S UTC"))?;

        self.render_articles(report, out)?;

        if report.is_empty() {
            writeln!(out, "\nNo articles found for {}.", report.media)?;
            return Ok(());
        }

        self.render_distribution(report, out)?;
        self.render_keywords(report, out)?;
        self.render_word_cloud(report, out)?;
        self.render_overall(report, out)?;
        writeln!(out, "{}", "=".repeat(80))
    }

    fn render_articles<W: Write>(&self, report: &DashboardReport, out: &mut W) -> io::Result<()> {
        section(out, &format!("News Articles from {} ({})", report.media, report.article_count))?;

        let shown = match self.preview_rows {
            0 => report.articles.len(),
            n => n.min(report.articles.len()),
        };
        for row in &report.articles[..shown] {
            writeln!(out, "  {:<9} {}", row.label, truncate_text(&row.title, 68))?;
        }
        if shown < report.articles.len() {
            writeln!(out, "  ... {} more", report.articles.len() - shown)?;
        }
        Ok(())
    }

    fn render_distribution<W: Write>(&self, report: &DashboardReport, out: &mut W) -> io::Result<()> {
        section(out, "Sentiment Distribution")?;

        let bars = report.distribution.bars();
        let max = bars.iter().map(|(_, count)| *count).max().unwrap_or(0);
        for (label, count) in bars {
            writeln!(out, "  {:<9} {} {}", label, bar(count, max), count)?;
        }
        if report.distribution.unrecognized > 0 {
            writeln!(out, "  ({} articles with other labels)", report.distribution.unrecognized)?;
        }
        Ok(())
    }

    fn render_keywords<W: Write>(&self, report: &DashboardReport, out: &mut W) -> io::Result<()> {
        section(out, "Top Keywords")?;

        let max = report.top_keywords.first().map(|k| k.count).unwrap_or(0);
        let width = report.top_keywords.iter().map(|k| k.word.chars().count()).max().unwrap_or(0);
        for keyword in &report.top_keywords {
            writeln!(out, "  {:<width$} {} {}", keyword.word, bar(keyword.count, max), keyword.count, width = width)?;
        }
        Ok(())
    }

    fn render_word_cloud<W: Write>(&self, report: &DashboardReport, out: &mut W) -> io::Result<()> {
        section(out, "Word Cloud")?;

        let words: Vec<String> = report
            .word_cloud
            .iter()
            .map(|w| cloud_word(&w.word, w.weight))
            .collect();
        for line in wrap_words(&words, CLOUD_LINE_WIDTH) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn render_overall<W: Write>(&self, report: &DashboardReport, out: &mut W) -> io::Result<()> {
        section(out, "Overall Sentiment Analysis")?;

        match &report.overall {
            Some(overall) => {
                writeln!(out, "  Overall Sentiment Score: {:.2} {}", overall.mean, label_marker(overall.label))?;
                writeln!(out, "  Hypothesis: {}", overall.hypothesis())
            }
            None => writeln!(out, "  Overall Sentiment Score: n/a"),
        }
    }
}

impl Default for DashboardRenderer {
    fn default() -> Self {
        Self::new(finmedia_preprocessing::config::DEFAULT_PREVIEW_ROWS)
    }
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "-".repeat(40))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(40))
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH + max - 1) / max;
    "#".repeat(len)
}

/// Pack words into indented lines no wider than `width` characters
fn wrap_words(words: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::from(" ");
    let mut line_chars = 1;

    for word in words {
        let word_chars = word.chars().count() + 1;
        if line_chars > 1 && line_chars + word_chars > width {
            lines.push(std::mem::replace(&mut line, String::from(" ")));
            line_chars = 1;
        }
        line.push(' ');
        line.push_str(word);
        line_chars += word_chars;
    }
    if line_chars > 1 {
        lines.push(line);
    }
    lines
}

/// Heavier words are shouted; the rest fade to lowercase
fn cloud_word(word: &str, weight: f64) -> String {
    match weight {
        w if w >= 0.66 => word.to_uppercase(),
        w if w >= 0.33 => capitalize(word),
        _ => word.to_lowercase(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn label_marker(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "📈",
        SentimentLabel::Neutral => "➡️",
        SentimentLabel::Negative => "📉",
    }
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finmedia_preprocessing::{ArticleRecord, Dataset};
    use finmedia_signals::{build_report, ReportSettings};

    fn render_to_string(report: &DashboardReport, preview_rows: usize) -> String {
        let renderer = DashboardRenderer::new(preview_rows);
        let mut buffer = Vec::new();
        renderer.render(report, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn create_test_dataset() -> Dataset {
        Dataset::from_records(vec![
            ArticleRecord::new("CNBC", "Stocks rally on earnings", 0.6, "Positive")
                .with_cleaned_text("stocks rally earnings", "strong quarter stocks"),
            ArticleRecord::new("CNBC", "Bonds flat", 0.0, "Neutral").with_cleaned_text("bonds flat", "yields steady"),
            ArticleRecord::new("CNBC", "Futures slip", -0.2, "Negative").with_cleaned_text("futures slip", "stocks lower"),
        ])
    }

    #[test]
    fn test_render_full_report() {
        let report = build_report(&create_test_dataset(), "CNBC", &ReportSettings::default()).unwrap();
        let text = render_to_string(&report, 0);

        assert!(text.contains("News Articles from CNBC (3)"));
        assert!(text.contains("Sentiment Distribution"));
        assert!(text.contains("Top Keywords"));
        assert!(text.contains("Word Cloud"));
        assert!(text.contains("Overall Sentiment Score: 0.13"));
        assert!(text.contains("bullish"));
        assert!(text.contains("STOCKS"));
    }

    #[test]
    fn test_render_empty_report() {
        let report = build_report(&create_test_dataset(), "Reuters", &ReportSettings::default()).unwrap();
        let text = render_to_string(&report, 10);

        assert!(text.contains("No articles found for Reuters."));
        assert!(!text.contains("Overall Sentiment Score"));
    }

    #[test]
    fn test_preview_rows_limit_table() {
        let report = build_report(&create_test_dataset(), "CNBC", &ReportSettings::default()).unwrap();
        let text = render_to_string(&report, 1);

        assert!(text.contains("Stocks rally on earnings"));
        assert!(!text.contains("Futures slip"));
        assert!(text.contains("... 2 more"));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(10, 10).len(), BAR_WIDTH);
        assert_eq!(bar(5, 10).len(), BAR_WIDTH / 2);
        assert_eq!(bar(1, 1000).len(), 1);
    }

    #[test]
    fn test_truncate_text_is_char_safe() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_wrap_words_counts_chars_not_bytes() {
        // 10 chars but 20 bytes each
        let words: Vec<String> = vec!["éééééééééé".to_string(); 6];
        let lines = wrap_words(&words, 78);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].chars().count(), 67);
    }

    #[test]
    fn test_wrap_words_breaks_at_width() {
        let words: Vec<String> = vec!["abcdefghi".to_string(); 10];
        let lines = wrap_words(&words, 30);

        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 30));
        assert!(wrap_words(&[], 30).is_empty());
    }

    #[test]
    fn test_generated_stamp_follows_each_render() {
        use chrono::TimeZone;

        let report = build_report(&create_test_dataset(), "CNBC", &ReportSettings::default()).unwrap();
        let renderer = DashboardRenderer::new(0);
        let first = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 3, 1, 10, 45, 5).unwrap();

        let mut buffer = Vec::new();
        renderer.render_at(&report, first, &mut buffer).unwrap();
        renderer.render_at(&report, later, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Generated: 2024-03-01 09:30:00 UTC"));
        assert!(text.contains("Generated: 2024-03-01 10:45:05 UTC"));
    }

    #[test]
    fn test_cloud_word_emphasis() {
        assert_eq!(cloud_word("gold", 1.0), "GOLD");
        assert_eq!(cloud_word("gold", 0.5), "Gold");
        assert_eq!(cloud_word("Gold", 0.1), "gold");
    }
}
