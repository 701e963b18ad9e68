use std::borrow::Borrow;

use finmedia_preprocessing::{ArticleRecord, DashboardConfig, Dataset};
use serde::{Deserialize, Serialize};

use crate::filters::filter;
use crate::frequency_analysis::{cloud_weights, word_frequencies, CloudWord, KeywordCount, DEFAULT_TOP_N};
use crate::scoring::{classify_sentiment, OverallSentiment, SentimentLabel};
use crate::SignalsError;

/// Article counts per stored sentiment label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    /// Labels outside the three known values; counted but not charted
    pub unrecognized: usize,
}

impl SentimentDistribution {
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// Bars in chart order: Positive, Neutral, Negative
    pub fn bars(&self) -> [(SentimentLabel, usize); 3] {
        SentimentLabel::ORDER.map(|label| (label, self.count(label)))
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative + self.unrecognized
    }
}

pub fn sentiment_distribution<R: Borrow<ArticleRecord>>(records: &[R]) -> SentimentDistribution {
    let mut distribution = SentimentDistribution::default();
    for r in records {
        let record: &ArticleRecord = r.borrow();
        match SentimentLabel::from_label(record.label()) {
            Some(SentimentLabel::Positive) => distribution.positive += 1,
            Some(SentimentLabel::Neutral) => distribution.neutral += 1,
            Some(SentimentLabel::Negative) => distribution.negative += 1,
            None => distribution.unrecognized += 1,
        }
    }

    if distribution.unrecognized > 0 {
        tracing::warn!(
            "{} of {} records carry an unrecognized sentiment label",
            distribution.unrecognized,
            records.len()
        );
    }
    distribution
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    pub top_n: usize,
    pub cloud_max_words: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            cloud_max_words: 200,
        }
    }
}

impl From<&DashboardConfig> for ReportSettings {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            top_n: config.top_n,
            cloud_max_words: config.cloud_max_words,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRow {
    pub title: String,
    pub label: String,
    pub score: f64,
}

/// Everything the dashboard shows for one media selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub media: String,
    pub article_count: usize,
    pub articles: Vec<ArticleRow>,
    pub distribution: SentimentDistribution,
    pub top_keywords: Vec<KeywordCount>,
    pub word_cloud: Vec<CloudWord>,
    /// Absent when the selection holds no articles
    pub overall: Option<OverallSentiment>,
}

impl DashboardReport {
    pub fn is_empty(&self) -> bool {
        self.article_count == 0
    }
}

/// Recompute every view for `media` from scratch.
pub fn build_report(dataset: &Dataset, media: &str, settings: &ReportSettings) -> crate::Result<DashboardReport> {
    let view = filter(dataset.records(), media);

    let distribution = sentiment_distribution(&view);
    let frequencies = word_frequencies(&view);
    let top_keywords = frequencies.top_n(settings.top_n);
    let word_cloud = cloud_weights(&frequencies, settings.cloud_max_words);

    let overall = match classify_sentiment(&view) {
        Ok(overall) => Some(overall),
        Err(SignalsError::EmptySelection) => {
            tracing::warn!("No articles for media {:?}; overall sentiment unavailable", media);
            None
        }
        Err(e) => return Err(e),
    };

    let articles = view
        .iter()
        .map(|r| ArticleRow {
            title: r.title.clone(),
            label: r.vader_title_sentiment_label.clone(),
            score: r.vader_title_sentiment,
        })
        .collect();

    Ok(DashboardReport {
        media: media.to_string(),
        article_count: view.len(),
        articles,
        distribution,
        top_keywords,
        word_cloud,
        overall,
    })
}
