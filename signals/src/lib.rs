//! Sentiment aggregation and labeling over filtered news articles.
//!
//! Every entry point is a pure function over borrowed records: the caller
//! owns the dataset and recomputes whenever the media selection changes.

pub mod analysis;
pub mod filters;
pub mod frequency_analysis;
pub mod scoring;

use thiserror::Error;

pub use analysis::{build_report, sentiment_distribution, ArticleRow, DashboardReport, ReportSettings, SentimentDistribution};
pub use filters::filter;
pub use frequency_analysis::{cloud_weights, word_frequencies, CloudWord, KeywordCount, WordFrequencies, DEFAULT_TOP_N};
pub use scoring::{classify_score, classify_sentiment, hypothesis, OverallSentiment, SentimentLabel};

pub type Result<T> = std::result::Result<T, SignalsError>;

#[derive(Error, Debug, PartialEq)]
pub enum SignalsError {
    #[error("Cannot average sentiment over an empty selection")]
    EmptySelection,

    #[error("Invalid signal data: {0}")]
    InvalidData(String),
}
