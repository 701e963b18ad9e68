use std::borrow::Borrow;
use std::fmt;

use finmedia_preprocessing::ArticleRecord;
use serde::{Deserialize, Serialize};

use crate::{Result, SignalsError};

/// Mean compound score above which a selection reads as positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Mean compound score below which a selection reads as negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Display order used by the distribution chart
    pub const ORDER: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }

    /// Parse a stored label; case and surrounding whitespace are ignored
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(SentimentLabel::Positive),
            "neutral" => Some(SentimentLabel::Neutral),
            "negative" => Some(SentimentLabel::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Mean title sentiment of a selection and its qualitative reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallSentiment {
    pub mean: f64,
    pub label: SentimentLabel,
}

impl OverallSentiment {
    pub fn hypothesis(&self) -> &'static str {
        hypothesis(self.label)
    }
}

pub fn classify_score(mean: f64) -> SentimentLabel {
    if mean > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if mean < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Average `vader_title_sentiment` over `records` and label the result.
///
/// An empty selection has no mean and fails with
/// [`SignalsError::EmptySelection`]; callers decide how to present that.
pub fn classify_sentiment<R: Borrow<ArticleRecord>>(records: &[R]) -> Result<OverallSentiment> {
    if records.is_empty() {
        return Err(SignalsError::EmptySelection);
    }

    let mut sum = 0.0;
    for r in records {
        let record: &ArticleRecord = r.borrow();
        let score = record.score();
        if !score.is_finite() {
            return Err(SignalsError::InvalidData(format!(
                "non-finite sentiment score {} for article {:?}",
                score, record.title
            )));
        }
        sum += score;
    }

    let mean = sum / records.len() as f64;
    let label = classify_score(mean);
    tracing::debug!("Overall sentiment over {} records: {:.4} ({})", records.len(), mean, label);

    Ok(OverallSentiment { mean, label })
}

pub fn hypothesis(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => {
            "The overall sentiment is positive, which could indicate a bullish market sentiment."
        }
        SentimentLabel::Negative => {
            "The overall sentiment is negative, which could indicate a bearish market sentiment."
        }
        SentimentLabel::Neutral => "The overall sentiment is neutral, suggesting no strong market direction.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records_with_scores(scores: &[f64]) -> Vec<ArticleRecord> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| ArticleRecord::new("A", format!("article {}", i), s, "Neutral"))
            .collect()
    }

    #[test]
    fn test_classify_score_thresholds() {
        assert_eq!(classify_score(0.051), SentimentLabel::Positive);
        assert_eq!(classify_score(1.0), SentimentLabel::Positive);
        assert_eq!(classify_score(-0.051), SentimentLabel::Negative);
        assert_eq!(classify_score(-1.0), SentimentLabel::Negative);
        assert_eq!(classify_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_threshold_boundaries_are_neutral() {
        assert_eq!(classify_score(0.05), SentimentLabel::Neutral);
        assert_eq!(classify_score(-0.05), SentimentLabel::Neutral);
    }

    #[test]
    fn test_classify_sentiment_mean() {
        let records = records_with_scores(&[0.8, 0.9]);
        let overall = classify_sentiment(&records).unwrap();

        assert!((overall.mean - 0.85).abs() < 1e-12);
        assert_eq!(overall.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_classify_sentiment_negative_and_neutral() {
        let negative = records_with_scores(&[-0.4, -0.2, 0.1]);
        assert_eq!(classify_sentiment(&negative).unwrap().label, SentimentLabel::Negative);

        let neutral = records_with_scores(&[0.5, -0.5, 0.02]);
        assert_eq!(classify_sentiment(&neutral).unwrap().label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let records: Vec<&ArticleRecord> = Vec::new();
        assert_eq!(classify_sentiment(&records), Err(SignalsError::EmptySelection));
    }

    #[test]
    fn test_non_finite_score_is_rejected() {
        let records = records_with_scores(&[0.2, f64::NAN]);
        assert!(matches!(classify_sentiment(&records), Err(SignalsError::InvalidData(_))));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let records = records_with_scores(&[0.13, -0.07, 0.31, 0.002, -0.29]);
        let view: Vec<&ArticleRecord> = records.iter().collect();

        let first = classify_sentiment(&view).unwrap();
        let second = classify_sentiment(&view).unwrap();
        assert_eq!(first.mean.to_bits(), second.mean.to_bits());
        assert_eq!(first.label, second.label);
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(SentimentLabel::from_label("Positive"), Some(SentimentLabel::Positive));
        assert_eq!(SentimentLabel::from_label(" negative "), Some(SentimentLabel::Negative));
        assert_eq!(SentimentLabel::from_label("NEUTRAL"), Some(SentimentLabel::Neutral));
        assert_eq!(SentimentLabel::from_label("mixed"), None);
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
    }

    #[test]
    fn test_hypothesis_text() {
        assert!(hypothesis(SentimentLabel::Positive).contains("bullish"));
        assert!(hypothesis(SentimentLabel::Negative).contains("bearish"));
        assert!(hypothesis(SentimentLabel::Neutral).contains("no strong market direction"));

        let overall = OverallSentiment { mean: -0.2, label: SentimentLabel::Negative };
        assert_eq!(overall.hypothesis(), hypothesis(SentimentLabel::Negative));
    }
}
