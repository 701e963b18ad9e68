use serde::{Deserialize, Serialize};

/// One row of the cleaned financial news dataset.
///
/// Sentiment columns are produced upstream by VADER and are only read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub media: String,
    pub title: String,
    #[serde(default)]
    pub cleaned_title: String,
    #[serde(default)]
    pub cleaned_desc: String,
    pub vader_title_sentiment: f64,   // Compound score, -1 to 1
    pub vader_title_sentiment_label: String,
}

impl ArticleRecord {
    pub fn new(
        media: impl Into<String>,
        title: impl Into<String>,
        vader_title_sentiment: f64,
        vader_title_sentiment_label: impl Into<String>,
    ) -> Self {
        Self {
            media: media.into(),
            title: title.into(),
            cleaned_title: String::new(),
            cleaned_desc: String::new(),
            vader_title_sentiment,
            vader_title_sentiment_label: vader_title_sentiment_label.into(),
        }
    }

    pub fn with_cleaned_text(
        mut self,
        cleaned_title: impl Into<String>,
        cleaned_desc: impl Into<String>,
    ) -> Self {
        self.cleaned_title = cleaned_title.into();
        self.cleaned_desc = cleaned_desc.into();
        self
    }

    pub fn media(&self) -> &str {
        &self.media
    }

    pub fn score(&self) -> f64 {
        self.vader_title_sentiment
    }

    pub fn label(&self) -> &str {
        &self.vader_title_sentiment_label
    }

    /// Normalized title and description joined by a single space
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.cleaned_title, self.cleaned_desc)
    }
}
