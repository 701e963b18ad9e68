use std::path::PathBuf;

use crate::error::{PreprocessingError, Result};

pub const DEFAULT_DATA_PATH: &str = "cleaned_financial_news.csv";
pub const DEFAULT_TOP_N: usize = 20;
pub const DEFAULT_CLOUD_MAX_WORDS: usize = 200;
pub const DEFAULT_PREVIEW_ROWS: usize = 25;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Number of keywords shown in the top keywords chart
    pub top_n: usize,
    /// Upper bound on words carried into the word cloud
    pub cloud_max_words: usize,
    /// Article rows printed in the table view; 0 prints every row
    pub preview_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            top_n: DEFAULT_TOP_N,
            cloud_max_words: DEFAULT_CLOUD_MAX_WORDS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("FINMEDIA_DATA_PATH") {
            if !path.is_empty() {
                config.data_path = PathBuf::from(path);
            }
        }

        if let Some(top_n) = parse_env("FINMEDIA_TOP_N") {
            config.top_n = top_n;
        }

        if let Some(max_words) = parse_env("FINMEDIA_CLOUD_MAX_WORDS") {
            config.cloud_max_words = max_words;
        }

        if let Some(rows) = parse_env("FINMEDIA_PREVIEW_ROWS") {
            config.preview_rows = rows;
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(PreprocessingError::config("Data path cannot be empty"));
        }

        if self.top_n == 0 {
            return Err(PreprocessingError::config(
                "Top keyword count must be greater than zero",
            ));
        }

        if self.cloud_max_words == 0 {
            return Err(PreprocessingError::config(
                "Word cloud size must be greater than zero",
            ));
        }

        Ok(())
    }
}

fn parse_env(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a non-negative integer", key, raw);
            None
        }
    }
}
