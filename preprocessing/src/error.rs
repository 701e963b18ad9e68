use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: sentiment score {value} for {title:?} is not a finite number")]
    InvalidScore { row: usize, title: String, value: f64 },

    #[error("Dataset contains no articles")]
    EmptyDataset,
}

impl PreprocessingError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for preprocessing operations
pub type Result<T> = std::result::Result<T, PreprocessingError>;
