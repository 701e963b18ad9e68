// Financial Media Dataset Library

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod dataset;
pub mod error;
pub mod models;

pub use config::DashboardConfig;
pub use dataset::Dataset;
pub use error::{PreprocessingError, Result};
pub use models::ArticleRecord;
