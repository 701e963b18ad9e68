use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexSet;

use crate::error::{PreprocessingError, Result};
use crate::models::ArticleRecord;

/// Read-only handle over the loaded article collection.
///
/// Built once by the hosting process and passed by reference to every
/// aggregation call. Records are never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<ArticleRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<ArticleRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset from a CSV file with a header row
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading article dataset from: {:?}", path);

        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;

        tracing::info!(
            "Loaded {} articles from {} media sources",
            dataset.len(),
            dataset.media_sources().len()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<ArticleRecord>().enumerate() {
            let record = row?;
            // f64 parsing accepts NaN and inf; the mean is undefined over those
            if !record.vader_title_sentiment.is_finite() {
                return Err(PreprocessingError::InvalidScore {
                    row: index + 1,
                    title: record.title,
                    value: record.vader_title_sentiment,
                });
            }
            records.push(record);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct media values in order of first appearance
    pub fn media_sources(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(ArticleRecord::media)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// The selection offered when the user has not picked a source yet
    pub fn default_media(&self) -> Result<&str> {
        self.records
            .first()
            .map(ArticleRecord::media)
            .ok_or(PreprocessingError::EmptyDataset)
    }

    pub fn contains_media(&self, key: &str) -> bool {
        self.records.iter().any(|r| r.media == key)
    }
}
