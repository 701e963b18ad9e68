use finmedia_preprocessing::ArticleRecord;

/// Records whose `media` equals `key`, in their original order.
///
/// Unknown keys are not an error; they select nothing.
pub fn filter<'a>(records: &'a [ArticleRecord], key: &str) -> Vec<&'a ArticleRecord> {
    let view: Vec<&ArticleRecord> = records.iter().filter(|r| r.media == key).collect();
    tracing::debug!("Filtered {} of {} records for media {:?}", view.len(), records.len(), key);
    view
}
