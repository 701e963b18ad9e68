use std::borrow::Borrow;

use finmedia_preprocessing::ArticleRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Keywords shown in the top keywords chart
pub const DEFAULT_TOP_N: usize = 20;

/// Common English words left out of the word cloud
pub const CLOUD_STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been", "before",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he", "her",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "more", "most", "no", "not", "of",
    "on", "or", "other", "our", "out", "over", "s", "says", "she", "so", "some", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "to", "up", "was", "we", "were",
    "what", "when", "which", "while", "who", "will", "with", "would", "you", "your",
];

/// Token counts over a body of whitespace-separated text.
///
/// Tokens keep the order in which they were first encountered, which is
/// what breaks ties when ranking by count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencies {
    counts: IndexMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Word cloud entry; weight is relative to the most frequent word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudWord {
    pub word: String,
    pub count: usize,
    pub weight: f64,
}

impl WordFrequencies {
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequencies = Self::default();
        for text in texts {
            frequencies.add_text(text.as_ref());
        }
        frequencies
    }

    pub fn add_text(&mut self, text: &str) {
        for token in text.split_whitespace() {
            *self.counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total_tokens(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// The `n` most frequent tokens, highest count first.
    pub fn top_n(&self, n: usize) -> Vec<KeywordCount> {
        let mut ranked: Vec<(&String, &usize)> = self.counts.iter().collect();
        // stable: equal counts stay in first-encountered order
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(word, &count)| KeywordCount {
                word: word.clone(),
                count,
            })
            .collect()
    }
}

/// Count tokens across each record's cleaned title and description.
pub fn word_frequencies<R: Borrow<ArticleRecord>>(records: &[R]) -> WordFrequencies {
    let frequencies = WordFrequencies::from_texts(records.iter().map(|r| {
        let record: &ArticleRecord = r.borrow();
        record.combined_text()
    }));
    tracing::debug!(
        "Counted {} tokens ({} distinct) across {} records",
        frequencies.total_tokens(),
        frequencies.len(),
        records.len()
    );
    frequencies
}

fn is_cloud_word(word: &str) -> bool {
    word.chars().count() > 1 && !CLOUD_STOPWORDS.contains(&word)
}

/// Weighted word cloud entries, at most `max_words` of them.
///
/// Tokens are folded to lowercase before counting; stopwords and
/// single-character tokens are dropped. The keyword chart still ranks the
/// raw tokens.
pub fn cloud_weights(frequencies: &WordFrequencies, max_words: usize) -> Vec<CloudWord> {
    let mut folded = WordFrequencies::default();
    for (word, count) in frequencies.iter() {
        let word = word.to_lowercase();
        if is_cloud_word(&word) {
            *folded.counts.entry(word).or_insert(0) += count;
        }
    }

    let top = folded.top_n(max_words);
    let max_count = match top.first() {
        Some(first) => first.count as f64,
        None => return Vec::new(),
    };

    top.into_iter()
        .map(|k| CloudWord {
            weight: k.count as f64 / max_count,
            word: k.word,
            count: k.count,
        })
        .collect()
}
