use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Corpus statistics accumulated across summarized articles.
///
/// Owned by the caller and threaded into every `ArticleSummarizer`. Counts
/// only ever grow: summarizing the same article twice counts it twice.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    document_number: u32,
    document_frequency: HashMap<String, u32>, // word -> number of documents containing it
}

/// Corpus shared between threads. Hold the lock for a whole summarization.
pub type SharedCorpus = Arc<Mutex<Corpus>>;

impl Corpus {
    pub fn new() -> Self { Self::default() }

    pub fn shared(self) -> SharedCorpus { Arc::new(Mutex::new(self)) }

    /// Count one more document and bump the document frequency of each word once.
    /// `words` must already be distinct.
    pub fn add_document<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.document_number += 1;
        for word in words {
            *self.document_frequency.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    pub fn document_number(&self) -> u32 { self.document_number }

    pub fn document_frequency(&self, word: &str) -> u32 {
        self.document_frequency.get(word).copied().unwrap_or(0)
    }

    pub fn frequencies(&self) -> &HashMap<String, u32> { &self.document_frequency }

    /// Number of distinct words seen.
    pub fn len(&self) -> usize { self.document_frequency.len() }

    pub fn is_empty(&self) -> bool { self.document_frequency.is_empty() }
}

impl From<(u32, HashMap<String, u32>)> for Corpus {
    fn from((document_number, document_frequency): (u32, HashMap<String, u32>)) -> Self {
        Self { document_number, document_frequency }
    }
}
