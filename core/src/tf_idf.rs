use std::collections::HashMap;

/// Word counts of one article, with the running total kept alongside.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    counts: HashMap<String, u32>,
    total: u64,
}

impl WordFrequency {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn get(&self, word: &str) -> u32 { self.counts.get(word).copied().unwrap_or(0) }

    /// Occurrences of all words.
    pub fn total(&self) -> u64 { self.total }

    /// Number of distinct words.
    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }
}

impl<'a> FromIterator<&'a str> for WordFrequency {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut wf = Self::new();
        for word in iter { wf.add(word); }
        wf
    }
}

/// Term weighting primitives consumed by the summarizer.
pub trait TermStatistics {
    fn term_frequency(&self, word: &str, word_frequency: &WordFrequency) -> f64;
    fn inverse_document_frequency(&self, word: &str, document_number: u32, document_frequency: &HashMap<String, u32>) -> f64;
}

/// Relative term frequency with natural-log idf.
#[derive(Debug, Clone, Copy)]
pub struct TfIdf {
    /// Use smoothed IDF = ln(1 + N/df) instead of ln(N/df)
    pub smoothed_idf: bool,
}

impl Default for TfIdf {
    fn default() -> Self { Self { smoothed_idf: true } }
}

impl TfIdf {
    pub fn new(smoothed_idf: bool) -> Self { Self { smoothed_idf } }
}

impl TermStatistics for TfIdf {
    fn term_frequency(&self, word: &str, word_frequency: &WordFrequency) -> f64 {
        term_frequency(word, word_frequency)
    }

    fn inverse_document_frequency(&self, word: &str, document_number: u32, document_frequency: &HashMap<String, u32>) -> f64 {
        inverse_document_frequency(word, document_number, document_frequency, self.smoothed_idf)
    }
}

/// Occurrences of `word` divided by all occurrences in the table. Zero when absent.
pub fn term_frequency(word: &str, word_frequency: &WordFrequency) -> f64 {
    match word_frequency.total() {
        0 => 0.0,
        total => word_frequency.get(word) as f64 / total as f64,
    }
}

/// ln(N/df), or ln(1 + N/df) when smoothed. A word missing from the table
/// counts as df = 1, which gives it the largest idf the corpus allows.
pub fn inverse_document_frequency(word: &str, document_number: u32, document_frequency: &HashMap<String, u32>, smoothed: bool) -> f64 {
    let n = document_number.max(1) as f64;
    let df_t = document_frequency.get(word).copied().unwrap_or(0).max(1) as f64;
    if smoothed { (1.0 + n / df_t).ln() } else { (n / df_t).ln() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn tf_is_relative_to_whole_table() {
        let wf: WordFrequency = ["cat", "dog", "cat", "cat"].into_iter().collect();
        assert_eq!(wf.total(), 4);
        assert_eq!(wf.len(), 2);
        assert!((term_frequency("cat", &wf) - 0.75).abs() < 1e-12);
        assert_eq!(term_frequency("bird", &wf), 0.0);
        assert_eq!(term_frequency("cat", &WordFrequency::new()), 0.0);
    }

    #[test]
    fn idf_handles_missing_words() {
        let df = table(&[("cat", 4)]);
        let missing = inverse_document_frequency("bird", 4, &df, false);
        let common = inverse_document_frequency("cat", 4, &df, false);
        assert!((missing - 4f64.ln()).abs() < 1e-12);
        assert_eq!(common, 0.0);
        assert!(missing > common);
    }

    #[test]
    fn smoothed_idf_stays_positive() {
        let df = table(&[("cat", 1)]);
        let idf = TfIdf::default().inverse_document_frequency("cat", 1, &df);
        assert!((idf - 2f64.ln()).abs() < 1e-12);
        assert_eq!(TfIdf::new(false).inverse_document_frequency("cat", 1, &df), 0.0);
    }
}
