use crate::corpus::Corpus;
use crate::position::position_weight;
use crate::tf_idf::{TermStatistics, TfIdf, WordFrequency};
use crate::tokenizer::{LexicalTokenizer, Tokenizer};
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// Average tf-idf of the sentence's nouns times its position weight
    pub score: f64,
    /// Average tf-idf before position weighting
    pub raw_score: f64,
    pub sentence: String,
    /// Position in the article
    pub index: usize,
}

/// Ranks the sentences of one article by position-weighted tf-idf.
///
/// Ranking happens entirely in the constructor. Building a summarizer also
/// records the article in the corpus: the document count goes up by one and
/// every distinct noun's document frequency goes up by one.
#[derive(Debug, Clone)]
pub struct ArticleSummarizer {
    sentences: Vec<String>,
    scored: Vec<ScoredSentence>, // descending score
    ranked_sentences: Vec<String>,
}

impl ArticleSummarizer {
    pub fn new(article: &str, corpus: &mut Corpus) -> Self {
        Self::with_collaborators(article, corpus, &LexicalTokenizer::new(), &TfIdf::default())
    }

    pub fn with_collaborators<T, S>(article: &str, corpus: &mut Corpus, tokenizer: &T, stats: &S) -> Self
    where
        T: Tokenizer + ?Sized,
        S: TermStatistics + ?Sized,
    {
        let sentences = tokenizer.tokenize_sentence(article);
        let sentence_words: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| tokenizer.tokenize_word(s, true))
            .collect();

        let mut word_frequency = WordFrequency::new();
        let mut seen_in_doc: HashSet<&str> = HashSet::new();
        for word in sentence_words.iter().flatten() {
            word_frequency.add(word);
            seen_in_doc.insert(word.as_str());
        }
        // The article counts toward its own idf denominator.
        corpus.add_document(seen_in_doc);

        let corpus: &Corpus = corpus;
        let document_number = corpus.document_number();
        let total = sentences.len();
        let mut scored: Vec<ScoredSentence> = sentences
            .iter()
            .zip(&sentence_words)
            .enumerate()
            .map(|(index, (sentence, words))| {
                let raw_score = sentence_score(words, &word_frequency, document_number, corpus, stats);
                ScoredSentence {
                    score: raw_score * position_weight(index, total),
                    raw_score,
                    sentence: sentence.clone(),
                    index,
                }
            })
            .collect();
        // stable: equal scores keep article order
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        let ranked_sentences = scored.iter().map(|s| s.sentence.clone()).collect();

        tracing::debug!(
            sentences = total,
            distinct_words = word_frequency.len(),
            document_number,
            "ranked article"
        );
        Self { sentences, scored, ranked_sentences }
    }

    /// Sentences in article order.
    pub fn sentences(&self) -> &[String] { &self.sentences }

    /// Sentences by descending weighted score.
    pub fn ranked_sentences(&self) -> &[String] { &self.ranked_sentences }

    pub fn scored_sentences(&self) -> &[ScoredSentence] { &self.scored }

    /// Top `percentage` percent of the ranked sentences, returned in article order.
    ///
    /// Membership is by text, so a sentence repeated verbatim is selected at every
    /// occurrence once its text makes the cut.
    pub fn get_top_sentences(&self, percentage: f64) -> Vec<String> {
        // saturating cast: negative and NaN give 0
        let n = (percentage / 100.0 * self.sentences.len() as f64) as usize;
        let top: HashSet<&str> = self.ranked_sentences.iter().take(n).map(String::as_str).collect();
        self.sentences
            .iter()
            .filter(|s| top.contains(s.as_str()))
            .cloned()
            .collect()
    }

    /// Selected sentences joined by a single space.
    pub fn summary(&self, percentage: f64) -> String {
        self.get_top_sentences(percentage).join(" ")
    }
}

/// Mean tf-idf over the words of one sentence; 0 for a sentence without words.
fn sentence_score<S>(words: &[String], word_frequency: &WordFrequency, document_number: u32, corpus: &Corpus, stats: &S) -> f64
where
    S: TermStatistics + ?Sized,
{
    if words.is_empty() { return 0.0; }
    let total: f64 = words
        .iter()
        .map(|w| {
            stats.term_frequency(w, word_frequency)
                * stats.inverse_document_frequency(w, document_number, corpus.frequencies())
        })
        .sum();
    total / words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordless_sentence_scores_zero() {
        let mut corpus = Corpus::new();
        let s = ArticleSummarizer::new("It is so. Cats chase mice.", &mut corpus);
        let wordless = s.scored_sentences().iter().find(|x| x.index == 0).unwrap();
        assert_eq!(wordless.raw_score, 0.0);
        assert_eq!(wordless.score, 0.0);
        assert_eq!(s.ranked_sentences()[0], "Cats chase mice.");
    }

    #[test]
    fn empty_article_ranks_nothing() {
        let mut corpus = Corpus::new();
        let s = ArticleSummarizer::new("", &mut corpus);
        assert!(s.sentences().is_empty());
        assert!(s.ranked_sentences().is_empty());
        assert!(s.get_top_sentences(50.0).is_empty());
        assert_eq!(s.summary(100.0), "");
        assert_eq!(corpus.document_number(), 1);
    }

    #[test]
    fn weighted_score_is_raw_times_position() {
        let mut corpus = Corpus::new();
        let s = ArticleSummarizer::new("Cats chase mice. Mice run fast. Dogs chase cats. Birds fly high.", &mut corpus);
        for x in s.scored_sentences() {
            assert_eq!(x.score, x.raw_score * position_weight(x.index, 4));
        }
    }
}
