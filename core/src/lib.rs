//! Extractive article summarization with corpus-aware tf-idf and positional weighting.

pub mod corpus;
pub mod position;
pub mod summarizer;
pub mod tf_idf;
pub mod tokenizer;

pub use corpus::{Corpus, SharedCorpus};
pub use summarizer::{ArticleSummarizer, ScoredSentence};
pub use tf_idf::{TermStatistics, TfIdf, WordFrequency};
pub use tokenizer::{LexicalTokenizer, Tokenizer, TokenizerConfig};
