use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use summarizer_core::{ArticleSummarizer, Corpus, LexicalTokenizer, TfIdf, TokenizerConfig};
use walkdir::WalkDir;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OutputDoc {
    pub id: String,
    pub title: Option<String>,
    /// Number of sentences in the article
    pub sentences: usize,
    pub selected: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub percentage: f64,
    pub stem: bool,
    pub smoothed_idf: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { percentage: 20.0, stem: false, smoothed_idf: true }
    }
}

fn is_supported(p: &Path) -> bool {
    matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl" | "txt"))
}

/// Article files under `input`, in path order so corpus growth is reproducible.
pub fn collect_files(input: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && is_supported(p) {
                files.push(p.to_path_buf());
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        bail!("input {} does not exist", input.display());
    }
    Ok(files)
}

/// Read the articles held in one file.
pub fn load_docs(file: &Path) -> Result<Vec<InputDoc>> {
    match file.extension().and_then(|s| s.to_str()) {
        Some("jsonl") => load_jsonl(file),
        Some("txt") => {
            let body = fs::read_to_string(file)?;
            let id = file.file_stem().and_then(|s| s.to_str()).unwrap_or_default().to_string();
            Ok(vec![InputDoc { id, title: None, body }])
        }
        _ => load_json(file),
    }
}

fn load_jsonl(file: &Path) -> Result<Vec<InputDoc>> {
    let reader = BufReader::new(File::open(file)?);
    let mut docs = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}", file.display(), lineno + 1))?;
        docs.push(doc);
    }
    Ok(docs)
}

fn load_json(file: &Path) -> Result<Vec<InputDoc>> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", file.display()))?;
    let docs = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(serde_json::from_value::<InputDoc>)
            .collect::<Result<Vec<InputDoc>, _>>()?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(json)?],
        _ => {
            tracing::warn!(file = %file.display(), "skipping json that is neither object nor array");
            vec![]
        }
    };
    Ok(docs)
}

/// Summarize one article against the running corpus.
pub fn summarize_doc(doc: InputDoc, corpus: &mut Corpus, opts: &RunOptions) -> OutputDoc {
    let tokenizer = LexicalTokenizer::with_config(TokenizerConfig { stem: opts.stem });
    let stats = TfIdf::new(opts.smoothed_idf);
    let summarizer = ArticleSummarizer::with_collaborators(&doc.body, corpus, &tokenizer, &stats);
    let selected = summarizer.get_top_sentences(opts.percentage);
    OutputDoc {
        id: doc.id,
        title: doc.title,
        sentences: summarizer.sentences().len(),
        summary: selected.join(" "),
        selected,
    }
}

/// Summarize every article under `input` in order, writing one JSON line each to `out`.
/// Returns the corpus built along the way.
pub fn run<W: Write>(input: &Path, opts: &RunOptions, mut out: W) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    for file in collect_files(input)? {
        let docs = load_docs(&file)?;
        tracing::debug!(file = %file.display(), docs = docs.len(), "loaded articles");
        for doc in docs {
            let summary = summarize_doc(doc, &mut corpus, opts);
            serde_json::to_writer(&mut out, &summary)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    tracing::info!(num_docs = corpus.document_number(), num_terms = corpus.len(), "summarized articles");
    Ok(corpus)
}
