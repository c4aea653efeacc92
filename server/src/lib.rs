use anyhow::{Context, Result};
use axum::{extract::{Path, State}, http::{HeaderMap, HeaderValue, StatusCode}, routing::{get, post}, Json, Router};
use serde::{Deserialize, Serialize};
use summarizer_core::{ArticleSummarizer, Corpus, LexicalTokenizer, SharedCorpus, TfIdf, TokenizerConfig};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub smoothed_idf: bool,
    pub stem: bool,
    /// Token required in X-ADMIN-TOKEN for corpus resets
    pub admin_token: Option<String>,
    /// Comma-separated allowed origins, any origin when unset
    pub cors_allow_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { smoothed_idf: true, stem: false, admin_token: None, cors_allow_origin: None }
    }
}

impl ServerConfig {
    /// Read ADMIN_TOKEN and CORS_ALLOW_ORIGIN from the environment.
    pub fn from_env(smoothed_idf: bool, stem: bool) -> Self {
        Self {
            smoothed_idf,
            stem,
            admin_token: std::env::var("ADMIN_TOKEN").ok(),
            cors_allow_origin: std::env::var("CORS_ALLOW_ORIGIN").ok(),
        }
    }
}

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub article: String,
    #[serde(default = "default_percentage")]
    pub percentage: f64,
}
fn default_percentage() -> f64 { 20.0 }

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub sentences: Vec<String>,
    pub ranked: Vec<RankedSentence>,
    pub document_number: u32,
    pub took_s: f64,
}

#[derive(Serialize)]
pub struct RankedSentence {
    pub index: usize,
    pub score: f64,
    pub sentence: String,
}

#[derive(Serialize)]
pub struct CorpusResponse {
    pub document_number: u32,
    pub terms: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub corpus: SharedCorpus,
    pub tokenizer: LexicalTokenizer,
    pub stats: TfIdf,
    pub admin_token: Option<String>,
}

fn cors_layer(allow_origin: Option<&str>) -> Result<CorsLayer> {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let origins = match allow_origin {
        Some(val) => val
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<HeaderValue>().with_context(|| format!("invalid CORS origin {s:?}")))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };
    if origins.is_empty() {
        Ok(base.allow_origin(Any))
    } else {
        Ok(base.allow_origin(AllowOrigin::list(origins)))
    }
}

pub fn build_app(config: ServerConfig) -> Result<Router> {
    let app_state = AppState {
        corpus: Corpus::new().shared(),
        tokenizer: LexicalTokenizer::with_config(TokenizerConfig { stem: config.stem }),
        stats: TfIdf::new(config.smoothed_idf),
        admin_token: config.admin_token,
    };
    let cors = cors_layer(config.cors_allow_origin.as_deref())?;

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/summarize", post(summarize_handler))
        .route("/corpus", get(corpus_handler))
        .route("/corpus/term/:word", get(term_handler))
        .route("/corpus/reset", post(reset_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());
    Ok(app)
}

pub async fn summarize_handler(State(state): State<AppState>, Json(req): Json<SummarizeRequest>) -> Json<SummarizeResponse> {
    let start = std::time::Instant::now();
    // The corpus stays locked for the whole article so df and N move together.
    let (summarizer, document_number) = {
        let mut corpus = state.corpus.lock();
        let summarizer = ArticleSummarizer::with_collaborators(&req.article, &mut corpus, &state.tokenizer, &state.stats);
        (summarizer, corpus.document_number())
    };

    let sentences = summarizer.get_top_sentences(req.percentage);
    let ranked = summarizer
        .scored_sentences()
        .iter()
        .map(|s| RankedSentence { index: s.index, score: s.score, sentence: s.sentence.clone() })
        .collect();
    tracing::debug!(document_number, selected = sentences.len(), "summarized article");

    Json(SummarizeResponse {
        summary: sentences.join(" "),
        sentences,
        ranked,
        document_number,
        took_s: start.elapsed().as_secs_f64(),
    })
}

pub async fn corpus_handler(State(state): State<AppState>) -> Json<CorpusResponse> {
    let corpus = state.corpus.lock();
    Json(CorpusResponse { document_number: corpus.document_number(), terms: corpus.len() })
}

pub async fn term_handler(State(state): State<AppState>, Path(word): Path<String>) -> Json<serde_json::Value> {
    let df = state.corpus.lock().document_frequency(&word);
    Json(serde_json::json!({ "word": word, "document_frequency": df }))
}

async fn reset_handler(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<CorpusResponse>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    *state.corpus.lock() = Corpus::new();
    tracing::info!("corpus reset");
    Ok(Json(CorpusResponse { document_number: 0, terms: 0 }))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let required = match &state.admin_token {
        Some(t) => t,
        None => return Err((StatusCode::UNAUTHORIZED, "ADMIN_TOKEN not set".into())),
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "invalid admin token".into()))
    }
}
