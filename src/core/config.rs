use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Runtime configuration, read from the environment once at process start.
///
/// Only `OPENAI_API_KEY` and `TEK_INDEX_PATH` are required; everything else
/// has a sensible default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer key for the embedding/generation API.
    pub api_key: String,
    /// Path to the persisted vector index (built by the offline indexer).
    pub index_path: PathBuf,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Model used for answer generation.
    pub chat_model: String,
    /// Model used for question embeddings. Must match the model the index
    /// was built with.
    pub embedding_model: String,
    /// Number of chunks retrieved for the generative fallback.
    pub top_k: usize,
    /// Optional override for the built-in prompt template.
    pub prompt_template_path: Option<PathBuf>,
    pub port: u16,
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;
        let index_path = env::var("TEK_INDEX_PATH")
            .map(PathBuf::from)
            .context("TEK_INDEX_PATH is not set")?;

        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com".to_string());
        let chat_model = env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
        let embedding_model =
            env::var("EMBEDDING_MODEL").unwrap_or_else(|_| "text-embedding-3-small".to_string());

        let top_k = env::var("RETRIEVAL_TOP_K")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(6);
        let port = env::var("PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(8000);

        let prompt_template_path = env::var("PROMPT_TEMPLATE_PATH").ok().map(PathBuf::from);
        let log_dir = env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Ok(AppConfig {
            api_key,
            index_path,
            base_url,
            chat_model,
            embedding_model,
            top_k,
            prompt_template_path,
            port,
            log_dir,
        })
    }
}
