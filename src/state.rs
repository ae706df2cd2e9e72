use std::sync::Arc;

use anyhow::Context;

use crate::core::config::AppConfig;
use crate::index::sqlite::SqliteVectorIndex;
use crate::llm::openai::OpenAiProvider;
use crate::requirements::{
    AliasTable, EngineConfig, PromptTemplate, RequirementEngine, RequirementTable,
};

/// Application state shared across all routes.
///
/// Everything in here is built once at startup and read-only afterwards, so
/// concurrent requests need no locking.
pub struct AppState {
    pub config: AppConfig,
    pub engine: RequirementEngine,
}

impl AppState {
    /// Initializes the application state.
    ///
    /// This process includes:
    /// 1. Loading the persisted vector index (fails fast when missing)
    /// 2. Wiring the OpenAI-compatible provider
    /// 3. Seeding the alias and requirement tables and the prompt template
    pub async fn initialize(config: AppConfig) -> anyhow::Result<Arc<Self>> {
        let index = SqliteVectorIndex::open(&config.index_path)
            .await
            .with_context(|| {
                format!("failed to load vector index from {}", config.index_path.display())
            })?;
        tracing::info!(path = %config.index_path.display(), "vector index loaded");

        let provider = OpenAiProvider::new(config.base_url.clone(), config.api_key.clone());

        let prompt = match &config.prompt_template_path {
            Some(path) => {
                let template = std::fs::read_to_string(path).with_context(|| {
                    format!("failed to read prompt template at {}", path.display())
                })?;
                PromptTemplate::new(template)
            }
            None => PromptTemplate::default(),
        };

        let engine = RequirementEngine::new(
            RequirementTable::tek17_section_11_4(),
            AliasTable::tek17_defaults(),
            prompt,
            EngineConfig {
                chat_model: config.chat_model.clone(),
                embedding_model: config.embedding_model.clone(),
                top_k: config.top_k,
            },
            Arc::new(provider),
            Arc::new(index),
        );

        Ok(Arc::new(AppState { config, engine }))
    }
}
