//! Table-first requirement resolution with a generative fallback.
//!
//! Every question takes exactly one of two paths:
//! 1. structured-table hit: deterministic sentence, fixed citation, no
//!    external service calls;
//! 2. generative fallback: one embedding call, one top-K search, one
//!    zero-temperature generation call, citation extracted from the
//!    first-ranked chunk.

use std::sync::Arc;

use crate::core::errors::ApiError;
use crate::index::store::VectorIndex;
use crate::llm::provider::LlmProvider;
use crate::llm::types::{ChatMessage, ChatRequest};

use super::alias::{normalize_question, AliasTable};
use super::citation::{extract_paragraph, UNKNOWN_PARAGRAPH};
use super::prompt::PromptTemplate;
use super::table::{HazardClass, RequirementTable};
use super::types::Answer;

/// Fixed provenance for answers produced by the structured table.
pub const TABLE_CITATION: &str = "§ 11-4 tabell 1";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub chat_model: String,
    pub embedding_model: String,
    /// Number of chunks retrieved for the fallback prompt.
    pub top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chat_model: "gpt-4o".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            top_k: 6,
        }
    }
}

pub struct RequirementEngine {
    table: RequirementTable,
    aliases: AliasTable,
    prompt: PromptTemplate,
    config: EngineConfig,
    llm: Arc<dyn LlmProvider>,
    index: Arc<dyn VectorIndex>,
}

impl RequirementEngine {
    pub fn new(
        table: RequirementTable,
        aliases: AliasTable,
        prompt: PromptTemplate,
        config: EngineConfig,
        llm: Arc<dyn LlmProvider>,
        index: Arc<dyn VectorIndex>,
    ) -> Self {
        Self {
            table,
            aliases,
            prompt,
            config,
            llm,
            index,
        }
    }

    /// Answer a question, preferring the structured table.
    ///
    /// A table hit never reaches the embedding or generation services;
    /// known requirements must not be overridden by a generative guess.
    pub async fn answer(&self, question: &str) -> Result<Answer, ApiError> {
        if let Some(answer) = self.lookup(question) {
            tracing::debug!(source = TABLE_CITATION, "structured table hit");
            return Ok(answer);
        }

        self.generate(question).await
    }

    pub async fn index_size(&self) -> Result<usize, ApiError> {
        self.index.count().await
    }

    /// Structured-table path. Pure; `None` on any miss.
    ///
    /// Commits to the first matching alias: if that category has no entry
    /// for any class marked in the question, the question falls through to
    /// the generative path rather than trying later aliases.
    fn lookup(&self, question: &str) -> Option<Answer> {
        let normalized = normalize_question(question);
        let matched = self.aliases.resolve(&normalized)?;

        for class in HazardClass::ALL {
            if !normalized.contains(&class.marker()) {
                continue;
            }
            if let Some(rating) = self.table.get(matched.category, class) {
                return Some(Answer {
                    query: question.to_string(),
                    result: format!(
                        "Kravet til brannmotstand for {} i brannklasse {} er {} (jf. {}).",
                        matched.alias,
                        class.as_str(),
                        rating,
                        TABLE_CITATION
                    ),
                    source: TABLE_CITATION.to_string(),
                });
            }
        }

        None
    }

    /// Generative fallback: embed, retrieve, prompt, generate, cite.
    async fn generate(&self, question: &str) -> Result<Answer, ApiError> {
        let embedding = self
            .llm
            .embed(&[question.to_string()], &self.config.embedding_model)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ApiError::Internal("embedding service returned no vectors".to_string())
            })?;

        let hits = self.index.search(&embedding, self.config.top_k).await?;
        tracing::debug!(hits = hits.len(), "falling back to retrieval");

        let context = hits
            .iter()
            .map(|hit| hit.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let request = ChatRequest::new(vec![ChatMessage::user(
            self.prompt.render(question, &context),
        )])
        .with_temperature(0.0);

        let result = self.llm.chat(request, &self.config.chat_model).await?;

        // Heuristic: only the first-ranked chunk is inspected for a
        // paragraph reference. The generated text may cite a more precise
        // paragraph than this.
        let source = hits
            .first()
            .and_then(|hit| extract_paragraph(&hit.chunk.content))
            .unwrap_or_else(|| UNKNOWN_PARAGRAPH.to_string());

        Ok(Answer {
            query: question.to_string(),
            result,
            source,
        })
    }
}
