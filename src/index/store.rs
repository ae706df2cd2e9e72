//! VectorIndex trait, the abstract interface over the persisted chapter index.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::ApiError;

/// A chunk of chapter text stored in the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedChunk {
    /// Unique chunk identifier assigned by the indexer.
    pub chunk_id: String,
    /// Raw chunk content; the only field the answer pipeline inspects.
    pub content: String,
    /// Source recorded by the indexer (document or section name).
    pub source: String,
}

/// Result of a similarity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: IndexedChunk,
    /// Similarity score (higher = better).
    pub score: f32,
}

/// Nearest-neighbor search over precomputed embeddings.
///
/// Index construction and maintenance belong to the offline indexer;
/// implementations here are read-only.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Chunks most similar to the query embedding, best first.
    async fn search(
        &self,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredChunk>, ApiError>;

    /// Total number of indexed chunks.
    async fn count(&self) -> Result<usize, ApiError>;
}
