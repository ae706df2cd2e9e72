//! SQLite-backed vector index.
//!
//! Loads the index file written by the offline indexer and ranks chunks by
//! brute-force cosine similarity over the full table.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Row, SqlitePool};

use super::store::{IndexedChunk, ScoredChunk, VectorIndex};
use crate::core::errors::ApiError;

#[derive(Debug)]
pub struct SqliteVectorIndex {
    pool: SqlitePool,
}

impl SqliteVectorIndex {
    /// Open an existing index file.
    ///
    /// The index is produced offline; a missing file fails startup instead
    /// of being silently created empty.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ApiError::NotFound(format!(
                "vector index not found at {}",
                path.display()
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(ApiError::internal)?;

        Ok(Self { pool })
    }

    fn deserialize_embedding(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }

        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        let denom = norm_a * norm_b;

        if denom <= f32::EPSILON {
            0.0
        } else {
            dot / denom
        }
    }
}

#[async_trait]
impl VectorIndex for SqliteVectorIndex {
    async fn search(
        &self,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredChunk>, ApiError> {
        let rows = sqlx::query("SELECT chunk_id, content, source, embedding FROM chunks")
            .fetch_all(&self.pool)
            .await
            .map_err(ApiError::internal)?;

        let mut scored = Vec::new();
        for row in rows {
            let embedding_bytes: Vec<u8> = row.get("embedding");
            if embedding_bytes.is_empty() {
                continue;
            }
            let embedding = Self::deserialize_embedding(&embedding_bytes);
            let score = Self::cosine_similarity(query_embedding, &embedding);

            scored.push(ScoredChunk {
                chunk: IndexedChunk {
                    chunk_id: row.get("chunk_id"),
                    content: row.get("content"),
                    source: row.get("source"),
                },
                score,
            });
        }

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);

        Ok(scored)
    }

    async fn count(&self) -> Result<usize, ApiError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chunks")
            .fetch_one(&self.pool)
            .await
            .map_err(ApiError::internal)?;

        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mirrors the layout written by the offline indexer.
    const FIXTURE_SCHEMA: &str = "CREATE TABLE chunks (
        chunk_id TEXT PRIMARY KEY,
        content TEXT NOT NULL,
        source TEXT NOT NULL DEFAULT '',
        embedding BLOB NOT NULL
    )";

    fn serialize_embedding(embedding: &[f32]) -> Vec<u8> {
        embedding.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    async fn fixture_index(dir: &tempfile::TempDir, chunks: &[(&str, &str, &[f32])]) -> std::path::PathBuf {
        let db_path = dir.path().join("tek17_index.db");

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .unwrap();

        sqlx::query(FIXTURE_SCHEMA).execute(&pool).await.unwrap();
        for (i, (content, source, embedding)) in chunks.iter().enumerate() {
            sqlx::query("INSERT INTO chunks (chunk_id, content, source, embedding) VALUES (?1, ?2, ?3, ?4)")
                .bind(format!("chunk-{}", i))
                .bind(content)
                .bind(source)
                .bind(serialize_embedding(embedding))
                .execute(&pool)
                .await
                .unwrap();
        }
        pool.close().await;

        db_path
    }

    #[tokio::test]
    async fn search_ranks_by_similarity() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = fixture_index(
            &dir,
            &[
                ("§ 11-4 bæreevne og stabilitet", "tek17-kap11", &[1.0, 0.0, 0.0]),
                ("§ 11-7 brannseksjoner", "tek17-kap11", &[0.0, 1.0, 0.0]),
                ("§ 11-13 utgang fra branncelle", "tek17-kap11", &[0.6, 0.8, 0.0]),
            ],
        )
        .await;

        let index = SqliteVectorIndex::open(&db_path).await.unwrap();
        let hits = index.search(&[0.0, 1.0, 0.0], 2).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert!(hits[0].chunk.content.contains("§ 11-7"));
        assert!(hits[1].chunk.content.contains("§ 11-13"));
        assert!(hits[0].score > hits[1].score);
    }

    #[tokio::test]
    async fn limit_caps_the_result_count() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = fixture_index(
            &dir,
            &[
                ("a", "s", &[1.0, 0.0]),
                ("b", "s", &[0.9, 0.1]),
                ("c", "s", &[0.8, 0.2]),
            ],
        )
        .await;

        let index = SqliteVectorIndex::open(&db_path).await.unwrap();
        assert_eq!(index.search(&[1.0, 0.0], 6).await.unwrap().len(), 3);
        assert_eq!(index.search(&[1.0, 0.0], 1).await.unwrap().len(), 1);
        assert_eq!(index.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn missing_index_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.db");

        let err = SqliteVectorIndex::open(&missing).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
