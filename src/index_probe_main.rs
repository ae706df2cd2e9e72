//! Manual retrieval smoke test.
//!
//! Loads the configured vector index, embeds a fixed test question and
//! prints the top hits. Useful after rebuilding the index offline; not part
//! of the request path.

use anyhow::Context;

use brannsvar_backend::core::config::AppConfig;
use brannsvar_backend::index::sqlite::SqliteVectorIndex;
use brannsvar_backend::index::store::VectorIndex;
use brannsvar_backend::llm::openai::OpenAiProvider;
use brannsvar_backend::llm::provider::LlmProvider;

const PROBE_QUESTION: &str =
    "Hva er krav til brannmotstand for bærende konstruksjoner i brannklasse 3?";
const PREVIEW_CHARS: usize = 500;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    println!("Loading vector index from {}...", config.index_path.display());
    let index = SqliteVectorIndex::open(&config.index_path)
        .await
        .context("failed to load vector index")?;
    println!("Index loaded ({} chunks).", index.count().await?);

    let provider = OpenAiProvider::new(config.base_url.clone(), config.api_key.clone());
    let embedding = provider
        .embed(&[PROBE_QUESTION.to_string()], &config.embedding_model)
        .await?
        .into_iter()
        .next()
        .context("embedding service returned no vectors")?;

    let hits = index.search(&embedding, 3).await?;

    println!("\nTop {} hits for: \"{}\"\n", hits.len(), PROBE_QUESTION);
    for (i, hit) in hits.iter().enumerate() {
        let preview: String = hit.chunk.content.chars().take(PREVIEW_CHARS).collect();
        println!("{}. [{:.3}] {}", i + 1, hit.score, hit.chunk.source);
        println!("{}", preview);
        println!("{}", "-".repeat(80));
    }

    Ok(())
}
