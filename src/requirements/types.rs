use serde::{Deserialize, Serialize};

/// The answer shape returned to clients, regardless of which path produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The question exactly as the client submitted it.
    pub query: String,
    /// Human-readable answer text.
    pub result: String,
    /// Paragraph reference: fixed for table answers, heuristically extracted
    /// for generative answers, or the unknown-paragraph sentinel.
    pub source: String,
}
