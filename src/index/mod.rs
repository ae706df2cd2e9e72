//! Vector index over the chapter text.
//!
//! The index is built offline; this module only loads and queries it.

pub mod sqlite;
pub mod store;

pub use sqlite::SqliteVectorIndex;
pub use store::{IndexedChunk, ScoredChunk, VectorIndex};
