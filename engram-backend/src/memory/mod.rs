//! Agent memory system - append-only notes with relevance-ranked recall.

mod store;

pub use store::{MemoryError, MemoryStore, DEFAULT_RECALL_LIMIT};
