//! In-memory memory store with lexical relevance scoring.
//!
//! Memories are stored in a single append-only list partitioned by
//! `agent_id`. Recall filters to one agent, scores every candidate against
//! the query, and returns the top matches in descending score order.

use std::fmt;

use chrono::Utc;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::{Memory, RecallResult};

/// Number of results recall returns when the caller does not pass a limit.
pub const DEFAULT_RECALL_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// A required field was missing or empty, or the limit was not positive.
    /// Carries the name of the offending field.
    InvalidArgument(&'static str),
    /// Reserved for a durable backend. The in-memory store never produces it.
    StorageUnavailable,
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::InvalidArgument(field) => {
                write!(f, "Missing or invalid required field: {}", field)
            }
            MemoryError::StorageUnavailable => write!(f, "Memory storage unavailable"),
        }
    }
}

impl std::error::Error for MemoryError {}

/// Owns the full collection of memories for the process.
///
/// Constructed once at startup and shared via `Arc` in `AppState`. The
/// list is guarded by a single `RwLock`: `remember` takes the write lock
/// around its append and `recall` takes the read lock around its scan, so
/// a recall never observes a partially constructed memory.
pub struct MemoryStore {
    memories: RwLock<Vec<Memory>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            memories: RwLock::new(Vec::new()),
        }
    }

    /// Store a new memory for `agent_id` and return it, including the
    /// generated id and creation timestamp.
    pub fn remember(
        &self,
        agent_id: &str,
        content: &str,
        metadata: Option<Map<String, Value>>,
    ) -> Result<Memory, MemoryError> {
        if agent_id.is_empty() {
            return Err(MemoryError::InvalidArgument("agent_id"));
        }
        if content.is_empty() {
            return Err(MemoryError::InvalidArgument("content"));
        }

        let mut memories = self.memories.write();

        // Keep created_at non-decreasing even if the wall clock steps back.
        let mut created_at = Utc::now();
        if let Some(last) = memories.last() {
            if created_at < last.created_at {
                created_at = last.created_at;
            }
        }

        let memory = Memory {
            id: Uuid::new_v4().to_string(),
            agent_id: agent_id.to_string(),
            content: content.to_string(),
            metadata: metadata.unwrap_or_default(),
            created_at,
            embedding: None,
        };
        memories.push(memory.clone());
        Ok(memory)
    }

    /// Return up to `limit` of the agent's memories ranked by relevance to
    /// `query`, best first. Ties keep creation order. Zero-score memories
    /// are included; there is no cutoff threshold.
    pub fn recall(
        &self,
        agent_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<RecallResult>, MemoryError> {
        if agent_id.is_empty() {
            return Err(MemoryError::InvalidArgument("agent_id"));
        }
        if query.is_empty() {
            return Err(MemoryError::InvalidArgument("query"));
        }
        if limit == 0 {
            return Err(MemoryError::InvalidArgument("limit"));
        }

        let memories = self.memories.read();
        let mut results: Vec<RecallResult> = memories
            .iter()
            .filter(|m| m.agent_id == agent_id)
            .map(|m| RecallResult {
                memory: m.clone(),
                score: score_content(&m.content, query),
            })
            .collect();

        // Stable sort: equal scores keep insertion (creation) order.
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(limit);
        Ok(results)
    }

    /// Total number of stored memories across all agents.
    pub fn len(&self) -> usize {
        self.memories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.read().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of query term positions that occur as substrings of the
/// lowercased content.
///
/// The query is split on whitespace with duplicates retained, so a repeated
/// term counts once per position, and matching is substring containment
/// ("cat" matches "category"), not whole-word. Both behaviors are
/// intentional for the lexical baseline.
///
/// This function is the substitution point for an embedding-based scorer;
/// the filter/sort/truncate pipeline in `recall` stays the same if it is
/// swapped out.
fn score_content(content: &str, query: &str) -> f64 {
    let content = content.to_lowercase();
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if terms.is_empty() {
        return 0.0;
    }
    let matches = terms
        .iter()
        .filter(|term| content.contains(term.as_str()))
        .count();
    matches as f64 / terms.len() as f64
}
