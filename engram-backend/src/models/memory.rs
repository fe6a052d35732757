use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single stored note owned by one agent.
///
/// Memories are immutable once stored: the store appends new entries and
/// never edits or deletes existing ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    /// Unique identifier assigned at creation (UUID v4).
    pub id: String,
    /// The agent that owns this memory; recall is partitioned by this key.
    pub agent_id: String,
    /// Free-text body of the note.
    pub content: String,
    /// Caller-supplied key/value pairs. Opaque to the store and never
    /// consulted by relevance scoring.
    pub metadata: Map<String, Value>,
    /// Creation timestamp, non-decreasing across successive stores.
    pub created_at: DateTime<Utc>,
    /// Reserved for a future semantic scorer. Always absent in the
    /// baseline lexical implementation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

/// A memory paired with its relevance score for one recall query.
/// Built fresh per recall call, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RecallResult {
    pub memory: Memory,
    pub score: f64,
}

/// Request body for POST /api/remember
#[derive(Debug, Clone, Deserialize)]
pub struct RememberRequest {
    pub agent_id: Option<String>,
    pub content: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

/// Request body for POST /api/recall
#[derive(Debug, Clone, Deserialize)]
pub struct RecallRequest {
    pub agent_id: Option<String>,
    pub query: Option<String>,
    pub limit: Option<i64>,
}
