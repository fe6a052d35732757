//! Memory controller - REST API for storing and recalling agent memories.

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::memory::{MemoryError, DEFAULT_RECALL_LIMIT};
use crate::models::{Memory, RecallRequest, RecallResult, RememberRequest};
use crate::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct RememberResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<Memory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct RecallResponse {
    success: bool,
    results: Vec<RecallResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/remember - Store a memory for an agent
async fn remember(data: web::Data<AppState>, body: web::Json<RememberRequest>) -> impl Responder {
    let agent_id = body.agent_id.as_deref().unwrap_or("");
    let content = body.content.as_deref().unwrap_or("");

    match data.store.remember(agent_id, content, body.metadata.clone()) {
        Ok(memory) => HttpResponse::Ok().json(RememberResponse {
            success: true,
            memory: Some(memory),
            error: None,
        }),
        Err(e @ MemoryError::InvalidArgument(_)) => {
            HttpResponse::BadRequest().json(RememberResponse {
                success: false,
                memory: None,
                error: Some(e.to_string()),
            })
        }
        Err(e) => {
            log::error!("remember failed: {}", e);
            HttpResponse::InternalServerError().json(RememberResponse {
                success: false,
                memory: None,
                error: Some("Internal server error".to_string()),
            })
        }
    }
}

/// POST /api/recall - Rank an agent's memories against a query
async fn recall(data: web::Data<AppState>, body: web::Json<RecallRequest>) -> impl Responder {
    let agent_id = body.agent_id.as_deref().unwrap_or("");
    let query = body.query.as_deref().unwrap_or("");
    let limit = body.limit.unwrap_or(DEFAULT_RECALL_LIMIT as i64);

    if limit <= 0 {
        return HttpResponse::BadRequest().json(RecallResponse {
            success: false,
            results: vec![],
            error: Some(MemoryError::InvalidArgument("limit").to_string()),
        });
    }

    match data.store.recall(agent_id, query, limit as usize) {
        Ok(results) => HttpResponse::Ok().json(RecallResponse {
            success: true,
            results,
            error: None,
        }),
        Err(e @ MemoryError::InvalidArgument(_)) => {
            HttpResponse::BadRequest().json(RecallResponse {
                success: false,
                results: vec![],
                error: Some(e.to_string()),
            })
        }
        Err(e) => {
            log::error!("recall failed: {}", e);
            HttpResponse::InternalServerError().json(RecallResponse {
                success: false,
                results: vec![],
                error: Some("Internal server error".to_string()),
            })
        }
    }
}

/// Configure memory routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/remember", web::post().to(remember))
            .route("/recall", web::post().to(recall)),
    );
}
