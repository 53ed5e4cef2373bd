use crate::subsystems::{conversations, history, stats};
use chrono::Local;
use shopchat_core::ipc::{ChatRequest, ChatResponse};
use shopchat_core::{ShopchatConfig, ShopchatError};
use sqlx::PgPool;

pub async fn handle_request(request: ChatRequest, pool: &PgPool) -> ChatResponse {
    handle_request_with_config(request, pool, None).await
}

/// Handle request with optional config for reporting parameters
pub async fn handle_request_with_config(
    request: ChatRequest,
    pool: &PgPool,
    config: Option<&ShopchatConfig>,
) -> ChatResponse {
    match request {
        ChatRequest::Ping => ChatResponse::pong(),
        ChatRequest::Health => match shopchat_core::db::health_check(pool).await {
            Ok(pg_ver) => ChatResponse::ok(serde_json::json!({
                "postgresql": pg_ver,
                "status": "healthy"
            })),
            Err(e) => ChatResponse::err(ShopchatError::Database(e).to_string()),
        },
        ChatRequest::Stats => match stats::get_stats(pool, Local::now()).await {
            Ok(s) => ChatResponse::ok(serde_json::json!({
                "total_messages": s.total_messages,
                "today_messages": s.today_messages,
                "total_conversations": s.total_conversations,
                "active_today": s.active_today,
            })),
            Err(e) => ChatResponse::err(ShopchatError::Database(e).to_string()),
        },
        ChatRequest::ListConversations { status, satisfaction, page } => {
            let page_size = config
                .map(|c| c.reporting.page_size)
                .unwrap_or_else(|| shopchat_core::config::ReportingConfig::default().page_size);
            let filter = conversations::ConversationFilter { status, satisfaction };
            match conversations::list_conversations(pool, &filter, page.unwrap_or(0), page_size)
                .await
            {
                Ok(result) => ChatResponse::ok(serde_json::json!({
                    "items": result.items,
                    "page": result.page,
                    "has_previous": result.has_previous,
                    "has_next": result.has_next,
                })),
                Err(e) => ChatResponse::err(ShopchatError::Database(e).to_string()),
            }
        }
        ChatRequest::History { conversation_id } => {
            match history::get_history(pool, &conversation_id).await {
                Ok(messages) => ChatResponse::ok(serde_json::json!({
                    "conversation_id": conversation_id,
                    "count": messages.len(),
                    "messages": messages,
                })),
                Err(e) => ChatResponse::err(ShopchatError::Database(e).to_string()),
            }
        }
    }
}
