use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest last-message preview shown in the conversations table, in
/// characters. Longer messages are cut here and suffixed with "...".
pub const PREVIEW_MAX_CHARS: usize = 50;

/// Aggregate row for one conversation as read from the store: persisted
/// attributes (customer_name, status, satisfaction) joined with values
/// derived from its messages.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ConversationRow {
    pub id: String,
    pub customer_name: String,
    pub status: String,
    pub satisfaction: Option<String>,
    pub message_count: i64,
    pub started_at: DateTime<Utc>,
    pub last_message: String,
}

/// Display-ready conversation summary handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub customer_name: String,
    pub last_message: String,
    pub status: String,
    pub status_label: String,
    pub satisfaction: Option<String>,
    pub satisfaction_label: String,
    pub message_count: i64,
    pub started_at: DateTime<Utc>,
}

impl From<ConversationRow> for ConversationSummary {
    fn from(row: ConversationRow) -> Self {
        Self {
            status_label: status_badge_label(&row.status),
            satisfaction_label: satisfaction_badge_label(row.satisfaction.as_deref()),
            last_message: truncate_preview(&row.last_message),
            id: row.id,
            customer_name: row.customer_name,
            status: row.status,
            satisfaction: row.satisfaction,
            message_count: row.message_count,
            started_at: row.started_at,
        }
    }
}

/// Status badge label. Unrecognized values pass through unchanged.
pub fn status_badge_label(status: &str) -> String {
    match status {
        "active" => "Active".to_string(),
        "completed" => "Completed".to_string(),
        "needs_attention" => "Needs Attention".to_string(),
        other => other.to_string(),
    }
}

/// Satisfaction badge label. An unset satisfaction renders as a dash
/// placeholder; unrecognized values pass through unchanged.
pub fn satisfaction_badge_label(satisfaction: Option<&str>) -> String {
    match satisfaction {
        None => "-".to_string(),
        Some("positive") => "Positive".to_string(),
        Some("negative") => "Negative".to_string(),
        Some("neutral") => "Neutral".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Truncate a last-message preview to [`PREVIEW_MAX_CHARS`] characters,
/// appending "..." when anything was cut. Char-based so multi-byte content
/// never splits mid-codepoint. No other normalization.
pub fn truncate_preview(message: &str) -> String {
    if message.chars().count() <= PREVIEW_MAX_CHARS {
        return message.to_string();
    }
    let mut preview: String = message.chars().take(PREVIEW_MAX_CHARS).collect();
    preview.push_str("...");
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_values_map_to_badges() {
        assert_eq!(status_badge_label("active"), "Active");
        assert_eq!(status_badge_label("completed"), "Completed");
        assert_eq!(status_badge_label("needs_attention"), "Needs Attention");
    }

    #[test]
    fn unknown_status_passes_through() {
        assert_eq!(status_badge_label("escalated"), "escalated");
    }

    #[test]
    fn satisfaction_labels_and_dash_placeholder() {
        assert_eq!(satisfaction_badge_label(Some("positive")), "Positive");
        assert_eq!(satisfaction_badge_label(Some("negative")), "Negative");
        assert_eq!(satisfaction_badge_label(Some("neutral")), "Neutral");
        assert_eq!(satisfaction_badge_label(None), "-");
    }

    #[test]
    fn preview_at_fifty_chars_is_unmodified() {
        let msg = "a".repeat(50);
        assert_eq!(truncate_preview(&msg), msg);
    }

    #[test]
    fn preview_at_fifty_one_chars_is_cut_with_ellipsis() {
        let msg = "b".repeat(51);
        let preview = truncate_preview(&msg);
        assert_eq!(preview, format!("{}...", "b".repeat(50)));
        assert_eq!(preview.chars().count(), 53);
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let msg = "é".repeat(60);
        let preview = truncate_preview(&msg);
        assert_eq!(preview, format!("{}...", "é".repeat(50)));
    }
}
