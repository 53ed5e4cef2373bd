pub mod conversation;
pub mod message;

pub use conversation::{
    satisfaction_badge_label, status_badge_label, truncate_preview, ConversationRow,
    ConversationSummary, PREVIEW_MAX_CHARS,
};
pub use message::Message;
