pub mod config;
pub mod db;
pub mod error;
pub mod ipc;
pub mod models;

pub use config::{FeatureFlags, ShopchatConfig};
pub use error::ShopchatError;
pub use models::{ConversationSummary, Message};
