//! shopchat-cli — terminal frontend for the Shopchat reporting API
//!
//! Queries a running shopchat-server over HTTP and prints dashboard data in
//! the terminal.
//!
//! # Subcommands
//! - `stats`                                      — aggregate chat statistics
//! - `conversations [--status] [--satisfaction] [--page] [--json]` — listing
//! - `history <conversation-id>`                  — one conversation's transcript
//! - `status`                                     — show server health

use clap::{Parser, Subcommand};
use serde::Deserialize;

const DEFAULT_SERVER: &str = "http://127.0.0.1:8790";

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "shopchat-cli",
    version,
    about = "Shopchat merchant chat analytics — reporting CLI"
)]
struct Cli {
    /// Shopchat HTTP server URL (overrides SHOPCHAT_HTTP_URL env var)
    #[arg(long, env = "SHOPCHAT_HTTP_URL", default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show aggregate chat statistics and integration status
    Stats,

    /// List conversations with optional filters
    Conversations {
        /// Filter by status (all, active, completed, needs_attention)
        #[arg(long, default_value = "all")]
        status: String,

        /// Filter by satisfaction (all, positive, negative, neutral)
        #[arg(long, default_value = "all")]
        satisfaction: String,

        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Print the raw JSON page instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Print the message history of one conversation
    History {
        /// Conversation id
        conversation_id: String,
    },

    /// Show Shopchat server status
    Status,
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct StatsResponse {
    stats: ChatStats,
    features: FeatureFlags,
}

#[derive(Debug, Deserialize)]
struct ChatStats {
    total_messages: i64,
    today_messages: i64,
    total_conversations: i64,
    active_today: i64,
}

#[derive(Debug, Deserialize)]
struct FeatureFlags {
    ai_connected: bool,
    platform_connected: bool,
}

#[derive(Debug, Deserialize)]
struct ConversationsResponse {
    items: Vec<ConversationSummary>,
    page: u32,
    has_previous: bool,
    has_next: bool,
}

#[derive(Debug, Deserialize)]
struct ConversationSummary {
    id: String,
    customer_name: String,
    last_message: String,
    status_label: String,
    satisfaction_label: String,
    message_count: i64,
    started_at: String,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    conversation_id: String,
    count: usize,
    messages: Vec<HistoryMessage>,
}

#[derive(Debug, Deserialize)]
struct HistoryMessage {
    role: String,
    content: String,
    created_at: String,
}

// ============================================================================
// Output formatting
// ============================================================================

/// One table line for a conversation summary.
fn format_conversation_line(c: &ConversationSummary) -> String {
    format!(
        "{}  {}  [{}/{}]  {} msgs  started {}\n    {}",
        c.id,
        c.customer_name,
        c.status_label,
        c.satisfaction_label,
        c.message_count,
        c.started_at,
        c.last_message
    )
}

/// Speaker label for a history turn.
fn speaker_label(role: &str) -> &'static str {
    match role {
        "customer" => "Customer",
        "assistant" => "AI Assistant",
        _ => "Unknown",
    }
}

// ============================================================================
// HTTP Client Calls
// ============================================================================

fn client(timeout_secs: u64) -> anyhow::Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()?)
}

fn fetch(url: &str) -> reqwest::blocking::Response {
    let client = match client(30) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("shopchat-cli: failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let resp = match client.get(url).send() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("shopchat-cli: connection failed to {}: {}", url, e);
            std::process::exit(1);
        }
    };

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        eprintln!("shopchat-cli: server returned {}: {}", status, body);
        std::process::exit(1);
    }

    resp
}

fn do_stats(server: &str) -> anyhow::Result<()> {
    let resp = fetch(&format!("{}/stats", server));
    let data: StatsResponse = resp.json()?;

    println!("Total Conversations:  {}", data.stats.total_conversations);
    println!("Active Today:         {}", data.stats.active_today);
    println!("Total Messages:       {}", data.stats.total_messages);
    println!("Messages Today:       {}", data.stats.today_messages);
    println!();
    println!(
        "Claude AI:            {}",
        if data.features.ai_connected { "Connected" } else { "Disconnected" }
    );
    println!(
        "Platform:             {}",
        if data.features.platform_connected { "Connected" } else { "Disconnected" }
    );

    Ok(())
}

fn do_conversations(
    server: &str,
    status: &str,
    satisfaction: &str,
    page: u32,
    json_output: bool,
) -> anyhow::Result<()> {
    let url = format!(
        "{}/conversations?status={}&satisfaction={}&page={}",
        server, status, satisfaction, page
    );
    let resp = fetch(&url);

    if json_output {
        let raw: serde_json::Value = resp.json()?;
        println!("{}", serde_json::to_string_pretty(&raw)?);
        return Ok(());
    }

    let data: ConversationsResponse = resp.json()?;

    if data.items.is_empty() {
        eprintln!("No conversations match the given filters on page {}.", data.page);
        return Ok(());
    }

    for c in &data.items {
        println!("{}\n", format_conversation_line(c));
    }
    println!(
        "Page {}{}{}",
        data.page,
        if data.has_previous { "  < previous available" } else { "" },
        if data.has_next { "  > next available" } else { "" },
    );

    Ok(())
}

fn do_history(server: &str, conversation_id: &str) -> anyhow::Result<()> {
    let resp = fetch(&format!("{}/conversations/{}/messages", server, conversation_id));
    let data: HistoryResponse = resp.json()?;

    if data.messages.is_empty() {
        eprintln!("No messages found for conversation {}.", data.conversation_id);
        return Ok(());
    }

    println!("Conversation {} — {} messages\n", data.conversation_id, data.count);
    for m in &data.messages {
        println!("[{}] {}:", m.created_at, speaker_label(&m.role));
        println!("    {}\n", m.content);
    }

    Ok(())
}

fn do_status(server: &str) -> anyhow::Result<()> {
    let client = client(10)?;
    let url = format!("{}/health", server);

    match client.get(&url).send() {
        Ok(r) if r.status().is_success() => {
            let body: serde_json::Value = r.json().unwrap_or_default();
            println!("Shopchat server: {}", body["status"].as_str().unwrap_or("unknown"));
            println!("Version:         {}", body["version"].as_str().unwrap_or("?"));
            println!("PostgreSQL:      {}", body["postgresql"].as_str().unwrap_or("?"));
            println!("Socket:          {}", body["socket"].as_str().unwrap_or("?"));
        }
        Ok(r) => {
            eprintln!("shopchat-cli: server unhealthy (HTTP {})", r.status());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("shopchat-cli: cannot reach {} — {}", url, e);
            std::process::exit(1);
        }
    }

    Ok(())
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    let cli = Cli::parse();
    let server = cli.server.trim_end_matches('/').to_string();

    let result = match cli.command {
        Commands::Stats => do_stats(&server),
        Commands::Conversations { status, satisfaction, page, json } => {
            do_conversations(&server, &status, &satisfaction, page, json)
        }
        Commands::History { conversation_id } => do_history(&server, &conversation_id),
        Commands::Status => do_status(&server),
    };

    if let Err(e) = result {
        eprintln!("shopchat-cli: {}", e);
        std::process::exit(1);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_summary() -> ConversationSummary {
        ConversationSummary {
            id: "conv_001".to_string(),
            customer_name: "John Doe".to_string(),
            last_message: "Thanks for helping me find those sneakers!".to_string(),
            status_label: "Completed".to_string(),
            satisfaction_label: "Positive".to_string(),
            message_count: 8,
            started_at: "2024-01-15T14:30:00Z".to_string(),
        }
    }

    // ========================================================================
    // TEST 1: conversation line carries id, labels and message count
    // ========================================================================
    #[test]
    fn test_format_conversation_line() {
        let line = format_conversation_line(&mock_summary());
        assert!(line.contains("conv_001"));
        assert!(line.contains("John Doe"));
        assert!(line.contains("[Completed/Positive]"));
        assert!(line.contains("8 msgs"));
        assert!(line.contains("Thanks for helping me find those sneakers!"));
    }

    // ========================================================================
    // TEST 2: speaker labels for both roles, unknown falls back
    // ========================================================================
    #[test]
    fn test_speaker_label() {
        assert_eq!(speaker_label("customer"), "Customer");
        assert_eq!(speaker_label("assistant"), "AI Assistant");
        assert_eq!(speaker_label("system"), "Unknown");
    }

    // ========================================================================
    // TEST 3: conversations response deserializes from server JSON
    // ========================================================================
    #[test]
    fn test_conversations_response_parses() {
        let json = r#"{
            "items": [{
                "id": "conv_002",
                "customer_name": "Sarah Wilson",
                "last_message": "Can you help me track my order?",
                "status": "active",
                "status_label": "Active",
                "satisfaction": null,
                "satisfaction_label": "-",
                "message_count": 3,
                "started_at": "2024-01-15T16:45:00Z"
            }],
            "page": 0,
            "has_previous": false,
            "has_next": true
        }"#;

        let parsed: ConversationsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].satisfaction_label, "-");
        assert!(!parsed.has_previous);
        assert!(parsed.has_next);
    }

    // ========================================================================
    // TEST 4: stats response deserializes with feature flags
    // ========================================================================
    #[test]
    fn test_stats_response_parses() {
        let json = r#"{
            "stats": {
                "total_messages": 120,
                "today_messages": 12,
                "total_conversations": 30,
                "active_today": 4
            },
            "features": {
                "ai_connected": true,
                "platform_connected": false
            }
        }"#;

        let parsed: StatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.stats.total_messages, 120);
        assert_eq!(parsed.stats.active_today, 4);
        assert!(parsed.features.ai_connected);
        assert!(!parsed.features.platform_connected);
    }
}
