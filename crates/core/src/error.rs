// Error types for slackpost-core

use thiserror::Error;

/// Result type alias for slackpost-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the browser-independent domain layer
#[derive(Debug, Error)]
pub enum Error {
    /// Workspace URL does not look like a Slack workspace origin
    ///
    /// Accepted shapes are `https://company.slack.com` and
    /// `https://company.enterprise.slack.com`.
    #[error(
        "invalid workspace URL '{0}': expected https://company.slack.com or https://company.enterprise.slack.com"
    )]
    InvalidWorkspaceUrl(String),

    /// Channel id could not be combined with the workspace URL
    #[error("channel id '{0}' cannot form a channel URL")]
    InvalidChannelRef(String),

    /// Send mode was invoked with no candidate messages
    #[error("message pool is empty: at least one message is required")]
    EmptyMessagePool,

    /// I/O error reading or writing the session file
    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    /// Session file contents could not be parsed
    #[error("session file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
