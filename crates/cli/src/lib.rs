//! slackpost-cli: the `slackpost` binary.
//!
//! Two process modes over a WebDriver-driven browser: `--login` captures
//! session cookies interactively and saves them; send mode restores them
//! and posts one message to a channel.

pub mod browser;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod session_store;
