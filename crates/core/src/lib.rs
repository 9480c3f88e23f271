//! slackpost-core: browser-independent domain types for the slackpost CLI.
//!
//! This crate holds everything the tool knows that does not require a live
//! browser: the cookie records and persisted auth state, the validated
//! workspace/channel target, and the candidate message pool. The binary in
//! `slackpost-cli` drives a WebDriver session with these types.

pub mod cookie;
pub mod error;
pub mod message;
pub mod target;

pub use cookie::{AuthState, Cookie, SameSite};
pub use error::{Error, Result};
pub use message::MessagePool;
pub use target::{PostTarget, WorkspaceUrl};
