//! On-disk session persistence.
//!
//! The store is an explicit value constructed from `--session-file` and
//! handed to the command flows, rather than a well-known path baked into
//! every call site. Validity of the stored cookies is never checked here;
//! staleness shows up later, when the logged-in marker fails to appear.

use std::path::{Path, PathBuf};

use slackpost_core::AuthState;
use tracing::debug;

use crate::error::{CliError, Result};

#[derive(Debug, Clone)]
pub struct SessionStore {
	path: PathBuf,
}

impl SessionStore {
	pub fn new(path: PathBuf) -> Self {
		Self { path }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Loads the saved auth state, or `None` when no session was ever saved.
	pub fn load(&self) -> Result<Option<AuthState>> {
		if !self.path.exists() {
			return Ok(None);
		}
		let state = AuthState::from_file(&self.path)?;
		debug!(path = %self.path.display(), cookies = state.cookies.len(), "loaded session state");
		Ok(Some(state))
	}

	/// Writes the auth state, overwriting any previous session.
	pub fn save(&self, state: &AuthState) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() && !parent.exists() {
				std::fs::create_dir_all(parent).map_err(|err| {
					CliError::Auth(format!("cannot create {}: {err}", parent.display()))
				})?;
			}
		}
		state.to_file(&self.path)?;
		debug!(path = %self.path.display(), cookies = state.cookies.len(), "saved session state");
		Ok(())
	}
}
