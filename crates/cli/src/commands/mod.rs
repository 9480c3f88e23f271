//! Command dispatch for the two process modes.

mod login;
mod send;

use crate::cli::Cli;
use crate::error::Result;
use crate::session_store::SessionStore;

pub async fn dispatch(cli: Cli) -> Result<()> {
	let store = SessionStore::new(cli.session_file.clone());

	if cli.login {
		login::run(&cli, &store).await
	} else {
		send::run(&cli, &store).await
	}
}
