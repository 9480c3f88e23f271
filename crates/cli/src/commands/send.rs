//! Restore the saved session and post one message to a channel.

use std::time::Duration;

use slackpost_core::{AuthState, MessagePool, PostTarget};
use tracing::info;

use crate::browser::Browser;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::session_store::SessionStore;

pub async fn run(cli: &Cli, store: &SessionStore) -> Result<()> {
	// Everything that can fail without a browser fails here first.
	let workspace = cli
		.workspace
		.as_deref()
		.ok_or_else(|| CliError::Usage("--workspace is required to send".to_string()))?;
	let channel = cli
		.channel
		.as_deref()
		.ok_or_else(|| CliError::Usage("--channel is required to send".to_string()))?;
	let target = PostTarget::new(workspace, channel)?;
	let pool = MessagePool::new(cli.message.clone())?;
	let message = pool.pick(&mut rand::thread_rng()).to_string();

	let state = store.load()?.ok_or_else(|| {
		CliError::Auth(format!(
			"no saved session at {}: run `slackpost --login` first",
			store.path().display()
		))
	})?;

	info!(
		workspace = %target.workspace(),
		channel = target.channel(),
		candidates = pool.len(),
		"posting message"
	);

	let browser = Browser::connect(&cli.webdriver_url, Duration::from_secs(cli.timeout)).await?;
	let outcome = deliver(&browser, &target, &state, &message).await;
	browser.quit().await;
	outcome?;

	info!(channel = target.channel(), "message posted");
	println!("Message posted to {}: {message}", target.channel());
	Ok(())
}

async fn deliver(
	browser: &Browser,
	target: &PostTarget,
	state: &AuthState,
	message: &str,
) -> Result<()> {
	// Cookies can only be set for the domain the browser is on, so land on
	// the workspace first, inject, and reload into the authenticated client.
	browser.goto(target.workspace().as_str()).await?;
	browser.inject_cookies(state).await?;
	browser.refresh().await?;
	browser.verify_logged_in().await?;

	browser.goto(target.channel_url().as_str()).await?;
	browser.verify_channel(target.channel()).await?;

	browser.post_message(message).await
}
