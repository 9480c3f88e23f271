//! Interactive login with session capture.
//!
//! Opens the signin page in a headed browser and hands control to the
//! operator, who completes authentication (password, MFA, whatever the
//! workspace demands). The tool cannot observe when that is finished, so
//! completion is signalled by the operator pressing Enter, raced against
//! an auto-save deadline.

use std::time::Duration;

use tracing::{info, warn};

use crate::browser::{Browser, SIGNIN_URL};
use crate::cli::Cli;
use crate::error::Result;
use crate::session_store::SessionStore;

pub async fn run(cli: &Cli, store: &SessionStore) -> Result<()> {
	info!(path = %store.path().display(), "starting interactive login");

	let browser = Browser::connect(&cli.webdriver_url, Duration::from_secs(cli.timeout)).await?;
	let outcome = capture(cli, store, &browser).await;
	browser.quit().await;
	outcome
}

async fn capture(cli: &Cli, store: &SessionStore, browser: &Browser) -> Result<()> {
	browser.goto(SIGNIN_URL).await?;

	eprintln!("Browser opened at: {SIGNIN_URL}");
	eprintln!();
	eprintln!("Log in manually, then press Enter to save the session.");
	eprintln!("(Or wait {} seconds for auto-save)", cli.login_timeout);

	let stdin_future = tokio::task::spawn_blocking(|| {
		let mut input = String::new();
		std::io::stdin().read_line(&mut input).ok();
	});
	let timeout_future = tokio::time::sleep(Duration::from_secs(cli.login_timeout));

	tokio::select! {
		_ = stdin_future => {
			eprintln!("Saving session...");
		}
		_ = timeout_future => {
			eprintln!();
			eprintln!("Timeout reached, saving session...");
		}
	}

	// Cookies are captured either way; an operator who stopped early will
	// find out at send time, but the warning makes the likely cause clear.
	if let Err(err) = browser.verify_logged_in().await {
		warn!(%err, "logged-in marker not visible; saving captured cookies anyway");
	}

	let state = browser.capture_cookies().await?;
	store.save(&state)?;

	eprintln!();
	eprintln!("Session saved to: {}", store.path().display());
	eprintln!("  Cookies: {}", state.cookies.len());
	eprintln!();
	eprintln!("Post with: slackpost --workspace <url> --channel <id> --message <text>");

	Ok(())
}
