//! WebDriver-backed control of the Slack web client.
//!
//! Wraps a [`thirtyfour::WebDriver`] handle with the handful of operations
//! the two command flows need: navigation, cookie capture/injection, and
//! the element lookups that decide whether a run is authenticated and
//! whether the channel exists. Selectors live here and nowhere else; they
//! track the Slack web UI and break when it changes.

use std::time::Duration;

use slackpost_core::{AuthState, Cookie};
use thirtyfour::error::WebDriverResult;
use thirtyfour::extensions::query::ElementQueryable;
use thirtyfour::{By, DesiredCapabilities, WebDriver, WebElement};
use tracing::{debug, info};

use crate::error::{CliError, Result};

/// Slack signin page opened in login mode.
pub const SIGNIN_URL: &str = "https://slack.com/signin";

/// Element present only in the logged-in client UI.
const LOGGED_IN_MARKER: &str = ".p-ia__nav__user";
/// Channel title in the view header.
const CHANNEL_TITLE: &str = ".p-view_header__channel_title";
/// Message composer.
const COMPOSER: &str = "div.ql-editor";
/// Send button next to the composer.
const SEND_BUTTON: &str = "//button[@data-qa='texty_send_button']";
/// Title text the client renders for a channel id that does not resolve.
const UNKNOWN_CHANNEL_TITLE: &str = "unknown-channel";

/// Poll interval for element waits.
const POLL_INTERVAL: Duration = Duration::from_millis(500);
/// Grace period after clicking send, so the message leaves before quit.
const POST_SEND_SETTLE: Duration = Duration::from_secs(10);

/// A browser session driven over a WebDriver endpoint.
pub struct Browser {
	driver: WebDriver,
	element_timeout: Duration,
}

impl Browser {
	/// Opens a fresh browser session against the WebDriver endpoint.
	pub async fn connect(webdriver_url: &str, element_timeout: Duration) -> Result<Self> {
		let caps = DesiredCapabilities::chrome();
		let driver = WebDriver::new(webdriver_url, caps).await.map_err(|err| {
			CliError::Environment(format!(
				"cannot start a browser session via {webdriver_url}: {err}"
			))
		})?;
		debug!(endpoint = webdriver_url, "browser session started");
		Ok(Self {
			driver,
			element_timeout,
		})
	}

	pub async fn goto(&self, url: &str) -> Result<()> {
		debug!(url, "navigating");
		self.driver
			.goto(url)
			.await
			.map_err(|err| CliError::Navigation(format!("could not open {url}: {err}")))
	}

	pub async fn refresh(&self) -> Result<()> {
		self.driver
			.refresh()
			.await
			.map_err(|err| CliError::Navigation(format!("page refresh failed: {err}")))
	}

	/// Injects every saved cookie into the current browser session.
	///
	/// Must be called after navigating to the workspace origin, since the
	/// browser only accepts cookies for the domain it is on. Cookies the
	/// browser rejects (foreign domains swept up at capture time) are
	/// skipped; the logged-in probe decides whether what remains is enough.
	pub async fn inject_cookies(&self, state: &AuthState) -> Result<()> {
		let mut injected = 0usize;
		for cookie in &state.cookies {
			let wire = webdriver_cookie(cookie)?;
			match self.driver.add_cookie(wire).await {
				Ok(()) => injected += 1,
				Err(err) => {
					debug!(name = %cookie.name, %err, "browser rejected cookie, skipping")
				}
			}
		}
		info!(
			injected,
			total = state.cookies.len(),
			"restored session cookies"
		);
		Ok(())
	}

	/// Captures the full cookie set of the current browser session.
	pub async fn capture_cookies(&self) -> Result<AuthState> {
		let cookies = self.driver.get_all_cookies().await.map_err(|err| {
			CliError::Environment(format!("could not read cookies from the browser: {err}"))
		})?;
		let records = cookies
			.iter()
			.map(core_cookie)
			.collect::<Result<Vec<_>>>()?;
		Ok(AuthState::with_cookies(records))
	}

	/// Waits for the logged-in UI marker to appear.
	///
	/// Absence after the element timeout means the session is not
	/// authenticated: either the cookies are stale or login never finished.
	pub async fn verify_logged_in(&self) -> Result<()> {
		self.wait_for(By::Css(LOGGED_IN_MARKER)).await.map_err(|_| {
			CliError::Auth(format!(
				"not logged in: '{LOGGED_IN_MARKER}' did not appear within {}s",
				self.element_timeout.as_secs()
			))
		})?;
		Ok(())
	}

	/// Confirms the current page shows the requested channel.
	pub async fn verify_channel(&self, channel: &str) -> Result<()> {
		let title = self.wait_for(By::Css(CHANNEL_TITLE)).await.map_err(|_| {
			CliError::Navigation(format!("channel '{channel}' did not load: no channel header"))
		})?;
		let text = title.text().await.map_err(|err| {
			CliError::Navigation(format!("could not read channel header: {err}"))
		})?;
		if text == UNKNOWN_CHANNEL_TITLE {
			return Err(CliError::Navigation(format!(
				"channel '{channel}' does not exist"
			)));
		}
		Ok(())
	}

	/// Types the message into the composer and clicks send.
	pub async fn post_message(&self, message: &str) -> Result<()> {
		let composer = self.wait_for(By::Css(COMPOSER)).await.map_err(|_| {
			CliError::Navigation(format!(
				"message composer '{COMPOSER}' not found; not authenticated or the UI changed"
			))
		})?;
		composer.send_keys(message).await.map_err(|err| {
			CliError::Navigation(format!("could not type into the composer: {err}"))
		})?;

		let send_button = self.wait_for(By::XPath(SEND_BUTTON)).await.map_err(|_| {
			CliError::Navigation("send button not found; the Slack UI may have changed".to_string())
		})?;
		send_button
			.click()
			.await
			.map_err(|err| CliError::Navigation(format!("send button click failed: {err}")))?;

		// Give the client time to actually deliver before the session dies.
		tokio::time::sleep(POST_SEND_SETTLE).await;
		Ok(())
	}

	/// Closes the browser session. Failures are logged, not propagated:
	/// by this point the run's outcome is already decided.
	pub async fn quit(self) {
		if let Err(err) = self.driver.quit().await {
			debug!(%err, "browser session did not shut down cleanly");
		}
	}

	async fn wait_for(&self, by: By) -> WebDriverResult<WebElement> {
		self.driver
			.query(by)
			.wait(self.element_timeout, POLL_INTERVAL)
			.first()
			.await
	}
}

/// Converts a stored cookie record into the driver's cookie type.
///
/// Both sides serialize to the WebDriver cookie JSON object, so the bridge
/// goes through serde rather than field-by-field copying; fields one side
/// does not model are dropped instead of breaking the build or the run.
fn webdriver_cookie(cookie: &Cookie) -> Result<thirtyfour::Cookie> {
	let value = serde_json::to_value(cookie)
		.map_err(|err| CliError::Auth(format!("unserializable cookie record: {err}")))?;
	serde_json::from_value(value)
		.map_err(|err| CliError::Auth(format!("cookie record has unexpected shape: {err}")))
}

/// Converts a driver cookie into the stored record type.
fn core_cookie(cookie: &thirtyfour::Cookie) -> Result<Cookie> {
	let value = serde_json::to_value(cookie).map_err(|err| {
		CliError::Environment(format!("driver returned unserializable cookie: {err}"))
	})?;
	serde_json::from_value(value).map_err(|err| {
		CliError::Environment(format!("driver cookie has unexpected shape: {err}"))
	})
}
