//! Command-line surface for `slackpost`.
//!
//! The mode is carried by the flags themselves: `--login` enters login
//! mode; otherwise `--workspace`, `--channel`, and `--message` are all
//! required and the tool posts. clap enforces the exclusion in both
//! directions, so contradictory or incomplete invocations die as usage
//! errors before anything touches a browser.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "slackpost")]
#[command(about = "Post messages to Slack channels through a cookie-backed browser session")]
#[command(version)]
pub struct Cli {
	/// Log in manually in the opened browser and save session cookies
	#[arg(long, conflicts_with_all = ["workspace", "channel", "message"])]
	pub login: bool,

	/// Workspace URL, e.g. https://company.slack.com
	#[arg(long, value_name = "URL", required_unless_present = "login")]
	pub workspace: Option<String>,

	/// Id of the channel to post into
	#[arg(long, value_name = "ID", required_unless_present = "login")]
	pub channel: Option<String>,

	/// Message text; give several and one is chosen at random
	#[arg(long, value_name = "TEXT", num_args = 1.., required_unless_present = "login")]
	pub message: Vec<String>,

	/// Path of the saved session cookie file
	#[arg(long, value_name = "FILE", default_value = "slack-auth.json")]
	pub session_file: PathBuf,

	/// WebDriver endpoint the browser is driven through (e.g. chromedriver)
	#[arg(long, value_name = "URL", default_value = "http://localhost:9515")]
	pub webdriver_url: String,

	/// Seconds to wait for page elements before giving up
	#[arg(long, value_name = "SECONDS", default_value_t = 30)]
	pub timeout: u64,

	/// Seconds before login mode saves cookies without waiting for Enter
	#[arg(long, value_name = "SECONDS", default_value_t = 300)]
	pub login_timeout: u64,

	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn login_mode_needs_no_other_flags() {
		let cli = Cli::try_parse_from(["slackpost", "--login"]).unwrap();
		assert!(cli.login);
		assert!(cli.workspace.is_none());
	}

	#[test]
	fn send_mode_parses_with_all_flags() {
		let cli = Cli::try_parse_from([
			"slackpost",
			"--workspace",
			"https://acme.slack.com",
			"--channel",
			"C024BE91L",
			"--message",
			"hello",
		])
		.unwrap();
		assert!(!cli.login);
		assert_eq!(cli.workspace.as_deref(), Some("https://acme.slack.com"));
		assert_eq!(cli.channel.as_deref(), Some("C024BE91L"));
		assert_eq!(cli.message, vec!["hello"]);
	}

	#[test]
	fn multiple_messages_collect_into_the_pool() {
		let cli = Cli::try_parse_from([
			"slackpost",
			"--workspace",
			"https://acme.slack.com",
			"--channel",
			"C024BE91L",
			"--message",
			"a",
			"b",
			"c",
		])
		.unwrap();
		assert_eq!(cli.message, vec!["a", "b", "c"]);
	}

	#[test]
	fn send_mode_requires_workspace_channel_and_message() {
		assert!(Cli::try_parse_from(["slackpost"]).is_err());
		assert!(
			Cli::try_parse_from(["slackpost", "--workspace", "https://acme.slack.com"]).is_err()
		);
		assert!(
			Cli::try_parse_from([
				"slackpost",
				"--workspace",
				"https://acme.slack.com",
				"--message",
				"hello",
			])
			.is_err()
		);
	}

	#[test]
	fn login_conflicts_with_send_flags() {
		assert!(
			Cli::try_parse_from([
				"slackpost",
				"--login",
				"--workspace",
				"https://acme.slack.com",
			])
			.is_err()
		);
		assert!(Cli::try_parse_from(["slackpost", "--login", "--message", "hello"]).is_err());
	}

	#[test]
	fn defaults_are_applied() {
		let cli = Cli::try_parse_from(["slackpost", "--login"]).unwrap();
		assert_eq!(cli.session_file, PathBuf::from("slack-auth.json"));
		assert_eq!(cli.webdriver_url, "http://localhost:9515");
		assert_eq!(cli.timeout, 30);
		assert_eq!(cli.login_timeout, 300);
	}
}
