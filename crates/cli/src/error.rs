use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Failure taxonomy for a slackpost invocation.
///
/// Every failure is fatal for the current run; nothing is retried. The
/// variants exist so callers and tests can discriminate failure kinds, and
/// each carries the human-readable detail that reaches the operator.
#[derive(Debug, Error)]
pub enum CliError {
	/// Arguments passed flag parsing but are unusable (bad workspace URL,
	/// empty message pool). Reported before any browser interaction.
	#[error("usage error: {0}")]
	Usage(String),

	/// The WebDriver endpoint or browser session could not be used.
	#[error("environment error: {0}")]
	Environment(String),

	/// No usable session: never logged in, the session file is unreadable,
	/// or the saved cookies no longer authenticate.
	#[error("authentication error: {0}")]
	Auth(String),

	/// Navigation failed or the page did not have the expected structure
	/// (bad workspace/channel reference, or the Slack UI changed).
	#[error("navigation error: {0}")]
	Navigation(String),
}

impl CliError {
	/// Process exit code for this failure class.
	pub fn exit_code(&self) -> i32 {
		match self {
			CliError::Usage(_) => 2,
			_ => 1,
		}
	}
}

impl From<slackpost_core::Error> for CliError {
	fn from(err: slackpost_core::Error) -> Self {
		use slackpost_core::Error;

		match err {
			Error::InvalidWorkspaceUrl(_) | Error::InvalidChannelRef(_) | Error::EmptyMessagePool => {
				CliError::Usage(err.to_string())
			}
			// Session-file trouble means the operator has to log in again.
			Error::Io(_) | Error::Json(_) => CliError::Auth(err.to_string()),
		}
	}
}
