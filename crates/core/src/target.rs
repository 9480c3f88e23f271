// Typed posting targets: a validated workspace origin plus channel reference.
//
// Replaces raw workspace/channel strings with types that are checked once,
// up front, before any browser is involved. Channel ids stay opaque; a bad
// id only surfaces when the channel page fails to resolve.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use url::Url;

use crate::error::{Error, Result};

/// Shape a workspace origin must have, matching what Slack accepts at signin.
static WORKSPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://[\w\-]+(\.enterprise)?\.slack\.com$").expect("workspace pattern compiles")
});

/// A validated workspace origin like `https://company.slack.com`.
#[derive(Debug, Clone)]
pub struct WorkspaceUrl {
    url: Url,
}

impl WorkspaceUrl {
    /// Parses and validates a workspace origin.
    ///
    /// Accepts `https://<name>.slack.com` and
    /// `https://<name>.enterprise.slack.com`; everything else is rejected
    /// before a browser ever launches.
    pub fn parse(raw: &str) -> Result<Self> {
        if !WORKSPACE_RE.is_match(raw) {
            return Err(Error::InvalidWorkspaceUrl(raw.to_string()));
        }
        let url = Url::parse(raw).map_err(|_| Error::InvalidWorkspaceUrl(raw.to_string()))?;
        Ok(Self { url })
    }

    /// The workspace origin as a URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for WorkspaceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Where a message is posted: a workspace plus a channel id within it.
#[derive(Debug, Clone)]
pub struct PostTarget {
    workspace: WorkspaceUrl,
    channel: String,
    channel_url: Url,
}

impl PostTarget {
    /// Builds a target, validating the workspace URL and precomputing the
    /// channel view URL so every failure is reported before navigation.
    pub fn new(workspace: &str, channel: impl Into<String>) -> Result<Self> {
        let workspace = WorkspaceUrl::parse(workspace)?;
        let channel = channel.into();
        let channel_url = workspace
            .url()
            .join(&format!("messages/{channel}/"))
            .map_err(|_| Error::InvalidChannelRef(channel.clone()))?;
        Ok(Self {
            workspace,
            channel,
            channel_url,
        })
    }

    pub fn workspace(&self) -> &WorkspaceUrl {
        &self.workspace
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// URL of the channel view within the workspace client
    pub fn channel_url(&self) -> &Url {
        &self.channel_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_workspace() {
        let ws = WorkspaceUrl::parse("https://acme.slack.com").unwrap();
        assert_eq!(ws.url().host_str(), Some("acme.slack.com"));
    }

    #[test]
    fn accepts_enterprise_workspace() {
        assert!(WorkspaceUrl::parse("https://acme.enterprise.slack.com").is_ok());
    }

    #[test]
    fn rejects_non_slack_hosts() {
        for raw in [
            "https://example.com",
            "https://slack.com",
            "http://acme.slack.com",
            "https://acme.slack.com/extra",
            "https://acme.slack.com.evil.com",
            "not a url",
        ] {
            assert!(
                matches!(WorkspaceUrl::parse(raw), Err(Error::InvalidWorkspaceUrl(_))),
                "expected rejection for {raw}"
            );
        }
    }

    #[test]
    fn channel_url_joins_workspace_and_id() {
        let target = PostTarget::new("https://acme.slack.com", "C024BE91L").unwrap();
        assert_eq!(
            target.channel_url().as_str(),
            "https://acme.slack.com/messages/C024BE91L/"
        );
    }

    #[test]
    fn channel_id_is_not_interpreted() {
        // Ids are opaque; a nonsense id still forms a URL and fails later,
        // at navigation time.
        let target = PostTarget::new("https://acme.slack.com", "definitely-not-a-channel").unwrap();
        assert!(
            target
                .channel_url()
                .as_str()
                .ends_with("/messages/definitely-not-a-channel/")
        );
    }
}
