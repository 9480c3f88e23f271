// Cookie and AuthState types for session persistence
//
// This module provides the records that survive between invocations:
// individual cookies in the WebDriver JSON shape, and the AuthState file
// that login mode writes and send mode restores.

use serde::{Deserialize, Serialize};

/// SameSite cookie attribute.
///
/// Controls when cookies are sent with cross-site requests.
///
/// See: https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Set-Cookie/SameSite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SameSite {
    /// Cookie is sent with same-site and cross-site requests
    #[serde(rename = "None")]
    None,
    /// Cookie is sent with same-site requests and cross-site top-level navigations
    #[default]
    #[serde(rename = "Lax")]
    Lax,
    /// Cookie is only sent with same-site requests
    #[serde(rename = "Strict")]
    Strict,
}

/// A browser cookie.
///
/// Field names and serialization follow the WebDriver cookie object, so
/// records pass between the saved session file and the driver without
/// translation. The tool treats the set as opaque: nothing here is
/// inspected or validated beyond (de)serialization.
///
/// See: https://www.w3.org/TR/webdriver/#cookies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    /// Cookie name
    pub name: String,

    /// Cookie value
    pub value: String,

    /// Domain the cookie is visible to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Path for the cookie (default: "/")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Unix timestamp in seconds. Absent for session cookies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<i64>,

    /// Whether the cookie requires HTTPS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    /// Whether the cookie is HTTP-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,

    /// SameSite attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_site: Option<SameSite>,
}

impl Cookie {
    /// Creates a new cookie with required fields.
    ///
    /// # Arguments
    ///
    /// * `name` - Cookie name
    /// * `value` - Cookie value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: None,
            expiry: None,
            secure: None,
            http_only: None,
            same_site: None,
        }
    }

    /// Sets the domain for the cookie
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the path for the cookie
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the expiration timestamp (Unix seconds)
    pub fn expiry(mut self, expiry: i64) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Sets whether the cookie requires HTTPS
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    /// Sets whether the cookie is HTTP-only
    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = Some(http_only);
        self
    }

    /// Sets the SameSite attribute
    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }
}

/// The persisted authentication state.
///
/// Captured from the browser after an interactive login and re-injected
/// into a fresh browser at the start of send mode. WebDriver exposes no
/// localStorage dump, so the state is the cookie set and nothing else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthState {
    /// All cookies captured from the browser session
    pub cookies: Vec<Cookie>,
}

impl AuthState {
    /// Creates an empty auth state
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an auth state holding the given cookies
    pub fn with_cookies(cookies: Vec<Cookie>) -> Self {
        Self { cookies }
    }

    /// Loads auth state from a JSON file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Saves auth state to a JSON file, overwriting any prior contents
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_new() {
        let cookie = Cookie::new("d", "xoxd-secret");
        assert_eq!(cookie.name, "d");
        assert_eq!(cookie.value, "xoxd-secret");
        assert!(cookie.domain.is_none());
    }

    #[test]
    fn test_cookie_builder() {
        let cookie = Cookie::new("d", "xoxd-secret")
            .domain(".slack.com")
            .path("/")
            .expiry(1234567890)
            .secure(true)
            .http_only(true)
            .same_site(SameSite::Lax);

        assert_eq!(cookie.domain, Some(".slack.com".to_string()));
        assert_eq!(cookie.path, Some("/".to_string()));
        assert_eq!(cookie.expiry, Some(1234567890));
        assert_eq!(cookie.secure, Some(true));
        assert_eq!(cookie.http_only, Some(true));
        assert_eq!(cookie.same_site, Some(SameSite::Lax));
    }

    #[test]
    fn test_cookie_serialization() {
        let cookie = Cookie::new("d", "xoxd-secret")
            .http_only(true)
            .same_site(SameSite::Lax);

        let json = serde_json::to_string(&cookie).unwrap();
        assert!(json.contains("\"name\":\"d\""));
        assert!(json.contains("\"httpOnly\":true"));
        assert!(json.contains("\"sameSite\":\"Lax\""));
        assert!(!json.contains("domain"));
    }

    #[test]
    fn test_same_site_serialization() {
        assert_eq!(serde_json::to_string(&SameSite::None).unwrap(), "\"None\"");
        assert_eq!(serde_json::to_string(&SameSite::Lax).unwrap(), "\"Lax\"");
        assert_eq!(
            serde_json::to_string(&SameSite::Strict).unwrap(),
            "\"Strict\""
        );
    }

    #[test]
    fn test_cookie_roundtrip() {
        let cookie = Cookie::new("d", "xoxd-secret")
            .domain(".slack.com")
            .secure(true)
            .http_only(true);

        let json = serde_json::to_string(&cookie).unwrap();
        let restored: Cookie = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.name, "d");
        assert_eq!(restored.value, "xoxd-secret");
        assert_eq!(restored.domain, Some(".slack.com".to_string()));
        assert_eq!(restored.secure, Some(true));
        assert_eq!(restored.http_only, Some(true));
        assert_eq!(restored.expiry, None);
    }

    #[test]
    fn test_cookie_accepts_unknown_fields() {
        // Drivers may report fields this tool does not model; they must not
        // break deserialization of a captured set.
        let json = r#"{"name":"d","value":"v","domain":".slack.com","storeId":"0"}"#;
        let cookie: Cookie = serde_json::from_str(json).unwrap();
        assert_eq!(cookie.name, "d");
        assert_eq!(cookie.domain, Some(".slack.com".to_string()));
    }

    #[test]
    fn test_auth_state_roundtrip() {
        let state = AuthState::with_cookies(vec![
            Cookie::new("d", "xoxd-secret").domain(".slack.com"),
            Cookie::new("b", "bvalue").domain(".slack.com").path("/"),
        ]);

        let json = serde_json::to_string_pretty(&state).unwrap();
        let restored: AuthState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.cookies.len(), 2);
        assert_eq!(restored.cookies[0].name, "d");
        assert_eq!(restored.cookies[1].path, Some("/".to_string()));
    }
}
