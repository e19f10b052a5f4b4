//! Constructor-time configuration for `JikanClient`.

/// Public Jikan v4 origin.
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Value sent in the `Host` header.
pub const DEFAULT_HOST: &str = "api.jikan.moe";

/// Value sent in the `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub host: String,
    pub user_agent: String,
    /// When false, TLS certificates of the origin are not verified.
    pub validate_certificates: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            validate_certificates: true,
        }
    }
}

impl ClientConfig {
    /// Point the client at another origin. A trailing `/` is stripped so that
    /// endpoint paths, which always start with `/`, join cleanly.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Disable certificate validation. Only meant for parity with deployments
    /// that sit behind an interception proxy with a self-signed certificate.
    pub fn accept_invalid_certs(mut self) -> Self {
        self.validate_certificates = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_certificates() {
        let config = ClientConfig::default();
        assert!(config.validate_certificates);
        assert_eq!(config.base_url, "https://api.jikan.moe/v4");
        assert_eq!(config.host, "api.jikan.moe");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::default().with_base_url("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn opt_out_of_certificate_validation() {
        let config = ClientConfig::default().accept_invalid_certs();
        assert!(!config.validate_certificates);
    }
}
