use std::path::PathBuf;

/// Base URLs of the upstream platform APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub github: String,
    pub leetcode: String,
    pub codeforces: String,
    pub gfg: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            github: "https://api.github.com".to_string(),
            leetcode: "https://leetcode.com".to_string(),
            codeforces: "https://codeforces.com".to_string(),
            gfg: "https://geeks-for-geeks-stats-api.vercel.app".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every platform at the same base URL (useful with a mock server).
    #[must_use]
    pub fn all(base_url: &str) -> Self {
        Self {
            github: base_url.to_string(),
            leetcode: base_url.to_string(),
            codeforces: base_url.to_string(),
            gfg: base_url.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub profiles_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub github_token: Option<String>,
    pub endpoints: Endpoints,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("profiles_path", &self.profiles_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "[redacted]"),
            )
            .field("endpoints", &self.endpoints)
            .finish()
    }
}
