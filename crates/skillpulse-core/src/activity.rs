use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::snapshot::GithubEvent;

/// Repository placeholder for events that carry no repository.
pub const UNKNOWN_REPO: &str = "Unknown";

/// One timestamped activity entry (a GitHub event or a logged practice
/// session) as consumed by the insight generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo_name: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Source label, e.g. `GitHub` or `Practice`.
    pub platform: String,
}

impl From<&GithubEvent> for ActivityRecord {
    fn from(event: &GithubEvent) -> Self {
        Self {
            kind: event.kind.clone(),
            repo_name: Some(
                event
                    .repo
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_REPO.to_string()),
            ),
            timestamp: event.created_at,
            platform: Platform::Github.display_name().to_string(),
        }
    }
}
