//! GeeksForGeeks adapter backed by a community statistics endpoint.
//!
//! The endpoint's field names vary between deployments, so the payload is
//! read as a loose JSON value with per-field fallbacks.

use serde_json::Value;
use skillpulse_core::{GfgProfile, GfgSnapshot, GfgStats, Platform, PlatformSnapshot};

use crate::adapter::PlatformAdapter;
use crate::client::{endpoint_url, PlatformClient};
use crate::error::PlatformError;
use crate::normalize::first_nonzero;

pub const UNAVAILABLE_MESSAGE: &str = "Could not fetch GFG data. Please check your username.";
const NO_RANK: &str = "N/A";

pub struct GfgAdapter {
    client: PlatformClient,
}

impl GfgAdapter {
    #[must_use]
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }
}

impl PlatformAdapter for GfgAdapter {
    fn platform(&self) -> Platform {
        Platform::Gfg
    }

    /// A non-2xx answer is a failure. Transport and payload failures degrade
    /// to a zeroed placeholder carrying [`UNAVAILABLE_MESSAGE`].
    async fn fetch_snapshot(&self, handle: &str) -> Result<PlatformSnapshot, PlatformError> {
        let url = endpoint_url(&self.client.endpoints().gfg, &[])?;
        let request = self.client.get(url).query(&[("userName", handle)]);

        let snapshot = match self.client.send_json::<Value>(request, "gfg stats").await {
            Ok(payload) => normalize(handle, &payload),
            Err(e @ PlatformError::UnexpectedStatus { .. }) => return Err(e),
            Err(e) => {
                tracing::warn!(
                    platform = %Platform::Gfg,
                    handle,
                    error = %e,
                    "gfg fetch failed, returning placeholder snapshot"
                );
                unavailable(handle)
            }
        };
        Ok(PlatformSnapshot::Gfg(snapshot))
    }
}

/// Build the GFG snapshot from the raw statistics payload.
pub(crate) fn normalize(handle: &str, payload: &Value) -> GfgSnapshot {
    let institute_rank = institute_rank(payload.get("instituteRank"));
    GfgSnapshot {
        stats: GfgStats {
            total_solved: first_nonzero(payload, &["totalProblemsSolved"]),
            easy_solved: first_nonzero(payload, &["Easy", "school"]),
            medium_solved: first_nonzero(payload, &["Medium", "basic"]),
            hard_solved: first_nonzero(payload, &["Hard"]),
            score: first_nonzero(payload, &["codingScore"]),
            institute_rank: institute_rank.clone(),
        },
        profile: GfgProfile {
            username: handle.to_string(),
            institute_rank,
            message: None,
        },
    }
}

/// Placeholder returned when the statistics endpoint is unreachable.
#[must_use]
pub fn unavailable(handle: &str) -> GfgSnapshot {
    GfgSnapshot {
        stats: GfgStats::default(),
        profile: GfgProfile {
            username: handle.to_string(),
            institute_rank: NO_RANK.to_string(),
            message: Some(UNAVAILABLE_MESSAGE.to_string()),
        },
    }
}

fn institute_rank(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => n.to_string(),
        _ => NO_RANK.to_string(),
    }
}
