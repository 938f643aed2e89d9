//! Codeforces REST adapter: `user.info`, `user.rating` and `user.status`.
//!
//! Every Codeforces response is wrapped in a `{"status": "OK", "result": ...}`
//! envelope. Only the `user.info` lookup is required; rating history and
//! submissions degrade to empty lists when unavailable.

use std::collections::HashSet;

use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use skillpulse_core::{
    CodeforcesProfile, CodeforcesSnapshot, CodeforcesStats, Platform, PlatformSnapshot,
    RatingChange, TagCount,
};

use crate::adapter::PlatformAdapter;
use crate::client::{empty_on_status, endpoint_url, PlatformClient};
use crate::error::PlatformError;
use crate::normalize::tally;

const SUBMISSION_COUNT: &str = "100";
const MAX_RATING_HISTORY: usize = 20;
const ACCEPTED: &str = "OK";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Envelope shared by every Codeforces API method.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub status: String,
    pub comment: Option<String>,
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct UserInfo {
    pub handle: String,
    pub rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub rank: Option<String>,
    pub max_rank: Option<String>,
    pub title_photo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RatingEntry {
    pub contest_name: String,
    pub rank: u32,
    pub rating_update_time_seconds: i64,
    pub old_rating: i32,
    pub new_rating: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Submission {
    pub problem: Problem,
    pub verdict: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Problem {
    pub contest_id: Option<i64>,
    pub index: String,
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

pub struct CodeforcesAdapter {
    client: PlatformClient,
}

impl CodeforcesAdapter {
    #[must_use]
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }

    fn method_url(&self, method: &str) -> Result<reqwest::Url, PlatformError> {
        endpoint_url(&self.client.endpoints().codeforces, &["api", method])
    }

    /// Fetch a secondary list. Non-2xx or a non-`OK` envelope yields an
    /// empty list; transport and payload errors still propagate.
    async fn optional_list<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, PlatformError> {
        let request = self.client.get(self.method_url(method)?).query(query);
        let envelope: Option<Envelope<Vec<T>>> =
            empty_on_status(self.client.send_json(request, method).await.map(Some), method)?;

        match envelope {
            Some(envelope) if envelope.is_ok() => Ok(envelope.result.unwrap_or_default()),
            Some(envelope) => {
                tracing::debug!(
                    method,
                    comment = envelope.comment.as_deref().unwrap_or(""),
                    "codeforces lookup not OK, using empty result"
                );
                Ok(Vec::new())
            }
            None => Ok(Vec::new()),
        }
    }
}

impl PlatformAdapter for CodeforcesAdapter {
    fn platform(&self) -> Platform {
        Platform::Codeforces
    }

    async fn fetch_snapshot(&self, handle: &str) -> Result<PlatformSnapshot, PlatformError> {
        let info_request = self
            .client
            .get(self.method_url("user.info")?)
            .query(&[("handles", handle)]);
        let info: Envelope<Vec<UserInfo>> =
            self.client.send_json(info_request, "user.info").await?;
        if !info.is_ok() {
            return Err(PlatformError::Api(format!(
                "codeforces user.info failed for '{handle}': {}",
                info.comment.as_deref().unwrap_or(&info.status)
            )));
        }
        let Some(user) = info.result.and_then(|users| users.into_iter().next()) else {
            return Err(PlatformError::Api(format!(
                "codeforces user '{handle}' not found"
            )));
        };

        let contests: Vec<RatingEntry> = self
            .optional_list("user.rating", &[("handle", handle)])
            .await?;
        let submissions: Vec<Submission> = self
            .optional_list(
                "user.status",
                &[("handle", handle), ("from", "1"), ("count", SUBMISSION_COUNT)],
            )
            .await?;

        Ok(PlatformSnapshot::Codeforces(normalize(
            user,
            contests,
            &submissions,
        )))
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Build the Codeforces snapshot from user info, rating history and recent
/// submissions.
pub(crate) fn normalize(
    user: UserInfo,
    contests: Vec<RatingEntry>,
    submissions: &[Submission],
) -> CodeforcesSnapshot {
    let accepted: Vec<&Submission> = submissions
        .iter()
        .filter(|s| s.verdict.as_deref() == Some(ACCEPTED))
        .collect();

    let solved: HashSet<(Option<i64>, &str)> = accepted
        .iter()
        .map(|s| (s.problem.contest_id, s.problem.index.as_str()))
        .collect();

    let tags = TagCount::rank(
        tally(accepted.iter().flat_map(|s| s.problem.tags.iter()))
            .into_iter()
            .map(|(tag, count)| TagCount::new(tag, count)),
    );

    let contests_participated = u32::try_from(contests.len()).unwrap_or(u32::MAX);
    let skip = contests.len().saturating_sub(MAX_RATING_HISTORY);
    let rating_history = contests
        .into_iter()
        .skip(skip)
        .map(|c| RatingChange {
            date: DateTime::from_timestamp(c.rating_update_time_seconds, 0)
                .map(|dt| dt.date_naive()),
            contest_name: c.contest_name,
            new_rating: c.new_rating,
            old_rating: c.old_rating,
            rank: c.rank,
        })
        .collect();

    let stats = CodeforcesStats {
        rating: user.rating.unwrap_or(0),
        max_rating: user.max_rating.unwrap_or(0),
        rank: user
            .rank
            .clone()
            .unwrap_or_else(|| CodeforcesStats::default().rank),
        contests_participated,
        problems_solved: u32::try_from(solved.len()).unwrap_or(u32::MAX),
    };

    CodeforcesSnapshot {
        stats,
        tags,
        rating_history,
        profile: CodeforcesProfile {
            handle: user.handle,
            avatar: user.title_photo,
            rank: user.rank,
            max_rank: user.max_rank,
        },
    }
}
