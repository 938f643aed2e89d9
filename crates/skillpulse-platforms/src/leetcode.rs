//! LeetCode GraphQL adapter.

use serde::Deserialize;
use serde_json::json;
use skillpulse_core::{
    LeetcodeProfile, LeetcodeSnapshot, LeetcodeStats, Platform, PlatformSnapshot, TagCount,
};

use crate::adapter::PlatformAdapter;
use crate::client::{endpoint_url, PlatformClient};
use crate::error::PlatformError;

const PROFILE_QUERY: &str = r"
query userProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile { ranking realName aboutMe reputation }
    submitStatsGlobal {
      acSubmissionNum { difficulty count }
    }
    tagProblemCounts {
      advanced { tagName problemsSolved }
      fundamental { tagName problemsSolved }
    }
  }
  allQuestionsCount { difficulty count }
}
";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GraphqlResponse {
    pub data: Option<ProfileData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ProfileData {
    pub matched_user: Option<MatchedUser>,
    pub all_questions_count: Vec<DifficultyCount>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct MatchedUser {
    pub username: String,
    pub profile: Option<UserProfile>,
    pub submit_stats_global: Option<SubmitStats>,
    pub tag_problem_counts: Option<TagProblemCounts>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct UserProfile {
    pub ranking: Option<u64>,
    pub real_name: Option<String>,
    pub about_me: Option<String>,
    pub reputation: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SubmitStats {
    pub ac_submission_num: Vec<DifficultyCount>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DifficultyCount {
    pub difficulty: String,
    pub count: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TagProblemCounts {
    pub advanced: Option<Vec<TagCount>>,
    pub fundamental: Option<Vec<TagCount>>,
}

fn count_for(counts: &[DifficultyCount], difficulty: &str) -> u32 {
    counts
        .iter()
        .find(|c| c.difficulty == difficulty)
        .map_or(0, |c| c.count)
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

pub struct LeetcodeAdapter {
    client: PlatformClient,
}

impl LeetcodeAdapter {
    #[must_use]
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }
}

impl PlatformAdapter for LeetcodeAdapter {
    fn platform(&self) -> Platform {
        Platform::Leetcode
    }

    async fn fetch_snapshot(&self, handle: &str) -> Result<PlatformSnapshot, PlatformError> {
        let url = endpoint_url(&self.client.endpoints().leetcode, &["graphql"])?;
        let body = json!({
            "query": PROFILE_QUERY,
            "variables": { "username": handle },
        });
        let response: GraphqlResponse = self
            .client
            .send_json(self.client.post(url).json(&body), "leetcode profile")
            .await?;

        let data = response.data.unwrap_or_default();
        let Some(user) = data.matched_user else {
            return Err(PlatformError::Api(format!(
                "leetcode user '{handle}' not found"
            )));
        };

        Ok(PlatformSnapshot::Leetcode(normalize(
            user,
            &data.all_questions_count,
        )))
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Build the LeetCode snapshot from a matched user and the global question
/// counts.
pub(crate) fn normalize(user: MatchedUser, all_questions: &[DifficultyCount]) -> LeetcodeSnapshot {
    let submissions = user
        .submit_stats_global
        .map(|s| s.ac_submission_num)
        .unwrap_or_default();
    let easy = count_for(&submissions, "Easy");
    let medium = count_for(&submissions, "Medium");
    let hard = count_for(&submissions, "Hard");

    let buckets = user.tag_problem_counts.unwrap_or_default();
    let tags = TagCount::rank(
        buckets
            .fundamental
            .unwrap_or_default()
            .into_iter()
            .chain(buckets.advanced.unwrap_or_default()),
    );

    let profile = user.profile.unwrap_or_default();
    LeetcodeSnapshot {
        stats: LeetcodeStats {
            total_solved: easy.saturating_add(medium).saturating_add(hard),
            easy_solved: easy,
            medium_solved: medium,
            hard_solved: hard,
            ranking: profile.ranking.unwrap_or(0),
            total_questions: count_for(all_questions, "All"),
        },
        tags,
        profile: LeetcodeProfile {
            username: user.username,
            real_name: profile.real_name,
            about_me: profile.about_me,
            reputation: profile.reputation.unwrap_or(0),
        },
    }
}
