//! Normalized per-platform snapshots.
//!
//! Every adapter produces one [`PlatformSnapshot`] variant. The enum is
//! serialized untagged so the JSON shape stays `{ stats, tags?, profile?,
//! repos?, events?, ratingHistory? }`; the owning platform is carried by the
//! key the snapshot is stored under (see [`crate::PlatformDataSet`]).
//!
//! Numeric fields default to `0` and lists to empty when a stored snapshot
//! omits them or sets them to `null`, so partially populated payloads never
//! fail to load.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::platform::Platform;

/// Maximum number of tags a snapshot carries.
pub const MAX_TAGS: usize = 15;

const UNRATED: &str = "unrated";
const NOT_AVAILABLE: &str = "N/A";

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unrated<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| UNRATED.to_string()))
}

fn null_as_not_available<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .unwrap_or_else(|| NOT_AVAILABLE.to_string()))
}

/// A topic label with the number of problems solved under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCount {
    #[serde(deserialize_with = "null_as_default")]
    pub tag_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub problems_solved: u32,
}

impl TagCount {
    #[must_use]
    pub fn new(tag_name: impl Into<String>, problems_solved: u32) -> Self {
        Self {
            tag_name: tag_name.into(),
            problems_solved,
        }
    }

    /// Drop zero counts, sort descending by count and keep the top
    /// [`MAX_TAGS`]. The sort is stable, so ties keep their input order.
    #[must_use]
    pub fn rank(tags: impl IntoIterator<Item = TagCount>) -> Vec<TagCount> {
        let mut ranked: Vec<TagCount> = tags
            .into_iter()
            .filter(|t| t.problems_solved > 0)
            .collect();
        ranked.sort_by(|a, b| b.problems_solved.cmp(&a.problems_solved));
        ranked.truncate(MAX_TAGS);
        ranked
    }
}

// ---------------------------------------------------------------------------
// GitHub
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubProfile {
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub bio: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub public_repos: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub following: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GithubStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_repos: u32,
    /// Commits attached to the fetched push events.
    #[serde(deserialize_with = "null_as_default")]
    pub total_commits: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub top_languages: Vec<String>,
    /// Number of fetched public events. Bounded by the page size, so this is
    /// an approximation of recent activity rather than a day-windowed count.
    #[serde(deserialize_with = "null_as_default")]
    pub recent_activity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GithubRepo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub forks: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GithubEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    pub repo: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub profile: GithubProfile,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: GithubStats,
    #[serde(deserialize_with = "null_as_default")]
    pub repos: Vec<GithubRepo>,
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<GithubEvent>,
}

// ---------------------------------------------------------------------------
// LeetCode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeetcodeStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_solved: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub easy_solved: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub medium_solved: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub hard_solved: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ranking: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_questions: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeetcodeProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    pub real_name: Option<String>,
    pub about_me: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub reputation: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeetcodeSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub stats: LeetcodeStats,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<TagCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub profile: LeetcodeProfile,
}

// ---------------------------------------------------------------------------
// Codeforces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeforcesStats {
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub max_rating: i32,
    #[serde(deserialize_with = "null_as_unrated")]
    pub rank: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contests_participated: u32,
    /// Distinct accepted problems among the most recent submissions.
    #[serde(deserialize_with = "null_as_default")]
    pub problems_solved: u32,
}

impl Default for CodeforcesStats {
    fn default() -> Self {
        Self {
            rating: 0,
            max_rating: 0,
            rank: UNRATED.to_string(),
            contests_participated: 0,
            problems_solved: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RatingChange {
    #[serde(deserialize_with = "null_as_default")]
    pub contest_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub new_rating: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub old_rating: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: u32,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeforcesProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub handle: String,
    pub avatar: Option<String>,
    pub rank: Option<String>,
    pub max_rank: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeforcesSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub stats: CodeforcesStats,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<TagCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub rating_history: Vec<RatingChange>,
    #[serde(deserialize_with = "null_as_default")]
    pub profile: CodeforcesProfile,
}

// ---------------------------------------------------------------------------
// Stub platforms (no public API)
// ---------------------------------------------------------------------------

/// Profile block for platforms whose stats must be entered manually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodechefStats {
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i32,
    #[serde(deserialize_with = "null_as_not_available")]
    pub stars: String,
    #[serde(deserialize_with = "null_as_default")]
    pub problems_solved: u32,
}

impl Default for CodechefStats {
    fn default() -> Self {
        Self {
            rating: 0,
            stars: NOT_AVAILABLE.to_string(),
            problems_solved: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodechefSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub stats: CodechefStats,
    #[serde(deserialize_with = "null_as_default")]
    pub profile: StubProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HackerrankStats {
    #[serde(deserialize_with = "null_as_default")]
    pub badges: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub certificates: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HackerrankSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub stats: HackerrankStats,
    #[serde(deserialize_with = "null_as_default")]
    pub profile: StubProfile,
}

// ---------------------------------------------------------------------------
// GeeksForGeeks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GfgStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_solved: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub easy_solved: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub medium_solved: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub hard_solved: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub score: u32,
    #[serde(deserialize_with = "null_as_not_available")]
    pub institute_rank: String,
}

impl Default for GfgStats {
    fn default() -> Self {
        Self {
            total_solved: 0,
            easy_solved: 0,
            medium_solved: 0,
            hard_solved: 0,
            score: 0,
            institute_rank: NOT_AVAILABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GfgProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub institute_rank: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GfgSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub stats: GfgStats,
    #[serde(deserialize_with = "null_as_default")]
    pub profile: GfgProfile,
}

// ---------------------------------------------------------------------------
// PlatformSnapshot
// ---------------------------------------------------------------------------

/// Normalized statistics for one user on one platform at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlatformSnapshot {
    Github(GithubSnapshot),
    Leetcode(LeetcodeSnapshot),
    Codeforces(CodeforcesSnapshot),
    Codechef(CodechefSnapshot),
    Hackerrank(HackerrankSnapshot),
    Gfg(GfgSnapshot),
}

impl PlatformSnapshot {
    /// The platform this snapshot was produced for.
    #[must_use]
    pub fn platform(&self) -> Platform {
        match self {
            PlatformSnapshot::Github(_) => Platform::Github,
            PlatformSnapshot::Leetcode(_) => Platform::Leetcode,
            PlatformSnapshot::Codeforces(_) => Platform::Codeforces,
            PlatformSnapshot::Codechef(_) => Platform::Codechef,
            PlatformSnapshot::Hackerrank(_) => Platform::Hackerrank,
            PlatformSnapshot::Gfg(_) => Platform::Gfg,
        }
    }

    /// Decode a stored snapshot whose platform is known from its map key.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Snapshot`] if `value` does not match the shape of
    /// `platform`'s snapshot.
    pub fn from_value(platform: Platform, value: serde_json::Value) -> Result<Self, CoreError> {
        let wrap = |source| CoreError::Snapshot { platform, source };
        let snapshot = match platform {
            Platform::Github => PlatformSnapshot::Github(serde_json::from_value(value).map_err(wrap)?),
            Platform::Leetcode => {
                PlatformSnapshot::Leetcode(serde_json::from_value(value).map_err(wrap)?)
            }
            Platform::Codeforces => {
                PlatformSnapshot::Codeforces(serde_json::from_value(value).map_err(wrap)?)
            }
            Platform::Codechef => {
                PlatformSnapshot::Codechef(serde_json::from_value(value).map_err(wrap)?)
            }
            Platform::Hackerrank => {
                PlatformSnapshot::Hackerrank(serde_json::from_value(value).map_err(wrap)?)
            }
            Platform::Gfg => PlatformSnapshot::Gfg(serde_json::from_value(value).map_err(wrap)?),
        };
        Ok(snapshot)
    }

    /// Solved-problem count this platform contributes to the cross-platform
    /// total. Platforms without a solved metric contribute `0`.
    #[must_use]
    pub fn solved_count(&self) -> u32 {
        match self {
            PlatformSnapshot::Leetcode(lc) => lc.stats.total_solved,
            PlatformSnapshot::Codeforces(cf) => cf.stats.problems_solved,
            PlatformSnapshot::Gfg(gfg) => gfg.stats.total_solved,
            PlatformSnapshot::Codechef(cc) => cc.stats.problems_solved,
            PlatformSnapshot::Github(_) | PlatformSnapshot::Hackerrank(_) => 0,
        }
    }

    /// Real per-topic tag counts, if the platform exposes them.
    #[must_use]
    pub fn tags(&self) -> &[TagCount] {
        match self {
            PlatformSnapshot::Leetcode(lc) => &lc.tags,
            PlatformSnapshot::Codeforces(cf) => &cf.tags,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_drops_zero_counts_and_sorts_descending() {
        let ranked = TagCount::rank(vec![
            TagCount::new("math", 3),
            TagCount::new("greedy", 0),
            TagCount::new("graphs", 9),
        ]);
        assert_eq!(
            ranked,
            vec![TagCount::new("graphs", 9), TagCount::new("math", 3)]
        );
    }

    #[test]
    fn rank_caps_at_max_tags_and_keeps_tie_order() {
        let tags = (0..20).map(|i| TagCount::new(format!("t{i}"), 1));
        let ranked = TagCount::rank(tags);
        assert_eq!(ranked.len(), MAX_TAGS);
        assert_eq!(ranked[0].tag_name, "t0");
        assert_eq!(ranked[14].tag_name, "t14");
    }

    #[test]
    fn from_value_defaults_missing_fields() {
        let value = serde_json::json!({ "stats": { "totalSolved": 42 } });
        let snapshot = PlatformSnapshot::from_value(Platform::Leetcode, value).unwrap();
        assert_eq!(snapshot.platform(), Platform::Leetcode);
        assert_eq!(snapshot.solved_count(), 42);
        assert!(snapshot.tags().is_empty());
    }

    #[test]
    fn from_value_rejects_wrong_shape() {
        let value = serde_json::json!({ "stats": { "totalRepos": "many" } });
        let err = PlatformSnapshot::from_value(Platform::Github, value).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Snapshot {
                platform: Platform::Github,
                ..
            }
        ));
    }

    #[test]
    fn explicit_nulls_load_as_defaults() {
        let value = serde_json::json!({
            "stats": { "totalSolved": 30, "hardSolved": null },
            "tags": null,
            "profile": { "reputation": null, "username": null }
        });
        let PlatformSnapshot::Leetcode(lc) =
            PlatformSnapshot::from_value(Platform::Leetcode, value).unwrap()
        else {
            panic!("expected a LeetCode snapshot");
        };
        assert_eq!(lc.stats.total_solved, 30);
        assert_eq!(lc.stats.hard_solved, 0);
        assert_eq!(lc.profile.reputation, 0);
        assert!(lc.profile.username.is_empty());
        assert!(lc.tags.is_empty());
    }

    #[test]
    fn null_labels_keep_their_placeholders() {
        let cf = PlatformSnapshot::from_value(
            Platform::Codeforces,
            serde_json::json!({ "stats": { "rank": null, "rating": null }, "ratingHistory": null }),
        )
        .unwrap();
        let PlatformSnapshot::Codeforces(cf) = cf else {
            panic!("expected a Codeforces snapshot");
        };
        assert_eq!(cf.stats.rank, "unrated");
        assert_eq!(cf.stats.rating, 0);

        let gfg = PlatformSnapshot::from_value(
            Platform::Gfg,
            serde_json::json!({ "stats": null, "profile": null }),
        )
        .unwrap();
        let PlatformSnapshot::Gfg(gfg) = gfg else {
            panic!("expected a GFG snapshot");
        };
        assert_eq!(gfg.stats.institute_rank, "N/A");

        let chef = PlatformSnapshot::from_value(
            Platform::Codechef,
            serde_json::json!({ "stats": { "stars": null } }),
        )
        .unwrap();
        let PlatformSnapshot::Codechef(chef) = chef else {
            panic!("expected a CodeChef snapshot");
        };
        assert_eq!(chef.stats.stars, "N/A");
    }

    #[test]
    fn codeforces_stats_default_rank_is_unrated() {
        assert_eq!(CodeforcesStats::default().rank, "unrated");
    }

    #[test]
    fn stub_snapshot_serializes_without_tags() {
        let snapshot = PlatformSnapshot::Hackerrank(HackerrankSnapshot::default());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("tags").is_none());
        assert_eq!(json["stats"]["badges"], 0);
    }
}
