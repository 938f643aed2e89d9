use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A supported coding platform.
///
/// Variant order is the canonical ordering used by every map keyed on
/// `Platform`, so serialized data sets list platforms in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Github,
    Leetcode,
    Codeforces,
    Codechef,
    Hackerrank,
    Gfg,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Github,
        Platform::Leetcode,
        Platform::Codeforces,
        Platform::Codechef,
        Platform::Hackerrank,
        Platform::Gfg,
    ];

    /// Lower-case key used in profile links and serialized maps.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Platform::Github => "github",
            Platform::Leetcode => "leetcode",
            Platform::Codeforces => "codeforces",
            Platform::Codechef => "codechef",
            Platform::Hackerrank => "hackerrank",
            Platform::Gfg => "gfg",
        }
    }

    /// Human-facing platform name used in narrative strings.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Github => "GitHub",
            Platform::Leetcode => "LeetCode",
            Platform::Codeforces => "Codeforces",
            Platform::Codechef => "CodeChef",
            Platform::Hackerrank => "HackerRank",
            Platform::Gfg => "GeeksForGeeks",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| CoreError::UnknownPlatform(s.to_string()))
    }
}
