//! Output types of the skill analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Lower-cased topic name → cumulative solved count, merged across
/// platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagVector(BTreeMap<String, u32>);

impl TagVector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to `tag`, keyed case-insensitively.
    pub fn add(&mut self, tag: &str, count: u32) {
        let entry = self.0.entry(tag.trim().to_lowercase()).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Count recorded for `tag` (case-insensitive), `0` when absent.
    #[must_use]
    pub fn count(&self, tag: &str) -> u32 {
        self.0.get(&tag.to_lowercase()).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Urgency of a DSA improvement item. Orders `High` before `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsaImprovement {
    pub topic: String,
    pub reason: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMatch {
    pub company: String,
    /// Weighted topic overlap in `[0, 100]`.
    pub score: u32,
    pub matched_topics: Vec<String>,
}

/// The engine's sole output. Built once per analysis and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysis {
    pub overall_score: u32,
    pub problem_solving_score: u32,
    pub project_building_score: u32,
    pub consistency_score: u32,
    pub collaboration_score: u32,
    pub total_problems_solved: u32,
    /// Solved count per platform; only strictly positive counts appear.
    /// Serialized under display names (`LeetCode`, `GeeksForGeeks`).
    #[serde(with = "display_name_keys")]
    pub platform_breakdown: BTreeMap<Platform, u32>,
    pub skill_distribution: BTreeMap<String, u32>,
    pub dsa_skills: TagVector,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub company_matches: Vec<CompanyMatch>,
    pub dsa_improvements: Vec<DsaImprovement>,
}

/// Map keys rendered as [`Platform::display_name`]. Lower-case keys are also
/// accepted when reading.
mod display_name_keys {
    use std::collections::BTreeMap;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::platform::Platform;

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<Platform, u32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(map.iter().map(|(p, n)| (p.display_name(), n)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<Platform, u32>, D::Error> {
        BTreeMap::<String, u32>::deserialize(deserializer)?
            .into_iter()
            .map(|(name, n)| {
                Platform::ALL
                    .into_iter()
                    .find(|p| p.display_name() == name || p.key() == name)
                    .map(|p| (p, n))
                    .ok_or_else(|| D::Error::custom(format!("unknown platform '{name}'")))
            })
            .collect()
    }
}
