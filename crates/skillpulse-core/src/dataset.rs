//! The per-user collection of platform snapshots.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::platform::Platform;
use crate::snapshot::{
    CodechefSnapshot, CodeforcesSnapshot, GfgSnapshot, GithubSnapshot, HackerrankSnapshot,
    LeetcodeSnapshot, PlatformSnapshot,
};

/// Snapshots keyed by platform.
///
/// A platform is absent when the user never linked it, and present with
/// `None` when it was attempted but could not be fetched. Both cases count
/// as "not connected" for scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformDataSet {
    entries: BTreeMap<Platform, Option<PlatformSnapshot>>,
}

impl PlatformDataSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `platform`, replacing any earlier entry.
    pub fn insert(&mut self, platform: Platform, snapshot: Option<PlatformSnapshot>) {
        self.entries.insert(platform, snapshot);
    }

    /// Whether `platform` was attempted, regardless of outcome.
    #[must_use]
    pub fn contains(&self, platform: Platform) -> bool {
        self.entries.contains_key(&platform)
    }

    /// The snapshot for `platform`, if it was attempted and succeeded.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&PlatformSnapshot> {
        self.entries.get(&platform).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every attempted platform with its outcome, in platform order.
    pub fn entries(&self) -> impl Iterator<Item = (Platform, Option<&PlatformSnapshot>)> {
        self.entries.iter().map(|(p, s)| (*p, s.as_ref()))
    }

    /// Only the successfully fetched snapshots, in platform order.
    pub fn snapshots(&self) -> impl Iterator<Item = &PlatformSnapshot> {
        self.entries.values().filter_map(Option::as_ref)
    }

    #[must_use]
    pub fn github(&self) -> Option<&GithubSnapshot> {
        match self.get(Platform::Github)? {
            PlatformSnapshot::Github(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn leetcode(&self) -> Option<&LeetcodeSnapshot> {
        match self.get(Platform::Leetcode)? {
            PlatformSnapshot::Leetcode(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn codeforces(&self) -> Option<&CodeforcesSnapshot> {
        match self.get(Platform::Codeforces)? {
            PlatformSnapshot::Codeforces(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn codechef(&self) -> Option<&CodechefSnapshot> {
        match self.get(Platform::Codechef)? {
            PlatformSnapshot::Codechef(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn hackerrank(&self) -> Option<&HackerrankSnapshot> {
        match self.get(Platform::Hackerrank)? {
            PlatformSnapshot::Hackerrank(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn gfg(&self) -> Option<&GfgSnapshot> {
        match self.get(Platform::Gfg)? {
            PlatformSnapshot::Gfg(s) => Some(s),
            _ => None,
        }
    }
}

impl FromIterator<(Platform, Option<PlatformSnapshot>)> for PlatformDataSet {
    fn from_iter<I: IntoIterator<Item = (Platform, Option<PlatformSnapshot>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for PlatformDataSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PlatformDataSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<Platform, Option<serde_json::Value>> =
            BTreeMap::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(platform, value)| -> Result<_, D::Error> {
                let snapshot = value
                    .map(|v| PlatformSnapshot::from_value(platform, v))
                    .transpose()
                    .map_err(<D::Error as serde::de::Error>::custom)?;
                Ok((platform, snapshot))
            })
            .collect()
    }
}
