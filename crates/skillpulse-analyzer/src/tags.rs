//! Cross-platform tag aggregation.

use std::collections::BTreeMap;

use skillpulse_core::{GithubSnapshot, PlatformDataSet, TagVector};

/// Estimated topic share (percent) of GeeksForGeeks solves, which the
/// platform reports only as totals.
pub const GFG_TOPIC_SHARE: &[(&str, u32)] = &[
    ("arrays", 20),
    ("string", 10),
    ("trees", 10),
    ("dynamic programming", 8),
    ("sorting", 8),
    ("math", 7),
];

/// Weight each GitHub top language adds to the skill distribution.
pub const LANGUAGE_WEIGHT: u32 = 15;

/// Merge every platform's topic counts into one case-insensitive vector.
///
/// Real tag lists are summed as-is; GeeksForGeeks totals are spread over
/// [`GFG_TOPIC_SHARE`] (rounded down). The result does not depend on the
/// order platforms are visited in.
#[must_use]
pub fn merge_tags(data: &PlatformDataSet) -> TagVector {
    let mut tags = TagVector::new();

    for snapshot in data.snapshots() {
        for tag in snapshot.tags() {
            tags.add(&tag.tag_name, tag.problems_solved);
        }
    }

    if let Some(gfg) = data.gfg() {
        let total = gfg.stats.total_solved;
        if total > 0 {
            for (topic, percent) in GFG_TOPIC_SHARE {
                let estimate = u64::from(total) * u64::from(*percent) / 100;
                tags.add(topic, u32::try_from(estimate).unwrap_or(u32::MAX));
            }
        }
    }

    tags
}

/// Topic counts plus a fixed weight per GitHub top language.
///
/// Language names keep their original spelling.
#[must_use]
pub fn skill_distribution(
    tags: &TagVector,
    github: Option<&GithubSnapshot>,
) -> BTreeMap<String, u32> {
    let mut distribution: BTreeMap<String, u32> =
        tags.iter().map(|(tag, n)| (tag.to_string(), n)).collect();

    for language in github.map_or(&[][..], |gh| gh.stats.top_languages.as_slice()) {
        let entry = distribution.entry(language.clone()).or_insert(0);
        *entry = entry.saturating_add(LANGUAGE_WEIGHT);
    }

    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillpulse_core::{
        GfgSnapshot, GfgStats, GithubStats, LeetcodeSnapshot, Platform, PlatformSnapshot,
        TagCount,
    };

    fn leetcode(tags: Vec<TagCount>) -> PlatformSnapshot {
        PlatformSnapshot::Leetcode(LeetcodeSnapshot {
            tags,
            ..LeetcodeSnapshot::default()
        })
    }

    #[test]
    fn gfg_totals_are_spread_with_floor() {
        let mut data = PlatformDataSet::new();
        data.insert(
            Platform::Gfg,
            Some(PlatformSnapshot::Gfg(GfgSnapshot {
                stats: GfgStats {
                    total_solved: 57,
                    ..GfgStats::default()
                },
                ..GfgSnapshot::default()
            })),
        );
        let tags = merge_tags(&data);
        assert_eq!(tags.count("arrays"), 11);
        assert_eq!(tags.count("string"), 5);
        assert_eq!(tags.count("trees"), 5);
        assert_eq!(tags.count("dynamic programming"), 4);
        assert_eq!(tags.count("sorting"), 4);
        assert_eq!(tags.count("math"), 3);
        assert_eq!(tags.len(), 6);
    }

    #[test]
    fn tags_from_platforms_merge_case_insensitively() {
        let mut data = PlatformDataSet::new();
        data.insert(
            Platform::Leetcode,
            Some(leetcode(vec![TagCount::new("Math", 4)])),
        );
        data.insert(
            Platform::Codeforces,
            Some(PlatformSnapshot::Codeforces(
                skillpulse_core::CodeforcesSnapshot {
                    tags: vec![TagCount::new("math", 6)],
                    ..Default::default()
                },
            )),
        );
        assert_eq!(merge_tags(&data).count("math"), 10);
    }

    #[test]
    fn failed_platforms_contribute_nothing() {
        let mut data = PlatformDataSet::new();
        data.insert(Platform::Leetcode, None);
        data.insert(Platform::Gfg, None);
        assert!(merge_tags(&data).is_empty());
    }

    #[test]
    fn languages_add_fixed_weight() {
        let mut tags = TagVector::new();
        tags.add("arrays", 3);
        let gh = GithubSnapshot {
            stats: GithubStats {
                top_languages: vec!["Rust".to_string(), "Go".to_string()],
                ..GithubStats::default()
            },
            ..GithubSnapshot::default()
        };
        let distribution = skill_distribution(&tags, Some(&gh));
        assert_eq!(distribution["arrays"], 3);
        assert_eq!(distribution["Rust"], LANGUAGE_WEIGHT);
        assert_eq!(distribution["Go"], LANGUAGE_WEIGHT);
        assert!(!tags.iter().any(|(t, _)| t == "rust"));
    }
}
