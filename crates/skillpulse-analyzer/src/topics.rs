//! Strong/weak classification of DSA topics by tier.

use std::collections::HashSet;

use skillpulse_core::{DsaImprovement, Priority, TagVector};

use crate::catalog::Tier;

const MAX_STRONG_LISTED: usize = 5;
const MAX_WEAK_LISTED: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicScore {
    pub topic: &'static str,
    pub count: u32,
    pub tier: Tier,
}

/// Classified topics in tier order, plus one improvement item per weak topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicReport {
    pub strong: Vec<TopicScore>,
    pub weak: Vec<TopicScore>,
    pub improvements: Vec<DsaImprovement>,
}

impl TopicReport {
    #[must_use]
    pub fn strong_topics(&self) -> HashSet<&'static str> {
        self.strong.iter().map(|t| t.topic).collect()
    }

    #[must_use]
    pub fn is_weak(&self, topic: &str) -> bool {
        self.weak.iter().any(|t| t.topic == topic)
    }

    /// `Strong DSA topics: ...` naming up to five strong topics.
    #[must_use]
    pub fn strength_summary(&self) -> Option<String> {
        if self.strong.is_empty() {
            return None;
        }
        let names: Vec<&str> = self
            .strong
            .iter()
            .take(MAX_STRONG_LISTED)
            .map(|t| t.topic)
            .collect();
        Some(format!("Strong DSA topics: {}", names.join(", ")))
    }

    /// `Weak in critical DSA: ...` naming up to four weak critical topics.
    #[must_use]
    pub fn weakness_summary(&self) -> Option<String> {
        let names: Vec<&str> = self
            .weak
            .iter()
            .filter(|t| t.tier == Tier::Critical)
            .take(MAX_WEAK_LISTED)
            .map(|t| t.topic)
            .collect();
        if names.is_empty() {
            return None;
        }
        Some(format!("Weak in critical DSA: {}", names.join(", ")))
    }
}

/// Classify every critical and important topic against `tags`.
#[must_use]
pub fn classify_topics(tags: &TagVector) -> TopicReport {
    let mut report = TopicReport::default();

    for tier in Tier::ALL {
        let Some(rule) = tier.rule() else {
            continue;
        };
        for &topic in tier.topics() {
            let count = tags.count(topic);
            let score = TopicScore { topic, count, tier };
            if count >= rule.strong_at {
                report.strong.push(score);
            } else if count < rule.weak_below {
                report.weak.push(score);
                report.improvements.push(DsaImprovement {
                    topic: capitalize(topic),
                    reason: improvement_reason(tier, count),
                    priority: rule.priority,
                });
            }
        }
    }

    report
}

fn improvement_reason(tier: Tier, count: u32) -> String {
    match (tier, count) {
        (Tier::Critical, 0) => "No problems solved in this critical topic.".to_string(),
        (Tier::Critical, n) => {
            format!("Only {n} problems solved — needs significant improvement.")
        }
        (_, n) => format!(
            "Underexplored topic ({n} solved). Important for well-rounded DSA knowledge."
        ),
    }
}

fn capitalize(topic: &str) -> String {
    let mut chars = topic.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sort improvements high-priority first (stable) and keep at most `limit`.
#[must_use]
pub fn rank_improvements(mut items: Vec<DsaImprovement>, limit: usize) -> Vec<DsaImprovement> {
    items.sort_by_key(|i| i.priority);
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CRITICAL_TOPICS, IMPORTANT_TOPICS};

    fn tags(pairs: &[(&str, u32)]) -> TagVector {
        let mut tags = TagVector::new();
        for (tag, n) in pairs {
            tags.add(tag, *n);
        }
        tags
    }

    #[test]
    fn empty_tags_mark_every_scored_topic_weak() {
        let report = classify_topics(&TagVector::new());
        assert!(report.strong.is_empty());
        assert_eq!(
            report.weak.len(),
            CRITICAL_TOPICS.len() + IMPORTANT_TOPICS.len()
        );
        assert_eq!(report.improvements[0].topic, "Dynamic programming");
        assert_eq!(
            report.improvements[0].reason,
            "No problems solved in this critical topic."
        );
        assert_eq!(
            report.weakness_summary().as_deref(),
            Some("Weak in critical DSA: dynamic programming, dp, arrays, trees")
        );
        assert!(report.strength_summary().is_none());
    }

    #[test]
    fn thresholds_split_strong_middle_and_weak() {
        let report = classify_topics(&tags(&[
            ("dynamic programming", 15),
            ("graphs", 14),
            ("trees", 5),
            ("arrays", 4),
            ("greedy", 10),
            ("sorting", 3),
            ("math", 2),
        ]));

        let strong: Vec<&str> = report.strong.iter().map(|t| t.topic).collect();
        assert_eq!(strong, ["dynamic programming", "greedy"]);
        assert!(!report.is_weak("graphs"));
        assert!(!report.is_weak("trees"));
        assert!(report.is_weak("arrays"));
        assert!(!report.is_weak("sorting"));
        assert!(report.is_weak("math"));

        let arrays = report
            .improvements
            .iter()
            .find(|i| i.topic == "Arrays")
            .expect("arrays improvement");
        assert_eq!(
            arrays.reason,
            "Only 4 problems solved — needs significant improvement."
        );
        assert_eq!(arrays.priority, Priority::High);

        let math = report
            .improvements
            .iter()
            .find(|i| i.topic == "Math")
            .expect("math improvement");
        assert_eq!(math.priority, Priority::Medium);
        assert_eq!(
            math.reason,
            "Underexplored topic (2 solved). Important for well-rounded DSA knowledge."
        );
    }

    #[test]
    fn strength_summary_lists_first_five() {
        let report = classify_topics(&tags(&[
            ("dynamic programming", 20),
            ("dp", 20),
            ("arrays", 20),
            ("trees", 20),
            ("graphs", 20),
            ("string", 20),
        ]));
        assert_eq!(
            report.strength_summary().as_deref(),
            Some("Strong DSA topics: dynamic programming, dp, arrays, trees, graphs")
        );
    }

    #[test]
    fn rank_improvements_is_stable_and_capped() {
        let item = |topic: &str, priority| DsaImprovement {
            topic: topic.to_string(),
            reason: String::new(),
            priority,
        };
        let ranked = rank_improvements(
            vec![
                item("m1", Priority::Medium),
                item("h1", Priority::High),
                item("m2", Priority::Medium),
                item("h2", Priority::High),
            ],
            3,
        );
        let topics: Vec<&str> = ranked.iter().map(|i| i.topic.as_str()).collect();
        assert_eq!(topics, ["h1", "h2", "m1"]);
    }

    #[test]
    fn capitalize_only_first_letter() {
        assert_eq!(capitalize("bfs and dfs"), "Bfs and dfs");
        assert_eq!(capitalize(""), "");
    }
}
