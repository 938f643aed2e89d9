//! Rule-based narrative insights over a flat list of activity records.
//!
//! Independent of the scoring engine. The only non-deterministic part is the
//! closing recommendation, drawn from the caller's random source.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use skillpulse_core::activity::UNKNOWN_REPO;
use skillpulse_core::{ActivityRecord, GithubSnapshot, Platform};

pub const NO_ACTIVITY_MESSAGE: &str =
    "No activity data available yet. Start coding and come back to see personalized insights!";

pub const RECOMMENDATIONS: [&str; 5] = [
    "📚 Recommendation: Try contributing to an open-source project this week — it's the fastest way to learn from experienced developers.",
    "🎯 Recommendation: Set a weekly goal of 5 commits and 3 problems solved to maintain steady growth.",
    "💻 Recommendation: Write a README.md for your most recent project — documentation skills are highly valued by employers.",
    "🔄 Recommendation: Review someone else's code on GitHub. Teaching and reviewing accelerates your own learning.",
    "🏗️ Recommendation: Try building a full-stack project with a technology you haven't used before to expand your skill set.",
];

const UNKNOWN_KIND: &str = "Unknown";

/// Activity records for every event in a GitHub snapshot.
#[must_use]
pub fn github_activity(gh: &GithubSnapshot) -> Vec<ActivityRecord> {
    gh.events.iter().map(ActivityRecord::from).collect()
}

/// Produce paragraph-separated observations about `activities`.
///
/// Covers volume, event types, repository spread, active days and the
/// GitHub/practice balance, then closes with one recommendation chosen by
/// `rng`. Empty input yields [`NO_ACTIVITY_MESSAGE`].
pub fn generate_insights<R: Rng + ?Sized>(activities: &[ActivityRecord], rng: &mut R) -> String {
    if activities.is_empty() {
        return NO_ACTIVITY_MESSAGE.to_string();
    }

    let mut insights: Vec<String> = Vec::new();
    volume_insight(&mut insights, activities.len());
    event_type_insights(&mut insights, activities);
    repository_insight(&mut insights, activities);
    active_day_insight(&mut insights, activities);
    practice_insights(&mut insights, activities);

    let pick = rng.random_range(0..RECOMMENDATIONS.len());
    insights.push(RECOMMENDATIONS[pick].to_string());

    insights.join("\n\n")
}

fn volume_insight(insights: &mut Vec<String>, total: usize) {
    let text = if total > 20 {
        "🔥 You've been incredibly active! Consistency is the key to mastery — keep this momentum going."
    } else if total > 10 {
        "👍 Good activity level. Try to push a few more commits or solve 1-2 more problems daily to accelerate growth."
    } else {
        "📈 Your activity is on the lighter side. Aim for at least 1 commit or 1 problem solved per day to build a strong habit."
    };
    insights.push(text.to_string());
}

fn event_type_insights(insights: &mut Vec<String>, activities: &[ActivityRecord]) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for activity in activities {
        let kind = if activity.kind.is_empty() {
            UNKNOWN_KIND
        } else {
            activity.kind.as_str()
        };
        *counts.entry(kind).or_insert(0) += 1;
    }
    let count = |kind: &str| counts.get(kind).copied().unwrap_or(0);

    let pushes = count("PushEvent");
    let pull_requests = count("PullRequestEvent");

    if pushes > 0 && pull_requests == 0 {
        insights.push("💡 You're pushing code but not opening Pull Requests. PRs are essential for code review skills — try contributing to open-source projects.".to_string());
    }
    if pull_requests > 3 {
        insights.push("🤝 Great collaboration! You're actively participating in code reviews through Pull Requests.".to_string());
    }
    if count("IssuesEvent") > 2 {
        insights.push(
            "🐛 Active issue tracker — this shows strong project management awareness.".to_string(),
        );
    }
    if count("CreateEvent") > 3 {
        insights.push("🚀 You're creating multiple repositories. Make sure to follow through and develop them rather than starting too many at once.".to_string());
    }
}

fn repository_insight(insights: &mut Vec<String>, activities: &[ActivityRecord]) {
    let repos: HashSet<&str> = activities
        .iter()
        .filter_map(|a| a.repo_name.as_deref())
        .filter(|name| !name.is_empty() && *name != UNKNOWN_REPO)
        .collect();

    match repos.len() {
        0 => {}
        1 => insights.push("🎯 You're very focused on a single repository. Consider exploring other projects to broaden your skills.".to_string()),
        n @ 2..=5 => insights.push(format!(
            "📂 You're working on {n} repos. This is a healthy balance between focus and exploration."
        )),
        n => insights.push(format!(
            "🌐 You work across {n} repositories — great breadth! Consider deepening expertise in 2-3 key projects."
        )),
    }
}

fn active_day_insight(insights: &mut Vec<String>, activities: &[ActivityRecord]) {
    let days: HashSet<_> = activities
        .iter()
        .filter_map(|a| a.timestamp)
        .map(|ts| ts.date_naive())
        .collect();

    match days.len() {
        n if n >= 5 => insights.push(format!(
            "✅ Active on {n} different days — excellent consistency! Daily coding practice is the #1 predictor of skill growth."
        )),
        n if n >= 2 => insights.push(format!(
            "📅 Active on {n} days. Try to code every day, even if it's just 15 minutes, to build muscle memory."
        )),
        _ => {}
    }
}

fn practice_insights(insights: &mut Vec<String>, activities: &[ActivityRecord]) {
    let github_label = Platform::Github.display_name();
    let github = activities
        .iter()
        .filter(|a| a.platform == github_label)
        .count();
    let practice = activities.len() - github;

    if practice == 0 && github > 5 {
        insights.push("⚡ You're building projects but not solving algorithmic problems. Practice platforms like LeetCode or HackerRank can sharpen your problem-solving skills for interviews.".to_string());
    }
    if practice > 5 {
        insights.push("🧠 Great problem-solving practice! Make sure to also apply these skills in real projects on GitHub.".to_string());
    }
}

#[cfg(test)]
#[path = "insights_test.rs"]
mod tests;
