//! The ordered recommendation cascade.

use skillpulse_core::CompanyMatch;

use crate::scoring::ScoreCard;
use crate::topics::TopicReport;

pub const FALLBACK_RECOMMENDATION: &str =
    "🌟 Great progress! Keep solving problems and building projects to stay sharp.";

const TOP_MATCH_TOPICS: usize = 3;

/// Build the recommendation list.
///
/// Recommendations already on `card` come first, then each rule of the
/// cascade in order. When nothing fires, a single generic message is
/// returned.
#[must_use]
pub fn recommend(
    card: &ScoreCard,
    topics: &TopicReport,
    matches: &[CompanyMatch],
    total_solved: u32,
) -> Vec<String> {
    let mut out = card.recommendations.clone();
    let mut push = |text: &str| out.push(text.to_string());

    if card.problem_solving < 20 && card.project_building > 20 {
        push("You build great projects but lack algorithmic skills. Companies like Google/Amazon heavily test DSA — invest time in LeetCode and Codeforces.");
    }
    if card.problem_solving > 30 && card.project_building < 15 {
        push("Strong problem-solver but few projects. Build real-world apps to showcase on your resume.");
    }
    if card.consistency < 20 {
        push("Consistency matters! Aim for at least 1 problem + 1 commit daily. Use streaks to stay motivated.");
    }

    if topics.is_weak("dynamic programming") || topics.is_weak("dp") {
        push("🎯 Focus on Dynamic Programming — it appears in 40%+ of FAANG interviews. Start with: Fibonacci, Knapsack, LIS, Coin Change.");
    }
    if topics.is_weak("graphs") || topics.is_weak("graph") {
        push("🎯 Strengthen Graph skills — practice BFS, DFS, Dijkstra, Topological Sort. Essential for Google, Uber, Meta.");
    }
    if topics.is_weak("trees") {
        push("🎯 Practice Tree problems — Binary Trees, BSTs, traversals are asked in almost every tech interview.");
    }

    if let Some(top) = matches.first() {
        let focus: Vec<&str> = top
            .matched_topics
            .iter()
            .take(TOP_MATCH_TOPICS)
            .map(String::as_str)
            .collect();
        out.push(format!(
            "🏢 Best fit: {} ({}% match). Focus on: {}.",
            top.company,
            top.score,
            focus.join(", ")
        ));
    }

    if total_solved < 50 {
        out.push(format!(
            "📌 You have {total_solved} total problems solved. Target 50+ to clear basic coding rounds, 150+ for competitive placements."
        ));
    } else if total_solved < 150 {
        out.push(format!(
            "📌 {total_solved} problems solved — good start! Push to 150+ and focus on medium/hard difficulty to crack product companies."
        ));
    } else if total_solved >= 300 {
        out.push(format!(
            "🌟 {total_solved} problems solved — impressive! Now focus on contest performance and system design to reach the next level."
        ));
    }

    if out.is_empty() {
        out.push(FALLBACK_RECOMMENDATION.to_string());
    }
    out
}
