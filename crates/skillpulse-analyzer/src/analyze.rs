//! Entry point that turns a [`PlatformDataSet`] into a [`SkillAnalysis`].

use std::collections::BTreeMap;

use skillpulse_core::{PlatformDataSet, SkillAnalysis};

use crate::companies::match_companies;
use crate::recommend::recommend;
use crate::scoring::{
    score_breadth, score_codeforces, score_gfg, score_github, score_leetcode,
    score_total_solved, ScoreCard, BASELINE_CREDIT,
};
use crate::tags::{merge_tags, skill_distribution};
use crate::topics::{classify_topics, rank_improvements};

pub const MAX_IMPROVEMENTS: usize = 6;

/// Shown when no platform produced a snapshot.
pub const SYNC_RECOMMENDATION: &str =
    "Connect your coding profiles and sync to see your skill analysis.";

const MAX_SUB_SCORE: u32 = 100;

/// Score a user's platform data.
///
/// Pure and deterministic: the same data set always yields the same
/// analysis. Platforms that are absent or failed contribute nothing.
#[must_use]
pub fn analyze_skills(data: &PlatformDataSet) -> SkillAnalysis {
    if data.snapshots().next().is_none() {
        return not_connected();
    }

    let tags = merge_tags(data);
    let github = data.github();

    let platform_breakdown: BTreeMap<_, _> = data
        .snapshots()
        .map(|s| (s.platform(), s.solved_count()))
        .filter(|(_, solved)| *solved > 0)
        .collect();
    let total_solved = platform_breakdown
        .values()
        .fold(0_u32, |acc, n| acc.saturating_add(*n));

    let mut card = ScoreCard::default();
    score_total_solved(&mut card, total_solved);
    score_breadth(&mut card, platform_breakdown.len() + usize::from(github.is_some()));
    if let Some(gh) = github {
        score_github(&mut card, gh);
    }
    if let Some(lc) = data.leetcode() {
        score_leetcode(&mut card, lc);
    }
    if let Some(cf) = data.codeforces() {
        score_codeforces(&mut card, cf);
    }
    if let Some(gfg) = data.gfg() {
        score_gfg(&mut card, gfg);
    }

    let topics = classify_topics(&tags);
    if let Some(text) = topics.strength_summary() {
        card.strengths.push(text);
    }
    if let Some(text) = topics.weakness_summary() {
        card.weaknesses.push(text);
    }
    card.improvements.extend(topics.improvements.iter().cloned());

    let company_matches = match_companies(&tags, &topics.strong_topics());
    let recommendations = recommend(&card, &topics, &company_matches, total_solved);
    let overall_score = card.overall();

    tracing::debug!(
        overall_score,
        problem_solving = card.problem_solving,
        project_building = card.project_building,
        consistency = card.consistency,
        collaboration = card.collaboration,
        total_solved,
        "skill analysis complete"
    );

    SkillAnalysis {
        overall_score,
        problem_solving_score: card.problem_solving.min(MAX_SUB_SCORE),
        project_building_score: card.project_building.min(MAX_SUB_SCORE),
        consistency_score: card.consistency.min(MAX_SUB_SCORE),
        collaboration_score: card.collaboration.min(MAX_SUB_SCORE),
        total_problems_solved: total_solved,
        platform_breakdown,
        skill_distribution: skill_distribution(&tags, github),
        dsa_skills: tags,
        strengths: card.strengths,
        weaknesses: card.weaknesses,
        recommendations,
        company_matches,
        dsa_improvements: rank_improvements(card.improvements, MAX_IMPROVEMENTS),
    }
}

fn not_connected() -> SkillAnalysis {
    SkillAnalysis {
        overall_score: BASELINE_CREDIT,
        recommendations: vec![SYNC_RECOMMENDATION.to_string()],
        ..SkillAnalysis::default()
    }
}
