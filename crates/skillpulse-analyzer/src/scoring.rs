//! Threshold rules that turn platform stats into sub-scores and narrative.
//!
//! Each rule adds points to one of the four sub-scores and may append a
//! strength, weakness, recommendation or improvement item. Points are summed
//! without a cap; [`ScoreCard::overall`] works from the raw sums.

use skillpulse_core::{
    CodeforcesSnapshot, DsaImprovement, GfgSnapshot, GithubSnapshot, LeetcodeSnapshot, Priority,
};

/// Unconditional credit added to every overall score.
pub const BASELINE_CREDIT: u32 = 10;

/// Running totals for one analysis.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub problem_solving: u32,
    pub project_building: u32,
    pub consistency: u32,
    pub collaboration: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub improvements: Vec<DsaImprovement>,
}

impl ScoreCard {
    /// `round(ps*0.35 + pb*0.25 + c*0.25 + col*0.15 + 10)`, capped at 100.
    ///
    /// Evaluated in hundredths so the half-up rounding is exact.
    #[must_use]
    pub fn overall(&self) -> u32 {
        let weighted = u64::from(self.problem_solving) * 35
            + u64::from(self.project_building) * 25
            + u64::from(self.consistency) * 25
            + u64::from(self.collaboration) * 15
            + u64::from(BASELINE_CREDIT) * 100;
        let rounded = (weighted + 50) / 100;
        u32::try_from(rounded.min(100)).unwrap_or(100)
    }

    fn strength(&mut self, text: String) {
        self.strengths.push(text);
    }

    fn weakness(&mut self, text: String) {
        self.weaknesses.push(text);
    }
}

/// Tiers over the cross-platform solved total.
pub fn score_total_solved(card: &mut ScoreCard, total: u32) {
    if total >= 500 {
        card.strength(format!(
            "🔥 Elite problem-solver: {total} problems solved across all platforms"
        ));
        card.problem_solving += 15;
    } else if total >= 300 {
        card.strength(format!(
            "💪 Excellent: {total} total problems solved across platforms"
        ));
        card.problem_solving += 10;
    } else if total >= 100 {
        card.strength(format!(
            "📈 Solid: {total} total problems solved across platforms"
        ));
        card.problem_solving += 5;
    } else if total > 0 {
        card.weakness(format!(
            "Only {total} total problems solved across all platforms — aim for 100+ to be interview-ready"
        ));
    }
}

/// Breadth over platforms with solves, plus GitHub when connected.
pub fn score_breadth(card: &mut ScoreCard, active_platforms: usize) {
    if active_platforms >= 4 {
        card.strength(format!(
            "Active on {active_platforms} coding platforms — shows well-rounded practice"
        ));
    } else if active_platforms == 1 {
        card.weakness(format!(
            "Only active on {active_platforms} platform — diversify across LeetCode, Codeforces, and GFG"
        ));
    }
}

pub fn score_github(card: &mut ScoreCard, gh: &GithubSnapshot) {
    let stats = &gh.stats;

    if stats.total_repos >= 10 {
        card.strength(format!(
            "Strong project portfolio with {} repositories",
            stats.total_repos
        ));
        card.project_building += 40;
    } else if stats.total_repos >= 5 {
        card.strength("Growing project portfolio".to_string());
        card.project_building += 25;
    } else {
        card.weakness("Limited number of public GitHub projects".to_string());
        card.recommendations.push(
            "Build more projects on GitHub — aim for 10+ repos to stand out to recruiters."
                .to_string(),
        );
    }

    if stats.top_languages.len() >= 3 {
        card.strength(format!(
            "Multi-language developer: {}",
            stats.top_languages.join(", ")
        ));
    }

    if stats.recent_activity >= 20 {
        card.consistency += 40;
        card.strength("Highly active on GitHub recently".to_string());
    } else if stats.recent_activity >= 10 {
        card.consistency += 25;
    } else {
        card.weakness("Low recent GitHub activity".to_string());
    }

    if gh.profile.followers >= 10 {
        card.collaboration += 30;
    }
}

pub fn score_leetcode(card: &mut ScoreCard, lc: &LeetcodeSnapshot) {
    let total = lc.stats.total_solved;
    let hard = lc.stats.hard_solved;

    if total >= 200 {
        card.problem_solving += 45;
        card.strength(format!("Exceptional: {total} LeetCode problems solved"));
    } else if total >= 100 {
        card.problem_solving += 35;
        card.strength(format!("Strong: {total} LeetCode problems solved"));
    } else if total >= 30 {
        card.problem_solving += 20;
    } else {
        card.weakness(format!("Limited LeetCode practice ({total} solved)"));
    }

    if hard >= 10 {
        card.strength("Can solve Hard-level algorithmic problems".to_string());
        card.problem_solving += 15;
    } else if total > 20 && hard < 3 {
        card.improvements.push(DsaImprovement {
            topic: "Hard Problems".to_string(),
            reason: format!(
                "Only {hard} hard problems solved. Attempt more for top-tier company interviews."
            ),
            priority: Priority::High,
        });
    }
}

pub fn score_codeforces(card: &mut ScoreCard, cf: &CodeforcesSnapshot) {
    let rating = cf.stats.rating;

    if rating >= 1600 {
        card.problem_solving += 40;
        card.strength(format!(
            "Expert competitive programmer (CF Rating: {rating})"
        ));
    } else if rating >= 1200 {
        card.problem_solving += 25;
        card.strength(format!(
            "Intermediate competitive programmer (CF: {rating})"
        ));
    } else if rating > 0 {
        card.problem_solving += 10;
    }

    if cf.stats.contests_participated >= 20 {
        card.consistency += 20;
    }
}

pub fn score_gfg(card: &mut ScoreCard, gfg: &GfgSnapshot) {
    let total = gfg.stats.total_solved;

    if total >= 100 {
        card.problem_solving += 20;
        card.strength(format!("Strong GFG practice: {total} problems solved"));
    } else if total >= 30 {
        card.problem_solving += 10;
    }

    if gfg.stats.score >= 500 {
        card.strength(format!("High GFG coding score: {}", gfg.stats.score));
    }
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
