//! Scenario and property tests for `analyze_skills`.

use skillpulse_analyzer::{analyze_skills, merge_tags, MAX_IMPROVEMENTS, SYNC_RECOMMENDATION};
use skillpulse_core::{Platform, PlatformDataSet, Priority, SkillAnalysis};

fn data_set(value: serde_json::Value) -> PlatformDataSet {
    serde_json::from_value(value).expect("valid data set")
}

fn github_only() -> PlatformDataSet {
    data_set(serde_json::json!({
        "github": {
            "profile": { "name": "octocat", "followers": 15 },
            "stats": {
                "totalRepos": 12,
                "totalCommits": 40,
                "topLanguages": ["Go", "Rust", "Python"],
                "recentActivity": 25
            }
        }
    }))
}

fn leetcode_dp() -> PlatformDataSet {
    data_set(serde_json::json!({
        "leetcode": {
            "stats": { "totalSolved": 250, "easySolved": 120, "mediumSolved": 115, "hardSolved": 15 },
            "tags": [ { "tagName": "dynamic programming", "problemsSolved": 20 } ]
        }
    }))
}

fn everything() -> PlatformDataSet {
    data_set(serde_json::json!({
        "github": {
            "profile": { "followers": 40 },
            "stats": { "totalRepos": 30, "topLanguages": ["Rust", "C++", "Python", "Go"], "recentActivity": 30 }
        },
        "leetcode": {
            "stats": { "totalSolved": 420, "hardSolved": 60 },
            "tags": [
                { "tagName": "Array", "problemsSolved": 150 },
                { "tagName": "Dynamic Programming", "problemsSolved": 80 },
                { "tagName": "Tree", "problemsSolved": 40 },
                { "tagName": "Graph", "problemsSolved": 35 },
                { "tagName": "Binary Search", "problemsSolved": 30 },
                { "tagName": "String", "problemsSolved": 60 },
                { "tagName": "Greedy", "problemsSolved": 45 },
                { "tagName": "Hash Table", "problemsSolved": 70 }
            ]
        },
        "codeforces": {
            "stats": { "rating": 1850, "rank": "expert", "contestsParticipated": 45, "problemsSolved": 90 },
            "tags": [
                { "tagName": "math", "problemsSolved": 30 },
                { "tagName": "greedy", "problemsSolved": 25 },
                { "tagName": "dp", "problemsSolved": 20 },
                { "tagName": "graphs", "problemsSolved": 12 }
            ]
        },
        "gfg": { "stats": { "totalSolved": 150, "score": 700 } },
        "codechef": { "stats": { "rating": 0, "stars": "N/A", "problemsSolved": 0 }, "profile": { "username": "chef", "message": "manual" } },
        "hackerrank": null
    }))
}

fn assert_invariants(analysis: &SkillAnalysis) {
    assert!(analysis.overall_score <= 100);
    for score in [
        analysis.problem_solving_score,
        analysis.project_building_score,
        analysis.consistency_score,
        analysis.collaboration_score,
    ] {
        assert!(score <= 100, "sub-score out of range: {score}");
    }

    let breakdown_sum: u32 = analysis.platform_breakdown.values().sum();
    assert_eq!(analysis.total_problems_solved, breakdown_sum);
    assert!(analysis.platform_breakdown.values().all(|n| *n > 0));

    assert!(analysis.company_matches.len() <= 8);
    assert!(analysis
        .company_matches
        .windows(2)
        .all(|w| w[0].score >= w[1].score));
    assert!(analysis.company_matches.iter().all(|m| m.score >= 30));

    assert!(analysis.dsa_improvements.len() <= MAX_IMPROVEMENTS);
    let first_medium = analysis
        .dsa_improvements
        .iter()
        .position(|i| i.priority == Priority::Medium)
        .unwrap_or(analysis.dsa_improvements.len());
    assert!(analysis.dsa_improvements[first_medium..]
        .iter()
        .all(|i| i.priority == Priority::Medium));

    for (tag, _) in analysis.dsa_skills.iter() {
        assert_eq!(tag, tag.to_lowercase());
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn github_only_profile() {
    let analysis = analyze_skills(&github_only());
    assert_invariants(&analysis);

    assert_eq!(analysis.project_building_score, 40);
    assert_eq!(analysis.consistency_score, 40);
    assert_eq!(analysis.collaboration_score, 30);
    assert_eq!(analysis.problem_solving_score, 0);
    assert_eq!(analysis.total_problems_solved, 0);
    assert_eq!(analysis.overall_score, 35);
    assert!(analysis.platform_breakdown.is_empty());
    assert!(analysis
        .strengths
        .contains(&"Strong project portfolio with 12 repositories".to_string()));
    assert!(analysis
        .strengths
        .contains(&"Multi-language developer: Go, Rust, Python".to_string()));
    assert_eq!(analysis.skill_distribution["Rust"], 15);
    assert!(analysis.dsa_skills.is_empty());
    assert!(analysis.company_matches.is_empty());
}

#[test]
fn leetcode_with_strong_dynamic_programming() {
    let analysis = analyze_skills(&leetcode_dp());
    assert_invariants(&analysis);

    // 5 (total tier) + 45 (LeetCode band) + 15 (hard problems)
    assert_eq!(analysis.problem_solving_score, 65);
    assert_eq!(analysis.total_problems_solved, 250);
    assert_eq!(analysis.platform_breakdown[&Platform::Leetcode], 250);
    assert!(analysis
        .strengths
        .contains(&"Strong DSA topics: dynamic programming".to_string()));
    assert!(!analysis
        .dsa_improvements
        .iter()
        .any(|i| i.topic == "Dynamic programming"));
    // "dp" is a separate spelling with no solves, so it is still flagged.
    assert!(analysis.dsa_improvements.iter().any(|i| i.topic == "Dp"));
    assert!(analysis
        .recommendations
        .iter()
        .any(|r| r.starts_with("🎯 Focus on Dynamic Programming")));
}

#[test]
fn empty_data_set_scores_baseline_only() {
    let analysis = analyze_skills(&PlatformDataSet::new());
    assert_invariants(&analysis);

    assert_eq!(analysis.overall_score, 10);
    assert_eq!(analysis.problem_solving_score, 0);
    assert_eq!(analysis.total_problems_solved, 0);
    assert!(analysis.strengths.is_empty());
    assert!(analysis.weaknesses.is_empty());
    assert!(analysis.company_matches.is_empty());
    assert!(analysis.dsa_improvements.is_empty());
    assert_eq!(analysis.recommendations, [SYNC_RECOMMENDATION]);
}

#[test]
fn all_failed_platforms_count_as_not_connected() {
    let data = data_set(serde_json::json!({ "github": null, "leetcode": null }));
    assert_eq!(analyze_skills(&data), analyze_skills(&PlatformDataSet::new()));
}

#[test]
fn well_rounded_profile() {
    let analysis = analyze_skills(&everything());
    assert_invariants(&analysis);

    // 420 + 90 + 150; CodeChef reports zero and is left out.
    assert_eq!(analysis.total_problems_solved, 660);
    assert_eq!(analysis.platform_breakdown.len(), 3);
    assert!(!analysis.platform_breakdown.contains_key(&Platform::Codechef));

    // 15 + 45 + 15 + 40 + 20 = 135 raw, reported clamped.
    assert_eq!(analysis.problem_solving_score, 100);
    // 47.25 + 10 + 15 + 4.5 + 10 = 86.75 from the raw sums
    assert_eq!(analysis.overall_score, 87);

    assert_eq!(
        analysis.strengths[0],
        "🔥 Elite problem-solver: 660 problems solved across all platforms"
    );
    assert!(analysis
        .strengths
        .contains(&"Active on 4 coding platforms — shows well-rounded practice".to_string()));
    assert!(!analysis.company_matches.is_empty());
    assert!(analysis.recommendations[0].starts_with("🏢 Best fit:"));
    assert!(analysis
        .recommendations
        .last()
        .is_some_and(|r| r.starts_with("🌟 660 problems solved")));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn analysis_is_idempotent() {
    let data = everything();
    let first = serde_json::to_string(&analyze_skills(&data)).unwrap();
    let second = serde_json::to_string(&analyze_skills(&data)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tag_merge_is_order_independent() {
    let a = data_set(serde_json::json!({
        "leetcode": { "tags": [ { "tagName": "Math", "problemsSolved": 3 }, { "tagName": "Greedy", "problemsSolved": 9 } ] },
        "codeforces": { "tags": [ { "tagName": "greedy", "problemsSolved": 4 } ] },
        "gfg": { "stats": { "totalSolved": 40 } }
    }));
    let b = data_set(serde_json::json!({
        "codeforces": { "tags": [ { "tagName": "Greedy", "problemsSolved": 9 }, { "tagName": "math", "problemsSolved": 3 } ] },
        "leetcode": { "tags": [ { "tagName": "GREEDY", "problemsSolved": 4 } ] },
        "gfg": { "stats": { "totalSolved": 40 } }
    }));
    let merged = merge_tags(&a);
    assert_eq!(merged, merge_tags(&b));
    assert_eq!(merged.count("greedy"), 13);
    // 3 real + floor(40 * 7%) estimated
    assert_eq!(merged.count("math"), 5);
}

#[test]
fn invariants_hold_for_sparse_profiles() {
    let samples = [
        serde_json::json!({ "codeforces": { "stats": { "rating": 900, "problemsSolved": 12 } } }),
        serde_json::json!({ "gfg": { "stats": { "totalSolved": 35 } }, "github": { "stats": { "totalRepos": 1 } } }),
        serde_json::json!({ "leetcode": { "stats": { "totalSolved": 25, "hardSolved": 0 } } }),
        serde_json::json!({ "hackerrank": { "stats": {}, "profile": { "username": "x", "message": "m" } } }),
    ];
    for sample in samples {
        let analysis = analyze_skills(&data_set(sample));
        assert_invariants(&analysis);
        assert!(!analysis.recommendations.is_empty());
    }
}

#[test]
fn output_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(analyze_skills(&leetcode_dp())).unwrap();
    assert!(json.get("overallScore").is_some());
    assert!(json.get("problemSolvingScore").is_some());
    assert_eq!(json["platformBreakdown"]["LeetCode"], 250);
    assert_eq!(json["dsaSkills"]["dynamic programming"], 20);
    assert!(json["dsaImprovements"]
        .as_array()
        .unwrap()
        .iter()
        .all(|i| i["priority"] == "high" || i["priority"] == "medium"));
}

#[test]
fn null_fields_in_stored_data_do_not_block_analysis() {
    let data = data_set(serde_json::json!({
        "leetcode": {
            "stats": { "totalSolved": 40, "hardSolved": null },
            "profile": { "reputation": null }
        }
    }));
    let analysis = analyze_skills(&data);
    assert_invariants(&analysis);
    assert_eq!(analysis.total_problems_solved, 40);
    // 30..100 band, no hard-problem credit
    assert_eq!(analysis.problem_solving_score, 20);
}
