//! Static topic and company reference tables.
//!
//! Topic names are lower-case and compared against [`TagVector`] keys as-is.
//! Platforms spell some topics differently (`dp` / `dynamic programming`,
//! `graph` / `graphs`), so both spellings appear where needed.
//!
//! [`TagVector`]: skillpulse_core::TagVector

use skillpulse_core::Priority;

/// Importance tier of a DSA topic. Only `Critical` and `Important` drive
/// classification; the other two are informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Critical,
    Important,
    Intermediate,
    Foundational,
}

/// Thresholds applied to one tier's topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRule {
    /// A topic with at least this many solves is strong.
    pub strong_at: u32,
    /// A topic with fewer solves than this is weak.
    pub weak_below: u32,
    pub priority: Priority,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Critical,
        Tier::Important,
        Tier::Intermediate,
        Tier::Foundational,
    ];

    #[must_use]
    pub fn topics(self) -> &'static [&'static str] {
        match self {
            Tier::Critical => CRITICAL_TOPICS,
            Tier::Important => IMPORTANT_TOPICS,
            Tier::Intermediate => INTERMEDIATE_TOPICS,
            Tier::Foundational => FOUNDATIONAL_TOPICS,
        }
    }

    /// Classification thresholds, or `None` for informational tiers.
    #[must_use]
    pub fn rule(self) -> Option<TierRule> {
        match self {
            Tier::Critical => Some(TierRule {
                strong_at: 15,
                weak_below: 5,
                priority: Priority::High,
            }),
            Tier::Important => Some(TierRule {
                strong_at: 10,
                weak_below: 3,
                priority: Priority::Medium,
            }),
            Tier::Intermediate | Tier::Foundational => None,
        }
    }
}

pub const CRITICAL_TOPICS: &[&str] = &[
    "dynamic programming",
    "dp",
    "arrays",
    "trees",
    "graphs",
    "graph",
    "binary search",
    "string",
];

pub const IMPORTANT_TOPICS: &[&str] = &[
    "greedy",
    "linked lists",
    "sorting",
    "hash table",
    "two pointers",
    "bfs and dfs",
    "dfs and similar",
    "math",
    "number theory",
    "stack",
];

pub const INTERMEDIATE_TOPICS: &[&str] = &[
    "backtracking",
    "bit manipulation",
    "heap",
    "sliding window",
    "recursion",
    "divide and conquer",
    "trie",
    "segment tree",
    "union find",
    "combinatorics",
];

pub const FOUNDATIONAL_TOPICS: &[&str] = &[
    "implementation",
    "brute force",
    "constructive algorithms",
    "data structures",
    "sortings",
    "binary trees",
];

/// Companies with the topics their interviews lean on, most important first.
pub const COMPANY_TOPICS: &[(&str, &[&str])] = &[
    (
        "Google",
        &[
            "dynamic programming",
            "graphs",
            "binary search",
            "trees",
            "greedy",
            "bfs and dfs",
            "string",
            "dp",
            "graph",
            "dfs and similar",
        ],
    ),
    (
        "Amazon",
        &[
            "arrays",
            "trees",
            "dynamic programming",
            "greedy",
            "linked lists",
            "string",
            "sorting",
            "hash table",
            "two pointers",
            "dp",
        ],
    ),
    (
        "Microsoft",
        &[
            "arrays",
            "dynamic programming",
            "trees",
            "graphs",
            "string",
            "binary search",
            "linked lists",
            "dp",
            "math",
            "sorting",
        ],
    ),
    (
        "Meta (Facebook)",
        &[
            "arrays",
            "string",
            "dynamic programming",
            "graphs",
            "binary search",
            "trees",
            "dp",
            "hash table",
            "bfs and dfs",
            "two pointers",
        ],
    ),
    (
        "Apple",
        &[
            "arrays",
            "trees",
            "linked lists",
            "dynamic programming",
            "string",
            "sorting",
            "dp",
            "binary search",
        ],
    ),
    (
        "Netflix",
        &[
            "system design",
            "dynamic programming",
            "graphs",
            "dp",
            "greedy",
            "trees",
            "string",
        ],
    ),
    (
        "Adobe",
        &[
            "dynamic programming",
            "arrays",
            "trees",
            "greedy",
            "sorting",
            "string",
            "dp",
            "math",
        ],
    ),
    (
        "Flipkart",
        &[
            "arrays",
            "dynamic programming",
            "greedy",
            "trees",
            "graphs",
            "dp",
            "sorting",
            "string",
        ],
    ),
    (
        "Walmart",
        &[
            "arrays",
            "trees",
            "dynamic programming",
            "string",
            "sorting",
            "dp",
            "greedy",
        ],
    ),
    (
        "Goldman Sachs",
        &[
            "dynamic programming",
            "math",
            "arrays",
            "number theory",
            "dp",
            "greedy",
            "sorting",
        ],
    ),
    (
        "Morgan Stanley",
        &[
            "math",
            "dynamic programming",
            "arrays",
            "string",
            "dp",
            "number theory",
        ],
    ),
    (
        "Uber",
        &[
            "graphs",
            "dynamic programming",
            "arrays",
            "string",
            "dp",
            "greedy",
            "binary search",
            "bfs and dfs",
        ],
    ),
    (
        "Atlassian",
        &[
            "arrays",
            "dynamic programming",
            "string",
            "design",
            "dp",
            "greedy",
        ],
    ),
    (
        "Razorpay",
        &[
            "arrays",
            "dynamic programming",
            "greedy",
            "string",
            "dp",
            "trees",
        ],
    ),
    (
        "PhonePe",
        &[
            "arrays",
            "dynamic programming",
            "trees",
            "string",
            "dp",
            "sorting",
        ],
    ),
];
