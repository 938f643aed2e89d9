//! Weighted overlap between a user's topics and each company's profile.

use std::collections::HashSet;

use skillpulse_core::{CompanyMatch, TagVector};

use crate::catalog::COMPANY_TOPICS;

/// Raw solve count at which a topic matches even if not classified strong.
pub const MATCH_COUNT: u32 = 8;
/// Companies scoring below this are dropped.
pub const MIN_MATCH_SCORE: u32 = 30;
pub const MAX_MATCHES: usize = 8;

/// Score every company in the roster against the user's topics.
///
/// A company's topic at position `i` of `n` weighs `n - i`. The score is the
/// matched share of the total weight as a rounded percentage. Survivors are
/// sorted by score (ties keep roster order) and capped at [`MAX_MATCHES`].
#[must_use]
pub fn match_companies(tags: &TagVector, strong: &HashSet<&str>) -> Vec<CompanyMatch> {
    let is_match = |topic: &str| strong.contains(topic) || tags.count(topic) >= MATCH_COUNT;

    let mut matches: Vec<CompanyMatch> = COMPANY_TOPICS
        .iter()
        .filter_map(|(company, topics)| {
            let n = u32::try_from(topics.len()).unwrap_or(u32::MAX);
            let mut total_weight = 0_u32;
            let mut matched_weight = 0_u32;
            for (weight, topic) in (1..=n).rev().zip(topics.iter()) {
                total_weight += weight;
                if is_match(topic) {
                    matched_weight += weight;
                }
            }

            let score = rounded_percent(matched_weight, total_weight);
            (score >= MIN_MATCH_SCORE).then(|| CompanyMatch {
                company: (*company).to_string(),
                score,
                matched_topics: topics
                    .iter()
                    .filter(|t| is_match(t))
                    .map(|t| (*t).to_string())
                    .collect(),
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(MAX_MATCHES);
    matches
}

/// `round(100 * part / whole)` with halves rounded up; `0` when `whole` is 0.
fn rounded_percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u64::from(part), u64::from(whole));
    u32::try_from((200 * part + whole) / (2 * whole)).unwrap_or(100)
}
