//! Skill scoring engine.
//!
//! Merges topic tags across platforms, applies the threshold rules to build
//! four sub-scores and a weighted overall score, classifies DSA topics,
//! matches companies and produces recommendations. Everything here is pure;
//! the only randomness lives in [`generate_insights`] and comes from the
//! caller.

pub mod analyze;
pub mod catalog;
pub mod companies;
pub mod insights;
pub mod recommend;
pub mod scoring;
pub mod tags;
pub mod topics;

pub use analyze::{analyze_skills, MAX_IMPROVEMENTS, SYNC_RECOMMENDATION};
pub use catalog::{Tier, COMPANY_TOPICS};
pub use companies::match_companies;
pub use insights::{generate_insights, github_activity};
pub use tags::merge_tags;
