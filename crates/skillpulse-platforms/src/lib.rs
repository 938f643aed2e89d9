//! Platform adapters and the aggregation orchestrator.
//!
//! Each adapter turns one handle into a normalized [`PlatformSnapshot`].
//! [`collect_platform_data`] runs every configured adapter concurrently and
//! never fails: adapter errors are logged and recorded as `None`.
//!
//! [`PlatformSnapshot`]: skillpulse_core::PlatformSnapshot

pub mod adapter;
pub mod client;
pub mod codeforces;
pub mod collect;
pub mod error;
pub mod gfg;
pub mod github;
pub mod leetcode;
pub(crate) mod normalize;
pub mod stub;

pub use adapter::{fetch_platform, Adapters, PlatformAdapter};
pub use client::PlatformClient;
pub use codeforces::CodeforcesAdapter;
pub use collect::collect_platform_data;
pub use error::PlatformError;
pub use gfg::GfgAdapter;
pub use github::GithubAdapter;
pub use leetcode::LeetcodeAdapter;
pub use stub::{CodechefAdapter, HackerrankAdapter};
