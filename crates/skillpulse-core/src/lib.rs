//! Shared data model and configuration for the skillpulse workspace.
//!
//! Holds the platform catalogue, the profile-link input, the normalized
//! per-platform snapshots produced by the adapters, and the `SkillAnalysis`
//! output shape consumed by callers.

pub mod activity;
pub mod analysis;
pub mod app_config;
pub mod config;
pub mod dataset;
pub mod error;
pub mod handle;
pub mod links;
pub mod platform;
pub mod snapshot;

pub use activity::ActivityRecord;
pub use analysis::{CompanyMatch, DsaImprovement, Priority, SkillAnalysis, TagVector};
pub use app_config::{AppConfig, Endpoints};
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::PlatformDataSet;
pub use error::{ConfigError, CoreError};
pub use handle::resolve_handle;
pub use links::{load_profile_links, ProfileLinks, ProfilesFile};
pub use platform::Platform;
pub use snapshot::{
    CodechefSnapshot, CodechefStats, CodeforcesProfile, CodeforcesSnapshot, CodeforcesStats,
    GfgProfile, GfgSnapshot, GfgStats, GithubEvent, GithubProfile, GithubRepo, GithubSnapshot,
    GithubStats, HackerrankSnapshot, HackerrankStats, LeetcodeProfile, LeetcodeSnapshot,
    LeetcodeStats, PlatformSnapshot, RatingChange, StubProfile, TagCount, MAX_TAGS,
};
