//! `sync` and `analyze` command handlers.

use std::path::Path;

use clap::Args;
use serde::Serialize;
use skillpulse_core::{
    load_profile_links, AppConfig, Platform, PlatformDataSet, ProfileLinks, SkillAnalysis,
};
use skillpulse_platforms::{collect_platform_data, Adapters};

/// Per-platform links given on the command line. Each one overrides the
/// matching entry from the profiles file.
#[derive(Debug, Default, Args)]
pub struct LinkArgs {
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub leetcode: Option<String>,
    #[arg(long)]
    pub codeforces: Option<String>,
    #[arg(long)]
    pub codechef: Option<String>,
    #[arg(long)]
    pub hackerrank: Option<String>,
    #[arg(long)]
    pub gfg: Option<String>,
}

impl LinkArgs {
    pub(crate) fn to_links(&self) -> ProfileLinks {
        [
            (Platform::Github, &self.github),
            (Platform::Leetcode, &self.leetcode),
            (Platform::Codeforces, &self.codeforces),
            (Platform::Codechef, &self.codechef),
            (Platform::Hackerrank, &self.hackerrank),
            (Platform::Gfg, &self.gfg),
        ]
        .into_iter()
        .filter_map(|(platform, link)| link.clone().map(|l| (platform, l)))
        .collect()
    }

    fn is_empty(&self) -> bool {
        self.to_links().configured().next().is_none()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SyncOutput {
    pub platform_data: PlatformDataSet,
    pub skill_analysis: SkillAnalysis,
}

/// Combine the profiles file with command-line links.
///
/// An explicit `--profiles` path must exist. The configured default path is
/// optional when links were given on the command line.
pub(crate) fn gather_links(
    config: &AppConfig,
    profiles: Option<&Path>,
    overrides: &LinkArgs,
) -> anyhow::Result<ProfileLinks> {
    let path = profiles.unwrap_or(&config.profiles_path);
    let mut links = if profiles.is_none() && !path.exists() && !overrides.is_empty() {
        tracing::debug!(path = %path.display(), "profiles file not found, using command-line links only");
        ProfileLinks::new()
    } else {
        load_profile_links(path)?.profiles
    };
    links.merge(&overrides.to_links());
    Ok(links)
}

/// Fetch every configured platform, score the result and print both as JSON.
///
/// # Errors
///
/// Returns an error if the profiles file is unreadable or invalid, or the
/// HTTP client cannot be built. Individual platform failures appear as
/// `null` entries in the output rather than errors.
pub(crate) async fn run_sync(
    config: &AppConfig,
    profiles: Option<&Path>,
    overrides: &LinkArgs,
) -> anyhow::Result<()> {
    let links = gather_links(config, profiles, overrides)?;
    if links.configured().next().is_none() {
        tracing::warn!("no profile links configured; nothing to fetch");
    }

    let adapters = Adapters::from_config(config)?;
    let platform_data = collect_platform_data(&adapters, &links).await;
    let skill_analysis = skillpulse_analyzer::analyze_skills(&platform_data);

    let output = SyncOutput {
        platform_data,
        skill_analysis,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Parse a stored data set. Accepts either a bare data set or a full `sync`
/// output, in which case its `platformData` member is used.
pub(crate) fn parse_data_set(content: &str) -> anyhow::Result<PlatformDataSet> {
    let mut value: serde_json::Value = serde_json::from_str(content)?;
    if let Some(inner) = value
        .get_mut("platformData")
        .map(serde_json::Value::take)
    {
        value = inner;
    }
    Ok(serde_json::from_value(value)?)
}

/// Score a stored data set and print the analysis as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid data set.
pub(crate) fn run_analyze(file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", file.display()))?;
    let data = parse_data_set(&content)?;
    let analysis = skillpulse_analyzer::analyze_skills(&data);
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
