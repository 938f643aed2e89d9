//! `insights` command handler.

use std::path::Path;

use skillpulse_core::{ActivityRecord, AppConfig, Platform, PlatformSnapshot};
use skillpulse_platforms::Adapters;

/// Load activity records from `input`, or from a GitHub profile's public
/// events, and print the generated insights.
///
/// # Errors
///
/// Returns an error if the input file is unreadable or malformed, or the
/// GitHub profile cannot be fetched.
pub(crate) async fn run_insights(
    config: &AppConfig,
    input: Option<&Path>,
    github: Option<&str>,
    limit: usize,
) -> anyhow::Result<()> {
    let mut activities = match (input, github) {
        (Some(path), _) => read_activities(path)?,
        (None, Some(link)) => github_activities(config, link).await?,
        (None, None) => anyhow::bail!("either --input or --github is required"),
    };
    activities.truncate(limit);

    tracing::debug!(records = activities.len(), "generating insights");
    let text = skillpulse_analyzer::generate_insights(&activities, &mut rand::rng());
    println!("{text}");
    Ok(())
}

pub(crate) fn read_activities(path: &Path) -> anyhow::Result<Vec<ActivityRecord>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}

async fn github_activities(config: &AppConfig, link: &str) -> anyhow::Result<Vec<ActivityRecord>> {
    let adapters = Adapters::from_config(config)?;
    match adapters.fetch(Platform::Github, link).await {
        Some(PlatformSnapshot::Github(gh)) => Ok(skillpulse_analyzer::github_activity(&gh)),
        _ => anyhow::bail!("could not fetch GitHub activity for '{link}'"),
    }
}
