mod insights;
mod sync;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use skillpulse_core::{resolve_handle, Platform};
use tracing_subscriber::EnvFilter;

use crate::sync::LinkArgs;

#[derive(Debug, Parser)]
#[command(name = "skillpulse-cli")]
#[command(about = "Fetch coding-platform profiles and score developer skills")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every configured platform and print the data set with its analysis
    Sync {
        /// Profile-links YAML file (defaults to `SKILLPULSE_PROFILES_PATH`)
        #[arg(long)]
        profiles: Option<PathBuf>,

        #[command(flatten)]
        links: LinkArgs,
    },
    /// Score a stored platform data set without touching the network
    Analyze {
        /// JSON file holding a data set, or the output of `sync`
        file: PathBuf,
    },
    /// Print rule-based observations about recent activity
    Insights {
        /// JSON file holding an array of activity records
        #[arg(long, conflicts_with = "github", required_unless_present = "github")]
        input: Option<PathBuf>,

        /// GitHub profile URL or username to read public events from
        #[arg(long)]
        github: Option<String>,

        /// Number of most recent records to consider
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Extract the username from a profile link
    Resolve {
        /// Platform key: github, leetcode, codeforces, codechef, hackerrank or gfg
        platform: Platform,
        /// Profile URL or bare username
        link: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = skillpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Sync { profiles, links } => {
            sync::run_sync(&config, profiles.as_deref(), &links).await?;
        }
        Commands::Analyze { file } => sync::run_analyze(&file)?,
        Commands::Insights {
            input,
            github,
            limit,
        } => {
            insights::run_insights(&config, input.as_deref(), github.as_deref(), limit).await?;
        }
        Commands::Resolve { platform, link } => match resolve_handle(&link, platform) {
            Some(handle) => println!("{handle}"),
            None => anyhow::bail!("no {platform} username found in '{link}'"),
        },
    }

    Ok(())
}
