//! The adapter capability and its static dispatch table.

use std::future::Future;

use skillpulse_core::{resolve_handle, AppConfig, Platform, PlatformSnapshot};

use crate::client::PlatformClient;
use crate::codeforces::CodeforcesAdapter;
use crate::error::PlatformError;
use crate::gfg::GfgAdapter;
use crate::github::GithubAdapter;
use crate::leetcode::LeetcodeAdapter;
use crate::stub::{CodechefAdapter, HackerrankAdapter};

/// Fetches and normalizes one platform's data for a resolved handle.
pub trait PlatformAdapter {
    fn platform(&self) -> Platform;

    /// Fetch everything the platform exposes for `handle` and normalize it.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] on any transport, status or payload failure
    /// the adapter does not degrade on its own.
    fn fetch_snapshot(
        &self,
        handle: &str,
    ) -> impl Future<Output = Result<PlatformSnapshot, PlatformError>> + Send;
}

/// Resolve `raw_link` to a handle and run `adapter` on it.
///
/// Never fails: an empty link yields `None` without touching the network,
/// and adapter errors are logged and reported as `None`.
pub async fn fetch_platform<A: PlatformAdapter>(
    adapter: &A,
    raw_link: &str,
) -> Option<PlatformSnapshot> {
    let platform = adapter.platform();
    let Some(handle) = resolve_handle(raw_link, platform) else {
        tracing::debug!(platform = %platform, "no handle in profile link, skipping");
        return None;
    };

    match adapter.fetch_snapshot(&handle).await {
        Ok(snapshot) => {
            tracing::debug!(
                platform = %platform,
                handle = %handle,
                solved = snapshot.solved_count(),
                "fetched platform snapshot"
            );
            Some(snapshot)
        }
        Err(e) => {
            tracing::warn!(
                platform = %platform,
                handle = %handle,
                error = %e,
                "platform fetch failed"
            );
            None
        }
    }
}

/// One adapter per platform, selected by [`Platform`].
pub struct Adapters {
    github: GithubAdapter,
    leetcode: LeetcodeAdapter,
    codeforces: CodeforcesAdapter,
    codechef: CodechefAdapter,
    hackerrank: HackerrankAdapter,
    gfg: GfgAdapter,
}

impl Adapters {
    #[must_use]
    pub fn new(client: &PlatformClient) -> Self {
        Self {
            github: GithubAdapter::new(client.clone()),
            leetcode: LeetcodeAdapter::new(client.clone()),
            codeforces: CodeforcesAdapter::new(client.clone()),
            codechef: CodechefAdapter,
            hackerrank: HackerrankAdapter,
            gfg: GfgAdapter::new(client.clone()),
        }
    }

    /// Builds the shared client from `config` and wires every adapter to it.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, PlatformError> {
        Ok(Self::new(&PlatformClient::from_config(config)?))
    }

    /// Run the adapter for `platform` on `raw_link`. See [`fetch_platform`].
    pub async fn fetch(&self, platform: Platform, raw_link: &str) -> Option<PlatformSnapshot> {
        match platform {
            Platform::Github => fetch_platform(&self.github, raw_link).await,
            Platform::Leetcode => fetch_platform(&self.leetcode, raw_link).await,
            Platform::Codeforces => fetch_platform(&self.codeforces, raw_link).await,
            Platform::Codechef => fetch_platform(&self.codechef, raw_link).await,
            Platform::Hackerrank => fetch_platform(&self.hackerrank, raw_link).await,
            Platform::Gfg => fetch_platform(&self.gfg, raw_link).await,
        }
    }
}
