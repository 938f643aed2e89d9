//! Concurrent fan-out over every configured profile link.

use futures::future::join_all;
use skillpulse_core::{PlatformDataSet, ProfileLinks};

use crate::adapter::Adapters;

/// Fetch every platform with a non-empty link and gather the outcomes.
///
/// All adapters run concurrently on the caller's task; the call returns once
/// every one has settled. Unconfigured platforms are absent from the result,
/// failed ones are present as `None`. No overall deadline is applied.
pub async fn collect_platform_data(adapters: &Adapters, links: &ProfileLinks) -> PlatformDataSet {
    let fetches = links
        .configured()
        .map(|(platform, link)| async move { (platform, adapters.fetch(platform, link).await) });
    let outcomes = join_all(fetches).await;

    let requested = outcomes.len();
    let succeeded = outcomes.iter().filter(|(_, s)| s.is_some()).count();
    tracing::info!(
        requested,
        succeeded,
        failed = requested - succeeded,
        "platform sync complete"
    );

    outcomes.into_iter().collect()
}
