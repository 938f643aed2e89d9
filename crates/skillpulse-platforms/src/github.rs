//! GitHub REST adapter: user profile, recently updated repos and public events.

use chrono::{DateTime, Utc};
use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, Url};
use serde::Deserialize;
use skillpulse_core::{
    GithubEvent, GithubProfile, GithubRepo, GithubSnapshot, GithubStats, Platform,
    PlatformSnapshot,
};

use crate::adapter::PlatformAdapter;
use crate::client::{empty_on_status, endpoint_url, PlatformClient};
use crate::error::PlatformError;
use crate::normalize::{sort_by_count_desc, tally};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const PAGE_SIZE: &str = "30";
const MAX_LANGUAGES: usize = 5;
const MAX_REPOS: usize = 10;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UserResponse {
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: Option<u32>,
    pub followers: Option<u32>,
    pub following: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RepoResponse {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<u32>,
    pub forks_count: Option<u32>,
    pub html_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct EventResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: Option<EventRepo>,
    pub payload: Option<EventPayload>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct EventRepo {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct EventPayload {
    pub action: Option<String>,
    pub commits: Option<Vec<EventCommit>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct EventCommit {
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

pub struct GithubAdapter {
    client: PlatformClient,
}

impl GithubAdapter {
    #[must_use]
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }

    fn url(&self, segments: &[&str]) -> Result<Url, PlatformError> {
        endpoint_url(&self.client.endpoints().github, segments)
    }

    fn request(&self, url: Url) -> RequestBuilder {
        let request = self.client.get(url).header(ACCEPT, GITHUB_ACCEPT);
        match self.client.github_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl PlatformAdapter for GithubAdapter {
    fn platform(&self) -> Platform {
        Platform::Github
    }

    async fn fetch_snapshot(&self, handle: &str) -> Result<PlatformSnapshot, PlatformError> {
        let user: UserResponse = self
            .client
            .send_json(self.request(self.url(&["users", handle])?), "github user")
            .await?;

        let repos_request = self
            .request(self.url(&["users", handle, "repos"])?)
            .query(&[("sort", "updated"), ("per_page", PAGE_SIZE)]);
        let repos: Vec<RepoResponse> = empty_on_status(
            self.client.send_json(repos_request, "github repos").await,
            "github repos",
        )?;

        let events_request = self
            .request(self.url(&["users", handle, "events", "public"])?)
            .query(&[("per_page", PAGE_SIZE)]);
        let events: Vec<EventResponse> = empty_on_status(
            self.client.send_json(events_request, "github events").await,
            "github events",
        )?;

        Ok(PlatformSnapshot::Github(normalize(handle, user, repos, events)))
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Build the GitHub snapshot from the three raw responses.
pub(crate) fn normalize(
    handle: &str,
    user: UserResponse,
    repos: Vec<RepoResponse>,
    events: Vec<EventResponse>,
) -> GithubSnapshot {
    let mut languages = tally(
        repos
            .iter()
            .filter_map(|r| r.language.as_deref())
            .filter(|lang| !lang.is_empty()),
    );
    sort_by_count_desc(&mut languages);
    let top_languages = languages
        .into_iter()
        .take(MAX_LANGUAGES)
        .map(|(lang, _)| lang)
        .collect();

    let total_commits: usize = events
        .iter()
        .filter(|e| e.kind == "PushEvent")
        .filter_map(|e| e.payload.as_ref()?.commits.as_ref())
        .map(Vec::len)
        .sum();

    let public_repos = user.public_repos.unwrap_or(0);
    let stats = GithubStats {
        total_repos: public_repos,
        total_commits: saturating_u32(total_commits),
        top_languages,
        recent_activity: saturating_u32(events.len()),
    };

    let profile = GithubProfile {
        avatar_url: user.avatar_url,
        html_url: user.html_url,
        name: user
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| handle.to_string()),
        bio: user.bio,
        public_repos,
        followers: user.followers.unwrap_or(0),
        following: user.following.unwrap_or(0),
    };

    let repos = repos
        .into_iter()
        .take(MAX_REPOS)
        .map(|r| GithubRepo {
            name: r.name,
            description: r.description,
            language: r.language,
            stars: r.stargazers_count.unwrap_or(0),
            forks: r.forks_count.unwrap_or(0),
            url: r.html_url.unwrap_or_default(),
            updated_at: r.updated_at,
        })
        .collect();

    let events = events.into_iter().map(normalize_event).collect();

    GithubSnapshot {
        profile,
        stats,
        repos,
        events,
    }
}

fn normalize_event(event: EventResponse) -> GithubEvent {
    let payload = event.payload.unwrap_or_default();
    let first_commit = payload
        .commits
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .filter(|m| !m.is_empty());
    let message = first_commit
        .or(payload.action.filter(|a| !a.is_empty()))
        .unwrap_or_default();

    GithubEvent {
        id: event.id,
        kind: event.kind,
        repo: event.repo.and_then(|r| r.name),
        message,
        created_at: event.created_at,
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "github_test.rs"]
mod tests;
