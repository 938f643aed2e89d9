//! Platforms without a free public API. These always return a zeroed
//! snapshot asking the user to enter stats manually.

use std::future::{ready, Future};

use skillpulse_core::{
    CodechefSnapshot, CodechefStats, HackerrankSnapshot, HackerrankStats, Platform,
    PlatformSnapshot, StubProfile,
};

use crate::adapter::PlatformAdapter;
use crate::error::PlatformError;

pub const CODECHEF_MESSAGE: &str = "Add CodeChef stats manually or wait for API support.";
pub const HACKERRANK_MESSAGE: &str = "Add HackerRank stats manually or wait for API support.";

fn stub_profile(handle: &str, message: &str) -> StubProfile {
    StubProfile {
        username: handle.to_string(),
        message: message.to_string(),
    }
}

pub struct CodechefAdapter;

impl PlatformAdapter for CodechefAdapter {
    fn platform(&self) -> Platform {
        Platform::Codechef
    }

    fn fetch_snapshot(
        &self,
        handle: &str,
    ) -> impl Future<Output = Result<PlatformSnapshot, PlatformError>> + Send {
        ready(Ok(PlatformSnapshot::Codechef(CodechefSnapshot {
            stats: CodechefStats::default(),
            profile: stub_profile(handle, CODECHEF_MESSAGE),
        })))
    }
}

pub struct HackerrankAdapter;

impl PlatformAdapter for HackerrankAdapter {
    fn platform(&self) -> Platform {
        Platform::Hackerrank
    }

    fn fetch_snapshot(
        &self,
        handle: &str,
    ) -> impl Future<Output = Result<PlatformSnapshot, PlatformError>> + Send {
        ready(Ok(PlatformSnapshot::Hackerrank(HackerrankSnapshot {
            stats: HackerrankStats::default(),
            profile: stub_profile(handle, HACKERRANK_MESSAGE),
        })))
    }
}
