use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::ConfigError;

/// Raw profile URLs or bare handles, keyed by platform. Values may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileLinks(BTreeMap<Platform, String>);

impl ProfileLinks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, platform: Platform, link: impl Into<String>) {
        self.0.insert(platform, link.into());
    }

    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.0.get(&platform).map(String::as_str)
    }

    /// Entries whose link is non-empty after trimming, in platform order.
    pub fn configured(&self) -> impl Iterator<Item = (Platform, &str)> {
        self.0
            .iter()
            .filter(|(_, link)| !link.trim().is_empty())
            .map(|(p, link)| (*p, link.as_str()))
    }

    /// Overlay every non-empty link from `other` onto `self`.
    pub fn merge(&mut self, other: &ProfileLinks) {
        for (platform, link) in other.configured() {
            self.set(platform, link);
        }
    }
}

impl FromIterator<(Platform, String)> for ProfileLinks {
    fn from_iter<I: IntoIterator<Item = (Platform, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: ProfileLinks,
}

/// Load and validate profile links from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profile_links(path: &Path) -> Result<ProfilesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfilesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let profiles_file: ProfilesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::ProfilesFileParse)?;

    validate_profiles(&profiles_file)?;

    Ok(profiles_file)
}

fn validate_profiles(profiles_file: &ProfilesFile) -> Result<(), ConfigError> {
    for (platform, link) in profiles_file.profiles.configured() {
        if link.trim().chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "profile link for '{platform}' contains whitespace: '{link}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "links_test.rs"]
mod tests;
