use std::fmt;

use reqwest::Client;
use semver::Version;
use serde::Deserialize;
use thiserror::Error;

pub const APP_NAME: &str = "Diminished Value Estimator";
pub const APP_REPO_URL: &str = "https://github.com/claimworks/dv_estimator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

const GITHUB_OWNER: &str = "claimworks";
const GITHUB_REPO: &str = "dv_estimator";

#[derive(Clone, Debug)]
pub struct UpdateInfo {
    pub current: Version,
    pub latest_tag: Option<String>,
    pub latest: Option<Version>,
}

impl UpdateInfo {
    pub fn update_available(&self) -> bool {
        self.latest
            .as_ref()
            .map(|candidate| *candidate > self.current)
            .unwrap_or(false)
    }
}

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("failed to build HTTP client: {0}")]
    BuildClient(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

#[derive(Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Asks GitHub for the newest release and compares it against the running
/// build. Only called from an explicit user action on the settings page.
pub async fn check_for_update() -> Result<UpdateInfo, UpdateError> {
    let user_agent = format!("{}/{} (+{})", APP_NAME, version_label(), APP_REPO_URL);
    let client = Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|err| UpdateError::BuildClient(err.to_string()))?;

    let current = current_version()?;
    let url = format!(
        "https://api.github.com/repos/{owner}/{repo}/releases/latest",
        owner = GITHUB_OWNER,
        repo = GITHUB_REPO
    );

    let release = client
        .get(&url)
        .send()
        .await
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .error_for_status()
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .json::<LatestRelease>()
        .await
        .map_err(|err| UpdateError::Decode(err.to_string()))?;

    let latest = parse_version_str(&release.tag_name).ok();
    Ok(UpdateInfo {
        current,
        latest_tag: Some(release.tag_name),
        latest,
    })
}

fn parse_version_str(input: &str) -> Result<Version, UpdateError> {
    let trimmed = input.trim_start_matches(|ch| ch == 'v' || ch == 'V');
    Version::parse(trimmed).map_err(|err| UpdateError::InvalidVersion(err.to_string()))
}

pub fn current_version() -> Result<Version, UpdateError> {
    if let Some(tag) = GIT_TAG {
        return parse_version_str(tag);
    }

    parse_version_str(APP_VERSION)
}

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

impl fmt::Display for UpdateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.latest_tag, self.update_available()) {
            (Some(tag), true) => write!(
                f,
                "New version available: {} (current {})",
                tag, self.current
            ),
            (Some(tag), false) => write!(f, "Up to date on {}", tag),
            (None, _) => write!(f, "No release information found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_labels_prefer_the_git_tag() {
        // GIT_TAG is absent in test builds, so the cargo version is used.
        if GIT_TAG.is_none() {
            assert_eq!(version_label(), format!("v{APP_VERSION}"));
        }
    }

    #[test]
    fn tag_prefixes_are_stripped_before_parsing() {
        assert_eq!(
            parse_version_str("v1.2.3").expect("valid tag"),
            Version::new(1, 2, 3)
        );
        assert!(parse_version_str("release-1").is_err());
    }

    #[test]
    fn update_detection_compares_semver() {
        let info = UpdateInfo {
            current: Version::new(1, 0, 0),
            latest_tag: Some("v1.1.0".to_string()),
            latest: Some(Version::new(1, 1, 0)),
        };
        assert!(info.update_available());

        let stale = UpdateInfo {
            current: Version::new(1, 1, 0),
            latest_tag: Some("v1.0.0".to_string()),
            latest: Some(Version::new(1, 0, 0)),
        };
        assert!(!stale.update_available());
    }
}
