use std::fmt::Debug;

use crate::{
    github::{GitHubClient, DEFAULT_GITHUB_URL},
    wakatime::{WakaTimeClient, DEFAULT_WAKATIME_URL},
};

/// Everything needed to talk to both services. Built once when the process starts and handed to
/// whatever makes requests.
#[derive(Clone)]
pub struct Config {
    pub wakatime_api_key: String,
    pub wakatime_url: String,
    pub github_url: String,
    pub gist: Option<GistConfig>,
}

#[derive(Clone)]
pub struct GistConfig {
    pub gist_id: String,
    pub github_token: String,
}

// Secrets must never end up in logs.
impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("wakatime_url", &self.wakatime_url)
            .field("github_url", &self.github_url)
            .field("gist_id", &self.gist.as_ref().map(|v| &v.gist_id))
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn new(wakatime_api_key: impl Into<String>) -> Self {
        Self {
            wakatime_api_key: wakatime_api_key.into(),
            wakatime_url: DEFAULT_WAKATIME_URL.into(),
            github_url: DEFAULT_GITHUB_URL.into(),
            gist: None,
        }
    }

    pub fn wakatime_client(&self, http: reqwest::Client) -> WakaTimeClient {
        WakaTimeClient::new(http, &self.wakatime_url, &self.wakatime_api_key)
    }

    /// Returns [None] when no gist credentials were supplied.
    pub fn github_client(&self, http: reqwest::Client) -> Option<GitHubClient> {
        self.gist
            .as_ref()
            .map(|gist| GitHubClient::new(http, &self.github_url, &gist.github_token))
    }
}
