//! Client for the WakaTime statistics API.

pub mod entities;

use std::fmt::Display;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::ValueEnum;
use entities::{StatsData, StatsResponse};
use tracing::{debug, instrument};

pub const DEFAULT_WAKATIME_URL: &str = "https://wakatime.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsRange {
    #[value(name = "last_7_days")]
    Last7Days,
    #[value(name = "last_30_days")]
    Last30Days,
    #[value(name = "last_6_months")]
    Last6Months,
    #[value(name = "last_year")]
    LastYear,
    #[value(name = "all_time")]
    AllTime,
}

impl Display for StatsRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsRange::Last7Days => write!(f, "last_7_days"),
            StatsRange::Last30Days => write!(f, "last_30_days"),
            StatsRange::Last6Months => write!(f, "last_6_months"),
            StatsRange::LastYear => write!(f, "last_year"),
            StatsRange::AllTime => write!(f, "all_time"),
        }
    }
}

/// Anything able to provide coding statistics for the current user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn get_my_stats(&self, range: StatsRange) -> Result<StatsData>;
}

pub struct WakaTimeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WakaTimeClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl StatsSource for WakaTimeClient {
    #[instrument(skip(self))]
    async fn get_my_stats(&self, range: StatsRange) -> Result<StatsData> {
        let url = format!("{}/api/v1/users/current/stats/{range}", self.base_url);
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.api_key, None::<&str>)
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?
            .error_for_status()
            .context("WakaTime rejected the stats request")?;

        let stats: StatsResponse = response
            .json()
            .await
            .context("Failed to parse WakaTime stats")?;
        debug!("Received {} languages", stats.data.languages.len());
        Ok(stats.data)
    }
}
