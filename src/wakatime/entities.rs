use serde::Deserialize;

use crate::utils::percentage::Percentage;

/// Body of `/users/current/stats/{range}`. Only the parts the report needs are kept.
#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub data: StatsData,
}

#[derive(Debug, Deserialize)]
pub struct StatsData {
    #[serde(default)]
    pub languages: Vec<LanguageStat>,
}

/// Time spent in a single language. WakaTime sends these sorted by time, longest first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    pub percent: Percentage,
    /// Human readable duration, for example `3 hrs 20 mins`.
    pub text: String,
}
