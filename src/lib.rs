//! Small tool that keeps a GitHub gist up to date with your weekly WakaTime stats.
//! Every run fetches the stats, renders them as unicode bar charts and overwrites the gist.
//!

pub mod cli;
pub mod config;
pub mod github;
pub mod report;
pub mod updater;
pub mod utils;
pub mod wakatime;
