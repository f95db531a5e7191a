use std::fmt::Display;

use anyhow::Result;
use chrono::{DateTime, Local};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::{
    config::Config,
    updater::build_report,
    utils::clock::{Clock, DefaultClock, FixedClock},
    wakatime::StatsRange,
};

use super::Args;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Parser)]
pub struct PreviewCommand {
    #[arg(
        long,
        short,
        help = "Date used for the year progress line. Examples are \"yesterday\", \"31/12/2024\", \"next monday\""
    )]
    date: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

/// Prints the report to stdout. GitHub is never contacted.
pub async fn process_preview_command(
    PreviewCommand { date, date_style }: PreviewCommand,
    config: &Config,
    range: StatsRange,
    http: reqwest::Client,
) -> Result<()> {
    let stats = config.wakatime_client(http);
    let report = match date {
        Some(date) => {
            let clock = FixedClock(parse_date(&date, date_style, Local::now())?);
            build_report(&stats, range, &clock).await?
        }
        None => build_report(&stats, range, &DefaultClock).await?,
    };
    println!("{report}");
    Ok(())
}

fn parse_date(date: &str, date_style: DateStyle, now: DateTime<Local>) -> Result<DateTime<Local>> {
    match parse_date_string(date, now, date_style.into()) {
        Ok(v) => Ok(v.with_timezone(&Local)),
        Err(e) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate date {e}"),
            )
            .into()),
    }
}
