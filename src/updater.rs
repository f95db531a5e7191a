//! A single fetch, format and upload run.

use anyhow::{anyhow, Context, Result};
use tracing::{error, info};

use crate::{
    github::GistStore,
    report::{compose_report, progress::year_progress, Report},
    utils::clock::Clock,
    wakatime::{StatsRange, StatsSource},
};

/// Name the gist file gets after every update.
pub const REPORT_FILENAME: &str = "📊 Weekly development breakdown";

/// Fetches statistics and renders them. Failing to fetch is fatal for the run.
pub async fn build_report(
    stats: &impl StatsSource,
    range: StatsRange,
    clock: &impl Clock,
) -> Result<Report> {
    let data = stats
        .get_my_stats(range)
        .await
        .context("Unable to fetch coding stats")?;
    let progress = year_progress(clock.time());
    info!(
        "Year is {}% done, {} languages received",
        progress.percent_text(),
        data.languages.len()
    );
    Ok(compose_report(&progress, &data.languages))
}

/// Overwrites the first file of the gist with the report.
///
/// Without a readable gist there is no file name to write to, so a failed read ends the run. A
/// failed write is only logged.
pub async fn upload_report(store: &impl GistStore, gist_id: &str, report: &Report) -> Result<()> {
    let gist = store
        .get_gist(gist_id)
        .await
        .inspect_err(|e| error!("Unable to get gist\n{e:?}"))
        .with_context(|| format!("Unable to read gist {gist_id}"))?;

    let original_name = gist
        .first_file_name()
        .ok_or_else(|| anyhow!("Gist {gist_id} has no file to update"))?;

    match store
        .update_file(gist_id, original_name, REPORT_FILENAME, &report.to_string())
        .await
    {
        Ok(()) => info!("Updated {original_name} in gist {gist_id}"),
        Err(e) => error!("Unable to update gist\n{e:?}"),
    }
    Ok(())
}

pub async fn run_update(
    stats: &impl StatsSource,
    store: &impl GistStore,
    gist_id: &str,
    range: StatsRange,
    clock: &impl Clock,
) -> Result<()> {
    let report = build_report(stats, range, clock).await?;
    upload_report(store, gist_id, &report).await
}
