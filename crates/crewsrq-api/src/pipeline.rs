//! Fetch → filter → pause → slug map → join.

use anyhow::{Context, Result};
use tracing::instrument;

use crate::content::LocalSlugSource;
use crate::join::{FinalEvent, JoinSettings, join_events};
use crate::listings::{EventFilter, LocalListingsApi};
use crate::pacer::LocalPacer;
use crate::window::{DEFAULT_LOOKAHEAD_DAYS, DateWindow};

/// Everything the pipeline needs besides its I/O collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Days after today covered by both requests.
    pub lookahead_days: u32,
    /// Listing inclusion criteria.
    pub filter: EventFilter,
    /// Link base, tags and unresolved-slug policy.
    pub join: JoinSettings,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            filter: EventFilter::default(),
            join: JoinSettings::default(),
        }
    }
}

/// Runs one fetch-and-join pass for a window starting today.
///
/// # Errors
///
/// Returns the first fatal error: listings request/decoding, slug map
/// request/structure, or an unresolved slug under the `fail` policy.
#[instrument(skip_all)]
pub async fn run_pipeline(
    listings: &impl LocalListingsApi,
    slugs: &impl LocalSlugSource,
    pacer: &impl LocalPacer,
    settings: &PipelineSettings,
) -> Result<Vec<FinalEvent>> {
    let window = DateWindow::starting_today(settings.lookahead_days)?;
    run_pipeline_for(listings, slugs, pacer, settings, &window).await
}

/// Runs one fetch-and-join pass for an explicit window.
///
/// # Errors
///
/// See [`run_pipeline`].
#[instrument(skip_all, fields(from = %window.from, to = %window.to))]
pub async fn run_pipeline_for(
    listings: &impl LocalListingsApi,
    slugs: &impl LocalSlugSource,
    pacer: &impl LocalPacer,
    settings: &PipelineSettings,
    window: &DateWindow,
) -> Result<Vec<FinalEvent>> {
    let all_events = listings
        .fetch_events(window)
        .await
        .context("failed to fetch event listings")?;
    tracing::info!("Fetched {} events", all_events.len());

    let qualified = settings.filter.apply(all_events);
    tracing::info!(
        chapter = %settings.filter.chapter,
        "{} qualified events found",
        qualified.len()
    );

    pacer.pause().await;

    let slug_entries = slugs
        .fetch_slugs(window)
        .await
        .context("failed to fetch slug map")?;
    tracing::info!("Fetched {} event slugs", slug_entries.len());

    let joined = join_events(&qualified, &slug_entries, &settings.join)?;
    tracing::info!("Collected {} events", joined.len());

    Ok(joined)
}
