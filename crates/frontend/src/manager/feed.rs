use contracts::complaint::ComplaintRecord;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::app_context::AppContext;

const POLL_INTERVAL_MS: u32 = 5_000;

/// Start the complaint-feed subscription: a poll loop that replaces the
/// whole snapshot on every delivery.
///
/// At most one subscription is live per session. Starting a new one (or
/// `AppContext::cancel_complaint_feed`, called on leaving the manager
/// page) bumps the generation counter and the superseded loop stops at
/// its next wake-up, so no stale callback ever touches the signals again.
pub fn start_complaint_feed(
    ctx: AppContext,
    complaints: RwSignal<Vec<ComplaintRecord>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    let my_generation = ctx.feed_generation.get_untracked() + 1;
    ctx.feed_generation.set(my_generation);

    loading.set(true);
    spawn_local(async move {
        loop {
            if ctx.feed_generation.get_untracked() != my_generation {
                log::info!("Complaint feed subscription {my_generation} cancelled");
                break;
            }

            let result = api::fetch_complaints().await;

            // The page may have been left while the fetch was in flight;
            // its signals are gone with it.
            if ctx.feed_generation.get_untracked() != my_generation {
                break;
            }

            match result {
                Ok(snapshot) => {
                    // Full re-render per snapshot; no incremental diffing.
                    complaints.set(snapshot);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Complaint feed fetch failed: {e}");
                    error.set(Some("Não foi possível carregar as reclamações.".into()));
                }
            }
            loading.set(false);

            TimeoutFuture::new(POLL_INTERVAL_MS).await;
        }
    });
}
