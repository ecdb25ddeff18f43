use crate::error::FetchError;
use crate::models::FetchResponse;
use crate::source::CollectionSource;
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::thread;

/// Run one fetch on a background thread and post the result to `tx`.
///
/// If the receiving store is gone by the time the fetch resolves, the result is dropped.
pub fn spawn_fetch_worker(
    source: Arc<dyn CollectionSource>,
    tx: Sender<FetchResponse>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("quiz-deck::fetch_worker".to_string())
        .spawn(move || {
            let origin = source.describe();
            tracing::debug!(%origin, "fetch worker started");

            let response = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => match rt.block_on(source.fetch()) {
                    Ok(items) => {
                        tracing::info!(%origin, count = items.len(), "collection fetched");
                        FetchResponse::Loaded(items)
                    }
                    Err(e) => {
                        tracing::warn!(%origin, error = %e, "collection fetch failed");
                        FetchResponse::Failed(e)
                    }
                },
                Err(e) => FetchResponse::Failed(FetchError::Runtime(e.to_string())),
            };

            if tx.send(response).is_err() {
                tracing::debug!("store dropped before fetch resolved, discarding result");
            }
        })
}
