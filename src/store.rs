//! Shared owner of the fetched item collection.
//!
//! The store is created by the application root and handed by reference to
//! whatever needs to read the collection. Only the store's own methods mutate it.

use crate::fetch_worker::spawn_fetch_worker;
use crate::models::{FetchResponse, LoadStatus, QuizCollection, QuizItem};
use crate::source::CollectionSource;
use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub struct DataStore {
    collection: QuizCollection,
    status: LoadStatus,
    fetch_rx: Option<Receiver<FetchResponse>>,
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore {
    pub fn new() -> Self {
        Self {
            collection: Arc::from(Vec::new()),
            status: LoadStatus::NotStarted,
            fetch_rx: None,
        }
    }

    /// Start the one fetch of this store's lifetime. Returns false if a fetch was already issued.
    pub fn initialize(&mut self, source: Arc<dyn CollectionSource>) -> bool {
        if self.status != LoadStatus::NotStarted {
            tracing::debug!(status = ?self.status, "initialize ignored, fetch already issued");
            return false;
        }
        self.start_fetch(source);
        true
    }

    /// Re-issue the fetch after a failure. Does nothing in any other state.
    pub fn retry(&mut self, source: Arc<dyn CollectionSource>) -> bool {
        if !self.status.is_failed() {
            return false;
        }
        tracing::info!("retrying collection fetch");
        self.start_fetch(source);
        true
    }

    fn start_fetch(&mut self, source: Arc<dyn CollectionSource>) {
        let (tx, rx) = crossbeam_channel::bounded(1);
        match spawn_fetch_worker(source, tx) {
            Ok(_) => {
                self.fetch_rx = Some(rx);
                self.status = LoadStatus::Loading;
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not spawn fetch worker");
                self.fetch_rx = None;
                self.status = LoadStatus::Failed(format!("could not start fetch: {}", e));
            }
        }
    }

    /// Apply a pending fetch result without blocking. Returns true if the store changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.fetch_rx.as_ref() else {
            return false;
        };
        match rx.try_recv() {
            Ok(response) => {
                self.fetch_rx = None;
                self.apply(response);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.fetch_rx = None;
                self.status =
                    LoadStatus::Failed("fetch worker exited without a result".to_string());
                true
            }
        }
    }

    /// Block up to `timeout` for a pending fetch result. Returns true if the store changed.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let Some(rx) = self.fetch_rx.as_ref() else {
            return false;
        };
        match rx.recv_timeout(timeout) {
            Ok(response) => {
                self.fetch_rx = None;
                self.apply(response);
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                self.fetch_rx = None;
                self.status =
                    LoadStatus::Failed("fetch worker exited without a result".to_string());
                true
            }
        }
    }

    fn apply(&mut self, response: FetchResponse) {
        match response {
            FetchResponse::Loaded(items) => {
                let items = sanitize(items);
                tracing::info!(count = items.len(), "collection loaded");
                self.collection = Arc::from(items);
                self.status = LoadStatus::Loaded;
            }
            FetchResponse::Failed(e) => {
                // The previous snapshot stays in place.
                tracing::warn!(error = %e, "keeping previous collection");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    pub fn collection(&self) -> QuizCollection {
        Arc::clone(&self.collection)
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn set_collection(&mut self, items: Vec<QuizItem>) {
        self.collection = Arc::from(sanitize(items));
        self.status = LoadStatus::Loaded;
    }
}

/// Drop items with nothing to choose from and report duplicate ids.
fn sanitize(items: Vec<QuizItem>) -> Vec<QuizItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            if item.choices.is_empty() {
                tracing::warn!(
                    index = i,
                    question = %item.question,
                    "dropping item without choices"
                );
                return None;
            }
            if let Some(id) = &item.id
                && !seen.insert(id.clone())
            {
                tracing::warn!(index = i, %id, "duplicate item id");
            }
            Some(item)
        })
        .collect()
}
