//! Search worker thread
//!
//! Runs search requests on a background thread so the terminal stays
//! responsive while the backend works. Requests arrive on one channel and
//! outcomes go back on another; the UI polls the latter without blocking.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use super::{SearchClient, SearchOutcome, SearchParams};

/// Spawn the search worker thread
///
/// The thread owns a single-threaded tokio runtime and handles one request
/// at a time until the request channel closes. If the runtime cannot be
/// built the thread exits, dropping `response_tx`, which the UI reports as
/// a disconnected worker.
pub fn spawn_worker(
    client: SearchClient,
    request_rx: Receiver<SearchParams>,
    response_tx: Sender<SearchOutcome>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create tokio runtime for search worker: {}", e);
                return;
            }
        };

        rt.block_on(worker_loop(client, request_rx, response_tx));
        log::debug!("Search worker stopped");
    })
}

/// Process requests until either channel closes
///
/// Blocking `recv()` is fine here: the runtime only ever drives the
/// request currently in flight.
async fn worker_loop(
    client: SearchClient,
    request_rx: Receiver<SearchParams>,
    response_tx: Sender<SearchOutcome>,
) {
    while let Ok(params) = request_rx.recv() {
        let outcome = client.search(&params).await;

        match &outcome {
            Ok(response) => log::debug!(
                "Search finished: {} results, error={:?}",
                response.results.as_ref().map_or(0, Vec::len),
                response.error_message()
            ),
            Err(e) => log::debug!("Search failed: {}", e),
        }

        if response_tx.send(outcome).is_err() {
            // Main thread gone
            break;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
