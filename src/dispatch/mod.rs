
use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::endpoint::Endpoint;
use crate::error::PokeError;
use crate::http::poke_endpoint;

/// Outcome of one poke, labelled for log correlation.
#[derive(Debug)]
pub struct PokeOutcome {
    pub label: String,
    pub result: Result<u16, PokeError>,
}

/// Aggregate result of one fan-out pass.
#[derive(Debug)]
pub struct DispatchReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<(String, PokeError)>,
    pub elapsed: Duration,
}

/// Pokes every endpoint once, concurrently, and waits for all of them.
///
/// One task is spawned per endpoint with no parallelism cap; endpoint lists
/// are expected to be tens of entries, not thousands. Each task reports its
/// outcome over a channel at the moment it completes, so completion order is
/// unspecified. The join barrier has no cancellation: a failing poke never
/// affects its siblings, and dispatch returns only once every task has
/// finished. A task that panics is counted as a failure.
pub async fn dispatch(client: &Client, endpoints: Vec<Endpoint>) -> DispatchReport {
    let start = Instant::now();
    let total = endpoints.len();

    info!(count = total, "poking endpoints");

    let (outcome_tx, mut outcome_rx) = mpsc::channel::<PokeOutcome>(total.max(1));
    let mut handles = Vec::with_capacity(total);

    for endpoint in endpoints {
        let client = client.clone();
        let outcome_tx = outcome_tx.clone();

        handles.push(tokio::spawn(async move {
            let label = endpoint.label().to_owned();
            let result = poke_endpoint(&client, &endpoint).await;
            match &result {
                Ok(status) => info!(endpoint = %label, status = *status, "poke succeeded"),
                Err(err) => error!(endpoint = %label, error = %err, "poke failed"),
            }
            drop(outcome_tx.send(PokeOutcome { label, result }).await);
        }));
    }
    drop(outcome_tx);

    let mut succeeded = 0usize;
    let mut failures = Vec::new();
    while let Some(outcome) = outcome_rx.recv().await {
        match outcome.result {
            Ok(_) => succeeded = succeeded.saturating_add(1),
            Err(err) => failures.push((outcome.label, err)),
        }
    }

    // The channel closing means every sender is gone; joining afterwards
    // surfaces panicked tasks without ever cancelling a live one.
    for handle in handles {
        if let Err(err) = handle.await {
            failures.push(("<task>".to_owned(), PokeError::Join { source: err }));
        }
    }

    let failed = failures.len();
    DispatchReport {
        total,
        succeeded,
        failed,
        failures,
        elapsed: start.elapsed(),
    }
}
