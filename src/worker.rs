use crate::counter::TicketCounter;
use crate::model::{Config, RunSummary};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::debug;

pub async fn worker(rank: usize, config: Config, tickets: Arc<TicketCounter>) -> Result<()> {
    loop {
        let Some(ticket) = tickets.claim() else {
            return Ok(());
        };

        let client = reqwest::Client::new();
        let response = client
            .get(&config.url)
            .send()
            .await
            .with_context(|| format!("worker {rank}: request {ticket} to {} failed", config.url))?;
        // Response status and body are intentionally not inspected.
        debug!(rank, ticket, status = %response.status(), "request completed");

        tokio::time::sleep(config.delay).await;
    }
}

/// Spawns the workers, waits for all of them to finish, and returns the run
/// result. The first worker error aborts the remaining workers and propagates.
pub async fn run(config: &Config) -> Result<RunSummary> {
    let started = Instant::now();
    let tickets = Arc::new(TicketCounter::new(config.requests));

    let mut set = JoinSet::new();
    for rank in 0..config.parallelism {
        set.spawn(worker(rank, config.clone(), tickets.clone()));
    }

    while let Some(joined) = set.join_next().await {
        joined.context("worker task panicked")??;
    }

    Ok(RunSummary {
        url: config.url.clone(),
        requests: tickets.issued(),
        elapsed: started.elapsed(),
        parallelism: config.parallelism,
    })
}
