//! Scan orchestration.
//!
//! Enumeration is synchronous and pure; probing is the only concurrent
//! stage. A semaphore bounds the in-flight workers, every record is
//! claimed by exactly one task, and completions flow back over a channel
//! tagged with their enumeration index so the final record order never
//! depends on completion order.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::sync::mpsc;
use tracing::debug;

use sweepr_common::config::ScanConfig;
use sweepr_common::error::ScanError;
use sweepr_common::network::record::{Reachability, Role};
use sweepr_common::network::report::ScanResult;
use sweepr_common::network::request::ScanRequest;

use crate::enumerate::enumerate;
use crate::probe::Prober;
use crate::resolve::NameResolver;

/// Completed-record callback for a progress indicator.
pub type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

struct Outcome {
    idx: usize,
    // None for network/broadcast records, which are never probed
    up: Option<bool>,
    hostname: Option<String>,
}

/// Runs the full scan use case: enumerate, probe, resolve, aggregate.
///
/// The probe and resolution capabilities are injected so the engine never
/// depends on a concrete external mechanism.
pub struct ScanService {
    prober: Arc<dyn Prober>,
    resolver: Arc<dyn NameResolver>,
    config: ScanConfig,
}

impl ScanService {
    pub fn new(
        prober: Arc<dyn Prober>,
        resolver: Arc<dyn NameResolver>,
        config: ScanConfig,
    ) -> Self {
        Self {
            prober,
            resolver,
            config,
        }
    }

    /// Scans to completion and returns records in enumeration order.
    ///
    /// `on_progress` is invoked with the number of completed records after
    /// each one lands, from the single merge point.
    pub async fn run(
        &self,
        request: &ScanRequest,
        on_progress: Option<ProgressFn>,
    ) -> Result<ScanResult, ScanError> {
        let mut records = enumerate(request)?;
        debug!(
            "scanning {} records at concurrency {}",
            records.len(),
            self.config.concurrency
        );

        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

        for (idx, record) in records.iter().enumerate() {
            let addr = record.addr;
            let role = record.role;
            let prober = Arc::clone(&self.prober);
            let resolver = Arc::clone(&self.resolver);
            let semaphore = Arc::clone(&semaphore);
            let tx = tx.clone();

            tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await;

                let hostname = resolver.resolve(addr).await;
                let up = match role {
                    Role::Host => Some(prober.probe(addr).await),
                    Role::Network | Role::Broadcast => None,
                };

                let _ = tx.send(Outcome { idx, up, hostname });
            });
        }
        drop(tx);

        // Join barrier: the channel closes once every worker has reported.
        let mut completed = 0usize;
        while let Some(outcome) = rx.recv().await {
            let record = &mut records[outcome.idx];
            if let Some(up) = outcome.up {
                record.reachable = if up {
                    Reachability::Up
                } else {
                    Reachability::Down
                };
            }
            record.hostname = outcome.hostname;

            completed += 1;
            if let Some(callback) = &on_progress {
                callback(completed);
            }
        }

        Ok(ScanResult::new(records))
    }
}
