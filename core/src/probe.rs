//! Reachability probing.
//!
//! The scan engine only needs a binary up/down answer per address, so the
//! probe mechanism stays behind a trait and the system implementation
//! shells out to the platform `ping` binary. Tests substitute a
//! deterministic prober instead of touching the network.

use std::net::Ipv4Addr;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time;
use tracing::trace;

/// A reachability probe.
///
/// Must answer within a bounded time and never error for network
/// conditions: unreachability and timeout both come back as `false`.
/// Safe to call concurrently from many workers.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, addr: Ipv4Addr) -> bool;
}

/// Probes by invoking the system `ping` once per address.
pub struct SystemPinger {
    timeout: Duration,
}

impl SystemPinger {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn command(&self, addr: Ipv4Addr) -> Command {
        let mut cmd = Command::new("ping");

        #[cfg(target_os = "windows")]
        cmd.args(["-n", "1", "-w", &self.timeout.as_millis().to_string()]);

        #[cfg(not(target_os = "windows"))]
        {
            // Unix ping takes its deadline in whole seconds
            let secs = self.timeout.as_secs().max(1);
            cmd.args(["-c", "1", "-W", &secs.to_string()]);
        }

        cmd.arg(addr.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

#[async_trait]
impl Prober for SystemPinger {
    async fn probe(&self, addr: Ipv4Addr) -> bool {
        let mut cmd = self.command(addr);

        // Outer deadline guards against ping binaries that ignore theirs.
        let deadline = self.timeout + Duration::from_millis(500);
        let up = match time::timeout(deadline, cmd.status()).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(_)) | Err(_) => false,
        };

        trace!("probe {addr}: {}", if up { "up" } else { "down" });
        up
    }
}
