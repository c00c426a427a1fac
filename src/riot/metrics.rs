use std::sync::atomic::{AtomicU64, Ordering};

/// Simple counter of the Riot API requests performed by a client.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    count: AtomicU64,
}

impl RequestMetrics {
    /// Record one more request and return the new total.
    pub fn inc(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn total(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
