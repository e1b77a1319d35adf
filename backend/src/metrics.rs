use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Simple counter used to log the amount of backend requests performed.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    count: AtomicU64,
    name: &'static str,
}

impl RequestMetrics {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            count: AtomicU64::new(0),
            name,
        })
    }

    pub fn inc(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub async fn log_loop(self: Arc<Self>) {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            let total = self.total();
            let elapsed_min = self.start.elapsed().as_secs_f64() / 60.0;
            let avg = if elapsed_min > 0.0 {
                total as f64 / elapsed_min
            } else {
                0.0
            };
            tracing::info!(
                client = self.name,
                "{} requests executed (avg {:.2} req/min)",
                total,
                avg
            );
        }
    }
}
