use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

use crate::core::config::SessionConfig;
use crate::features::address_sessions::services::AddressSessionService;

/// Background worker that drops address sessions nobody has touched for a while
pub struct SessionSweeper {
    service: Arc<AddressSessionService>,
    idle_ttl: Duration,
    sweep_interval: Duration,
}

impl SessionSweeper {
    pub fn new(service: Arc<AddressSessionService>, config: &SessionConfig) -> Self {
        Self {
            service,
            idle_ttl: config.idle_ttl,
            sweep_interval: config.sweep_interval,
        }
    }

    /// Run the sweeper in a background loop
    pub async fn run(&self) {
        tracing::info!(
            "Starting address session sweeper (idle ttl: {}s, interval: {}s)",
            self.idle_ttl.as_secs(),
            self.sweep_interval.as_secs()
        );

        let mut interval = interval(self.sweep_interval);

        loop {
            interval.tick().await;
            self.sweep().await;
        }
    }

    async fn sweep(&self) -> usize {
        let evicted = self.service.evict_idle(self.idle_ttl).await;
        if evicted > 0 {
            tracing::info!(
                "Evicted {} idle address session(s), {} remaining",
                evicted,
                self.service.count().await
            );
        }
        evicted
    }
}
