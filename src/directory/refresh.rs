use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::handle::DirectoryHandle;
use super::loader::CorpusLoader;

/// Default interval between directory reloads
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Reload the directory on a fixed interval.
///
/// The first reload happens immediately. Loading runs on the blocking pool
/// since it reads and parses the whole corpus. Failures are logged by
/// [`DirectoryHandle::refresh_from`] and the next tick tries again.
pub fn spawn_refresher(
    handle: Arc<DirectoryHandle>,
    loader: Arc<dyn CorpusLoader>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let handle = Arc::clone(&handle);
            let loader = Arc::clone(&loader);
            let outcome =
                tokio::task::spawn_blocking(move || handle.refresh_from(loader.as_ref())).await;

            match outcome {
                Ok(Ok(version)) => tracing::debug!("Directory refresh published v{}", version),
                Ok(Err(_)) => {}
                Err(e) => tracing::error!("Directory refresh task failed: {}", e),
            }
        }
    })
}
