//! Background deploy watcher.
//!
//! Feeds every notification from the [`EventBus`] through the
//! [`DeployIngestor`]. A failing event is logged and the watcher moves on to
//! the next one.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::services::deploy_ingestor::DeployIngestor;
use crate::services::event_bus::EventBus;

/// Spawn the deploy watcher. The task exits once the bus is dropped.
pub fn spawn_deploy_watcher(bus: &EventBus, ingestor: Arc<DeployIngestor>) -> JoinHandle<()> {
    let mut rx = bus.subscribe();

    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Err(e) = ingestor.on_deploy(&event).await {
                        tracing::error!(
                            repository = %event.repository,
                            path = %event.gav,
                            code = e.code(),
                            error = %e,
                            "Failed to record deployed file"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(
                        missed,
                        "Deploy watcher fell behind, notifications were dropped"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        tracing::debug!("Deploy watcher stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::mod_file::NewModFile;
    use crate::services::event_bus::DeployEvent;
    use crate::services::mod_file_service::ModFileStore;
    use crate::storage::{ArtifactLookup, FileDetails};
    use crate::test_logs::LogBuffer;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Serves the same bytes for every `.jar` path except `missing`.
    struct AnyJarLookup;

    #[async_trait]
    impl ArtifactLookup for AnyJarLookup {
        async fn find_file(
            &self,
            _repository: &str,
            path: &str,
        ) -> Result<Option<(FileDetails, Bytes)>> {
            if path.contains("missing") {
                return Ok(None);
            }
            Ok(Some((FileDetails { content_length: 3 }, Bytes::from_static(b"jar"))))
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        mod_ids: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ModFileStore for RecordingStore {
        async fn insert(&self, file: &NewModFile) -> Result<Uuid> {
            self.mod_ids.lock().unwrap().push(file.mod_id.clone());
            Ok(Uuid::new_v4())
        }
    }

    #[tokio::test]
    async fn keeps_going_after_failed_event() {
        let bus = EventBus::new(16);
        let store = Arc::new(RecordingStore::default());
        let ingestor = Arc::new(DeployIngestor::new(Arc::new(AnyJarLookup), store.clone()));
        let handle = spawn_deploy_watcher(&bus, ingestor);

        bus.publish(DeployEvent::now("releases", "a/b/missing/missing-1.20.1-1.0.0.jar"));
        bus.publish(DeployEvent::now("releases", "a/b/first/first-1.20.1-1.0.0.pom"));
        bus.publish(DeployEvent::now("releases", "a/b/second/second-1.20.1-1.0.0.jar"));
        drop(bus);

        handle.await.unwrap();
        assert_eq!(*store.mod_ids.lock().unwrap(), vec!["second".to_string()]);
    }

    #[tokio::test]
    async fn stops_when_bus_closes() {
        let bus = EventBus::new(4);
        let ingestor = Arc::new(DeployIngestor::new(
            Arc::new(AnyJarLookup),
            Arc::new(RecordingStore::default()),
        ));
        let handle = spawn_deploy_watcher(&bus, ingestor);
        drop(bus);

        handle.await.unwrap();
    }

    #[tokio::test]
    async fn bad_path_is_reported_once() {
        let bad = "a/b/broken/broken.jar";
        let bus = EventBus::new(4);
        let ingestor = Arc::new(DeployIngestor::new(
            Arc::new(AnyJarLookup),
            Arc::new(RecordingStore::default()),
        ));

        let (logs, _guard) = LogBuffer::capture();
        let handle = spawn_deploy_watcher(&bus, ingestor);
        bus.publish(DeployEvent::now("releases", bad));
        drop(bus);
        handle.await.unwrap();

        let out = logs.contents();
        let reports: Vec<&str> = out.lines().filter(|line| line.contains(bad)).collect();
        assert_eq!(reports.len(), 1, "logs were:\n{out}");
        assert!(reports[0].contains("ERROR"));
        assert!(reports[0].contains("VALIDATION_ERROR"));
    }
}
