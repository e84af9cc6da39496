use tokio::sync::broadcast;

use crate::config::Config;

/// Notification that a file was deployed to a hosted repository.
#[derive(Debug, Clone)]
pub struct DeployEvent {
    /// Name of the repository that received the file
    pub repository: String,
    /// Repository-relative path of the deployed file
    pub gav: String,
    /// ISO 8601 timestamp
    pub timestamp: String,
}

impl DeployEvent {
    /// Create a deploy event timestamped to now.
    pub fn now(repository: impl Into<String>, gav: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            gav: gav.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Broadcast-based bus the host publishes deploy notifications into.
///
/// Subscribers receive events via `tokio::sync::broadcast`. A subscriber that
/// falls behind receives `RecvError::Lagged` and has lost those events.
pub struct EventBus {
    tx: broadcast::Sender<DeployEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Bus sized by the configured `EVENT_BUFFER`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.event_buffer.get())
    }

    /// Publish a deploy event. If there are no subscribers the event is dropped silently.
    pub fn publish(&self, event: DeployEvent) {
        let _ = self.tx.send(event);
    }

    /// Subscribe to deploy events.
    pub fn subscribe(&self) -> broadcast::Receiver<DeployEvent> {
        self.tx.subscribe()
    }
}
