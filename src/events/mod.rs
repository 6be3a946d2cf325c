use crate::models::assignment::{AssetType, AssignmentStatus};
use tokio::sync::broadcast;

/// System events published on assignment lifecycle changes
#[derive(Debug, Clone)]
pub enum SystemEvent {
    AssetAssigned {
        assignment_id: String,
        employee_id: String,
        asset_id: String,
        asset_type: AssetType,
        timestamp: String, // ISO 8601
    },
    AssetReturned {
        assignment_id: String,
        employee_id: String,
        asset_id: String,
        timestamp: String, // ISO 8601
    },
    AssignmentStatusChanged {
        assignment_id: String,
        old_status: AssignmentStatus,
        new_status: AssignmentStatus,
        timestamp: String, // ISO 8601
    },
    AssignmentDeleted {
        assignment_id: String,
        employee_id: String,
        asset_id: String,
        timestamp: String, // ISO 8601
    },
}

/// Event bus for publishing and subscribing to system events
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<SystemEvent>,
}

impl EventBus {
    /// Create a new event bus with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event to all subscribers (non-blocking, fire-and-forget)
    pub fn publish(&self, event: SystemEvent) {
        // Fire-and-forget - if no subscribers or channel full, just log and continue
        if let Err(e) = self.tx.send(event) {
            tracing::warn!("Failed to publish event (no subscribers or channel full): {}", e);
        }
    }

    /// Subscribe to events (returns a receiver)
    pub fn subscribe(&self) -> broadcast::Receiver<SystemEvent> {
        self.tx.subscribe()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1000)
    }
}
