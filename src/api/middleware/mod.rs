pub mod error;

pub use error::*;

use crate::{database::Database, events::EventBus};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub event_bus: EventBus,
    pub max_employee_assignments: usize,
}
