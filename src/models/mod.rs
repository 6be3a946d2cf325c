pub mod asset;
pub mod assignment;
pub mod employee;

pub use asset::*;
pub use assignment::*;
pub use employee::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMetadata {
    pub page: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub total_pages: i64,
}
