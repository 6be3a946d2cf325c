pub mod middleware;
pub mod assets;
pub mod assignments;
pub mod employees;
pub mod router;
pub mod stats;

pub use middleware::*;
pub use router::build_router;
