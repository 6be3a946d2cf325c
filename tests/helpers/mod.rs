pub mod factories;
pub mod test_db;

#[allow(unused_imports)]
pub use factories::*;
#[allow(unused_imports)]
pub use test_db::*;
