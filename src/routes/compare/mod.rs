mod handler;
pub mod model;

pub use handler::compare_user;
pub use model::{CompareResponse, Comparison, StoreReading, Winner};
