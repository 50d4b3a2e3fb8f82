mod handler;

pub use handler::{INSERT_MESSAGE, insert_user};
