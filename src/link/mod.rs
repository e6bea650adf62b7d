pub mod app;
pub mod handlers;
pub mod schema;
pub mod types;
pub mod util;
