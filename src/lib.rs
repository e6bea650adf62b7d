pub mod app;
pub mod link;
pub mod shared;
