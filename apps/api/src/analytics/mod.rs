pub mod handlers;
pub mod roi;
