pub mod candidates;
pub mod handlers;
pub mod lifecycle;
