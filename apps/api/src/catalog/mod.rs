pub mod bands;
pub mod handlers;
pub mod reader;
