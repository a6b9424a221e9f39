pub mod application;
pub mod bookmark;
pub mod employer;
pub mod job;
pub mod seeker;
