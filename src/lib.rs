pub mod cli;
pub mod config;
pub mod convex;
pub mod error;
pub mod submitter;
pub mod todo;
