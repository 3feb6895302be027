pub mod config;
pub mod handlers;
pub mod persistence;
pub mod verification;
