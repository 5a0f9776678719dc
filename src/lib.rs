pub mod api;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod session;
pub mod utils;
