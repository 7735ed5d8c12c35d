pub mod cli;
pub mod config;
pub mod notify;
pub mod persist;
pub mod render;
pub mod runner;
