pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod launcher;
pub mod resolver;
pub mod timer;

pub use context::AppContext;
