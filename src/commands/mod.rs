//! CLI commands

pub mod move_cursor;
pub mod position;
pub mod run;
pub mod show_config;
pub mod utils;
