//! mouse-control library
//!
//! Credit-gated cursor control: a session that spends one credit per cursor
//! move, plus a sampler that reports where the cursor actually is.

pub mod config;
pub mod control;
