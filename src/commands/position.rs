//! Position command - Print the live cursor position

use anyhow::Result;
use owo_colors::OwoColorize;
use std::ops::ControlFlow;
use std::time::Duration;

use super::utils;
use mouse_control::config::Settings;
use mouse_control::control::{EnigoBackend, PositionSampler};

/// Options for the position command
#[derive(Debug, Default)]
pub struct PositionOptions {
    /// Sampling interval override in milliseconds
    pub interval_ms: Option<u64>,
    /// Stop after this many samples (runs until interrupted if omitted)
    pub count: Option<usize>,
}

impl PositionOptions {
    fn interval(&self, settings: &Settings) -> Duration {
        self.interval_ms
            .map(|ms| Duration::from_millis(ms.max(1)))
            .unwrap_or_else(|| settings.sample_interval())
    }
}

/// Execute the position command
pub fn execute(settings: &Settings, options: PositionOptions) -> Result<()> {
    if options.count == Some(0) {
        return Ok(());
    }

    let locator = EnigoBackend::connect()?;
    let mut sampler = PositionSampler::start(locator, options.interval(settings));

    let mut printed = 0;
    sampler.run(|point| {
        println!("{} {}", utils::timestamp().dimmed(), point);
        printed += 1;
        match options.count {
            Some(limit) if printed >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    });

    sampler.stop();
    Ok(())
}
