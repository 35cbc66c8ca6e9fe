//! Periodic cursor position sampling
//!
//! The sampler is a repeating tick that asks a [`CursorLocator`] where the
//! cursor is. Ticks come from a capacity-one channel, so a consumer that
//! falls behind skips ticks instead of queueing them up: the display only
//! ever needs the latest value.

use crossbeam_channel::{never, tick, Receiver};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use super::platform::{CursorLocator, Point};

/// Default sampling cadence
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

pub struct PositionSampler<L: CursorLocator> {
    locator: L,
    interval: Duration,
    ticker: Option<Receiver<Instant>>,
    latest: Option<Point>,
}

impl<L: CursorLocator> PositionSampler<L> {
    /// Create a stopped sampler
    pub fn new(locator: L, interval: Duration) -> Self {
        Self {
            locator,
            interval,
            ticker: None,
            latest: None,
        }
    }

    /// Create a sampler that is already ticking
    pub fn start(locator: L, interval: Duration) -> Self {
        let mut sampler = Self::new(locator, interval);
        sampler.resume();
        sampler
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Start ticking again after [`stop`](Self::stop); no-op while running
    pub fn resume(&mut self) {
        if self.ticker.is_none() {
            log::debug!("Sampling cursor every {:?}", self.interval);
            self.ticker = Some(tick(self.interval));
        }
    }

    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            log::debug!("Cursor sampling stopped");
        }
    }

    /// Last point delivered, if any
    pub fn latest(&self) -> Option<Point> {
        self.latest
    }

    /// Receiver for use in `select!`; never fires while stopped
    pub fn tick_signal(&self) -> Receiver<Instant> {
        self.ticker.clone().unwrap_or_else(never)
    }

    /// Take one reading; `None` means nothing to show this tick
    pub fn on_tick(&mut self) -> Option<Point> {
        let point = self.locator.query_cursor_position()?;
        self.latest = Some(point);
        Some(point)
    }

    /// Endless stream of samples, one per successful tick
    ///
    /// Resumes the sampler if it was stopped. The stream ends only when the
    /// sampler is stopped.
    pub fn samples(&mut self) -> Samples<'_, L> {
        self.resume();
        Samples { sampler: self }
    }

    /// Deliver samples to `on_sample` until it breaks
    pub fn run<F>(&mut self, mut on_sample: F)
    where
        F: FnMut(Point) -> ControlFlow<()>,
    {
        for point in self.samples() {
            if on_sample(point).is_break() {
                break;
            }
        }
    }
}

pub struct Samples<'a, L: CursorLocator> {
    sampler: &'a mut PositionSampler<L>,
}

impl<L: CursorLocator> Iterator for Samples<'_, L> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            let ticker = self.sampler.ticker.as_ref()?;
            ticker.recv().ok()?;
            if let Some(point) = self.sampler.on_tick() {
                return Some(point);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Plays back a fixed list of readings, then keeps reporting the last one
    struct ScriptedLocator {
        readings: VecDeque<Option<Point>>,
        last: Option<Point>,
        queries: usize,
    }

    impl ScriptedLocator {
        fn new(readings: Vec<Option<Point>>) -> Self {
            Self {
                readings: readings.into(),
                last: None,
                queries: 0,
            }
        }
    }

    impl CursorLocator for ScriptedLocator {
        fn query_cursor_position(&mut self) -> Option<Point> {
            self.queries += 1;
            match self.readings.pop_front() {
                Some(reading) => {
                    if reading.is_some() {
                        self.last = reading;
                    }
                    reading
                }
                None => self.last,
            }
        }
    }

    const FAST: Duration = Duration::from_millis(2);

    #[test]
    fn test_samples_skip_failed_readings() {
        let locator = ScriptedLocator::new(vec![
            Some(Point::new(1.0, 1.0)),
            None,
            Some(Point::new(2.0, 2.0)),
        ]);
        let mut sampler = PositionSampler::start(locator, FAST);

        let points: Vec<Point> = sampler.samples().take(2).collect();
        assert_eq!(points, vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        assert_eq!(sampler.locator.queries, 3);
        assert_eq!(sampler.latest(), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_restartable() {
        let locator = ScriptedLocator::new(vec![Some(Point::new(5.0, 6.0))]);
        let mut sampler = PositionSampler::new(locator, FAST);
        assert!(!sampler.is_running());

        assert_eq!(sampler.samples().next(), Some(Point::new(5.0, 6.0)));
        sampler.stop();
        assert!(!sampler.is_running());
        assert!(sampler.tick_signal().try_recv().is_err());

        assert_eq!(sampler.samples().take(3).count(), 3);
        assert!(sampler.is_running());
    }

    #[test]
    fn test_run_until_break() {
        let locator = ScriptedLocator::new(vec![Some(Point::new(0.0, 0.0))]);
        let mut sampler = PositionSampler::start(locator, FAST);

        let mut seen = 0;
        sampler.run(|_| {
            seen += 1;
            if seen == 4 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(seen, 4);
    }

    #[test]
    fn test_slow_consumer_drops_ticks() {
        let locator = ScriptedLocator::new(vec![]);
        let sampler = PositionSampler::start(locator, FAST);

        std::thread::sleep(Duration::from_millis(30));
        // Many intervals elapsed but at most one tick is buffered
        assert!(sampler.tick_signal().len() <= 1);
    }
}
