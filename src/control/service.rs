//! Credit-gated cursor control
//!
//! [`CursorControlService`] owns the session state and drives [`update`]:
//! it feeds events in and carries out the returned effects against the OS
//! backend and the reset timer.

use crossbeam_channel::Receiver;
use std::time::{Duration, Instant};

use super::platform::{CursorWarp, Point};
use super::session::{update, Effect, Event, MoveError, SessionState};
use super::timer::{signal_of, Deferred};

/// How long `is_moving` stays up after a successful move
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(500);

pub struct CursorControlService<W: CursorWarp> {
    state: SessionState,
    warp: W,
    reset_delay: Duration,
    pending_reset: Option<Deferred>,
}

impl<W: CursorWarp> CursorControlService<W> {
    pub fn new(state: SessionState, warp: W) -> Self {
        Self {
            state,
            warp,
            reset_delay: DEFAULT_RESET_DELAY,
            pending_reset: None,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn credits(&self) -> u32 {
        self.state.credits
    }

    pub fn is_moving(&self) -> bool {
        self.state.is_moving
    }

    pub fn can_move(&self) -> bool {
        self.state.can_move()
    }

    pub fn warp(&self) -> &W {
        &self.warp
    }

    /// Fill both fields and fire the trigger
    pub fn request_move(&mut self, raw_x: &str, raw_y: &str) -> Result<Point, MoveError> {
        self.dispatch(Event::EditX(raw_x.to_string()));
        self.dispatch(Event::EditY(raw_y.to_string()));
        self.move_pending()
    }

    /// Fire the trigger with whatever the fields currently hold
    pub fn move_pending(&mut self) -> Result<Point, MoveError> {
        let outcome = self
            .dispatch(Event::MoveRequested)
            .into_iter()
            .find_map(|effect| match effect {
                Effect::PostMouseMoved(point) => Some(Ok(point)),
                Effect::Alert(e) => Some(Err(e)),
                Effect::ScheduleReset => None,
            })
            .unwrap_or(Err(MoveError::InvalidCoordinates));

        match &outcome {
            Ok(point) => log::debug!(
                "Moved cursor to {}, {} credit(s) left",
                point,
                self.state.credits
            ),
            Err(e) => log::info!("Move refused: {}", e),
        }
        outcome
    }

    pub fn edit_x(&mut self, raw: &str) {
        self.dispatch(Event::EditX(raw.to_string()));
    }

    pub fn edit_y(&mut self, raw: &str) {
        self.dispatch(Event::EditY(raw.to_string()));
    }

    pub fn dismiss_alert(&mut self) {
        self.dispatch(Event::DismissAlert);
    }

    /// Receiver that fires when the pending reset is due
    pub fn reset_signal(&self) -> Receiver<Instant> {
        signal_of(self.pending_reset.as_ref())
    }

    /// Apply the reset if its delay has elapsed; never blocks
    pub fn poll(&mut self) -> bool {
        let due = self
            .pending_reset
            .as_ref()
            .is_some_and(|reset| reset.fire_if_due());
        if due {
            self.settle();
        }
        due
    }

    /// Apply the reset now and drop the timer
    pub fn settle(&mut self) {
        self.pending_reset = None;
        self.dispatch(Event::MoveSettled);
    }

    fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, event);
        self.state = state;

        for effect in &effects {
            match *effect {
                Effect::PostMouseMoved(point) => self.warp.post_mouse_moved(point),
                Effect::ScheduleReset => {
                    if let Some(previous) = self.pending_reset.take() {
                        previous.cancel();
                    }
                    self.pending_reset = Some(Deferred::after(self.reset_delay));
                }
                Effect::Alert(_) => {}
            }
        }
        effects
    }
}
