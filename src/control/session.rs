//! Session state and its transition function
//!
//! All credit and move rules live in [`update`], which takes the current
//! state and an [`Event`] and returns the next state plus the [`Effect`]s
//! the caller has to carry out. Nothing in here touches the OS or a clock.

use thiserror::Error;

use super::platform::Point;

/// Credits a fresh session starts with
pub const DEFAULT_CREDITS: u32 = 10;

/// Coordinate shown in both form fields at startup
pub const DEFAULT_COORDINATE: &str = "400";

/// Why a move request was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No credits left
    #[error("You've run out of credits! Purchase more to continue.")]
    OutOfCredits,

    /// One of the coordinate fields is not a finite number
    #[error("Please enter valid coordinates")]
    InvalidCoordinates,
}

/// Everything the form shows
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub credits: u32,
    pub pending_x: String,
    pub pending_y: String,
    pub is_moving: bool,
    pub last_error: Option<MoveError>,
}

impl SessionState {
    pub fn new(credits: u32, x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            credits,
            pending_x: x.into(),
            pending_y: y.into(),
            is_moving: false,
            last_error: None,
        }
    }

    /// Whether the move trigger is enabled
    pub fn can_move(&self) -> bool {
        self.credits > 0
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_CREDITS, DEFAULT_COORDINATE, DEFAULT_COORDINATE)
    }
}

/// Inputs to the session
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// X field edited
    EditX(String),
    /// Y field edited
    EditY(String),
    /// Move trigger fired with the current field values
    MoveRequested,
    /// The cosmetic "moving" window elapsed
    MoveSettled,
    /// Alert acknowledged
    DismissAlert,
}

/// Work the caller performs after a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Warp the OS cursor to this point
    PostMouseMoved(Point),
    /// Arm (or re-arm) the delayed `MoveSettled`
    ScheduleReset,
    /// Show this message on the alert surface
    Alert(MoveError),
}

/// Parse one form field as a finite decimal number
///
/// Input is taken as-is: surrounding whitespace, `inf` and `NaN` are all
/// rejected.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate a move against the state without changing it
pub fn validate_move(state: &SessionState) -> Result<Point, MoveError> {
    if state.credits == 0 {
        return Err(MoveError::OutOfCredits);
    }

    match (
        parse_coordinate(&state.pending_x),
        parse_coordinate(&state.pending_y),
    ) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        _ => Err(MoveError::InvalidCoordinates),
    }
}

/// Apply one event
pub fn update(mut state: SessionState, event: Event) -> (SessionState, Vec<Effect>) {
    let mut effects = vec![];

    match event {
        Event::EditX(x) => state.pending_x = x,
        Event::EditY(y) => state.pending_y = y,
        Event::MoveRequested => match validate_move(&state) {
            Ok(point) => {
                state.credits -= 1;
                state.is_moving = true;
                state.last_error = None;
                effects.push(Effect::PostMouseMoved(point));
                effects.push(Effect::ScheduleReset);
            }
            Err(e) => {
                state.last_error = Some(e);
                effects.push(Effect::Alert(e));
            }
        },
        Event::MoveSettled => state.is_moving = false,
        Event::DismissAlert => state.last_error = None,
    }

    (state, effects)
}
