//! Shared formatting for commands

use chrono::Local;
use mouse_control::control::{Point, SessionState};

/// Format an optional position for display
pub fn format_position(position: Option<Point>) -> String {
    match position {
        Some(point) => point.to_string(),
        None => "(unknown)".to_string(),
    }
}

/// Local wall-clock timestamp with millisecond precision
pub fn timestamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

/// One-line summary of the form
pub fn format_status(state: &SessionState, position: Option<Point>) -> String {
    let mut parts = vec![
        format!("Credits: {}", state.credits),
        format!("X: {:?} Y: {:?}", state.pending_x, state.pending_y),
        format!("Position: {}", format_position(position)),
    ];

    if state.is_moving {
        parts.push("moving".to_string());
    }
    if !state.can_move() {
        parts.push("move disabled".to_string());
    }

    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(None), "(unknown)");
        assert_eq!(format_position(Some(Point::new(3.2, 4.0))), "(3, 4)");
    }

    #[test]
    fn test_format_status() {
        let state = SessionState::default();
        assert_eq!(
            format_status(&state, Some(Point::new(1.0, 2.0))),
            r#"Credits: 10 | X: "400" Y: "400" | Position: (1, 2)"#
        );

        let mut drained = SessionState::new(0, "", "7");
        drained.is_moving = true;
        assert_eq!(
            format_status(&drained, None),
            r#"Credits: 0 | X: "" Y: "7" | Position: (unknown) | moving | move disabled"#
        );
    }
}
