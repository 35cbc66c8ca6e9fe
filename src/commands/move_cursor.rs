//! Move command - Spend one credit to move the cursor once

use anyhow::Result;
use owo_colors::OwoColorize;

use mouse_control::config::Settings;
use mouse_control::control::{CursorControlService, CursorWarp, EnigoBackend, MoveError, Point};

/// Execute the move command
pub fn execute(settings: &Settings, raw_x: &str, raw_y: &str, credits: Option<u32>) -> Result<()> {
    let backend = EnigoBackend::connect()?;
    let mut service = CursorControlService::new(settings.session(credits), backend)
        .with_reset_delay(settings.reset_delay());

    println!("{}", move_once(&mut service, raw_x, raw_y));
    Ok(())
}

/// Request a move and report the outcome as text
pub fn move_once<W: CursorWarp>(
    service: &mut CursorControlService<W>,
    raw_x: &str,
    raw_y: &str,
) -> String {
    let outcome = service.request_move(raw_x, raw_y);
    format_outcome(&outcome, service.credits())
}

fn format_outcome(outcome: &Result<Point, MoveError>, credits: u32) -> String {
    match outcome {
        Ok(point) => format!(
            "{} cursor to {}\nCredits remaining: {}",
            "Moved".green(),
            point,
            credits
        ),
        Err(e) => format!(
            "{} {}\nCredits remaining: {}",
            "Notice:".yellow(),
            e,
            credits
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mouse_control::control::SessionState;

    #[derive(Default)]
    struct CountingWarp {
        calls: usize,
    }

    impl CursorWarp for CountingWarp {
        fn post_mouse_moved(&mut self, _point: Point) {
            self.calls += 1;
        }
    }

    #[test]
    fn test_move_once_reports_credits() {
        let mut service =
            CursorControlService::new(SessionState::default(), CountingWarp::default());
        let out = move_once(&mut service, "10", "20");
        assert!(out.contains("(10, 20)"));
        assert!(out.ends_with("Credits remaining: 9"));
        assert_eq!(service.warp().calls, 1);
    }

    #[test]
    fn test_move_once_reports_refusal() {
        let mut service = CursorControlService::new(
            SessionState::new(0, "400", "400"),
            CountingWarp::default(),
        );
        let out = move_once(&mut service, "10", "20");
        assert!(out.contains("run out of credits"));
        assert!(out.ends_with("Credits remaining: 0"));
        assert_eq!(service.warp().calls, 0);
    }
}
