//! Run command - Interactive session
//!
//! The terminal stands in for the form: lines typed on stdin edit the two
//! coordinate fields and fire the move trigger, while the cursor sampler and
//! the reset timer tick in the same loop. Everything except the blocking
//! stdin read happens on the main thread.

use anyhow::Result;
use crossbeam_channel::{select, unbounded, Receiver};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::thread;

use super::utils;
use mouse_control::config::Settings;
use mouse_control::control::{
    CursorControlService, CursorWarp, EnigoBackend, MoveError, Point, PositionSampler,
};

/// Options for the run command
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Starting credits override
    pub credits: Option<u32>,
    /// Print every position change as it happens
    pub live: bool,
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetX(String),
    SetY(String),
    Move,
    MoveTo(String, String),
    Status,
    Dismiss,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Command::Empty;
        };
        let rest: Vec<&str> = tokens.collect();

        match (first.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("x", []) => Command::SetX(String::new()),
            ("x", [value]) => Command::SetX(value.to_string()),
            ("y", []) => Command::SetY(String::new()),
            ("y", [value]) => Command::SetY(value.to_string()),
            ("move" | "m", []) => Command::Move,
            ("move" | "m", [x, y]) => Command::MoveTo(x.to_string(), y.to_string()),
            ("status" | "s", []) => Command::Status,
            ("dismiss" | "ok", []) => Command::Dismiss,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit" | "q", []) => Command::Quit,
            (_, [y]) => Command::MoveTo(first.to_string(), y.to_string()),
            _ => Command::Unknown(line.trim().to_string()),
        }
    }
}

/// What woke the session loop
enum Wake {
    Line(Option<String>),
    Reset,
    Tick,
}

const HELP: &str = "\
Commands:
  x <value>      set the X field
  y <value>      set the Y field
  move           move to the current fields (costs one credit)
  <x> <y>        set both fields and move
  status         show credits, fields and cursor position
  dismiss        clear the last notice
  quit           leave the session";

/// Execute the run command
pub fn execute(settings: &Settings, options: RunOptions) -> Result<()> {
    let warp = EnigoBackend::connect()?;
    let locator = EnigoBackend::connect()?;

    let mut service = CursorControlService::new(settings.session(options.credits), warp)
        .with_reset_delay(settings.reset_delay());
    let mut sampler = PositionSampler::start(locator, settings.sample_interval());

    println!("{}", "=== Mouse Control ===".green());
    println!("Type `help` for commands.");
    println!("{}", utils::format_status(service.state(), sampler.latest()));
    prompt()?;

    let lines = spawn_line_reader();
    loop {
        let reset = service.reset_signal();
        let ticks = sampler.tick_signal();

        let wake = select! {
            recv(lines) -> line => Wake::Line(line.ok()),
            recv(reset) -> _ => Wake::Reset,
            recv(ticks) -> _ => Wake::Tick,
        };

        match wake {
            // stdin closed
            Wake::Line(None) => break,
            Wake::Line(Some(line)) => {
                let command = Command::parse(&line);
                if command == Command::Quit {
                    break;
                }
                let output = handle(&mut service, sampler.latest(), command);
                if !output.is_empty() {
                    println!("{}", output);
                }
                prompt()?;
            }
            Wake::Reset => service.settle(),
            Wake::Tick => {
                let previous = sampler.latest();
                if let Some(point) = sampler.on_tick() {
                    if options.live && previous != Some(point) {
                        println!("{} {}", "Position:".dimmed(), point);
                    }
                }
            }
        }
    }

    sampler.stop();
    println!();
    Ok(())
}

/// Apply one command to the session and describe the result
pub fn handle<W: CursorWarp>(
    service: &mut CursorControlService<W>,
    position: Option<Point>,
    command: Command,
) -> String {
    match command {
        Command::SetX(value) => {
            service.edit_x(&value);
            String::new()
        }
        Command::SetY(value) => {
            service.edit_y(&value);
            String::new()
        }
        Command::Move => report(service, |s| s.move_pending()),
        Command::MoveTo(x, y) => report(service, |s| s.request_move(&x, &y)),
        Command::Status => utils::format_status(service.state(), position),
        Command::Dismiss => {
            service.dismiss_alert();
            String::new()
        }
        Command::Help => HELP.to_string(),
        Command::Quit | Command::Empty => String::new(),
        Command::Unknown(line) => format!("{} {}", "Unknown command:".yellow(), line),
    }
}

fn report<W, F>(service: &mut CursorControlService<W>, request: F) -> String
where
    W: CursorWarp,
    F: FnOnce(&mut CursorControlService<W>) -> Result<Point, MoveError>,
{
    match request(service) {
        Ok(point) => format!(
            "{} {}  Credits: {}",
            "Moved to".green(),
            point,
            service.credits()
        ),
        Err(e) => format!("{} {}", "Notice:".yellow(), e),
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// Forward stdin lines to the session loop
fn spawn_line_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use mouse_control::control::SessionState;

    #[derive(Default)]
    struct RecordingWarp {
        moves: Vec<Point>,
    }

    impl CursorWarp for RecordingWarp {
        fn post_mouse_moved(&mut self, point: Point) {
            self.moves.push(point);
        }
    }

    fn service(credits: u32) -> CursorControlService<RecordingWarp> {
        CursorControlService::new(
            SessionState::new(credits, "400", "400"),
            RecordingWarp::default(),
        )
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("x 12"), Command::SetX("12".into()));
        assert_eq!(Command::parse("X"), Command::SetX(String::new()));
        assert_eq!(Command::parse("y abc"), Command::SetY("abc".into()));
        assert_eq!(Command::parse("move"), Command::Move);
        assert_eq!(
            Command::parse("move 1 2"),
            Command::MoveTo("1".into(), "2".into())
        );
        assert_eq!(
            Command::parse("100 200"),
            Command::MoveTo("100".into(), "200".into())
        );
        assert_eq!(Command::parse("status"), Command::Status);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(
            Command::parse("fly away now"),
            Command::Unknown("fly away now".into())
        );
    }

    #[test]
    fn test_form_flow() {
        let mut svc = service(2);
        handle(&mut svc, None, Command::SetX("10".into()));
        handle(&mut svc, None, Command::SetY("20".into()));

        let out = handle(&mut svc, None, Command::Move);
        assert!(out.contains("(10, 20)"));
        assert_eq!(svc.warp().moves, vec![Point::new(10.0, 20.0)]);
        assert_eq!(svc.credits(), 1);
    }

    #[test]
    fn test_notice_on_bad_input() {
        let mut svc = service(2);
        let out = handle(&mut svc, None, Command::MoveTo("abc".into(), "1".into()));
        assert!(out.contains("Please enter valid coordinates"));
        assert_eq!(svc.credits(), 2);
        assert!(svc.warp().moves.is_empty());
    }

    #[test]
    fn test_status_shows_position() {
        let mut svc = service(0);
        let out = handle(&mut svc, Some(Point::new(5.0, 5.0)), Command::Status);
        assert!(out.contains("Credits: 0"));
        assert!(out.contains("(5, 5)"));
        assert!(out.contains("move disabled"));
    }
}
