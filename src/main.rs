pub mod clock;
pub mod config;
pub mod history;
pub mod runtime;
pub mod session;
pub mod ui;

use crate::{
    config::{ConfigStore, FileConfigStore},
    history::{study_today_line, Banner},
    runtime::{EventSource, Runner, TerminalEvents, TimerEvent},
    session::Session,
};
use chrono::{DateTime, Local};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    fs,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// keyboard-driven pomodoro timer for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A keyboard-driven pomodoro timer with a live wall clock, adjustable session length, and a daily study-history banner."
)]
pub struct Cli {
    /// initial session length in minutes (clamped to 10-60; in-app reset returns to 25)
    #[clap(short = 'l', long)]
    length_minutes: Option<u32>,

    /// text file painted dimly behind the timer
    #[clap(short = 'b', long)]
    backdrop: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Stay,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub banner: Banner,
    pub backdrop: Option<String>,
    pub now: DateTime<Local>,
}

impl App {
    pub fn new(length_secs: u32, backdrop: Option<String>) -> Self {
        Self {
            session: Session::with_length(length_secs),
            banner: Banner::new(),
            backdrop,
            now: Local::now(),
        }
    }

    /// One second of wall-clock time: countdown, banner lifetime, clock.
    pub fn on_tick(&mut self) {
        self.session.tick();
        self.banner.tick();
        self.now = Local::now();
    }

    fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Char('s') | KeyCode::Enter => self.session.start(),
            KeyCode::Char('p') => self.session.pause(),
            KeyCode::Char('r') => self.session.reset(),
            KeyCode::Char('h') => self
                .banner
                .show(study_today_line(self.session.completed_today())),
            KeyCode::Up | KeyCode::Char('+') => self.session.increase(),
            KeyCode::Down | KeyCode::Char('-') => self.session.decrease(),
            _ => {}
        }
        KeyOutcome::Stay
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let config = FileConfigStore::new().load();
    // Session::with_length clamps to the adjustable rails either way.
    let length_secs = match cli.length_minutes {
        Some(minutes) => minutes.saturating_mul(60),
        None => config.length_secs(),
    };
    let backdrop = load_backdrop(cli.backdrop.or(config.backdrop));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(length_secs, backdrop);
    let runner = Runner::new(TerminalEvents::new(TICK_INTERVAL));
    let result = run_app(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Read the decorative backdrop, degrading to none with a warning. Runs
/// before the alternate screen is entered so the warning stays visible.
fn load_backdrop(path: Option<PathBuf>) -> Option<String> {
    let path = path?;
    match fs::read_to_string(&path) {
        Ok(text) => Some(text),
        Err(err) => {
            eprintln!(
                "pomo: could not read backdrop {}: {} (continuing without it)",
                path.display(),
                err
            );
            None
        }
    }
}

fn run_app<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    while let Some(event) = runner.step() {
        match event {
            TimerEvent::Tick => app.on_tick(),
            TimerEvent::Resize => {}
            TimerEvent::Key(key) => {
                if app.on_key(key) == KeyOutcome::Quit {
                    break;
                }
            }
        }
        terminal.draw(|f| ui(app, f))?;
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
