//! TUI application state and event loop

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::core::Coord;
use crate::engine::{Direction, Game, GameStatus, MoveEvent};

/// What the key handler is currently listening for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// Win overlay; shown once, play continues afterwards.
    WinPrompt,
    /// Lose overlay; any key leaves.
    GameOver,
}

/// Application state driving the TUI.
pub struct App {
    pub game: Game,
    /// Delay per animation step.
    pub anim_rate: Duration,
    pub input_mode: InputMode,
    /// Debug overlay toggle (`d`).
    pub debug: bool,
    /// Cell the debug inject keys target, moved with `H/J/K/L`.
    pub inspect: Coord,
    /// Event log of the most recent turn, shown in the debug overlay.
    pub last_events: Vec<MoveEvent>,
    won_already: bool,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game, anim_rate: Duration) -> Self {
        Self {
            game,
            anim_rate,
            input_mode: InputMode::Playing,
            debug: false,
            inspect: Coord::new(0, 0),
            last_events: Vec::new(),
            won_already: false,
            should_quit: false,
        }
    }

    /// One full turn: push, then play the event log back as animation.
    fn handle_push<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        direction: Direction,
    ) -> Result<()> {
        let turn = self.game.push(direction);
        if !turn.moved {
            return Ok(());
        }

        self.last_events = turn.events;
        super::rendering::play_events(terminal, self)
    }

    /// Reclassify the board before each frame; the win overlay fires once.
    fn refresh_mode(&mut self) {
        match self.game.status() {
            GameStatus::Won if !self.won_already => {
                self.won_already = true;
                self.input_mode = InputMode::WinPrompt;
            }
            GameStatus::Lost => self.input_mode = InputMode::GameOver,
            _ => {}
        }
    }

    fn move_inspect(&mut self, dx: isize, dy: isize) {
        let x = self
            .inspect
            .x
            .saturating_add_signed(dx)
            .min(self.game.grid().width() - 1);
        let y = self
            .inspect
            .y
            .saturating_add_signed(dy)
            .min(self.game.grid().height() - 1);
        self.inspect = Coord::new(x, y);
    }
}

/// Run the TUI application.
///
/// Returns the final app state so the caller can persist the high score and
/// print a summary after the alternate screen is gone.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        app.refresh_mode();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Playing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('h') | KeyCode::Left => {
                        app.handle_push(terminal, Direction::Left)?;
                    }
                    KeyCode::Char('l') | KeyCode::Right => {
                        app.handle_push(terminal, Direction::Right)?;
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        app.handle_push(terminal, Direction::Up)?;
                    }
                    KeyCode::Char('j') | KeyCode::Down => {
                        app.handle_push(terminal, Direction::Down)?;
                    }
                    KeyCode::Char('d') => {
                        app.debug = !app.debug;
                    }
                    KeyCode::Char('H') if app.debug => app.move_inspect(-1, 0),
                    KeyCode::Char('L') if app.debug => app.move_inspect(1, 0),
                    KeyCode::Char('K') if app.debug => app.move_inspect(0, -1),
                    KeyCode::Char('J') if app.debug => app.move_inspect(0, 1),
                    KeyCode::Char(c @ '1'..='9') if app.debug => {
                        // Out-of-band tile injection: no scoring, no spawn.
                        app.game.inject(app.inspect, c as u8 - b'0');
                    }
                    // Unrecognized keys are ignored, never fatal.
                    _ => {}
                },
                InputMode::WinPrompt => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('c') => {
                        app.input_mode = InputMode::Playing;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    _ => {}
                },
                InputMode::GameOver => {
                    app.should_quit = true;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
