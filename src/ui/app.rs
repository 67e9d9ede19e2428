//! Main trace overlay application state and logic

use crate::interpreter::Interpreter;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// How long auto-play waits between steps
const PLAY_INTERVAL: Duration = Duration::from_millis(100);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Grid,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Grid => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Grid,
        }
    }
}

/// The main application state
pub struct App {
    /// The interpreter instance
    pub interpreter: Interpreter,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub grid_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around an interpreter that has not stepped yet
    pub fn new(interpreter: Interpreter) -> Self {
        App {
            interpreter,
            focused_pane: FocusedPane::Grid,
            grid_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the trace overlay event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= PLAY_INTERVAL {
                    self.step_forward();
                    if self.interpreter.finished() {
                        self.is_playing = false;
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Program grid on the left, pointer state over output on the right,
        // status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_grid_pane(
            frame,
            columns[0],
            self.interpreter.visual_rows(),
            self.interpreter.pointer().y,
            self.focused_pane == FocusedPane::Grid,
            &mut self.grid_scroll,
        );

        super::panes::render_state_pane(frame, right_rows[0], self.interpreter.pointer());

        super::panes::render_output_pane(
            frame,
            right_rows[1],
            self.interpreter.output_log(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.interpreter.steps_taken(),
            self.interpreter.finished(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.interpreter.finished() {
                        break;
                    }
                    self.interpreter.step();
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.output_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Grid => {
                    self.grid_scroll = self.grid_scroll.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Grid => {
                    self.grid_scroll = self.grid_scroll.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.interpreter.finished() {
                        self.status_message = "Program finished".to_string();
                        return;
                    }
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            _ => {}
        }
    }

    /// Step forward in execution
    fn step_forward(&mut self) {
        if self.interpreter.finished() {
            self.status_message = "Program finished".to_string();
            return;
        }
        let step = self.interpreter.step();
        if step.done {
            self.status_message = format!("Terminated with output {}", step.output);
        } else {
            self.status_message = "Stepped forward".to_string();
        }
        // Auto-scroll output to bottom
        self.output_scroll = usize::MAX;
    }
}
