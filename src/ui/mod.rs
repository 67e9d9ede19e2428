//! Trace overlay built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, auto-play
//! - **[`panes`]** — stateless render functions for each visible pane (program
//!   grid, pointer state, output, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The overlay only mirrors interpreter state (the visual grid's `@` cell,
//! registers, emitted lines); it never feeds anything back into execution.
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`Interpreter`] and call [`App::run`] to start the event loop.
//!
//! [`Interpreter`]: crate::interpreter::Interpreter
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
