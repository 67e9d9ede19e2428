//! Stateless pane render functions for the trace overlay
//!
//! Each pane takes the interpreter state it needs plus its scroll offset and
//! draws into the frame; all mutation of app state stays in [`crate::ui::app`].

mod grid;
mod output;
mod state;
mod status;

pub use grid::render_grid_pane;
pub use output::render_output_pane;
pub use state::render_state_pane;
pub use status::render_status_bar;
