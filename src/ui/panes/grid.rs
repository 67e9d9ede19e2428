//! Program grid pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Render the visual grid with the pointer's `@` cell highlighted.
///
/// Scrolls vertically so large programs stay navigable; the pointer row is
/// kept inside the visible window whenever the user has not scrolled away.
pub fn render_grid_pane(
    frame: &mut Frame,
    area: Rect,
    visual_rows: &[Vec<char>],
    pointer_y: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Program ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let total_rows = visual_rows.len();

    if total_rows > visible_height {
        let max_scroll = total_rows - visible_height;
        // Follow the pointer when it walks off the visible window
        if pointer_y < *scroll_offset {
            *scroll_offset = pointer_y;
        } else if pointer_y >= *scroll_offset + visible_height {
            *scroll_offset = pointer_y + 1 - visible_height;
        }
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let pointer_style = Style::default()
        .fg(DEFAULT_THEME.pointer)
        .add_modifier(Modifier::BOLD);
    let cell_style = Style::default().fg(DEFAULT_THEME.fg);

    let lines: Vec<Line> = visual_rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&ch| {
                    if ch == '@' {
                        Span::styled("@", pointer_style)
                    } else {
                        Span::styled(ch.to_string(), cell_style)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
