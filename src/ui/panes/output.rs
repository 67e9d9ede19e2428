//! Output pane rendering

use crate::interpreter::output::OutputLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

/// Render the emitted-line log
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    log: &OutputLog,
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
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = log.lines();

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
    } else {
        let block = block.padding(Padding::new(1, 0, 0, 0));
        let all_items: Vec<ListItem> = lines
            .iter()
            .map(|line| ListItem::new(line.as_str()).style(Style::default().fg(DEFAULT_THEME.fg)))
            .collect();

        let total_items = all_items.len();
        let visible_height = area.height.saturating_sub(2).max(1) as usize;

        // Clamp scroll offset only if content exceeds visible area;
        // usize::MAX is used by the app as "stick to bottom"
        if total_items > visible_height {
            let max_scroll = total_items - visible_height;
            *scroll_offset = (*scroll_offset).min(max_scroll);
        } else {
            *scroll_offset = 0;
        }

        let visible_items: Vec<ListItem> = all_items
            .into_iter()
            .skip(*scroll_offset)
            .take(visible_height)
            .collect();

        let list = List::new(visible_items).block(block);
        frame.render_widget(list, area);
    }
}
