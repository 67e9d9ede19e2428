//! Pointer state pane rendering

use crate::interpreter::pointer::{ArithOp, CmpOp, Direction, Pointer};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "up ^",
        Direction::Down => "down v",
        Direction::Left => "left <",
        Direction::Right => "right >",
    }
}

fn cmp_label(op: CmpOp) -> &'static str {
    match op {
        CmpOp::Eq => "=",
        CmpOp::Lt => "<",
        CmpOp::Gt => ">",
        CmpOp::Ne => "!",
    }
}

fn arith_label(op: ArithOp) -> &'static str {
    match op {
        ArithOp::Add => "+",
        ArithOp::Sub => "-",
        ArithOp::Mul => "*",
        ArithOp::Div => "/",
    }
}

/// Render the pointer's registers and mode state
pub fn render_state_pane(frame: &mut Frame, area: Rect, pointer: &Pointer) {
    let block = Block::default()
        .title(" Pointer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);
    let register_style = Style::default()
        .fg(DEFAULT_THEME.register)
        .add_modifier(Modifier::BOLD);

    let row = |label: &str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!("{:<11}", label), label_style),
            Span::styled(value, style),
        ])
    };

    let buffer: String = pointer.string_buffer.iter().collect();
    let output = match &pointer.output {
        Some(text) => format!("{:?}", text),
        None => "(absent)".to_string(),
    };

    let mode = if let Some(delimiter) = pointer.string_mode {
        format!("string (delimiter {})", delimiter)
    } else if let Some(clause) = pointer.condition {
        let operator = clause.operator.map(cmp_label).unwrap_or("?");
        let comparator = clause
            .comparator
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!("condition ({} {})", operator, comparator)
    } else {
        "normal".to_string()
    };

    let mut lines = vec![
        row(
            "position",
            format!("({}, {})", pointer.x, pointer.y),
            value_style,
        ),
        row(
            "facing",
            direction_label(pointer.direction).to_string(),
            value_style,
        ),
        row("register", pointer.register.to_string(), register_style),
        row("buffer", format!("{:?}", buffer), value_style),
        row("output", output, value_style),
        row("mode", mode, value_style),
    ];

    if let Some(op) = pointer.pending_op {
        lines.push(row(
            "pending op",
            arith_label(op).to_string(),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
