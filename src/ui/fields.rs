//! Form field widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One bordered input box: label on top, value inside, error or hint on
/// the bottom edge
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_active: bool,
    pub error: Option<&'a str>,
    pub hint: Option<&'a str>,
}

pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(hint) = field.hint {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {hint} "),
            Style::default().fg(Color::Green),
        )));
    }

    let cursor = if field.is_active { "▌" } else { "" };
    let content = if field.value.is_empty() && !field.is_active {
        Paragraph::new(Line::from(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        Paragraph::new(Line::from(vec![
            Span::raw(field.value),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    frame.render_widget(content.block(block), area);
}
