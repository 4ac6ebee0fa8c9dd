//! Landing view: capture the login email

use super::fields::{draw_field, FieldView};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_rect(area, 52, 12);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Eyebrow
            Constraint::Length(2), // Title
            Constraint::Length(3), // Email field
            Constraint::Length(1), // Error line
            Constraint::Length(2), // Help
            Constraint::Length(2), // Footer
        ])
        .split(card);

    let eyebrow = Paragraph::new(Line::from(Span::styled(
        "ACCESO AL EVENTO",
        Style::default().fg(Color::Yellow),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(eyebrow, chunks[0]);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "REGISTRO AL HACKATHON VIRTUAL",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Banco BISA · Universidad del Rosario",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    draw_field(
        frame,
        chunks[2],
        &FieldView {
            label: "Correo electrónico",
            value: &app.state.login_input,
            placeholder: "tu@correo.com",
            is_active: true,
            error: None,
            hint: None,
        },
    );

    if let Some(error) = &app.state.login_error {
        let error_line = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(error_line, chunks[3]);
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": iniciar sesión"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Al continuar aceptas los términos del hackathon virtual",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[5]);
}

/// Center a fixed-size card within the available area
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
