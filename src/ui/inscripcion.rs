//! Inscription view: personal data form, repository picker and the
//! submission confirmation

use super::fields::{draw_field, FieldView};
use crate::app::App;
use crate::inscripcion::{Field, SELECTION_LIMIT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![
        Constraint::Length(2),  // Header
        Constraint::Length(12), // Form grid (4 rows of boxed fields)
        Constraint::Min(6),     // Repository panel
    ];
    if app.state.submitted {
        constraints.push(Constraint::Length(4)); // Confirmation
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_form_grid(frame, chunks[1], app);
    draw_repo_panel(frame, chunks[2], app);
    if app.state.submitted {
        draw_confirmation(frame, chunks[3], app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(Span::styled(
        "Formulario de inscripción para desarrolladores",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    if !app.state.email_destinatario.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Se enviará a: ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.state.email_destinatario.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_form_grid(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    for (index, field) in Field::ALL.iter().enumerate() {
        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[index / 2]);
        draw_form_field(frame, row[index % 2], app, *field, index);
    }
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, field: Field, index: usize) {
    let is_active = app.state.active_field == index;
    let error = app.state.visible_error(field);

    // The date field advertises a derivable age while it has no error
    let age_hint = if field == Field::FechaNacimiento && error.is_none() {
        app.state
            .current_age()
            .filter(|_| app.state.errors.get(field).is_none())
            .map(|age| format!("✓ {age} años — cumple el requisito"))
    } else {
        None
    };

    let value = match field {
        // The selector renders its options inline while unset
        Field::Expedicion if app.state.form.expedicion.is_empty() => String::new(),
        Field::Expedicion => format!("{} ▾", app.state.form.expedicion),
        _ => app.state.form.get(field).to_string(),
    };

    draw_field(
        frame,
        area,
        &FieldView {
            label: field.label(),
            value: &value,
            placeholder: field.placeholder(),
            is_active,
            error,
            hint: age_hint.as_deref(),
        },
    );
}

fn draw_repo_panel(frame: &mut Frame, area: Rect, app: &App) {
    let panel_focused = app.state.focused_field().is_none();
    let border_style = if panel_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let counter = format!(" {} / {SELECTION_LIMIT} ", app.state.selected_repos.len());
    let counter_style = if app.state.selection_full() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .title(" Repositorios GitHub ")
        .title_bottom(Line::from(Span::styled(counter, counter_style)))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Banner / meta line
            Constraint::Min(0),    // Listing
        ])
        .split(inner);

    draw_repo_banner(frame, chunks[0], app);
    draw_repo_list(frame, chunks[1], app);
}

fn draw_repo_banner(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.state.repo_loading {
        Line::from(Span::styled("Buscando...", Style::default().fg(Color::Yellow)))
    } else if let Some(error) = &app.state.repo_error {
        Line::from(Span::styled(
            format!("⚠ {error}"),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(repos) = &app.state.repos {
        Line::from(vec![
            Span::styled(
                format!("{} repositorios encontrados. ", repos.len()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("Selecciona hasta {SELECTION_LIMIT}."),
                Style::default().fg(Color::Gray),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "Ctrl+G consulta los repositorios públicos del usuario de GitHub.",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_repo_list(frame: &mut Frame, area: Rect, app: &App) {
    let repos = app.state.listed_repos();
    if repos.is_empty() {
        return;
    }

    let items: Vec<ListItem> = repos
        .iter()
        .map(|repo| {
            let selected = app.state.is_selected(repo);
            let blocked = app.state.selection_full() && !selected;

            let checkbox = if selected { "[x] " } else { "[ ] " };
            let name_style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if blocked {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };

            let mut title = vec![
                Span::styled(checkbox, name_style),
                Span::styled(repo.name.as_str(), name_style),
                Span::styled(
                    format!("  ⭐ {}", repo.stargazers_count),
                    Style::default().fg(Color::Gray),
                ),
            ];
            if !repo.language.is_empty() {
                title.push(Span::styled(
                    format!("  {}", repo.language),
                    Style::default().fg(Color::Blue),
                ));
            }

            let description = if repo.description.is_empty() {
                "Sin descripción"
            } else {
                repo.description.as_str()
            };
            let detail = Line::from(Span::styled(
                format!("    {description}"),
                Style::default().fg(Color::DarkGray),
            ));

            ListItem::new(Text::from(vec![Line::from(title), detail]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::Rgb(30, 42, 60)))
        .highlight_symbol("» ");

    let mut list_state = ListState::default().with_selected(Some(app.state.repo_cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_confirmation(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Postulación lista ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let url = app.state.mailto_url.as_deref().unwrap_or_default();
    let text = vec![
        Line::from(Span::styled(
            "✓ Abre el enlace en tu navegador para enviar el resumen por correo.",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(url, Style::default().fg(Color::Cyan))),
    ];

    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
