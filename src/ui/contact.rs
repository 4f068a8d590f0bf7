//! Contact form

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::contact::{ContactField, ValidationError};
use crate::state::{Form, FormField, SubmitStatus, FORM_ROW_HEIGHTS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a text field; `error` is already translated
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::raw(field.as_text()), cursor]))
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = error {
        block = block.title_bottom(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Project picker: cycles with ←/→
fn draw_project_picker(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.contact_form;
    let is_active = form.is_project_active();
    let value = form
        .project
        .display_value(&app.catalog)
        .unwrap_or_else(|| app.messages.get("contact.project_none").to_string());

    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::raw(value),
        Span::styled(" ▶", arrow_style),
    ]);
    let block = Block::default()
        .title(format!(" {} ", app.messages.get(form.project.label_key)))
        .borders(Borders::ALL)
        .border_style(arrow_style);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn error_text<'a>(app: &'a App, error: &ValidationError) -> &'a str {
    match error {
        ValidationError::Missing(_) => app.messages.get("contact.required"),
        ValidationError::InvalidEmail => app.messages.get("contact.invalid_email"),
    }
}

/// Draw the contact form. Row heights must match `state::form_row_at`.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.messages.get("contact.title")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FORM_ROW_HEIGHTS
        .iter()
        .map(|h| Constraint::Length(*h))
        .collect();
    constraints.push(Constraint::Min(0)); // Status + company email
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let form = &app.contact_form;
    for (index, field) in ContactField::REQUIRED.iter().enumerate() {
        let Some(form_field) = form.get_field(index) else {
            continue;
        };
        let error = form.error_for(*field).map(|e| error_text(app, e));
        draw_field(
            frame,
            chunks[index],
            app.messages.get(form_field.label_key),
            form_field,
            form.active_field() == index,
            error,
        );
    }

    draw_project_picker(frame, chunks[5], app);

    let label = if form.is_sending() {
        app.messages.get("contact.sending")
    } else {
        app.messages.get("contact.submit")
    };
    let button_area = Rect {
        width: chunks[6].width.min(24),
        height: BUTTON_HEIGHT.min(chunks[6].height),
        ..chunks[6]
    };
    render_button(
        frame,
        button_area,
        label,
        form.is_submit_active(),
        form.is_sending(),
    );

    draw_footer(frame, chunks[7], app);
}

/// Submission status and the company email
fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![];
    match app.contact_form.status() {
        SubmitStatus::Sent(message) => lines.push(Line::from(Span::styled(
            format!("✓ {message}"),
            Style::default().fg(Color::Green),
        ))),
        SubmitStatus::Failed(message) => lines.push(Line::from(Span::styled(
            format!("✗ {message}"),
            Style::default().fg(Color::Red),
        ))),
        SubmitStatus::Idle | SubmitStatus::Sending => {}
    }
    lines.push(Line::from(vec![
        Span::styled("✉ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.company_email(),
            Style::default().fg(Color::Cyan),
        ),
    ]));
    frame.render_widget(Paragraph::new(lines), area);
}
