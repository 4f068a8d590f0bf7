//! Project panel: header, unit type list and unit details

use crate::app::App;
use crate::catalog::{Project, ProjectId};
use crate::state::{PROJECT_HEADER_HEIGHT, UNIT_LIST_WIDTH};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the panel for the active project
pub fn draw(frame: &mut Frame, area: Rect, app: &App, project: ProjectId) {
    let Some(details) = app.catalog.project(project) else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PROJECT_HEADER_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);
    draw_header(frame, rows[0], details);

    // Unit list width must match `state::unit_row_at`
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(UNIT_LIST_WIDTH), Constraint::Min(0)])
        .split(rows[1]);
    draw_unit_list(frame, body[0], app, details);
    draw_details(frame, body[1], app, project);
}

fn draw_header(frame: &mut Frame, area: Rect, details: &Project) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", details.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let description = Paragraph::new(details.description.as_str())
        .style(Style::default().fg(Color::Gray))
        .block(block);
    frame.render_widget(description, area);
}

fn draw_unit_list(frame: &mut Frame, area: Rect, app: &App, details: &Project) {
    let selected = app.story.selection().unit(details.id);

    let items: Vec<ListItem> = details
        .unit_types
        .iter()
        .map(|unit| {
            if selected == Some(unit.as_str()) {
                ListItem::new(Line::from(vec![
                    Span::styled("▸ ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        unit.as_str(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
                .style(Style::default().bg(Color::DarkGray))
            } else {
                ListItem::new(Line::from(format!("  {unit}")))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", app.messages.get("projects.units")))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

fn draw_details(frame: &mut Frame, area: Rect, app: &App, project: ProjectId) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![];
    if let Some(image) = app.story.background_image(project) {
        lines.push(Line::from(vec![
            Span::styled("▣ ", Style::default().fg(Color::Cyan)),
            Span::raw(image.to_string()),
        ]));
        lines.push(Line::from(""));
    }

    let stats = app.story.stats(project);
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", app.messages.get("projects.area")), label),
        Span::styled(stats.area_range.to_string(), value),
        Span::styled(format!("   {} ", app.messages.get("projects.bathrooms")), label),
        Span::styled(stats.bathrooms.to_string(), value),
        Span::styled(format!("   {} ", app.messages.get("projects.bedrooms")), label),
        Span::styled(stats.bedrooms.to_string(), value),
    ]));

    let interiors = app.story.interiors(project);
    if !interiors.is_empty() {
        let current = app.story.selection().interior(project);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            app.messages.get("projects.interiors"),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for image in interiors {
            if current == Some(image.as_str()) {
                lines.push(Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Cyan)),
                    Span::styled(image.as_str(), Style::default().fg(Color::Cyan)),
                ]));
            } else {
                lines.push(Line::from(format!("○ {image}")));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
