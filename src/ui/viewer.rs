//! Fullscreen interior viewer overlay

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let title = app
        .story
        .viewer()
        .project()
        .and_then(|project| app.catalog.project(project))
        .map(|p| format!(" {} ", p.title))
        .unwrap_or_default();

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} ", app.messages.get("viewer.hint")),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = match app.story.viewer_image() {
        Some(image) => vec![Line::from(vec![
            Span::styled("▣ ", Style::default().fg(Color::Cyan)),
            Span::styled(image, Style::default().fg(Color::White)),
        ])],
        // Nothing to show: an empty frame plus the notice
        None => vec![Line::from(Span::styled(
            app.messages.get("viewer.empty"),
            Style::default().fg(Color::DarkGray),
        ))],
    };
    if let Some((position, len)) = app.story.viewer_position() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{position} / {len}"),
            Style::default().fg(Color::Gray),
        )));
    }

    let height = lines.len() as u16;
    let y = inner.y + inner.height.saturating_sub(height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect {
            y,
            height: height.min(inner.height),
            ..inner
        },
    );
}

#[cfg(test)]
mod tests {
    use crate::state::Direction;
    use crate::ui::test_helpers::*;
    use std::time::Instant;

    #[test]
    fn test_viewer_shows_interior_and_position() {
        let now = Instant::now();
        let mut app = test_app(now);
        let row = (0.84 * f32::from(app.max_scroll_row())).round() as i32;
        app.scroll_by(row);
        app.story.select_unit(1, "1+1");
        assert!(app.story.open_viewer(1));
        app.story.viewer_step(Direction::Forward);

        let screen = render_app(&app, now);
        assert!(screen.contains("Four Seasons Residence"));
        assert!(screen.contains("/units/fourseasons/interior/1-1/1.jpg"));
        assert!(screen.contains("1 / 3"));
        // Unit list is covered by the overlay
        assert!(!screen.contains("Daire Tipleri"));
    }

    #[test]
    fn test_viewer_without_interiors_shows_unit_image() {
        let now = Instant::now();
        let mut app = test_app(now);
        let row = (0.84 * f32::from(app.max_scroll_row())).round() as i32;
        app.scroll_by(row);
        app.story.select_unit(1, "2+1");
        assert!(app.story.open_viewer(1));

        let screen = render_app(&app, now);
        assert!(screen.contains("/units/fourseasons/2-1.jpg"));
        assert!(!screen.contains(" / "));
    }

    #[test]
    fn test_viewer_title_follows_viewer_project() {
        let now = Instant::now();
        let mut app = test_app(now);
        // Still on the hero: no active project to borrow a title from
        assert_eq!(app.story.active_project(), None);
        app.story.select_unit(3, "4+1");
        assert!(app.story.open_viewer(3));

        let screen = render_app(&app, now);
        assert!(screen.contains("Olive Grove Villas"));
    }
}
