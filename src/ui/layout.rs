//! Layout components (navigation bar, status bar)

use crate::app::{App, HomeSection};
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{View, NAV_BAR_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Split the screen into navigation bar, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_BAR_HEIGHT), // Navigation
            Constraint::Min(0),                 // Content
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the navigation bar. The tab geometry here must match
/// `state::nav_tab_at`: one column of padding each side and a one column
/// divider.
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|view| Line::from(app.messages.get(view.label_key())))
        .collect();
    let selected = View::ALL
        .iter()
        .position(|v| *v == app.state.current_view)
        .unwrap_or(0);

    // Transparent header over the hero, solid once scrolled or off home
    let border_style = if app.header_is_solid() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} ", app.state.locale.code().to_uppercase()),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    frame.render_widget(tabs, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.state.current_view == View::Home {
        let percent = (app.story.fraction() * 100.0).round() as u16;
        spans.push(Span::styled(
            format!(" {} {percent:>3}% ", app.messages.get("status.scroll")),
            Style::default().fg(Color::Cyan),
        ));
    }

    let hints = view_hints(app);
    spans.push(Span::styled(
        format!(" {hints}"),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for the current view
fn view_hints(app: &App) -> String {
    if app.story.is_viewer_open() {
        return app.messages.get("viewer.hint").to_string();
    }
    match app.state.current_view {
        View::Home => match app.home_section() {
            HomeSection::Project(_) => app.messages.get("projects.hint").to_string(),
            HomeSection::Gallery => "←/→ · ↑/↓ · F1-F3 · F4 lang · q".to_string(),
            HomeSection::Hero => app.messages.get("hero.hint").to_string(),
        },
        View::About => "Esc · F1-F3 · F4 lang · q".to_string(),
        View::Contact => format!("Tab · {SUBMIT_SHORTCUT} · {COPY_SHORTCUT} · Esc"),
    }
}
