//! Gallery carousel

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", app.messages.get("gallery.title")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let images = app.catalog.gallery();
    let Some(image) = images.get(app.carousel.index()) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Slide
            Constraint::Length(1), // Caption
            Constraint::Length(1), // Dots
        ])
        .split(inner);

    let slide_y = chunks[0].y + chunks[0].height / 2;
    let slide = Paragraph::new(Line::from(Span::styled(
        format!("▣ {}", image.src),
        Style::default().fg(Color::White),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(slide, Rect { y: slide_y, height: 1, ..chunks[0] });

    let caption = Paragraph::new(Line::from(Span::styled(
        image.caption.as_str(),
        Style::default().add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(caption, chunks[1]);

    let dots: Vec<Span> = (0..images.len())
        .map(|i| {
            if i == app.carousel.index() {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        chunks[2],
    );
}
