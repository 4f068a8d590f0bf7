//! Hero banner with the intro reveal

use crate::app::App;
use crate::state::HeroPhase;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows the subtitle travels while it is revealed
const REVEAL_TRAVEL: f32 = 3.0;

/// Draw the hero banner
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if area.height < 3 {
        return;
    }
    let hero = &app.hero;

    let title_y = area.y + area.height.saturating_sub(3) / 2;
    let title = Paragraph::new(Line::from(Span::styled(
        app.messages.get("hero.title"),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, Rect { y: title_y, height: 1, ..area });

    // Subtitle slides up into place and fills in as it is revealed
    if hero.phase != HeroPhase::Hold {
        let subtitle = app.messages.get("hero.subtitle");
        let shown = (subtitle.chars().count() as f32 * hero.reveal).round() as usize;
        let text: String = subtitle.chars().take(shown).collect();
        let offset = ((1.0 - hero.reveal) * REVEAL_TRAVEL).round() as u16;
        let y = (title_y + 2 + offset).min(area.bottom().saturating_sub(1));
        let line = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(line, Rect { y, height: 1, ..area });
    }

    if hero.is_settled() {
        let hint = Paragraph::new(Line::from(Span::styled(
            format!("{} ↓", app.messages.get("hero.hint")),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        let y = area.bottom().saturating_sub(1);
        frame.render_widget(hint, Rect { y, height: 1, ..area });
    }
}
