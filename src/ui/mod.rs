//! UI module for rendering the TUI

mod about;
mod components;
mod contact;
mod gallery;
mod hero;
mod layout;
mod projects;
mod viewer;

use crate::app::{App, HomeSection};
use crate::state::View;
use ratatui::{
    style::{Modifier, Style},
    Frame,
};
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let (nav_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_nav_bar(frame, nav_area, app);

    match app.state.current_view {
        View::Home => match app.home_section() {
            HomeSection::Hero => hero::draw(frame, main_area, app),
            HomeSection::Gallery => gallery::draw(frame, main_area, app),
            HomeSection::Project(project) => projects::draw(frame, main_area, app, project),
        },
        View::About => about::draw(frame, main_area, app),
        View::Contact => contact::draw(frame, main_area, app),
    }

    // Fade the outgoing view while a navigation is pending
    if let Some(transition) = &app.transition {
        if !transition.is_done(now) {
            frame
                .buffer_mut()
                .set_style(main_area, Style::default().add_modifier(Modifier::DIM));
        }
    }

    if app.story.is_viewer_open() {
        viewer::draw(frame, main_area, app);
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some((message, queued)) = app.state.current_error() {
        components::render_error_dialog(frame, app.messages.get("error.title"), message, queued);
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use crate::app::App;
    use crate::catalog::Catalog;
    use crate::config::SiteConfig;
    use crate::contact::MockContactApi;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;
    use std::time::Instant;

    pub const TERM_W: u16 = 100;
    pub const TERM_H: u16 = 40;

    /// Render the whole app into an in-memory buffer and return plain text
    pub fn render_app(app: &App, now: Instant) -> String {
        let backend = TestBackend::new(TERM_W, TERM_H);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| super::draw(frame, app, now)).unwrap();

        let buf = terminal.backend().buffer().clone();
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.symbol()).collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// App sized to the test terminal, with the builtin catalog
    pub fn test_app(now: Instant) -> App {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let mut app = App::with_parts(
            &SiteConfig::default(),
            catalog,
            Box::new(MockContactApi::new()),
            now,
        )
        .unwrap();
        app.resize(TERM_H, TERM_W);
        app
    }

    /// Row of the rendered screen
    pub fn row(screen: &str, index: usize) -> &str {
        screen.lines().nth(index).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use crate::state::{FADE_DURATION, View};
    use std::time::Instant;

    #[test]
    fn test_nav_bar_shows_translated_tabs() {
        let now = Instant::now();
        let app = test_app(now);
        let screen = render_app(&app, now);
        let nav = row(&screen, 1);
        assert!(nav.contains("Ana Sayfa"));
        assert!(nav.contains("Hakkımızda"));
        assert!(nav.contains("İletişim"));
        assert!(screen.contains("TR"));
    }

    #[test]
    fn test_home_starts_on_hero() {
        let now = Instant::now();
        let app = test_app(now);
        let screen = render_app(&app, now);
        assert!(screen.contains("Yaşam Alanları İnşa Ediyoruz"));
    }

    #[test]
    fn test_nav_tab_geometry_matches_hit_testing() {
        let now = Instant::now();
        let app = test_app(now);
        let screen = render_app(&app, now);
        let nav: Vec<char> = row(&screen, 1).chars().collect();
        let widths = app.nav_label_widths();
        // First label starts after the border and one column of padding
        let first: String = nav[2..2 + widths[0] as usize].iter().collect();
        assert_eq!(first, "Ana Sayfa");
        // Divider sits right after the first tab's trailing padding
        assert_eq!(nav[2 + widths[0] as usize + 1], '|');
    }

    #[test]
    fn test_error_dialog_overlays_screen() {
        let now = Instant::now();
        let mut app = test_app(now);
        app.push_error("Relay unreachable");
        let screen = render_app(&app, now);
        assert!(screen.contains("Hata"));
        assert!(screen.contains("Relay unreachable"));
    }

    #[test]
    fn test_about_after_transition() {
        let now = Instant::now();
        let mut app = test_app(now);
        app.navigate(View::About, now);
        app.tick(now + FADE_DURATION);
        let screen = render_app(&app, now + FADE_DURATION);
        assert!(screen.contains("1994"));
    }

    #[test]
    fn test_status_bar_is_last_row() {
        let now = Instant::now();
        let app = test_app(now);
        let screen = render_app(&app, now);
        let last = row(&screen, (TERM_H - 1) as usize);
        assert!(last.contains("0%"));
    }
}
