//! Application state and core logic

use crate::catalog::{Catalog, ProjectId};
use crate::config::SiteConfig;
use crate::contact::{ContactApi, RelayClient};
use crate::i18n::{Locale, Messages};
use crate::platform::is_shortcut;
use crate::state::{
    form_row_at, nav_tab_at, unit_row_at, AppState, ContactForm, Direction, FlagGuard, Form,
    GalleryCarousel, HeroState, NavTransition, PageFlag, PageFlags, ProjectStory, UiArea, View,
    DEFAULT_SLIDE_INTERVAL, NAV_BAR_HEIGHT,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::time::Instant;

/// Pixels per terminal row when converting mouse drags
pub const ROW_PX: f32 = 16.0;
/// Pixel delta reported for one wheel notch
pub const WHEEL_DELTA_PX: f32 = 100.0;
/// Rows scrolled per wheel notch on the home page
const WHEEL_ROWS: i32 = 3;
/// Home page progress below which the hero is shown
pub const HERO_FRACTION: f32 = 0.3;

/// What the home page body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    Hero,
    Gallery,
    Project(ProjectId),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub catalog: Arc<Catalog>,
    pub messages: Messages,
    /// Scroll mapper, selections and fullscreen viewer
    pub story: ProjectStory,
    pub hero: HeroState,
    pub carousel: GalleryCarousel,
    pub contact_form: ContactForm,
    /// Pending view change waiting for its fade
    pub transition: Option<NavTransition>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Copy/submit feedback message
    pub status_message: Option<String>,
    contact_api: Box<dyn ContactApi>,
    flags: PageFlags,
    view_guard: Option<FlagGuard>,
    page_rows: u16,
    company_email: String,
    quit: bool,
}

impl App {
    /// Create a new App from the user configuration
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        let relay = RelayClient::new(&config.relay_url())?;
        tracing::info!("contact relay at {}", relay.endpoint());
        Self::with_parts(config, Arc::new(catalog), Box::new(relay), Instant::now())
    }

    /// Assemble an App around an existing catalog and relay client
    pub fn with_parts(
        config: &SiteConfig,
        catalog: Arc<Catalog>,
        contact_api: Box<dyn ContactApi>,
        now: Instant,
    ) -> Result<Self> {
        let locale = config.locale();
        let flags = PageFlags::new();
        let story = ProjectStory::new(
            Arc::clone(&catalog),
            config.bands(),
            flags.clone(),
            config.viewer_input(),
        );
        let carousel = GalleryCarousel::new(catalog.gallery().len(), DEFAULT_SLIDE_INTERVAL, now);

        let mut app = Self {
            state: AppState::new(locale),
            messages: Messages::load(locale)?,
            story,
            hero: HeroState::new(now),
            carousel,
            contact_form: ContactForm::new(),
            transition: None,
            terminal_size: None,
            status_message: None,
            contact_api,
            flags,
            view_guard: None,
            page_rows: config.page_rows(),
            company_email: config.company_email(),
            catalog,
            quit: false,
        };
        // Assume the default viewport until the first resize
        app.story
            .on_resize(f32::from(app.page_rows), f32::from(app.viewport_rows()));
        Ok(app)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn flags(&self) -> &PageFlags {
        &self.flags
    }

    pub fn company_email(&self) -> &str {
        &self.company_email
    }

    /// Header is drawn solid off the home page or once the page has scrolled
    pub fn header_is_solid(&self) -> bool {
        self.flags.is_set(PageFlag::SolidHeader) || self.state.scroll_row > 0
    }

    // ---- scrolling ----

    /// Rows of the home page visible at once
    pub fn viewport_rows(&self) -> u16 {
        let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        // Nav bar + status bar
        height.saturating_sub(NAV_BAR_HEIGHT + 1).max(1)
    }

    /// Last scroll row, from the heights last reported to the story
    pub fn max_scroll_row(&self) -> u16 {
        self.story.metrics().max_offset().round() as u16
    }

    /// Record a new terminal size
    pub fn resize(&mut self, height: u16, width: u16) {
        if self.terminal_size == Some((height, width)) {
            return;
        }
        self.terminal_size = Some((height, width));
        self.story
            .on_resize(f32::from(self.page_rows), f32::from(self.viewport_rows()));
        let max = self.max_scroll_row();
        self.state.scroll_by(0, max);
        self.story.on_scroll(f32::from(self.state.scroll_row));
    }

    /// Scroll the home page; ignored while the scroll lock is held
    pub fn scroll_by(&mut self, delta: i32) {
        if self.flags.is_set(PageFlag::ScrollLock) || self.state.current_view != View::Home {
            return;
        }
        let max = self.max_scroll_row();
        self.state.scroll_by(delta, max);
        self.story.on_scroll(f32::from(self.state.scroll_row));
        if delta != 0 {
            self.hero.skip();
        }
    }

    /// What the home page body currently shows
    pub fn home_section(&self) -> HomeSection {
        match self.story.active_project() {
            Some(project) => HomeSection::Project(project),
            None if self.story.fraction() < HERO_FRACTION => HomeSection::Hero,
            None => HomeSection::Gallery,
        }
    }

    // ---- time ----

    /// Advance animations, timers and pending navigation
    pub fn tick(&mut self, now: Instant) {
        let paused = self.flags.is_set(PageFlag::TimelinesPaused);
        if paused {
            self.hero.pause(now);
        } else {
            self.hero.resume(now);
        }
        self.hero.update(now);

        let carousel_hidden = paused
            || self.state.current_view != View::Home
            || self.home_section() != HomeSection::Gallery;
        self.carousel.tick(now, carousel_hidden);

        if let Some(transition) = &self.transition {
            if transition.is_done(now) {
                let target = transition.target;
                self.transition = None;
                self.apply_view(target);
            }
        }
    }

    // ---- navigation ----

    /// Start a faded navigation; a newer request replaces a pending one
    pub fn navigate(&mut self, view: View, now: Instant) {
        if self.transition.is_none() && self.state.current_view == view {
            return;
        }
        self.transition = Some(NavTransition::new(view, now));
    }

    fn apply_view(&mut self, view: View) {
        self.story.close_viewer();
        self.state.current_view = view;
        self.view_guard = view
            .has_solid_header()
            .then(|| self.flags.acquire(PageFlag::SolidHeader));
        tracing::debug!("view changed to {view:?}");
    }

    /// Switch the locale
    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        self.messages = Messages::load(locale)?;
        self.state.locale = locale;
        Ok(())
    }

    // ---- keyboard ----

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::F(1) => return self.go(View::Home, now),
            KeyCode::F(2) => return self.go(View::About, now),
            KeyCode::F(3) => return self.go(View::Contact, now),
            KeyCode::F(4) => return self.set_locale(self.state.locale.next()),
            _ => {}
        }

        if self.story.is_viewer_open() {
            self.handle_viewer_key(key);
            return Ok(());
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key, now)?,
            View::About => self.handle_about_key(key, now)?,
            View::Contact => self.handle_contact_key(key, now).await?,
        }
        Ok(())
    }

    fn go(&mut self, view: View, now: Instant) -> Result<()> {
        self.navigate(view, now);
        Ok(())
    }

    /// Keys shared by the non-form views
    fn handle_common_key(&mut self, key: KeyEvent, now: Instant) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('1') => self.navigate(View::Home, now),
            KeyCode::Char('2') => self.navigate(View::About, now),
            KeyCode::Char('3') => self.navigate(View::Contact, now),
            KeyCode::Char('l') => self.set_locale(self.state.locale.next())?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn handle_viewer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.story.close_viewer(),
            KeyCode::Left => {
                self.story.viewer_step(Direction::Backward);
            }
            KeyCode::Right => {
                self.story.viewer_step(Direction::Forward);
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if !self.hero.is_settled() {
            self.hero.skip();
        }
        if self.handle_common_key(key, now)? {
            return Ok(());
        }

        let page = i32::from(self.viewport_rows());
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_by(-i32::from(self.page_rows)),
            KeyCode::End | KeyCode::Char('G') => self.scroll_by(i32::from(self.page_rows)),
            _ => match self.home_section() {
                HomeSection::Project(project) => self.handle_project_key(project, key),
                HomeSection::Gallery => match key.code {
                    KeyCode::Left => {
                        self.carousel.step(Direction::Backward, now);
                    }
                    KeyCode::Right => {
                        self.carousel.step(Direction::Forward, now);
                    }
                    _ => {}
                },
                HomeSection::Hero => {}
            },
        }
        Ok(())
    }

    fn handle_project_key(&mut self, project: ProjectId, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.story.select_adjacent_unit(project, Direction::Backward);
            }
            KeyCode::Right => {
                self.story.select_adjacent_unit(project, Direction::Forward);
            }
            KeyCode::Char('[') => {
                self.story.step(project, Direction::Backward);
            }
            KeyCode::Char(']') => {
                self.story.step(project, Direction::Forward);
            }
            KeyCode::Backspace | KeyCode::Char('x') => self.story.clear_unit(project),
            KeyCode::Enter | KeyCode::Char('f') => {
                self.story.open_viewer(project);
            }
            _ => {}
        }
    }

    fn handle_about_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if self.handle_common_key(key, now)? {
            return Ok(());
        }
        if key.code == KeyCode::Esc {
            self.navigate(View::Home, now);
        }
        Ok(())
    }

    async fn handle_contact_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => self.submit_contact().await,
                KeyCode::Char('y') => self.copy_company_email(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.navigate(View::Home, now),
            KeyCode::Tab => self.contact_form.next_field(),
            KeyCode::BackTab => self.contact_form.prev_field(),
            KeyCode::Down if !self.contact_form.is_active_field_multiline() => {
                self.contact_form.next_field()
            }
            KeyCode::Up if !self.contact_form.is_active_field_multiline() => {
                self.contact_form.prev_field()
            }
            KeyCode::Left if self.contact_form.is_project_active() => self
                .contact_form
                .cycle_project(&self.catalog, Direction::Backward),
            KeyCode::Right if self.contact_form.is_project_active() => self
                .contact_form
                .cycle_project(&self.catalog, Direction::Forward),
            KeyCode::Enter if self.contact_form.is_submit_active() => self.submit_contact().await,
            KeyCode::Enter if self.contact_form.is_active_field_multiline() => {
                self.contact_form.input_char('\n')
            }
            KeyCode::Enter => self.contact_form.next_field(),
            KeyCode::Backspace => self.contact_form.backspace(),
            KeyCode::Char(c) => self.contact_form.input_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and hand it to the relay
    pub async fn submit_contact(&mut self) {
        let Some(submission) = self.contact_form.begin_submit(&self.catalog) else {
            return;
        };
        let result = self.contact_api.submit(&submission).await;
        match &result {
            Ok(message) => tracing::info!("contact form sent: {message}"),
            Err(error) => tracing::warn!("contact form not sent: {error}"),
        }
        self.contact_form.finish_submit(result);
    }

    fn copy_company_email(&mut self) {
        match copy_to_clipboard(&self.company_email) {
            Ok(()) => self.status_message = Some(self.messages.get("contact.copied").to_string()),
            Err(e) => self.push_error(format!("Failed to copy: {e}")),
        }
    }

    // ---- mouse ----

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Result<()> {
        if self.state.has_errors() {
            return Ok(());
        }

        if self.story.is_viewer_open() {
            self.handle_viewer_mouse(mouse, now);
            return Ok(());
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if !UiArea::Content.contains_row(mouse.row) {
                self.handle_nav_click(mouse.column, now);
                return Ok(());
            }
        }

        match self.state.current_view {
            View::Home => self.handle_home_mouse(mouse),
            View::About => {}
            View::Contact => self.handle_contact_mouse(mouse).await,
        }
        Ok(())
    }

    fn handle_viewer_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let y = f32::from(mouse.row) * ROW_PX;
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.story.viewer_wheel(WHEEL_DELTA_PX, now);
            }
            MouseEventKind::ScrollUp => {
                self.story.viewer_wheel(-WHEEL_DELTA_PX, now);
            }
            MouseEventKind::Down(MouseButton::Left) => self.story.viewer_drag_start(y),
            MouseEventKind::Drag(MouseButton::Left) => {
                self.story.viewer_drag_move(y, now);
            }
            MouseEventKind::Up(MouseButton::Left) => self.story.viewer_drag_end(),
            MouseEventKind::Down(MouseButton::Right) => self.story.close_viewer(),
            _ => {}
        }
    }

    /// Widths of the nav tab labels as drawn
    pub fn nav_label_widths(&self) -> Vec<u16> {
        View::ALL
            .iter()
            .map(|view| self.messages.get(view.label_key()).chars().count() as u16)
            .collect()
    }

    fn handle_nav_click(&mut self, column: u16, now: Instant) {
        if let Some(index) = nav_tab_at(column, &self.nav_label_widths()) {
            self.navigate(View::ALL[index], now);
        }
    }

    fn handle_home_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                let HomeSection::Project(project) = self.home_section() else {
                    return;
                };
                let Some(details) = self.catalog.project(project) else {
                    return;
                };
                let Some(index) = unit_row_at(mouse.column, mouse.row, details.unit_types.len())
                else {
                    return;
                };
                let unit = details.unit_types[index].clone();
                // A second click on the selected unit opens the viewer
                if self.story.selection().unit(project) == Some(unit.as_str()) {
                    self.story.open_viewer(project);
                } else {
                    self.story.select_unit(project, &unit);
                }
            }
            _ => {}
        }
    }

    async fn handle_contact_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(index) = form_row_at(mouse.row) {
                self.contact_form.set_active_field(index);
                if self.contact_form.is_submit_active() {
                    self.submit_contact().await;
                }
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
