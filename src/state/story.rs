//! Project story controller
//!
//! Owns the scroll metrics, the active project, the selection table and
//! the fullscreen viewer. All transitions that touch more than one of
//! those go through here:
//!
//! - the active project moving away from P clears P's selection;
//! - opening the viewer freezes the active project and takes the page
//!   scroll lock; closing releases the lock and recomputes the active
//!   project from the live scroll position rather than restoring the
//!   frozen value.

use super::page_flags::{FlagGuard, PageFlag, PageFlags};
use super::scroll_mapper::{ActiveProject, ProjectBands, ScrollMetrics};
use super::selection::SelectionTable;
use super::viewer::{next_index, Direction, ViewerInput, ViewerInputConfig, ViewerState};
use crate::catalog::{Catalog, ProjectId, StatsView};
use std::sync::Arc;
use std::time::Instant;

pub struct ProjectStory {
    catalog: Arc<Catalog>,
    bands: ProjectBands,
    flags: PageFlags,
    metrics: ScrollMetrics,
    active: ActiveProject,
    selection: SelectionTable,
    viewer: ViewerState,
    viewer_guards: Vec<FlagGuard>,
    input: ViewerInput,
}

impl ProjectStory {
    pub fn new(
        catalog: Arc<Catalog>,
        bands: ProjectBands,
        flags: PageFlags,
        input: ViewerInputConfig,
    ) -> Self {
        Self {
            catalog,
            bands,
            flags,
            metrics: ScrollMetrics::default(),
            active: ActiveProject::default(),
            selection: SelectionTable::default(),
            viewer: ViewerState::Closed,
            viewer_guards: Vec::new(),
            input: ViewerInput::new(input),
        }
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    pub fn fraction(&self) -> f32 {
        self.metrics.fraction()
    }

    // ---- scroll mapping ----

    /// Record a new scroll offset
    pub fn on_scroll(&mut self, offset: f32) {
        self.metrics.offset = offset;
        self.recompute();
    }

    /// Record new content/viewport heights
    pub fn on_resize(&mut self, content_height: f32, viewport_height: f32) {
        self.metrics.content_height = content_height;
        self.metrics.viewport_height = viewport_height;
        self.recompute();
    }

    fn recompute(&mut self) {
        if self.active.is_frozen() {
            return;
        }
        let next = self.bands.map_fraction(self.metrics.fraction());
        self.set_active(next);
    }

    fn set_active(&mut self, next: Option<ProjectId>) {
        let previous = self.active.current();
        if previous != next {
            if let Some(left) = previous {
                self.selection.clear_unit(left);
            }
            tracing::debug!("active project {previous:?} -> {next:?}");
        }
        self.active = ActiveProject::Live(next);
    }

    /// Project currently presented (frozen while the viewer is open)
    pub fn active_project(&self) -> Option<ProjectId> {
        self.active.current()
    }

    pub fn active_state(&self) -> ActiveProject {
        self.active
    }

    // ---- selection ----

    pub fn selection(&self) -> &SelectionTable {
        &self.selection
    }

    pub fn select_unit(&mut self, project: ProjectId, unit: &str) -> bool {
        self.selection.select_unit(project, unit)
    }

    pub fn clear_unit(&mut self, project: ProjectId) {
        self.selection.clear_unit(project);
    }

    pub fn select_interior(&mut self, project: ProjectId, image: &str) -> bool {
        self.selection.select_interior(project, image)
    }

    /// Move the unit selection through the project's ordered unit types
    pub fn select_adjacent_unit(&mut self, project: ProjectId, direction: Direction) -> bool {
        let Some(details) = self.catalog.project(project) else {
            return false;
        };
        let units = &details.unit_types;
        let current = self
            .selection
            .unit(project)
            .and_then(|unit| units.iter().position(|u| u == unit));
        match next_index(current, direction, units.len()) {
            Some(index) => {
                let unit = units[index].clone();
                self.selection.select_unit(project, &unit)
            }
            None => false,
        }
    }

    pub fn background_image(&self, project: ProjectId) -> Option<&str> {
        self.selection
            .resolve_background_image(&self.catalog, project)
    }

    pub fn stats(&self, project: ProjectId) -> StatsView<'_> {
        self.selection.stats(&self.catalog, project)
    }

    /// Interior images for the project's selected unit type
    pub fn interiors(&self, project: ProjectId) -> &[String] {
        match self.selection.unit(project) {
            Some(unit) => self.catalog.interiors(project, unit),
            None => &[],
        }
    }

    /// Step the interior selection for the selected unit type.
    ///
    /// No-op (returns false) when no unit is selected or the list is empty.
    pub fn step(&mut self, project: ProjectId, direction: Direction) -> bool {
        let interiors = self.interiors(project);
        let current = self
            .selection
            .interior(project)
            .and_then(|image| interiors.iter().position(|i| i == image));
        let Some(index) = next_index(current, direction, interiors.len()) else {
            return false;
        };
        let image = interiors[index].clone();
        self.selection.select_interior(project, &image)
    }

    // ---- fullscreen viewer ----

    pub fn viewer(&self) -> ViewerState {
        self.viewer
    }

    pub fn is_viewer_open(&self) -> bool {
        self.viewer.is_open()
    }

    /// Open the viewer for a project with a unit selection.
    ///
    /// Freezes the active project and takes the scroll lock. Returns false
    /// when the project has no unit selected or a viewer is already open.
    pub fn open_viewer(&mut self, project: ProjectId) -> bool {
        if self.viewer.is_open() || self.selection.unit(project).is_none() {
            return false;
        }

        self.active = self.active.freeze();
        self.viewer = ViewerState::Open { project };
        self.viewer_guards = vec![
            self.flags.acquire(PageFlag::ScrollLock),
            self.flags.acquire(PageFlag::TimelinesPaused),
            self.flags.acquire(PageFlag::FullscreenOpen),
        ];
        tracing::debug!("viewer opened for project {project}");
        true
    }

    /// Close the viewer and recompute the active project from the live
    /// scroll position.
    pub fn close_viewer(&mut self) {
        if !self.viewer.is_open() {
            return;
        }

        self.viewer = ViewerState::Closed;
        self.viewer_guards.clear();
        self.input.reset();

        let frozen = self.active.current();
        self.active = ActiveProject::Live(frozen);
        self.recompute();
        tracing::debug!("viewer closed, active project {:?}", self.active.current());
    }

    /// Image the viewer should show; `None` means render nothing
    pub fn viewer_image(&self) -> Option<&str> {
        let project = self.viewer.project()?;
        self.selection.unit(project)?;
        self.background_image(project)
    }

    /// Position of the shown interior within its list (1-based) and the
    /// list length
    pub fn viewer_position(&self) -> Option<(usize, usize)> {
        let project = self.viewer.project()?;
        let interiors = self.interiors(project);
        let index = self
            .selection
            .interior(project)
            .and_then(|image| interiors.iter().position(|i| i == image))?;
        Some((index + 1, interiors.len()))
    }

    /// Step the open viewer without cooldown (arrow keys)
    pub fn viewer_step(&mut self, direction: Direction) -> bool {
        match self.viewer.project() {
            Some(project) => self.step(project, direction),
            None => false,
        }
    }

    pub fn viewer_wheel(&mut self, delta: f32, now: Instant) -> bool {
        if !self.viewer.is_open() {
            return false;
        }
        match self.input.wheel(delta, now) {
            Some(direction) => self.viewer_step(direction),
            None => false,
        }
    }

    pub fn viewer_drag_start(&mut self, y: f32) {
        if self.viewer.is_open() {
            self.input.drag_start(y);
        }
    }

    pub fn viewer_drag_move(&mut self, y: f32, now: Instant) -> bool {
        if !self.viewer.is_open() {
            return false;
        }
        match self.input.drag_move(y, now) {
            Some(direction) => self.viewer_step(direction),
            None => false,
        }
    }

    pub fn viewer_drag_end(&mut self) {
        self.input.drag_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const STUDIO_IMAGE: &str = "/units/fourseasons/studio.jpg";
    const STUDIO_INTERIOR_2: &str = "/units/fourseasons/interior/studio/2.jpg";

    /// 1000 units of scrollable range so offsets read as thousandths
    const CONTENT: f32 = 1100.0;
    const VIEWPORT: f32 = 100.0;

    fn story_with(flags: PageFlags) -> ProjectStory {
        let mut story = ProjectStory::new(
            Arc::new(Catalog::builtin().unwrap()),
            ProjectBands::default(),
            flags,
            ViewerInputConfig::default(),
        );
        story.on_resize(CONTENT, VIEWPORT);
        story
    }

    fn story() -> ProjectStory {
        story_with(PageFlags::new())
    }

    fn scroll_to_fraction(story: &mut ProjectStory, fraction: f32) {
        story.on_scroll(fraction * (CONTENT - VIEWPORT));
    }

    mod scrolling {
        use super::*;

        #[test]
        fn test_starts_with_no_active_project() {
            let story = story();
            assert_eq!(story.active_project(), None);
        }

        #[test]
        fn test_scroll_selects_band_project() {
            let mut story = story();
            scroll_to_fraction(&mut story, 0.83);
            assert_eq!(story.active_project(), Some(1));
            scroll_to_fraction(&mut story, 0.95);
            assert_eq!(story.active_project(), Some(4));
        }

        #[test]
        fn test_resize_recomputes() {
            let mut story = story();
            story.on_scroll(880.0);
            assert_eq!(story.active_project(), Some(2));
            // Shrinking the content pushes the same offset to the end
            story.on_resize(500.0, 100.0);
            assert_eq!(story.active_project(), Some(4));
        }

        #[test]
        fn test_leaving_project_clears_its_selection() {
            let mut story = story();
            scroll_to_fraction(&mut story, 0.87);
            assert_eq!(story.active_project(), Some(2));
            story.select_unit(2, "1+1");
            story.select_interior(2, "/units/marina/interior/1-1/1.jpg");

            scroll_to_fraction(&mut story, 0.91);
            assert_eq!(story.active_project(), Some(3));
            assert!(story.selection().unit(2).is_none());
            assert!(story.selection().interior(2).is_none());
        }

        #[test]
        fn test_scrolling_within_band_keeps_selection() {
            let mut story = story();
            scroll_to_fraction(&mut story, 0.87);
            story.select_unit(2, "2+1");
            scroll_to_fraction(&mut story, 0.89);
            assert_eq!(story.selection().unit(2), Some("2+1"));
        }

        #[test]
        fn test_leaving_to_none_clears_selection() {
            let mut story = story();
            scroll_to_fraction(&mut story, 0.83);
            story.select_unit(1, "Studio");
            scroll_to_fraction(&mut story, 0.5);
            assert_eq!(story.active_project(), None);
            assert!(story.selection().unit(1).is_none());
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn test_studio_scenario() {
            let mut story = story();
            assert!(story.select_unit(1, "Studio"));
            assert_eq!(story.background_image(1), Some(STUDIO_IMAGE));
            let stats = story.stats(1);
            assert_eq!(stats.area_range, "45-55");
            assert_eq!(stats.bathrooms, "1");
            assert_eq!(stats.bedrooms, "1");

            assert!(story.select_interior(1, STUDIO_INTERIOR_2));
            assert_eq!(story.background_image(1), Some(STUDIO_INTERIOR_2));
        }

        #[test]
        fn test_select_unit_always_clears_interior() {
            let mut story = story();
            story.select_unit(1, "Studio");
            story.step(1, Direction::Forward);
            assert!(story.selection().interior(1).is_some());
            story.select_unit(1, "Studio");
            assert!(story.selection().interior(1).is_none());
        }

        #[test]
        fn test_select_adjacent_unit_cycles() {
            let mut story = story();
            assert!(story.select_adjacent_unit(1, Direction::Forward));
            assert_eq!(story.selection().unit(1), Some("Studio"));
            story.select_adjacent_unit(1, Direction::Forward);
            assert_eq!(story.selection().unit(1), Some("1+1"));
            story.select_adjacent_unit(1, Direction::Backward);
            story.select_adjacent_unit(1, Direction::Backward);
            assert_eq!(story.selection().unit(1), Some("2+1"));
        }

        #[test]
        fn test_select_adjacent_unit_from_none_backward() {
            let mut story = story();
            story.select_adjacent_unit(3, Direction::Backward);
            assert_eq!(story.selection().unit(3), Some("4+1"));
        }

        #[test]
        fn test_select_adjacent_unit_unknown_project() {
            let mut story = story();
            assert!(!story.select_adjacent_unit(99, Direction::Forward));
        }

        #[test]
        fn test_unknown_project_yields_empty_results() {
            let story = story();
            assert!(story.background_image(99).is_none());
            assert!(story.interiors(99).is_empty());
            assert_eq!(story.stats(99), StatsView::placeholder());
        }
    }

    mod stepping {
        use super::*;

        #[test]
        fn test_forward_len_times_is_cyclic() {
            for (project, unit) in [(1, "Studio"), (1, "1+1"), (3, "3+1")] {
                let mut story = story();
                story.select_unit(project, unit);
                story.step(project, Direction::Forward);
                let start = story.selection().interior(project).map(str::to_string);
                let len = story.interiors(project).len();
                for _ in 0..len {
                    story.step(project, Direction::Forward);
                }
                assert_eq!(
                    story.selection().interior(project).map(str::to_string),
                    start
                );
            }
        }

        #[test]
        fn test_empty_interior_list_is_noop() {
            let mut story = story();
            story.select_unit(1, "2+1");
            assert!(story.interiors(1).is_empty());
            assert!(!story.step(1, Direction::Forward));
            assert_eq!(story.selection().unit(1), Some("2+1"));
            assert!(story.selection().interior(1).is_none());
        }

        #[test]
        fn test_step_without_unit_is_noop() {
            let mut story = story();
            assert!(!story.step(1, Direction::Forward));
            assert!(story.selection().is_empty());
        }

        #[test]
        fn test_backward_from_none_lands_on_last() {
            let mut story = story();
            story.select_unit(1, "1+1");
            assert_eq!(story.interiors(1).len(), 3);
            story.step(1, Direction::Backward);
            assert_eq!(
                story.selection().interior(1),
                Some("/units/fourseasons/interior/1-1/3.jpg")
            );
        }

        #[test]
        fn test_forward_from_none_lands_on_first() {
            let mut story = story();
            story.select_unit(1, "Studio");
            story.step(1, Direction::Forward);
            assert_eq!(
                story.selection().interior(1),
                Some("/units/fourseasons/interior/studio/1.jpg")
            );
        }
    }

    mod viewer {
        use super::*;

        #[test]
        fn test_open_requires_unit_selection() {
            let mut story = story();
            assert!(!story.open_viewer(1));
            assert!(!story.is_viewer_open());
        }

        #[test]
        fn test_frozen_while_open_recomputed_on_close() {
            let mut story = story();
            scroll_to_fraction(&mut story, 0.91);
            assert_eq!(story.active_project(), Some(3));
            story.select_unit(3, "3+1");

            assert!(story.open_viewer(3));
            assert!(story.active_state().is_frozen());

            // Background scroll while open
            scroll_to_fraction(&mut story, 0.84);
            assert_eq!(story.active_project(), Some(3));
            scroll_to_fraction(&mut story, 0.2);
            assert_eq!(story.active_project(), Some(3));

            story.close_viewer();
            assert_eq!(story.active_project(), None);
            assert!(!story.active_state().is_frozen());
            assert!(story.selection().unit(3).is_none());
        }

        #[test]
        fn test_close_without_scroll_keeps_project_and_selection() {
            let mut story = story();
            scroll_to_fraction(&mut story, 0.91);
            story.select_unit(3, "3+1");
            story.open_viewer(3);
            story.close_viewer();
            assert_eq!(story.active_project(), Some(3));
            assert_eq!(story.selection().unit(3), Some("3+1"));
        }

        #[test]
        fn test_open_acquires_and_close_releases_flags() {
            let flags = PageFlags::new();
            let mut story = story_with(flags.clone());
            story.select_unit(1, "Studio");
            story.open_viewer(1);
            assert!(flags.is_set(PageFlag::ScrollLock));
            assert!(flags.is_set(PageFlag::TimelinesPaused));
            assert!(flags.is_set(PageFlag::FullscreenOpen));

            story.close_viewer();
            assert!(!flags.is_set(PageFlag::ScrollLock));
            assert!(!flags.is_set(PageFlag::TimelinesPaused));
            assert!(!flags.is_set(PageFlag::FullscreenOpen));
        }

        #[test]
        fn test_double_open_and_close_pair_once() {
            let flags = PageFlags::new();
            let mut story = story_with(flags.clone());
            story.select_unit(1, "Studio");
            assert!(story.open_viewer(1));
            assert!(!story.open_viewer(1));
            assert_eq!(flags.holders(PageFlag::ScrollLock), 1);
            story.close_viewer();
            story.close_viewer();
            assert_eq!(flags.holders(PageFlag::ScrollLock), 0);
        }

        #[test]
        fn test_drop_while_open_releases_flags() {
            let flags = PageFlags::new();
            let mut story = story_with(flags.clone());
            story.select_unit(1, "Studio");
            story.open_viewer(1);
            drop(story);
            assert!(!flags.is_set(PageFlag::ScrollLock));
            assert!(!flags.is_set(PageFlag::FullscreenOpen));
        }

        #[test]
        fn test_viewer_image_and_position() {
            let mut story = story();
            story.select_unit(1, "Studio");
            story.open_viewer(1);
            assert_eq!(story.viewer_image(), Some(STUDIO_IMAGE));
            assert_eq!(story.viewer_position(), None);

            story.viewer_step(Direction::Forward);
            assert_eq!(story.viewer_position(), Some((1, 2)));
            story.viewer_step(Direction::Forward);
            assert_eq!(story.viewer_image(), Some(STUDIO_INTERIOR_2));
            assert_eq!(story.viewer_position(), Some((2, 2)));
        }

        #[test]
        fn test_viewer_image_none_when_closed() {
            let story = story();
            assert!(story.viewer_image().is_none());
        }

        #[test]
        fn test_wheel_steps_with_cooldown() {
            let start = Instant::now();
            let mut story = story();
            story.select_unit(1, "1+1");
            story.open_viewer(1);

            assert!(story.viewer_wheel(1.0, start));
            assert!(!story.viewer_wheel(1.0, start + Duration::from_millis(50)));
            assert_eq!(story.viewer_position(), Some((1, 3)));
            assert!(story.viewer_wheel(-1.0, start + Duration::from_millis(320)));
            assert_eq!(story.viewer_position(), Some((3, 3)));
        }

        #[test]
        fn test_arrow_steps_ignore_cooldown() {
            let mut story = story();
            story.select_unit(1, "1+1");
            story.open_viewer(1);
            assert!(story.viewer_step(Direction::Forward));
            assert!(story.viewer_step(Direction::Forward));
            assert_eq!(story.viewer_position(), Some((2, 3)));
        }

        #[test]
        fn test_drag_steps() {
            let start = Instant::now();
            let mut story = story();
            story.select_unit(1, "Studio");
            story.open_viewer(1);
            story.viewer_drag_start(100.0);
            assert!(!story.viewer_drag_move(90.0, start));
            assert!(story.viewer_drag_move(60.0, start));
            story.viewer_drag_end();
            assert_eq!(story.viewer_position(), Some((1, 2)));
        }

        #[test]
        fn test_input_ignored_when_closed() {
            let mut story = story();
            story.select_unit(1, "Studio");
            assert!(!story.viewer_wheel(1.0, Instant::now()));
            assert!(!story.viewer_step(Direction::Forward));
            assert!(story.selection().interior(1).is_none());
        }
    }
}
