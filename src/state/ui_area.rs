//! UI area positioning for mouse event handling
//!
//! Central place for the vertical offsets the renderer uses, so mouse
//! hit-testing and drawing agree.

/// Height of the navigation bar (with borders: top + content + bottom)
pub const NAV_BAR_HEIGHT: u16 = 3;

/// Height of the project header block (title + description)
pub const PROJECT_HEADER_HEIGHT: u16 = 3;

/// Width of the unit list column in the project panel
pub const UNIT_LIST_WIDTH: u16 = 28;

/// Heights of the contact form rows, in form order
pub const FORM_ROW_HEIGHTS: [u16; 7] = [3, 3, 3, 3, 6, 3, 3];

/// UI area for calculating mouse Y offset
///
/// # Layout
///
/// ```text
/// Row 0-2:  Navigation bar (3 rows with borders)
/// Row 3+:   Main content area
///           - Home: hero/gallery, or project header + unit list + details
///           - Contact: bordered form
/// Bottom:   Status bar (1 row)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// Navigation bar itself (rows 0-2)
    NavBar,
    /// Main content (starts after navigation bar)
    Content,
    /// Unit rows of the project panel (after header + list border)
    UnitList,
    /// Contact form rows (after form border)
    FormContent,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::NavBar => 0,
            UiArea::Content => NAV_BAR_HEIGHT,
            UiArea::UnitList => NAV_BAR_HEIGHT + PROJECT_HEADER_HEIGHT + 1, // +1 for list border
            UiArea::FormContent => NAV_BAR_HEIGHT + 1,                      // +1 for border
        }
    }

    /// Convert absolute mouse row to row relative to this UI area
    #[inline]
    pub fn relative_row(self, mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y())
    }

    /// Check if a mouse row is within this UI area (at or after start)
    #[inline]
    pub fn contains_row(self, mouse_row: u16) -> bool {
        mouse_row >= self.start_y()
    }
}

/// Which nav tab a column of the navigation bar falls on, given the tab
/// label widths as rendered (1 col of padding each side, 1 col divider)
pub fn nav_tab_at(column: u16, label_widths: &[u16]) -> Option<usize> {
    // Left border
    let mut start = 1u16;
    for (index, width) in label_widths.iter().enumerate() {
        let end = start + width + 2;
        if column >= start && column < end {
            return Some(index);
        }
        start = end + 1;
    }
    None
}

/// Which unit row a click falls on
pub fn unit_row_at(column: u16, row: u16, unit_count: usize) -> Option<usize> {
    if column == 0 || column >= UNIT_LIST_WIDTH - 1 || !UiArea::UnitList.contains_row(row) {
        return None;
    }
    let index = UiArea::UnitList.relative_row(row) as usize;
    (index < unit_count).then_some(index)
}

/// Which contact form row a click falls on
pub fn form_row_at(row: u16) -> Option<usize> {
    if !UiArea::FormContent.contains_row(row) {
        return None;
    }
    let mut offset = UiArea::FormContent.relative_row(row);
    for (index, height) in FORM_ROW_HEIGHTS.iter().enumerate() {
        if offset < *height {
            return Some(index);
        }
        offset -= height;
    }
    None
}
