//! Application state module

mod app_state;
mod carousel;
mod forms;
mod hero_state;
mod page_flags;
mod scroll_mapper;
mod selection;
mod story;
mod transition;
mod ui_area;
mod viewer;

pub use app_state::*;
pub use carousel::*;
pub use forms::*;
pub use hero_state::*;
pub use page_flags::*;
pub use scroll_mapper::*;
pub use selection::*;
pub use story::*;
pub use transition::*;
pub use ui_area::*;
pub use viewer::*;
