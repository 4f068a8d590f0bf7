//! Page-global side effects held as guard handles
//!
//! A flag is set while at least one [`FlagGuard`] for it is alive. Dropping
//! the guard releases it, so every acquisition is paired with exactly one
//! release even when the owner is torn down early.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Page-level effects that other parts of the presenter observe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageFlag {
    /// Background scrolling is disabled
    ScrollLock,
    /// Time-driven animations (carousel, hero) are paused
    TimelinesPaused,
    /// A fullscreen overlay is showing
    FullscreenOpen,
    /// Navigation bar renders with a solid background
    SolidHeader,
}

/// Shared table of active page flags
#[derive(Debug, Clone, Default)]
pub struct PageFlags {
    counts: Rc<RefCell<HashMap<PageFlag, usize>>>,
}

impl PageFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag for as long as the returned guard lives
    pub fn acquire(&self, flag: PageFlag) -> FlagGuard {
        *self.counts.borrow_mut().entry(flag).or_insert(0) += 1;
        tracing::trace!("page flag {flag:?} acquired");
        FlagGuard {
            flags: self.clone(),
            flag,
        }
    }

    pub fn is_set(&self, flag: PageFlag) -> bool {
        self.counts.borrow().get(&flag).is_some_and(|count| *count > 0)
    }

    /// Number of live guards for a flag
    pub fn holders(&self, flag: PageFlag) -> usize {
        self.counts.borrow().get(&flag).copied().unwrap_or(0)
    }

    fn release(&self, flag: PageFlag) {
        let mut counts = self.counts.borrow_mut();
        if let Some(count) = counts.get_mut(&flag) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                counts.remove(&flag);
            }
        }
        tracing::trace!("page flag {flag:?} released");
    }
}

/// Keeps a page flag set until dropped
#[must_use = "the flag is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct FlagGuard {
    flags: PageFlags,
    flag: PageFlag,
}

impl Drop for FlagGuard {
    fn drop(&mut self) {
        self.flags.release(self.flag);
    }
}
