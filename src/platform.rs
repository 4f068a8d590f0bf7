//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy/submit shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the contact form
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Copy company email shortcut display
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";

/// Whether the modifiers carry the platform copy modifier or Ctrl
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(COPY_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_always_a_shortcut() {
        assert!(is_shortcut(KeyModifiers::CONTROL));
        assert!(is_shortcut(COPY_MODIFIER));
        assert!(!is_shortcut(KeyModifiers::SHIFT));
        assert!(!is_shortcut(KeyModifiers::NONE));
    }
}
