//! Visibility and opacity state of the widget window.
//!
//! The Win32 layer translates mouse, tray, and menu input into calls on
//! [`ShellState`] and performs whatever [`ShellEffect`] comes back.

use crate::action::MenuAction;
use crate::opacity::Opacity;

/// Side effect the window layer must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEffect {
    /// Nothing changed.
    None,
    /// Show the window and bring it to the foreground.
    Restore,
    /// Hide the window; only the tray icon remains.
    Hide,
    /// Re-apply the window's constant alpha.
    Repaint,
    /// Destroy the window and leave the message loop.
    Close,
}

/// Mutable shell state owned by the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    visible: bool,
    opacity: Opacity,
}

impl ShellState {
    pub fn new(opacity: Opacity) -> Self {
        Self {
            visible: true,
            opacity,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    /// Handles a tray or widget menu selection.
    ///
    /// Minimizing and hiding are the same thing for a tray widget.
    pub fn apply(&mut self, action: MenuAction) -> ShellEffect {
        match action {
            MenuAction::Show => self.restore(),
            MenuAction::Hide | MenuAction::Minimize => {
                self.visible = false;
                ShellEffect::Hide
            }
            MenuAction::Exit => ShellEffect::Close,
        }
    }

    /// Double-click on the tray icon.
    pub fn restore(&mut self) -> ShellEffect {
        self.visible = true;
        ShellEffect::Restore
    }

    /// Mouse wheel over the widget.
    pub fn scroll(&mut self, wheel_delta: i32) -> ShellEffect {
        let next = self.opacity.scrolled(wheel_delta);
        if next == self.opacity {
            return ShellEffect::None;
        }
        self.opacity = next;
        ShellEffect::Repaint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible() {
        let state = ShellState::new(Opacity::default());
        assert!(state.is_visible());
    }

    #[test]
    fn minimize_hides_and_tray_double_click_restores() {
        // Arrange
        let mut state = ShellState::new(Opacity::default());

        // Act
        let hidden = state.apply(MenuAction::Minimize);
        let visible_after_hide = state.is_visible();
        let restored = state.restore();

        // Assert
        assert_eq!(hidden, ShellEffect::Hide);
        assert!(!visible_after_hide);
        assert_eq!(restored, ShellEffect::Restore);
        assert!(state.is_visible());
    }

    #[test]
    fn show_and_hide_menu_items() {
        let mut state = ShellState::new(Opacity::default());
        assert_eq!(state.apply(MenuAction::Hide), ShellEffect::Hide);
        assert_eq!(state.apply(MenuAction::Show), ShellEffect::Restore);
        assert!(state.is_visible());
    }

    #[test]
    fn exit_requests_close() {
        let mut state = ShellState::new(Opacity::default());
        assert_eq!(state.apply(MenuAction::Exit), ShellEffect::Close);
    }

    #[test]
    fn scroll_at_ceiling_is_noop() {
        let mut state = ShellState::new(Opacity::default());
        assert_eq!(state.scroll(120), ShellEffect::None);
        assert_eq!(state.scroll(-120), ShellEffect::Repaint);
        assert_eq!(state.opacity().percent(), 95);
    }
}
