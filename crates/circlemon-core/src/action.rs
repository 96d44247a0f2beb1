/// Commands offered by the tray and widget context menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Show,
    Hide,
    Minimize,
    Exit,
}

impl MenuAction {
    /// Items in the tray icon's context menu, top to bottom.
    pub const TRAY_MENU: &'static [MenuAction] = &[Self::Show, Self::Hide, Self::Minimize, Self::Exit];

    /// Items in the widget's own right-click menu.
    pub const WIDGET_MENU: &'static [MenuAction] = &[Self::Minimize, Self::Exit];

    /// Menu item label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Show => "Show",
            Self::Hide => "Hide",
            Self::Minimize => "Minimize",
            Self::Exit => "Exit",
        }
    }

    /// Command identifier used for the native menu item. Never zero,
    /// since zero means "dismissed" for `TrackPopupMenu`.
    pub fn id(self) -> u32 {
        match self {
            Self::Show => 1,
            Self::Hide => 2,
            Self::Minimize => 3,
            Self::Exit => 4,
        }
    }

    /// Inverse of [`MenuAction::id`].
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::Show),
            2 => Some(Self::Hide),
            3 => Some(Self::Minimize),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_roundtrip_for_every_tray_item() {
        for &action in MenuAction::TRAY_MENU {
            assert_eq!(MenuAction::from_id(action.id()), Some(action));
            assert_ne!(action.id(), 0);
        }
    }

    #[test]
    fn dismissed_menu_maps_to_none() {
        assert_eq!(MenuAction::from_id(0), None);
        assert_eq!(MenuAction::from_id(99), None);
    }

    #[test]
    fn widget_menu_offers_minimize_and_exit() {
        let labels: Vec<_> = MenuAction::WIDGET_MENU.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["Minimize", "Exit"]);
    }
}
