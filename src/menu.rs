//! Context Menu State
//!
//! The right-clicked todo lives inside the menu state, so hiding the menu
//! and forgetting the target are the same operation.

use crate::models::Todo;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum MenuState {
    #[default]
    Hidden,
    /// Anchored at page coordinates of the right-click
    Visible { target: Todo, x: i32, y: i32 },
}

impl MenuState {
    pub fn show(&mut self, target: Todo, x: i32, y: i32) {
        *self = MenuState::Visible { target, x, y };
    }

    pub fn hide(&mut self) {
        *self = MenuState::Hidden;
    }

    /// Hide the menu and hand its target to the action being taken
    pub fn take(&mut self) -> Option<Todo> {
        match std::mem::take(self) {
            MenuState::Visible { target, .. } => Some(target),
            MenuState::Hidden => None,
        }
    }

    pub fn target(&self) -> Option<&Todo> {
        match self {
            MenuState::Visible { target, .. } => Some(target),
            MenuState::Hidden => None,
        }
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        match self {
            MenuState::Visible { x, y, .. } => Some((*x, *y)),
            MenuState::Hidden => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, MenuState::Visible { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64) -> Todo {
        Todo {
            id,
            title: "t".into(),
            description: "d".into(),
            completed: false,
            schedule: None,
        }
    }

    #[test]
    fn test_show_and_hide() {
        let mut menu = MenuState::default();
        assert!(!menu.is_visible());

        menu.show(todo(3), 120, 48);
        assert_eq!(menu.position(), Some((120, 48)));
        assert_eq!(menu.target().map(|t| t.id), Some(3));

        menu.hide();
        assert_eq!(menu, MenuState::Hidden);
        assert!(menu.target().is_none());
    }

    #[test]
    fn test_take_clears_target() {
        let mut menu = MenuState::default();
        menu.show(todo(9), 0, 0);
        assert_eq!(menu.take().map(|t| t.id), Some(9));
        assert!(!menu.is_visible());
        // A later global hide is harmless and the target stays gone
        menu.hide();
        assert_eq!(menu.take(), None);
    }

    #[test]
    fn test_reshow_replaces_target() {
        let mut menu = MenuState::default();
        menu.show(todo(1), 5, 5);
        menu.show(todo(2), 7, 8);
        assert_eq!(menu.target().map(|t| t.id), Some(2));
        assert_eq!(menu.position(), Some((7, 8)));
    }
}
