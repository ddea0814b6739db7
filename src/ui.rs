//! Menu layout and hit-testing
//!
//! Buttons are static configuration: fixed rectangles the mode machine
//! hit-tests click points against. Nothing here is simulation state.

use glam::Vec2;

use crate::sim::Aabb;

/// Actions a menu click can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    SoundOn,
    SoundOff,
    Exit,
}

/// A clickable menu rectangle with its label
#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub rect: Aabb,
    pub label: &'static str,
    pub action: MenuAction,
}

const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 50.0);

/// The main menu, top to bottom
pub fn menu_buttons() -> [Button; 4] {
    [
        Button {
            rect: Aabb::from_corner(Vec2::new(300.0, 200.0), BUTTON_SIZE),
            label: "Start",
            action: MenuAction::Start,
        },
        Button {
            rect: Aabb::from_corner(Vec2::new(300.0, 300.0), BUTTON_SIZE),
            label: "Sound ON",
            action: MenuAction::SoundOn,
        },
        Button {
            rect: Aabb::from_corner(Vec2::new(300.0, 360.0), BUTTON_SIZE),
            label: "Sound OFF",
            action: MenuAction::SoundOff,
        },
        Button {
            rect: Aabb::from_corner(Vec2::new(300.0, 420.0), BUTTON_SIZE),
            label: "Exit",
            action: MenuAction::Exit,
        },
    ]
}

/// The button containing the click point, if any
pub fn hit_test(point: Vec2) -> Option<MenuAction> {
    menu_buttons()
        .iter()
        .find(|button| button.rect.contains_point(point))
        .map(|button| button.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_centers_hit() {
        assert_eq!(hit_test(Vec2::new(400.0, 225.0)), Some(MenuAction::Start));
        assert_eq!(hit_test(Vec2::new(400.0, 325.0)), Some(MenuAction::SoundOn));
        assert_eq!(
            hit_test(Vec2::new(400.0, 385.0)),
            Some(MenuAction::SoundOff)
        );
        assert_eq!(hit_test(Vec2::new(400.0, 445.0)), Some(MenuAction::Exit));
    }

    #[test]
    fn test_gap_between_buttons_misses() {
        assert_eq!(hit_test(Vec2::new(400.0, 275.0)), None);
        assert_eq!(hit_test(Vec2::new(100.0, 225.0)), None);
    }

    #[test]
    fn test_labels_are_unique() {
        let buttons = menu_buttons();
        for (i, a) in buttons.iter().enumerate() {
            for b in &buttons[i + 1..] {
                assert_ne!(a.label, b.label);
                assert!(!a.rect.overlaps(&b.rect));
            }
        }
    }
}
