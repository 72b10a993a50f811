use serde::{Deserialize, Serialize};

mod action_enum;
mod dispatch;

pub use action_enum::*;

/// A screen direction, used for spatial focus moves and pane resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Whether this direction moves along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "h" => Some(Direction::Left),
            "right" | "l" => Some(Direction::Right),
            "up" | "k" => Some(Direction::Up),
            "down" | "j" => Some(Direction::Down),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_palette_actions_have_labels() {
        for action in Action::palette_actions() {
            let label = action.label();
            assert!(!label.is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn focus_direction_labels() {
        assert_eq!(Action::FocusDirection(Direction::Left).label(), "Navigate Left");
        assert_eq!(Action::FocusDirection(Direction::Down).label(), "Navigate Down");
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::NewTabGroup,
            Action::FocusDirection(Direction::Up),
            Action::ResizePane {
                direction: Direction::Left,
                delta: 5,
            },
            Action::OpenUrl("https://example.com".into()),
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }

    #[test]
    fn direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Right).unwrap();
        assert_eq!(json, "\"right\"");
    }

    #[test]
    fn direction_parse_accepts_vim_keys() {
        assert_eq!(Direction::parse("h"), Some(Direction::Left));
        assert_eq!(Direction::parse("J"), Some(Direction::Down));
        assert_eq!(Direction::parse("Up"), Some(Direction::Up));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn horizontal_axis() {
        assert!(Direction::Left.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
    }
}
