use crate::url::node_url;
use serde::Serialize;

pub const CONTROLS_LABEL: &str = "View node";
pub const INPUT_PLACEHOLDER: &str = "node id";
pub const GO_LABEL: &str = "Go";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// The controls region: a label, the node id input and the Go button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlsWidget {
    input: String,
}

impl Default for ControlsWidget {
    fn default() -> Self {
        Self {
            input: INPUT_PLACEHOLDER.to_string(),
        }
    }
}

impl ControlsWidget {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// User edit of the input.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Mirror write from the view state. Skipped when the input already holds
    /// `id` so text being typed is not clobbered.
    pub fn set_input_if_changed(&mut self, id: &str) -> bool {
        if self.input == id {
            return false;
        }
        self.input = id.to_string();
        true
    }

    /// The typed node id: the input with surrounding whitespace removed.
    #[inline]
    pub fn id(&self) -> &str {
        self.input.trim()
    }

    /// Go button: the node URL for the typed id. The id is not validated.
    pub fn submit(&self, base_url: &str) -> String {
        node_url(base_url, self.id())
    }

    /// Enter in the input behaves like the Go button; other keys do nothing.
    pub fn key_press(&self, key: Key, base_url: &str) -> Option<String> {
        match key {
            Key::Enter => Some(self.submit(base_url)),
            Key::Char(_) | Key::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://host/db/data";

    #[test]
    fn test_initial_input_is_placeholder() {
        assert_eq!(ControlsWidget::new().input(), "node id");
    }

    #[test]
    fn test_submit_builds_node_url() {
        let mut controls = ControlsWidget::new();
        controls.set_input("42");
        assert_eq!(controls.submit(BASE), "http://host/db/data/node/42");

        controls.set_input("  42 ");
        assert_eq!(controls.id(), "42");
        assert_eq!(controls.submit(BASE), "http://host/db/data/node/42");
    }

    #[test]
    fn test_empty_input_still_submits() {
        let mut controls = ControlsWidget::new();
        controls.set_input("   ");
        assert_eq!(controls.id(), "");
        assert_eq!(controls.submit(BASE), "http://host/db/data/node/");
        assert_eq!(
            controls.key_press(Key::Enter, BASE).as_deref(),
            Some("http://host/db/data/node/")
        );
    }

    #[test]
    fn test_enter_key_submits() {
        let mut controls = ControlsWidget::new();
        controls.set_input("7");
        assert_eq!(
            controls.key_press(Key::Enter, BASE).as_deref(),
            Some("http://host/db/data/node/7")
        );
        assert_eq!(controls.key_press(Key::Char('7'), BASE), None);
        assert_eq!(controls.key_press(Key::Other, BASE), None);
    }

    #[test]
    fn test_mirror_write_skipped_when_equal() {
        let mut controls = ControlsWidget::new();
        assert!(controls.set_input_if_changed("5"));
        assert!(!controls.set_input_if_changed("5"));
        assert_eq!(controls.input(), "5");
    }
}
