//! Activation contract for toggle controls
//!
//! A pointer click and an `Enter`/`Space` key press on a toggle control are
//! the same action. Keyboard activation also suppresses the browser default
//! (page scroll on `Space`, synthetic click on `Enter`).

/// How a toggle control was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Pointer click
    Click,
    /// `Enter` or `Space` key press
    Keyboard,
}

impl Activation {
    /// Map a `KeyboardEvent.key` value to an activation, if it is one.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " => Some(Self::Keyboard),
            _ => None,
        }
    }

    /// Whether the handler must call `preventDefault` on the source event.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Keyboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert_eq!(Activation::from_key("Enter"), Some(Activation::Keyboard));
        assert_eq!(Activation::from_key(" "), Some(Activation::Keyboard));
        assert_eq!(Activation::from_key("Tab"), None);
        assert_eq!(Activation::from_key("Escape"), None);
        assert_eq!(Activation::from_key("enter"), None);
    }

    #[test]
    fn test_only_keyboard_prevents_default() {
        assert!(Activation::Keyboard.prevents_default());
        assert!(!Activation::Click.prevents_default());
    }
}
