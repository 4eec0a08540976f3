//! Key binding definitions and the key map trait used by the help line.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// Short label shown in help output (e.g. `"+/k"`).
    pub help_key: String,
    /// A human-readable description of the action.
    pub description: String,
}

/// A single key press with optional modifier keys (Ctrl, Alt, Shift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key code.
    pub code: KeyCode,
    /// Modifier keys that must be held alongside the base key.
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a binding for several key combinations.
    pub fn new(
        keys: Vec<KeyCombination>,
        help_key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            description: description.into(),
        }
    }

    /// Return whether the given key event matches any of this binding's key
    /// combinations. Release events never match, so a key fires once per press
    /// on terminals that report releases.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.kind == KeyEventKind::Release {
            return false;
        }
        self.keys
            .iter()
            .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }
}

impl KeyCombination {
    /// Create a key combination with no modifier keys.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Shorthand for a plain character key.
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Create a key combination with the Ctrl modifier.
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }
}

/// Types that expose their key bindings for the [`ShortHelp`](crate::help::ShortHelp) line.
pub trait KeyMap {
    /// The most important bindings, in display order.
    fn short_help(&self) -> Vec<&Binding>;
}
