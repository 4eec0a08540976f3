//! Presentation helpers for the **tally** counter TUI.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`button`] | Bordered push button with a focused style |
//! | [`focus`] | [`FocusGroup`](focus::FocusGroup) for cycling focus across a row of controls |
//! | [`help`] | One-line key help built from a [`KeyMap`](key::KeyMap) |
//! | [`key`] | Key bindings and the key map trait |
//! | [`status_bar`] | Footer row with left and right sections |

pub mod button;
pub mod focus;
pub mod help;
pub mod key;
pub mod status_bar;
