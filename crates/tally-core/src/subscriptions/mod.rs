//! Built-in subscription sources.
//!
//! Only terminal input is provided: keyboard, mouse, resize, focus and paste
//! events via [`terminal_events`].

mod terminal;

pub use terminal::*;
