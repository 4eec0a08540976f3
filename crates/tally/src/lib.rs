//! **tally** -- a counter widget for the terminal.
//!
//! The widget shows a count, an error banner after a decrement below zero,
//! and three controls: increment, decrement and reset.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`counter`] | [`CounterState`](counter::CounterState) and its transitions |
//! | [`view`] | Pure `render(state) -> ViewTree` with addressable regions |
//! | [`widget`] | [`CounterWidget`](widget::CounterWidget): terminal drawing, focus, hit-testing |
//! | [`app`] | [`App`](app::App): the top-level model, key and mouse input |
//! | [`config`] | TOML config file and command-line flags |
//! | [`logging`] | File-only `tracing` setup |

pub mod app;
pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod view;
pub mod widget;

pub use app::{App, AppFlags, Msg};
pub use counter::{CounterState, Outcome, Transition};
pub use error::AppError;
pub use view::{render, RegionId, ViewTree};
pub use widget::CounterWidget;
