//! Runtime for the **tally** counter TUI.
//!
//! `tally-core` follows the [Elm Architecture]: a program is a pure
//! **init -> update -> view** cycle, with input arriving through
//! [`Subscription`]s and side effects described by [`Command`]s.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Side effect executed by the runtime |
//! | [`Subscription`] | Long-lived event source (terminal input) |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for testing a [`Model`] |
//!
//! Updates are strictly sequential. Each message is applied to completion
//! before the next one is read, and the view is redrawn afterwards, so a
//! model never observes a half-applied transition.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{OutputTarget, Program, ProgramError, ProgramOptions};
pub use subscription::{Subscription, SubscriptionId};
pub use subscriptions::terminal_events;

/// Run a model with the given options until it quits.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
