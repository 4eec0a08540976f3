use futures::future::BoxFuture;

/// A side effect returned from [`Model::update`](crate::Model::update) or [`Model::init`](crate::Model::init).
///
/// Most updates in a tally application only replace state and return
/// [`Command::none()`]. Commands cover the remaining cases: quitting, and the
/// few async queries the runtime can answer (such as the current terminal
/// size).
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Ask the runtime for the terminal size:
/// let cmd = Command::window_size(|w, h| Msg::Resized(w, h));
///
/// // Quit the program:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Quit,
    Future(BoxFuture<'static, Msg>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Quit,
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl FnOnce(Msg) -> NewMsg + Send + 'static,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Quit => Command::quit(),
            CommandInner::Future(fut) => Command {
                inner: CommandInner::Future(Box::pin(async move { f(fut.await) })),
            },
        }
    }

    /// Request the current window size. The callback receives (columns, rows).
    pub fn window_size(map: impl FnOnce(u16, u16) -> Msg + Send + 'static) -> Self {
        Command {
            inner: CommandInner::Future(Box::pin(async move {
                let size = crossterm::terminal::size().unwrap_or((80, 24));
                map(size.0, size.1)
            })),
        }
    }

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }
}
