use crate::command::{Command, CommandInner};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` exercises the init/update/view cycle in a plain `#[test]`.
/// Async commands are ignored; quit requests are recorded in
/// [`quit_requested`](TestProgram::quit_requested).
///
/// ```rust,ignore
/// let mut prog = TestProgram::<App>::new(AppFlags::default());
/// prog.send(Msg::Key(plus));
/// assert!(prog.render_string(60, 20).contains("clicked the button 1 times"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            quit_requested: false,
        };
        program.record(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.record(cmd);
    }

    /// Whether any update so far returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the test backend fails to draw, which only happens on
    /// allocation failure.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string.
    ///
    /// Rows are separated by newlines; trailing whitespace is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn record(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Quit => self.quit_requested = true,
            // Async commands can't be executed synchronously in tests
            CommandInner::Future(_) => {}
        }
    }
}

/// Flatten a buffer into newline-separated rows of cell symbols.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}
