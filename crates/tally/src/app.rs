//! The top-level [`Model`]: routes terminal input to the counter widget and
//! draws it above a key help footer.

use crate::counter::{CounterState, Transition};
use crate::view::{self, ViewTree};
use crate::widget::{self, CounterWidget};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::Frame;
use tally_core::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
use tally_widgets::help::ShortHelp;
use tally_widgets::key::{Binding, KeyCombination, KeyMap};
use tally_widgets::status_bar::StatusBar;

/// Startup data for [`App`].
#[derive(Debug, Clone, Copy)]
pub struct AppFlags {
    pub initial: CounterState,
    /// Terminal size assumed until the first resize report.
    pub size: (u16, u16),
}

impl Default for AppFlags {
    fn default() -> Self {
        Self {
            initial: CounterState::default(),
            size: (80, 24),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Key(KeyEvent),
    /// Left mouse button pressed at a screen cell.
    Click { column: u16, row: u16 },
    Resized(u16, u16),
    Counter(widget::Message),
}

/// Every key binding the app understands.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub increment: Binding,
    pub decrement: Binding,
    pub reset: Binding,
    pub focus_next: Binding,
    pub focus_prev: Binding,
    pub activate: Binding,
    pub quit: Binding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            increment: Binding::new(
                vec![
                    KeyCombination::char('+'),
                    KeyCombination::char('k'),
                    KeyCombination::new(KeyCode::Up),
                ],
                "+/↑",
                "increment",
            ),
            decrement: Binding::new(
                vec![
                    KeyCombination::char('-'),
                    KeyCombination::char('j'),
                    KeyCombination::new(KeyCode::Down),
                ],
                "-/↓",
                "decrement",
            ),
            reset: Binding::new(
                vec![KeyCombination::char('r'), KeyCombination::char('0')],
                "r",
                "reset",
            ),
            focus_next: Binding::new(vec![KeyCombination::new(KeyCode::Tab)], "tab", "focus"),
            focus_prev: Binding::new(
                vec![KeyCombination::new(KeyCode::BackTab)],
                "shift+tab",
                "focus back",
            ),
            activate: Binding::new(
                vec![
                    KeyCombination::new(KeyCode::Enter),
                    KeyCombination::char(' '),
                ],
                "enter",
                "press",
            ),
            quit: Binding::new(
                vec![
                    KeyCombination::char('q'),
                    KeyCombination::new(KeyCode::Esc),
                    KeyCombination::ctrl(KeyCode::Char('c')),
                ],
                "q",
                "quit",
            ),
        }
    }
}

impl KeyMap for KeyBindings {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.increment,
            &self.decrement,
            &self.reset,
            &self.focus_next,
            &self.activate,
            &self.quit,
        ]
    }
}

enum KeyAction {
    Counter(widget::Message),
    Quit,
}

impl KeyBindings {
    fn action(&self, key: &KeyEvent) -> Option<KeyAction> {
        // Quit is checked first so ctrl+c never reaches a counter binding.
        if self.quit.matches(key) {
            return Some(KeyAction::Quit);
        }
        let msg = if self.increment.matches(key) {
            widget::Message::Activate(Transition::Increment)
        } else if self.decrement.matches(key) {
            widget::Message::Activate(Transition::Decrement)
        } else if self.reset.matches(key) {
            widget::Message::Activate(Transition::Reset)
        } else if self.focus_prev.matches(key) {
            widget::Message::FocusPrev
        } else if self.focus_next.matches(key) {
            widget::Message::FocusNext
        } else if self.activate.matches(key) {
            widget::Message::ActivateFocused
        } else {
            return None;
        };
        Some(KeyAction::Counter(msg))
    }
}

pub struct App {
    counter: CounterWidget,
    keys: KeyBindings,
    size: (u16, u16),
}

/// Split the screen into the widget body and a one-row footer.
pub fn screen_layout(area: Rect) -> (Rect, Rect) {
    let [body, footer] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
    (body, footer)
}

impl App {
    pub fn counter(&self) -> &CounterWidget {
        &self.counter
    }

    pub fn state(&self) -> &CounterState {
        self.counter.state()
    }

    /// The pure view of the current state.
    pub fn tree(&self) -> ViewTree {
        view::render(self.counter.state())
    }

    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    /// Area the counter widget occupies at the last known terminal size.
    pub fn body_area(&self) -> Rect {
        let (w, h) = self.size;
        screen_layout(Rect::new(0, 0, w, h)).0
    }
}

impl Model for App {
    type Message = Msg;
    type Flags = AppFlags;

    fn init(flags: AppFlags) -> (Self, Command<Msg>) {
        let app = App {
            counter: CounterWidget::with_state(flags.initial),
            keys: KeyBindings::default(),
            size: flags.size,
        };
        (app, Command::window_size(Msg::Resized))
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => match self.keys.action(&key) {
                Some(KeyAction::Quit) => {
                    tracing::info!(count = self.state().counter(), "quit requested");
                    Command::quit()
                }
                Some(KeyAction::Counter(m)) => self.counter.update(m).map(Msg::Counter),
                None => Command::none(),
            },
            Msg::Click { column, row } => {
                match CounterWidget::control_at(self.body_area(), column, row) {
                    Some(t) => self
                        .counter
                        .update(widget::Message::Activate(t))
                        .map(Msg::Counter),
                    None => Command::none(),
                }
            }
            Msg::Resized(w, h) => {
                self.size = (w, h);
                Command::none()
            }
            Msg::Counter(m) => self.counter.update(m).map(Msg::Counter),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let (body, footer) = screen_layout(frame.area());
        self.counter.view(frame, body);

        let help = ShortHelp::new()
            .with_max_width(footer.width.saturating_sub(12))
            .line(&self.keys);
        let bar = StatusBar::new()
            .left(help)
            .right(format!("tally v{}", env!("CARGO_PKG_VERSION")))
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(bar, footer);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => Some(Msg::Key(key)),
            TerminalEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Msg::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            },
            TerminalEvent::Resize(w, h) => Some(Msg::Resized(w, h)),
            _ => None,
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tally_core::testing::TestProgram;

    fn key(code: KeyCode) -> Msg {
        Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn init_requests_window_size() {
        let (_, cmd) = App::init(AppFlags::default());
        assert!(!cmd.is_none());
    }

    #[test]
    fn shortcut_keys_drive_transitions() {
        let mut prog = TestProgram::<App>::new(AppFlags::default());
        prog.send(key(KeyCode::Char('+')));
        prog.send(key(KeyCode::Up));
        prog.send(key(KeyCode::Char('k')));
        assert_eq!(prog.model().state().counter(), 3);
        prog.send(key(KeyCode::Char('-')));
        assert_eq!(prog.model().state().counter(), 2);
        prog.send(key(KeyCode::Char('r')));
        assert_eq!(*prog.model().state(), CounterState::default());
    }

    #[test]
    fn quit_keys() {
        for msg in [
            key(KeyCode::Char('q')),
            key(KeyCode::Esc),
            Msg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ] {
            let mut prog = TestProgram::<App>::new(AppFlags::default());
            prog.send(msg);
            assert!(prog.quit_requested());
        }
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut prog = TestProgram::<App>::new(AppFlags::default());
        prog.send(key(KeyCode::Char('x')));
        assert_eq!(*prog.model().state(), CounterState::default());
        assert!(!prog.quit_requested());
    }

    #[test]
    fn tab_and_enter_activate_focused_control() {
        let mut prog = TestProgram::<App>::new(AppFlags::default());
        prog.send(key(KeyCode::Tab));
        prog.send(key(KeyCode::Enter));
        assert!(prog.model().state().error());
        prog.send(Msg::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)));
        prog.send(key(KeyCode::Char(' ')));
        assert_eq!(*prog.model().state(), CounterState::from_parts(1, false));
    }

    #[test]
    fn click_outside_controls_does_nothing() {
        let mut prog = TestProgram::<App>::new(AppFlags::default());
        prog.send(Msg::Click { column: 0, row: 0 });
        assert_eq!(*prog.model().state(), CounterState::default());
    }

    #[test]
    fn resize_moves_hit_targets() {
        let mut prog = TestProgram::<App>::new(AppFlags::default());
        prog.send(Msg::Resized(120, 40));
        assert_eq!(prog.model().body_area(), Rect::new(0, 0, 120, 39));
    }

    #[test]
    fn help_lists_main_bindings() {
        let keys = KeyBindings::default();
        let descriptions: Vec<_> = keys
            .short_help()
            .into_iter()
            .map(|b| b.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            ["increment", "decrement", "reset", "focus", "press", "quit"]
        );
    }
}
