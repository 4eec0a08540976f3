//! The counter widget as a [`Component`]: state holder, focus, and terminal
//! drawing of the [`ViewTree`](crate::view::ViewTree).
//!
//! The widget draws a bordered panel when the area is at least
//! [`panel_width()`] × [`PANEL_HEIGHT`]. Smaller areas get a compact form that
//! keeps the count, the error text and all three controls on screen.

use crate::counter::{CounterState, Outcome, Transition};
use crate::view::{self, NodeKind, RegionId};
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tally_core::{Command, Component};
use tally_widgets::button::{Button, BUTTON_HEIGHT};
use tally_widgets::focus::FocusGroup;
use unicode_width::UnicodeWidthStr;

/// Narrowest the bordered panel is drawn.
pub const PANEL_MIN_WIDTH: u16 = 52;
/// Outer height: border, display, gap, error row, gap, buttons, border.
pub const PANEL_HEIGHT: u16 = 2 + 4 + BUTTON_HEIGHT;
const CONTROL_SPACING: u16 = 2;
const COMPACT_SPACING: u16 = 1;
const SEPARATOR: &str = " | ";

/// Messages for [`CounterWidget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Activate a control directly (key shortcut or mouse click).
    Activate(Transition),
    /// Activate whichever control has focus.
    ActivateFocused,
    FocusNext,
    FocusPrev,
}

/// Width of one full-size control, enough for the longest label.
pub fn control_width() -> u16 {
    Transition::ALL
        .iter()
        .map(|t| Button::new(t.label()).min_width())
        .max()
        .unwrap_or_default()
}

/// Outer width of the bordered panel.
pub fn panel_width() -> u16 {
    let count = Transition::ALL.len() as u16;
    let controls = count * control_width() + (count - 1) * CONTROL_SPACING;
    PANEL_MIN_WIDTH.max(controls + 2)
}

/// Screen rectangles for every region of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub panel: Rect,
    pub display: Rect,
    /// Reserved even when no error is shown, so controls never move. Equal
    /// to `display` when the area is too short for separate rows.
    pub error: Rect,
    pub controls: [Rect; 3],
    /// No border, short rows, controls share the width.
    pub compact: bool,
}

impl PanelLayout {
    /// Screen rectangle of a region.
    pub fn region(&self, id: RegionId) -> Rect {
        match id {
            RegionId::App => self.panel,
            RegionId::CounterDisplay => self.display,
            RegionId::ErrorMessage => self.error,
            RegionId::IncrementButton => self.controls[0],
            RegionId::DecrementButton => self.controls[1],
            RegionId::ResetButton => self.controls[2],
        }
    }

    /// Whether the count and the error share one row.
    pub fn shared_line(&self) -> bool {
        self.display == self.error
    }
}

/// Split `area` into regions: a centred panel when it fits, the compact
/// form otherwise.
pub fn panel_layout(area: Rect) -> PanelLayout {
    if area.width >= panel_width() && area.height >= PANEL_HEIGHT {
        full_layout(area)
    } else {
        compact_layout(area)
    }
}

fn full_layout(area: Rect) -> PanelLayout {
    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(PANEL_HEIGHT),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, panel, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(panel_width()),
        Constraint::Fill(1),
    ])
    .areas(mid);

    let inner = Block::default().borders(Borders::ALL).inner(panel);
    let [display, _, error, _, buttons] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
    ])
    .areas(inner);
    let controls = Layout::horizontal([Constraint::Length(control_width()); 3])
        .flex(Flex::Center)
        .spacing(CONTROL_SPACING)
        .areas(buttons);

    PanelLayout {
        panel,
        display,
        error,
        controls,
        compact: false,
    }
}

/// Rows `offset..offset + height` of `area`, clipped to it.
fn rows(area: Rect, offset: u16, height: u16) -> Rect {
    let offset = offset.min(area.height);
    Rect::new(
        area.x,
        area.y + offset,
        area.width,
        height.min(area.height - offset),
    )
}

fn compact_layout(area: Rect) -> PanelLayout {
    let (display, error, buttons) = if area.height >= 3 {
        (rows(area, 0, 1), rows(area, 1, 1), rows(area, 2, BUTTON_HEIGHT))
    } else {
        let line = rows(area, 0, 1);
        (line, line, rows(area, 1, 1))
    };
    let controls = Layout::horizontal([Constraint::Fill(1); 3])
        .spacing(COMPACT_SPACING)
        .areas(buttons);

    PanelLayout {
        panel: area,
        display,
        error,
        controls,
        compact: true,
    }
}

/// `text` when it fits in `width` columns, otherwise just the count.
fn fit_display(text: String, count: u64, width: u16) -> String {
    if text.width() <= usize::from(width) {
        text
    } else {
        count.to_string()
    }
}

/// Label for a control drawn in `rect`, shortened to a symbol when the full
/// label would be clipped.
fn fit_label(label: &str, transition: Transition, rect: Rect) -> &str {
    let room = if rect.height >= BUTTON_HEIGHT {
        rect.width.saturating_sub(2)
    } else {
        rect.width
    };
    if label.width() <= usize::from(room) {
        label
    } else {
        match transition {
            Transition::Increment => "+",
            Transition::Decrement => "-",
            Transition::Reset => "0",
        }
    }
}

/// Holds one [`CounterState`] and the keyboard focus among its three
/// controls. Transitions are the only way the state changes.
#[derive(Debug, Clone, Default)]
pub struct CounterWidget {
    state: CounterState,
    focus: FocusGroup<3>,
}

impl CounterWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a given state (used to arrange test scenarios).
    pub fn with_state(state: CounterState) -> Self {
        Self {
            state,
            focus: FocusGroup::new(),
        }
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// The control that `Enter` would activate.
    pub fn focused_control(&self) -> Transition {
        *self.focus.pick(&Transition::ALL)
    }

    /// The control drawn at screen cell `(column, row)` when the widget is
    /// viewed in `area`.
    pub fn control_at(area: Rect, column: u16, row: u16) -> Option<Transition> {
        let pos = Position::new(column, row);
        panel_layout(area)
            .controls
            .iter()
            .position(|rect| rect.contains(pos))
            .map(|idx| Transition::ALL[idx])
    }

    fn activate(&mut self, transition: Transition) {
        let before = self.state;
        match self.state.apply(transition) {
            Outcome::Applied => tracing::debug!(
                %transition,
                from = before.counter(),
                to = self.state.counter(),
                "transition applied"
            ),
            Outcome::Rejected => {
                tracing::warn!(%transition, counter = before.counter(), "counter can't go below 0")
            }
        }
    }
}

impl Component for CounterWidget {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Activate(transition) => {
                if let Some(idx) = Transition::ALL.iter().position(|t| *t == transition) {
                    self.focus.focus(idx);
                }
                self.activate(transition);
            }
            Message::ActivateFocused => self.activate(self.focused_control()),
            Message::FocusNext => self.focus.focus_next(),
            Message::FocusPrev => self.focus.focus_prev(),
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let tree = view::render(&self.state);
        let layout = panel_layout(area);
        let count = self.state.counter();

        if !layout.compact {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Counter ");
            frame.render_widget(block, layout.panel);
        }

        let display_style = Style::default().add_modifier(Modifier::BOLD);
        let error_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        let display = tree.find(RegionId::CounterDisplay).map(|n| n.text_content());
        let error = tree.find(RegionId::ErrorMessage).map(|n| n.text_content());

        match (display, error) {
            (Some(_), Some(error)) if layout.shared_line() => {
                let line = Line::from(vec![
                    Span::styled(count.to_string(), display_style),
                    Span::raw(SEPARATOR),
                    Span::styled(error, error_style),
                ]);
                frame.render_widget(
                    Paragraph::new(line).alignment(Alignment::Center),
                    layout.display,
                );
            }
            (display, error) => {
                if let Some(text) = display {
                    let text = fit_display(text, count, layout.display.width);
                    let display = Paragraph::new(text)
                        .alignment(Alignment::Center)
                        .style(display_style);
                    frame.render_widget(display, layout.display);
                }
                if let Some(text) = error {
                    let error = Paragraph::new(text)
                        .alignment(Alignment::Center)
                        .style(error_style);
                    frame.render_widget(error, layout.error);
                }
            }
        }

        for (idx, (node, rect)) in tree.controls().into_iter().zip(layout.controls).enumerate() {
            if let NodeKind::Control { label, on_activate } = &node.kind {
                let label = fit_label(label, *on_activate, rect);
                let button = Button::new(label).focused(self.focus.is_focused(idx));
                frame.render_widget(button, rect);
            }
        }
    }
}
