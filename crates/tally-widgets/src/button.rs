//! A bordered push button. Stateless: focus is decided by the caller and the
//! button only draws itself.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Height a button needs: one label row inside a full border.
pub const BUTTON_HEIGHT: u16 = 3;

/// A push button with a centred label.
///
/// Given fewer than [`BUTTON_HEIGHT`] rows it drops the border and draws the
/// label alone, still highlighted when focused.
///
/// ```ignore
/// use tally_widgets::button::Button;
///
/// frame.render_widget(Button::new("Reset").focused(true), area);
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    /// Draw the button in its focused style.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Width needed to show the whole label with one cell of padding per side.
    pub fn min_width(&self) -> u16 {
        let label = unicode_width::UnicodeWidthStr::width(self.label) as u16;
        label.saturating_add(4)
    }

    fn label_style(&self) -> Style {
        if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn border_style(&self) -> Style {
        if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = Paragraph::new(self.label)
            .style(self.label_style())
            .alignment(Alignment::Center);
        if area.height < BUTTON_HEIGHT {
            label.render(area, buf);
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style());
        label.block(block).render(area, buf);
    }
}
