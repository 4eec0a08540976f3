//! A single-row footer with left- and right-aligned sections. Stateless, so
//! it is a plain ratatui `Widget` rather than a `Component`.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

/// A one-row status bar.
///
/// The right section is drawn last, so on narrow terminals it overwrites the
/// tail of the left section instead of being pushed off-screen.
///
/// ```ignore
/// use tally_widgets::status_bar::StatusBar;
///
/// let bar = StatusBar::new().left(help_line).right("count: 3");
/// frame.render_widget(bar, footer_area);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatusBar<'a> {
    left: Option<Line<'a>>,
    right: Option<Line<'a>>,
    style: Style,
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, content: impl Into<Line<'a>>) -> Self {
        self.left = Some(content.into());
        self
    }

    pub fn right(mut self, content: impl Into<Line<'a>>) -> Self {
        self.right = Some(content.into());
        self
    }

    /// Base style (background colour etc.) for the whole row.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);
        if let Some(line) = self.left {
            Paragraph::new(line.patch_style(self.style)).render(area, buf);
        }
        if let Some(line) = self.right {
            let width = (line.width() as u16).min(area.width);
            let right = Rect {
                x: area.right() - width,
                width,
                ..area
            };
            Paragraph::new(line.patch_style(self.style))
                .alignment(Alignment::Right)
                .render(right, buf);
        }
    }
}
