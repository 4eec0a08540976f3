//! One-line key help built from a [`KeyMap`].

use crate::key::KeyMap;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Visual style configuration for [`ShortHelp`].
#[derive(Debug, Clone)]
pub struct HelpStyle {
    /// Style applied to key labels.
    pub key: Style,
    /// Style applied to binding descriptions.
    pub description: Style,
    /// Style applied to separators and the ellipsis.
    pub separator: Style,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            key: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::Gray),
            separator: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Renders `key description • key description • …` for the
/// [`short_help`](KeyMap::short_help) bindings of a [`KeyMap`], truncating with an ellipsis past `max_width`.
#[derive(Debug, Clone)]
pub struct ShortHelp {
    style: HelpStyle,
    separator: String,
    ellipsis: String,
    max_width: Option<u16>,
}

impl ShortHelp {
    pub fn new() -> Self {
        Self {
            style: HelpStyle::default(),
            separator: " \u{2022} ".to_string(), // " • "
            ellipsis: "\u{2026}".to_string(),    // "…"
            max_width: None,
        }
    }

    pub fn with_style(mut self, style: HelpStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_separator(mut self, s: impl Into<String>) -> Self {
        self.separator = s.into();
        self
    }

    /// Truncate the line once it would exceed `w` columns.
    pub fn with_max_width(mut self, w: u16) -> Self {
        self.max_width = Some(w);
        self
    }

    /// Build the help line for `keymap`.
    pub fn line(&self, keymap: &impl KeyMap) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut total_width = 0usize;
        let max = self.max_width.map(usize::from);
        let sep_width = self.separator.width();

        for (idx, b) in keymap.short_help().into_iter().enumerate() {
            let entry_width = b.help_key.width() + 1 + b.description.width();
            let lead = if idx > 0 { sep_width } else { 0 };

            if let Some(max_w) = max {
                if total_width + lead + entry_width > max_w {
                    spans.push(Span::styled(self.ellipsis.clone(), self.style.separator));
                    break;
                }
            }

            if idx > 0 {
                spans.push(Span::styled(self.separator.clone(), self.style.separator));
            }
            spans.push(Span::styled(b.help_key.clone(), self.style.key));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(b.description.clone(), self.style.description));
            total_width += lead + entry_width;
        }

        Line::from(spans)
    }
}

impl Default for ShortHelp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Binding, KeyCombination};

    struct Keys(Vec<Binding>);

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            self.0.iter().collect()
        }
    }

    fn keys() -> Keys {
        Keys(vec![
            Binding::new(vec![KeyCombination::char('+')], "+", "inc"),
            Binding::new(vec![KeyCombination::char('-')], "-", "dec"),
            Binding::new(vec![KeyCombination::char('r')], "r", "reset"),
        ])
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn joins_bindings_with_separator() {
        let line = ShortHelp::new().with_separator(" | ").line(&keys());
        assert_eq!(text(&line), "+ inc | - dec | r reset");
    }

    #[test]
    fn truncates_with_ellipsis() {
        let line = ShortHelp::new()
            .with_separator(" | ")
            .with_max_width(13)
            .line(&keys());
        assert_eq!(text(&line), "+ inc | - dec…");
    }
}
