//! Viewer panel component renderer.
//!
//! A terminal pane cannot host embedded web content, so the panel shows the
//! item's details and the embed URL that `o` hands to the external opener.
//! Windowed mode draws the panel over the result table; fullscreen mode gives
//! it the whole pane except the footer.

use crate::ui::helpers::{clip, position_cursor, text_width, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ViewerInfo;

/// Rectangle in 1-indexed terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub top: usize,
    pub left: usize,
    pub height: usize,
    pub width: usize,
}

impl Frame {
    /// Centered frame at most `max_width` wide inside `[top, top + height)`.
    #[must_use]
    pub fn centered(top: usize, height: usize, cols: usize, max_width: usize) -> Self {
        let width = cols.saturating_sub(4).min(max_width).max(cols.min(20));
        Self {
            top,
            left: cols.saturating_sub(width) / 2 + 1,
            height,
            width,
        }
    }

    const fn inner_width(&self) -> usize {
        self.width.saturating_sub(4)
    }
}

/// Draws the bordered viewer panel inside `frame`.
pub fn render_viewer(frame: Frame, viewer: &ViewerInfo, theme: &Theme) {
    if frame.height < 3 || frame.width < 6 {
        return;
    }

    let lines = panel_lines(viewer, frame.inner_width());
    let body_rows = frame.height - 2;
    let inner = frame.width - 2;
    let border = Theme::fg(&theme.colors.viewer_border);

    position_cursor(frame.top, frame.left);
    print!("{border}┌{}┐{}", "─".repeat(inner), Theme::reset());

    for offset in 0..body_rows {
        position_cursor(frame.top + 1 + offset, frame.left);
        print!("{border}│{}", Theme::reset());

        let (text, style) = lines
            .get(offset)
            .map_or(("", LineStyle::Plain), |(text, style)| (text.as_str(), *style));
        print!("{}", style.prefix(theme));
        print!("  {text}");
        print!("{}", " ".repeat(inner.saturating_sub(text_width(text) + 2)));
        print!("{}", Theme::reset());

        print!("{border}│{}", Theme::reset());
    }

    position_cursor(frame.top + frame.height - 1, frame.left);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStyle {
    Plain,
    Title,
    Dim,
    Url,
}

impl LineStyle {
    fn prefix(self, theme: &Theme) -> String {
        match self {
            Self::Plain => Theme::fg(&theme.colors.text_normal),
            Self::Title => format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent)),
            Self::Dim => Theme::fg(&theme.colors.text_dim),
            Self::Url => Theme::fg(&theme.colors.empty_state_fg),
        }
    }
}

/// Panel body, top to bottom, already fitted to `width`.
fn panel_lines(viewer: &ViewerInfo, width: usize) -> Vec<(String, LineStyle)> {
    let mut lines = vec![
        (String::new(), LineStyle::Plain),
        (clip(&viewer.title, width), LineStyle::Title),
        (clip(&viewer.category, width), LineStyle::Dim),
        (String::new(), LineStyle::Plain),
    ];

    lines.extend(
        wrap_text(&viewer.description, width)
            .into_iter()
            .map(|line| (line, LineStyle::Plain)),
    );
    if !viewer.description.trim().is_empty() {
        lines.push((String::new(), LineStyle::Plain));
    }

    lines.push(("Embed".to_string(), LineStyle::Dim));
    lines.push((clip(&viewer.embed_url, width), LineStyle::Url));
    lines.push((String::new(), LineStyle::Plain));

    let mode = if viewer.is_fullscreen {
        "Fullscreen"
    } else {
        "Windowed"
    };
    lines.push((clip(&format!("{mode} · press o to play"), width), LineStyle::Dim));
    lines
}
