//! Turns select views into styled terminal lines and a hit map.
//!
//! Each select takes one container line, followed by its option rows while
//! open, and a blank spacer line. Every span that belongs to an element
//! records its columns in the hit map so pointer events can be targeted.

use picklist::{SelectView, ValueView};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Dim,
    Bold,
    Reverse,
    Underline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn width(&self) -> u16 {
        self.spans
            .iter()
            .fold(0, |acc: u16, s| acc.saturating_add(columns(&s.text)))
    }
}

/// Display width in terminal columns, saturating for absurdly long text.
fn columns(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// A screen region that belongs to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Region {
    row: u16,
    start: u16,
    end: u16,
    id: String,
}

/// Element regions of the last frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<Region>,
}

impl HitMap {
    /// Find the element at a cell. Later regions sit on top of earlier ones.
    pub fn hit(&self, x: u16, y: u16) -> Option<&str> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.row == y && r.start <= x && x < r.end)
            .map(|r| r.id.as_str())
    }

    fn push(&mut self, row: u16, start: u16, end: u16, id: &str) {
        self.regions.push(Region {
            row,
            start,
            end,
            id: id.to_string(),
        });
    }
}

#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
    pub hits: HitMap,
}

impl Frame {
    fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Start a new line.
    fn line(&mut self) {
        self.lines.push(Line::default());
    }

    /// Append a span to the current line, registering it under `id`.
    fn span(&mut self, text: impl Into<String>, style: SpanStyle, id: Option<&str>) {
        let row = self.row().saturating_sub(1);
        let Some(line) = self.lines.last_mut() else {
            return;
        };
        let start = line.width();
        let span = Span {
            text: text.into(),
            style,
        };
        let end = start.saturating_add(columns(&span.text));
        line.spans.push(span);
        if let Some(id) = id {
            self.hits.push(row, start, end, id);
        }
    }

    /// Register the whole current line, up to `width` columns, under `id`.
    fn claim_line(&mut self, width: u16, id: &str) {
        let row = self.row().saturating_sub(1);
        self.hits.push(row, 0, width, id);
    }
}

/// Width of the container line, so short values still get a clickable body.
const CONTAINER_WIDTH: u16 = 48;

/// Draw the demo screen.
pub fn render(title: &str, selects: &[(SelectView, bool)]) -> Frame {
    let mut frame = Frame::default();
    frame.line();
    frame.span(title, SpanStyle::Bold, None);
    frame.line();
    frame.span(
        "Tab/Shift+Tab: focus  Enter/Space: open/pick  Esc: close  q: quit",
        SpanStyle::Dim,
        None,
    );
    frame.line();

    for (view, focused) in selects {
        render_select(&mut frame, view, *focused);
        frame.line();
    }
    frame
}

fn render_select(frame: &mut Frame, view: &SelectView, focused: bool) {
    frame.line();
    // Body first so badges and the clear glyph sit on top of it
    frame.claim_line(CONTAINER_WIDTH, &view.id);

    let marker = if focused { "▶ " } else { "  " };
    frame.span(marker, SpanStyle::Plain, None);

    match &view.value {
        ValueView::Label(Some(label)) => frame.span(label.as_str(), SpanStyle::Plain, None),
        ValueView::Label(None) => frame.span("Select...", SpanStyle::Dim, None),
        ValueView::Badges(badges) if badges.is_empty() => {
            frame.span("Select...", SpanStyle::Dim, None)
        }
        ValueView::Badges(badges) => {
            for badge in badges {
                frame.span(format!("[{} ×]", badge.label), SpanStyle::Plain, Some(&badge.id));
                frame.span(" ", SpanStyle::Plain, None);
            }
        }
    }

    let style = if focused {
        SpanStyle::Underline
    } else {
        SpanStyle::Plain
    };
    let used = frame.lines.last().map(Line::width).unwrap_or(0);
    let pad = CONTAINER_WIDTH.saturating_sub(used.saturating_add(6)) as usize;
    frame.span(" ".repeat(pad), style, None);
    frame.span(" × ", SpanStyle::Bold, Some(&view.clear_id));
    frame.span("│", SpanStyle::Dim, None);
    frame.span(if view.open { "▴" } else { "▾" }, SpanStyle::Plain, None);

    for row in &view.rows {
        frame.line();
        let style = if row.highlighted {
            SpanStyle::Reverse
        } else if row.selected {
            SpanStyle::Bold
        } else {
            SpanStyle::Plain
        };
        let check = if row.selected { "✓ " } else { "  " };
        frame.span("    ", SpanStyle::Plain, None);
        frame.span(format!("{}{}", check, row.label), style, Some(&row.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picklist::{BadgeView, RowView};

    fn view(open: bool) -> SelectView {
        SelectView {
            id: "multi".into(),
            open,
            value: ValueView::Badges(vec![BadgeView {
                id: "multi-badge-0".into(),
                label: "A".into(),
            }]),
            clear_id: "multi-clear".into(),
            rows: if open {
                vec![
                    RowView {
                        id: "multi-opt-0".into(),
                        label: "A".into(),
                        selected: true,
                        highlighted: false,
                    },
                    RowView {
                        id: "multi-opt-1".into(),
                        label: "B".into(),
                        selected: false,
                        highlighted: true,
                    },
                ]
            } else {
                vec![]
            },
        }
    }

    #[test]
    fn test_hit_map_targets() {
        let frame = render("demo", &[(view(true), true)]);

        // Title, help, spacer, then the container line
        let container = 3;
        // "▶ " is two columns, then "[A ×]"
        assert_eq!(frame.hits.hit(2, container), Some("multi-badge-0"));
        assert_eq!(frame.hits.hit(10, container), Some("multi"));
        assert_eq!(frame.hits.hit(CONTAINER_WIDTH - 4, container), Some("multi-clear"));
        assert_eq!(frame.hits.hit(6, container + 1), Some("multi-opt-0"));
        assert_eq!(frame.hits.hit(6, container + 2), Some("multi-opt-1"));
        // Left of the row label
        assert_eq!(frame.hits.hit(1, container + 1), None);
        assert_eq!(frame.hits.hit(0, 0), None);
    }

    #[test]
    fn test_closed_select_has_no_rows() {
        let frame = render("demo", &[(view(false), false)]);
        assert_eq!(frame.lines.len(), 5);
        assert_eq!(frame.hits.hit(6, 4), None);
    }

    #[test]
    fn test_highlighted_row_is_reversed() {
        let frame = render("demo", &[(view(true), false)]);
        let row = &frame.lines[5];
        assert_eq!(row.spans[1].style, SpanStyle::Reverse);
        assert_eq!(row.spans[1].text, "  B");
    }

    fn badge_view(label: String) -> SelectView {
        SelectView {
            value: ValueView::Badges(vec![BadgeView {
                id: "multi-badge-0".into(),
                label,
            }]),
            ..view(false)
        }
    }

    #[test]
    fn test_long_label_pushes_clear_glyph_right() {
        let frame = render("demo", &[(badge_view("x".repeat(60)), false)]);
        // The badge spans columns 2..66, then a space, then " × " at 67..70
        assert_eq!(frame.hits.hit(65, 3), Some("multi-badge-0"));
        assert_eq!(frame.hits.hit(68, 3), Some("multi-clear"));
    }

    #[test]
    fn test_label_wider_than_terminal_math_saturates() {
        let frame = render("demo", &[(badge_view("x".repeat(70_000)), true)]);
        assert_eq!(frame.hits.hit(2, 3), Some("multi-badge-0"));
        assert_eq!(frame.lines[3].width(), u16::MAX);
    }
}
