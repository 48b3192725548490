//! Widgets drawing the structure views and the surrounding chrome.
//!
//! Each panel reads a view snapshot and paints it into the buffer; nothing
//! here mutates state. Opacity below one renders dim, zero renders nothing
//! (the element is mid-entrance or mid-exit), and a negative lift nudges an
//! element up a row while it moves.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::view::{theme, ArrayView, Element, LinkedView, QueueView, Slot, StackView};

use super::events::ToolbarItem;

const TEXT: Color = Color::Rgb(0xe6, 0xe8, 0xf0);
const MUTED: Color = Color::Rgb(0x8a, 0x8f, 0xa8);

fn element_style(cell: &Element) -> Style {
    let style = Style::default().bg(cell.fill).fg(Color::White);
    let style = if cell.opacity < 1.0 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    };
    if cell.outlined {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

fn boxed_label(cell: &Element) -> String {
    format!("[ {} ]", cell.label)
}

/// The algorithm/structure selector row.
pub struct Toolbar {
    pub selected: usize,
}

impl Widget for Toolbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut spans = vec![Span::styled(" ", Style::default())];
        for (i, item) in ToolbarItem::ALL.iter().enumerate() {
            let style = if i == self.selected {
                Style::default().bg(theme::KEY).fg(Color::Black)
            } else {
                Style::default().fg(TEXT)
            };
            spans.push(Span::styled(format!(" {} ", item.title()), style));
            if i + 1 < ToolbarItem::ALL.len() {
                spans.push(Span::styled("│", Style::default().fg(MUTED)));
            }
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

/// The latest status line plus the pacing readout.
pub struct StatusBar<'a> {
    pub status: &'a str,
    pub speed_ms: u64,
    pub replaying: bool,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let right = if self.replaying {
            format!("replaying · {}ms ", self.speed_ms)
        } else {
            format!("{}ms ", self.speed_ms)
        };
        let right_width = right.width() as u16;
        buf.set_string(
            area.x + 1,
            area.y,
            self.status,
            Style::default().fg(TEXT),
        );
        if area.width > right_width {
            buf.set_string(
                area.x + area.width - right_width,
                area.y,
                &right,
                Style::default().fg(MUTED),
            );
        }
    }
}

/// Context key hints, or the active input line.
pub struct FooterLine<'a> {
    pub text: &'a str,
    pub editing: bool,
}

impl Widget for FooterLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let style = if self.editing {
            Style::default().fg(TEXT)
        } else {
            Style::default().fg(MUTED)
        };
        buf.set_string(area.x + 1, area.y, self.text, style);
    }
}

/// Bars for the sort array, labels underneath.
pub struct ArrayPanel<'a> {
    pub view: &'a ArrayView,
}

impl Widget for ArrayPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width == 0 {
            return;
        }
        let cells = self.view.cells();
        if cells.is_empty() {
            buf.set_string(area.x + 1, area.y, "(empty)", Style::default().fg(MUTED));
            return;
        }

        let bar_rows = area.height - 1;
        let max_height = self.view.max_height().max(1) as u32;
        let col_width: u16 = 4;

        for (i, cell) in cells.iter().enumerate() {
            let x = area.x + i as u16 * col_width;
            if x + 3 > area.x + area.width {
                break;
            }
            if cell.opacity == 0.0 {
                continue;
            }

            let mut rows = (cell.height as u32 * bar_rows as u32 / max_height) as u16;
            if cell.height > 0 {
                rows = rows.clamp(1, bar_rows);
            }
            let style = Style::default().fg(cell.fill);
            let style = if cell.opacity < 1.0 {
                style.add_modifier(Modifier::DIM)
            } else {
                style
            };
            for row in 0..rows {
                let y = area.y + bar_rows - 1 - row;
                for dx in 0..3 {
                    buf[(x + dx, y)].set_symbol("█").set_style(style);
                }
            }

            let label: String = cell.label.chars().take(3).collect();
            let pad = (3u16.saturating_sub(label.width() as u16)) / 2;
            buf.set_string(
                x + pad,
                area.y + area.height - 1,
                &label,
                Style::default().fg(TEXT),
            );
        }
    }
}

/// The stack column: logical top drawn topmost.
pub struct StackPanel<'a> {
    pub view: &'a StackView,
}

impl Widget for StackPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let items = self.view.items();
        if items.is_empty() {
            buf.set_string(
                area.x + 1,
                area.y + area.height / 2,
                "(empty stack)",
                Style::default().fg(MUTED),
            );
            return;
        }

        let bottom = area.y + area.height - 1;
        for (i, cell) in items.iter().enumerate() {
            if cell.opacity == 0.0 {
                continue;
            }
            let mut y = bottom.saturating_sub(i as u16 * 2);
            if cell.lift < 0 {
                y = y.saturating_sub(1);
            }
            if y < area.y {
                break;
            }
            let label = boxed_label(cell);
            let width = label.width() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            buf.set_string(x, y, &label, element_style(cell));

            if i + 1 == items.len() {
                buf.set_string(
                    x + width + 1,
                    y,
                    "← top",
                    Style::default().fg(MUTED),
                );
            }
        }
    }
}

/// The queue row: front leftmost, rear where elements join.
pub struct QueuePanel<'a> {
    pub view: &'a QueueView,
}

impl Widget for QueuePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let items = self.view.items();
        if items.is_empty() {
            buf.set_string(
                area.x + 1,
                area.y + area.height / 2,
                "(empty queue)",
                Style::default().fg(MUTED),
            );
            return;
        }

        let y = area.y + area.height / 2;
        let mut x = area.x + 1;
        for (i, cell) in items.iter().enumerate() {
            if cell.opacity == 0.0 {
                continue;
            }
            let label = boxed_label(cell);
            let width = label.width() as u16;
            if x + width > area.x + area.width {
                break;
            }
            let row = if cell.lift < 0 { y.saturating_sub(1) } else { y };
            buf.set_string(x, row, &label, element_style(cell));

            let marker = if i == 0 {
                Some("front")
            } else if i + 1 == items.len() {
                Some("rear")
            } else {
                None
            };
            if let Some(marker) = marker {
                if y + 1 < area.y + area.height {
                    buf.set_string(x, y + 1, marker, Style::default().fg(MUTED));
                }
            }
            x += width + 1;
        }
    }
}

/// The linked-list chain: nodes and link arrows in visual order, HEAD badge
/// above whichever node is first.
pub struct LinkedPanel<'a> {
    pub view: &'a LinkedView,
}

impl Widget for LinkedPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let slots = self.view.slots();
        if slots.is_empty() {
            buf.set_string(
                area.x + 1,
                area.y + area.height / 2,
                "(empty list)",
                Style::default().fg(MUTED),
            );
            return;
        }

        let y = area.y + area.height / 2;
        let badge_y = y.saturating_sub(1);
        let mut x = area.x + 1;

        for slot in slots {
            match slot {
                Slot::Node(node) => {
                    if node.cell.opacity == 0.0 {
                        continue;
                    }
                    let label = boxed_label(&node.cell);
                    let width = label.width() as u16;
                    if x + width > area.x + area.width {
                        break;
                    }
                    let row = if node.cell.lift < 0 {
                        y.saturating_sub(1)
                    } else {
                        y
                    };
                    buf.set_string(x, row, &label, element_style(&node.cell));
                    if node.head && badge_y >= area.y {
                        buf.set_string(
                            x,
                            badge_y,
                            "HEAD",
                            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                        );
                    }
                    x += width;
                }
                Slot::Link(link) => {
                    if link.opacity == 0.0 {
                        continue;
                    }
                    if x + 3 > area.x + area.width {
                        break;
                    }
                    let style = if link.opacity < 1.0 {
                        Style::default().fg(MUTED).add_modifier(Modifier::DIM)
                    } else {
                        Style::default().fg(MUTED)
                    };
                    buf.set_string(x, y, format!(" {} ", link.label), style);
                    x += 3;
                }
            }
        }
    }
}
