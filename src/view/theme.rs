//! Shared palette for every structure panel.

use ratatui::style::Color;

pub const NORMAL: Color = Color::Rgb(0x50, 0x50, 0xa1);
pub const HIGHLIGHT: Color = Color::Rgb(0x91, 0xaa, 0xfa);
pub const KEY: Color = Color::Rgb(0xa0, 0xb3, 0xff);
pub const MERGE_LEFT: Color = Color::Rgb(0x99, 0xba, 0xff);
pub const MERGE_RIGHT: Color = Color::Rgb(0x71, 0x89, 0xff);
pub const MERGE_WRITE: Color = Color::Rgb(0x8d, 0xb1, 0xff);
pub const FINAL: Color = Color::Rgb(0x7f, 0xa6, 0xff);
pub const PIVOT: Color = Color::Rgb(0x00, 0xa3, 0xc4);
