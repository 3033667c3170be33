//! HID usage IDs of the Auxiliary Display page.
//!
//! Values follow the HID Usage Tables, page 0x14 ("Alphanumeric Display").
//! The lookup tables at the bottom tie each record field and each flag bit
//! to the usage a report descriptor declares for it.

use crate::flags::{CursorControl, DisplayCapabilities, DisplayControl};

/// Usage page of auxiliary displays.
pub const AUXILIARY_DISPLAY_PAGE: u16 = 0x14;

/// Application collections.
pub mod collections {
    /// Alphanumeric display.
    pub const ALPHANUMERIC_DISPLAY: u16 = 0x01;
    /// Auxiliary (bitmapped) display.
    pub const AUXILIARY_DISPLAY: u16 = 0x02;
}

/// Logical report collections.
pub mod reports {
    /// Display attributes (input): dimensions and capability bits.
    pub const DISPLAY_ATTRIBUTES: u16 = 0x20;
    /// Display control (output): clear, enable, scroll commands.
    pub const DISPLAY_CONTROL: u16 = 0x24;
    /// Character data written at the cursor.
    pub const CHARACTER: u16 = 0x2B;
    /// Ready / not-ready status of the display.
    pub const DISPLAY_STATUS: u16 = 0x2D;
    /// Cursor position (row, col) and cursor control bits.
    pub const CURSOR_POSITION: u16 = 0x32;
    /// Font glyph upload.
    pub const FONT: u16 = 0x3B;
}

/// Usages carried by individual report fields.
pub mod fields {
    pub const ASCII_CHARACTER_SET: u16 = 0x21;
    pub const DATA_READ_BACK: u16 = 0x22;
    pub const FONT_READ_BACK: u16 = 0x23;
    pub const CLEAR_DISPLAY: u16 = 0x25;
    pub const DISPLAY_ENABLE: u16 = 0x26;
    /// Screen saver delay value of the display control report.
    pub const SCREEN_SAVER_DELAY: u16 = 0x27;
    pub const SCREEN_SAVER_ENABLE: u16 = 0x28;
    pub const VERTICAL_SCROLL: u16 = 0x29;
    pub const HORIZONTAL_SCROLL: u16 = 0x2A;
    /// Character bytes carried by the character report.
    pub const DISPLAY_DATA: u16 = 0x2C;
    pub const ROW: u16 = 0x33;
    pub const COLUMN: u16 = 0x34;
    pub const ROWS: u16 = 0x35;
    pub const COLUMNS: u16 = 0x36;
    pub const CURSOR_PIXEL_POSITIONING: u16 = 0x37;
    pub const CURSOR_MODE: u16 = 0x38;
    pub const CURSOR_ENABLE: u16 = 0x39;
    pub const CURSOR_BLINK: u16 = 0x3A;
    /// Glyph bytes carried by the font report.
    pub const FONT_DATA: u16 = 0x3C;
    pub const CHARACTER_WIDTH: u16 = 0x3D;
    pub const CHARACTER_HEIGHT: u16 = 0x3E;
}

/// Usages of the `HidDisplayParams` dimension fields, in field order
/// (rows, cols, chrw, chrh). The trailing `flags` byte is described by
/// [`DISPLAY_CAPABILITY_USAGES`].
pub const DISPLAY_PARAMS_FIELD_USAGES: [u16; 4] = [
    fields::ROWS,
    fields::COLUMNS,
    fields::CHARACTER_WIDTH,
    fields::CHARACTER_HEIGHT,
];

/// Usages of the `HidCursorPos` fields, in field order (row, col).
pub const CURSOR_POS_FIELD_USAGES: [u16; 2] = [fields::ROW, fields::COLUMN];

/// Capability bit to usage, most significant bit first.
pub const DISPLAY_CAPABILITY_USAGES: [(DisplayCapabilities, u16); 3] = [
    (DisplayCapabilities::ASCII_CHARSET, fields::ASCII_CHARACTER_SET),
    (DisplayCapabilities::DATA_READ_BACK, fields::DATA_READ_BACK),
    (DisplayCapabilities::FONT_READ_BACK, fields::FONT_READ_BACK),
];

/// Display control bit to usage, most significant bit first.
pub const DISPLAY_CONTROL_USAGES: [(DisplayControl, u16); 5] = [
    (DisplayControl::CLEAR, fields::CLEAR_DISPLAY),
    (DisplayControl::ENABLE, fields::DISPLAY_ENABLE),
    (DisplayControl::SCREEN_SAVER_ENABLE, fields::SCREEN_SAVER_ENABLE),
    (DisplayControl::VERTICAL_SCROLL, fields::VERTICAL_SCROLL),
    (DisplayControl::HORIZONTAL_SCROLL, fields::HORIZONTAL_SCROLL),
];

/// Cursor control bit to usage, most significant bit first.
pub const CURSOR_CONTROL_USAGES: [(CursorControl, u16); 4] = [
    (CursorControl::PIXEL_POSITIONING, fields::CURSOR_PIXEL_POSITIONING),
    (CursorControl::INCREMENT, fields::CURSOR_MODE),
    (CursorControl::ENABLE, fields::CURSOR_ENABLE),
    (CursorControl::BLINK, fields::CURSOR_BLINK),
];

/// Usage IDs of every capability set in `caps`, in table order.
///
/// Reserved bits have no usage and are skipped.
pub fn capability_usages(caps: DisplayCapabilities) -> impl Iterator<Item = u16> {
    DISPLAY_CAPABILITY_USAGES
        .into_iter()
        .filter(move |(flag, _)| caps.contains(*flag))
        .map(|(_, usage)| usage)
}

/// Usage IDs of every command set in `control`, in table order.
pub fn control_usages(control: DisplayControl) -> impl Iterator<Item = u16> {
    DISPLAY_CONTROL_USAGES
        .into_iter()
        .filter(move |(flag, _)| control.contains(*flag))
        .map(|(_, usage)| usage)
}

/// Usage IDs of every cursor bit set in `cursor`, in table order.
pub fn cursor_usages(cursor: CursorControl) -> impl Iterator<Item = u16> {
    CURSOR_CONTROL_USAGES
        .into_iter()
        .filter(move |(flag, _)| cursor.contains(*flag))
        .map(|(_, usage)| usage)
}
