//! Auxiliary Display flag bits.
//!
//! Three independent families share one byte layout each. The same bit value
//! appears in more than one family (0x80 is ASCII charset, Clear Display and
//! Cursor Pixel Positioning); a bit is only meaningful inside the report that
//! carries its family, so the families are kept as separate types.

use bitflags::bitflags;

/// Capability bits of the display attributes report (`HidDisplayParams::flags`).
pub mod display_params_flags {
    /// Screen supports the ASCII character set.
    pub const ASCII_CHARSET: u8 = 0x80;
    /// Character report can be read back when set.
    pub const DATA_READ_BACK: u8 = 0x40;
    /// Font report can be read back when set.
    pub const FONT_READ_BACK: u8 = 0x20;
}

/// Command bits of the display control report.
pub mod display_control_flags {
    /// Clear display command.
    pub const CLEAR: u8 = 0x80;
    /// Display enable.
    pub const ENABLE: u8 = 0x40;
    /// Screen saver enable.
    pub const SCREEN_SAVER_ENABLE: u8 = 0x20;
    /// Vertical scroll.
    pub const VERTICAL_SCROLL: u8 = 0x10;
    /// Horizontal scroll.
    pub const HORIZONTAL_SCROLL: u8 = 0x08;
}

/// Cursor control bits.
pub mod cursor_control_flags {
    /// Cursor uses pixel positioning instead of character cells.
    pub const PIXEL_POSITIONING: u8 = 0x80;
    /// Cursor mode = increment.
    pub const INCREMENT: u8 = 0x40;
    /// Cursor enable.
    pub const ENABLE: u8 = 0x20;
    /// Cursor blink.
    pub const BLINK: u8 = 0x10;
}

bitflags! {
    /// Capabilities advertised in the display attributes report.
    ///
    /// The low five bits are unused; they survive
    /// [`from_bits_retain`](Self::from_bits_retain) untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DisplayCapabilities: u8 {
        const ASCII_CHARSET = display_params_flags::ASCII_CHARSET;
        const DATA_READ_BACK = display_params_flags::DATA_READ_BACK;
        const FONT_READ_BACK = display_params_flags::FONT_READ_BACK;
    }
}

bitflags! {
    /// Commands written through the display control report.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DisplayControl: u8 {
        const CLEAR = display_control_flags::CLEAR;
        const ENABLE = display_control_flags::ENABLE;
        const SCREEN_SAVER_ENABLE = display_control_flags::SCREEN_SAVER_ENABLE;
        const VERTICAL_SCROLL = display_control_flags::VERTICAL_SCROLL;
        const HORIZONTAL_SCROLL = display_control_flags::HORIZONTAL_SCROLL;
    }
}

bitflags! {
    /// Cursor behaviour bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CursorControl: u8 {
        const PIXEL_POSITIONING = cursor_control_flags::PIXEL_POSITIONING;
        const INCREMENT = cursor_control_flags::INCREMENT;
        const ENABLE = cursor_control_flags::ENABLE;
        const BLINK = cursor_control_flags::BLINK;
    }
}

impl DisplayCapabilities {
    /// Bits with no assigned capability.
    pub const RESERVED_MASK: u8 = !Self::all().bits();
}

impl DisplayControl {
    /// Bits with no assigned command.
    pub const RESERVED_MASK: u8 = !Self::all().bits();
}

impl CursorControl {
    /// Bits with no assigned cursor behaviour.
    pub const RESERVED_MASK: u8 = !Self::all().bits();
}
