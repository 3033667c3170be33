//! Display parameter and cursor position records.
//!
//! Both records are plain `#[repr(C)]` values made of `u8` fields, so their
//! in-memory layout equals the wire layout: no padding, alignment 1.
//!
//! All functions are pure and allocation-free. None of them checks a cursor
//! position against the display dimensions; that belongs to whoever drives
//! the display.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::flags::DisplayCapabilities;
use crate::{AuxDisplayError, AuxDisplayResult};

/// Wire size of a display parameters record.
pub const DISPLAY_PARAMS_REPORT_LEN: usize = 5;

/// Wire size of a cursor position record.
pub const CURSOR_POS_REPORT_LEN: usize = 2;

/// Auxiliary display capabilities as reported by the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct HidDisplayParams {
    /// Character rows (usage 0x35).
    pub rows: u8,
    /// Character columns (usage 0x36).
    pub cols: u8,
    /// Character cell width in pixels (usage 0x3D).
    pub chrw: u8,
    /// Character cell height in pixels (usage 0x3E).
    pub chrh: u8,
    /// Capability bits, see [`DisplayCapabilities`]. The low five bits are unused.
    pub flags: u8,
}

/// Cursor location on the auxiliary display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct HidCursorPos {
    /// Cursor row (usage 0x33).
    pub row: u8,
    /// Cursor column (usage 0x34).
    pub col: u8,
}

const _: () = {
    assert!(core::mem::size_of::<HidDisplayParams>() == DISPLAY_PARAMS_REPORT_LEN);
    assert!(core::mem::align_of::<HidDisplayParams>() == 1);
    assert!(core::mem::size_of::<HidCursorPos>() == CURSOR_POS_REPORT_LEN);
    assert!(core::mem::align_of::<HidCursorPos>() == 1);
};

/// Encode display parameters in field order.
///
/// Layout (5 bytes):
/// - Byte 0: rows
/// - Byte 1: cols
/// - Byte 2: character width
/// - Byte 3: character height
/// - Byte 4: capability flags
pub fn encode_display_params(params: &HidDisplayParams) -> [u8; DISPLAY_PARAMS_REPORT_LEN] {
    [
        params.rows,
        params.cols,
        params.chrw,
        params.chrh,
        params.flags,
    ]
}

/// Parse display parameters from the first five bytes of `data`.
///
/// Trailing bytes are ignored.
///
/// # Errors
///
/// Returns [`AuxDisplayError::InvalidReportSize`] if `data` is shorter than
/// [`DISPLAY_PARAMS_REPORT_LEN`].
pub fn parse_display_params(data: &[u8]) -> AuxDisplayResult<HidDisplayParams> {
    let [rows, cols, chrw, chrh, flags, ..] = *data else {
        trace!(len = data.len(), "display params report too short");
        return Err(AuxDisplayError::InvalidReportSize {
            expected: DISPLAY_PARAMS_REPORT_LEN,
            actual: data.len(),
        });
    };

    Ok(HidDisplayParams {
        rows,
        cols,
        chrw,
        chrh,
        flags,
    })
}

/// Encode a cursor position as `[row, col]`.
pub fn encode_cursor_pos(pos: &HidCursorPos) -> [u8; CURSOR_POS_REPORT_LEN] {
    [pos.row, pos.col]
}

/// Parse a cursor position from the first two bytes of `data`.
///
/// # Errors
///
/// Returns [`AuxDisplayError::InvalidReportSize`] if `data` is shorter than
/// [`CURSOR_POS_REPORT_LEN`].
pub fn parse_cursor_pos(data: &[u8]) -> AuxDisplayResult<HidCursorPos> {
    let [row, col, ..] = *data else {
        trace!(len = data.len(), "cursor position report too short");
        return Err(AuxDisplayError::InvalidReportSize {
            expected: CURSOR_POS_REPORT_LEN,
            actual: data.len(),
        });
    };

    Ok(HidCursorPos { row, col })
}

/// Typed view of `params.flags`. Reserved bits are retained.
pub fn display_capabilities(params: &HidDisplayParams) -> DisplayCapabilities {
    DisplayCapabilities::from_bits_retain(params.flags)
}
