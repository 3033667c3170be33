//! USB HID Auxiliary Display protocol vocabulary.
//!
//! This crate is intentionally I/O-free and allocation-free. It names the
//! bits and records that a HID core exchanges with an auxiliary (character)
//! display, and leaves descriptors, endpoints and report transport to that
//! core.
//!
//! ## Contents
//! - Flag families: display capabilities, display control, cursor control
//!   ([`flags`]), as raw `u8` constants and as `bitflags` types.
//! - Records: [`HidDisplayParams`] and [`HidCursorPos`], byte-exact
//!   `#[repr(C)]` values with encode/parse helpers ([`report`]).
//! - Usage IDs of the Auxiliary Display usage page 0x14 ([`usage`]).
//! - The pluggable HID core check ([`hid_core`]).
//!
//! The same bit value is reused across flag families (0x80 means ASCII
//! charset, Clear Display or Cursor Pixel Positioning depending on the
//! report). This follows the usage page and is preserved.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod flags;
pub mod hid_core;
pub mod report;
pub mod usage;

pub use flags::{
    CursorControl, DisplayCapabilities, DisplayControl, cursor_control_flags,
    display_control_flags, display_params_flags,
};
pub use hid_core::{HidCoreKind, PLUGGABLE_HID_CORE, active_hid_core, require_pluggable_core};
pub use report::{
    CURSOR_POS_REPORT_LEN, DISPLAY_PARAMS_REPORT_LEN, HidCursorPos, HidDisplayParams,
    display_capabilities, encode_cursor_pos, encode_display_params, parse_cursor_pos,
    parse_display_params,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuxDisplayError {
    #[error("Invalid report size: expected {expected}, got {actual}")]
    InvalidReportSize { expected: usize, actual: usize },

    #[error("Legacy HID core (non pluggable) cannot host auxiliary display reports")]
    LegacyHidCore,
}

pub type AuxDisplayResult<T> = Result<T, AuxDisplayError>;
