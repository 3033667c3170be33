//! Property-based tests for the Auxiliary Display records and flags.
//!
//! Uses proptest with 500 cases to verify byte layout, short-report
//! rejection, reserved-bit retention and the absence of cursor bounds checks.

use hid_auxdisplay_protocol::{
    AuxDisplayError, CURSOR_POS_REPORT_LEN, CursorControl, DISPLAY_PARAMS_REPORT_LEN,
    DisplayCapabilities, DisplayControl, HidCursorPos, HidDisplayParams, display_capabilities,
    encode_cursor_pos, encode_display_params, parse_cursor_pos, parse_display_params,
};
use proptest::prelude::*;

fn any_display_params() -> impl Strategy<Value = HidDisplayParams> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>()).prop_map(
        |(rows, cols, chrw, chrh, flags)| HidDisplayParams {
            rows,
            cols,
            chrw,
            chrh,
            flags,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every field lands at its declared byte offset.
    #[test]
    fn prop_display_params_field_order(params in any_display_params()) {
        let bytes = encode_display_params(&params);
        prop_assert_eq!(
            bytes,
            [params.rows, params.cols, params.chrw, params.chrh, params.flags]
        );
    }

    /// Any slice of at least five bytes parses to its first five bytes.
    #[test]
    fn prop_display_params_parse_prefix(
        data in proptest::collection::vec(any::<u8>(), DISPLAY_PARAMS_REPORT_LEN..=64),
    ) {
        let parsed = parse_display_params(&data);
        prop_assert!(parsed.is_ok(), "parse must succeed for {} bytes", data.len());
        let params = parsed.map_err(|e| TestCaseError::fail(e.to_string()))?;
        let encoded = encode_display_params(&params);
        prop_assert_eq!(&encoded[..], &data[..DISPLAY_PARAMS_REPORT_LEN]);
    }

    /// Short display params reports report the exact size mismatch.
    #[test]
    fn prop_display_params_short_rejected(
        data in proptest::collection::vec(any::<u8>(), 0..DISPLAY_PARAMS_REPORT_LEN),
    ) {
        prop_assert_eq!(
            parse_display_params(&data),
            Err(AuxDisplayError::InvalidReportSize {
                expected: DISPLAY_PARAMS_REPORT_LEN,
                actual: data.len(),
            })
        );
    }

    /// Cursor positions survive encode then parse for every byte value.
    #[test]
    fn prop_cursor_pos_bytes(row: u8, col: u8) {
        let pos = HidCursorPos { row, col };
        let bytes = encode_cursor_pos(&pos);
        prop_assert_eq!(bytes, [row, col]);
        prop_assert_eq!(parse_cursor_pos(&bytes), Ok(pos));
    }

    /// A one-byte cursor report is always rejected.
    #[test]
    fn prop_cursor_pos_short_rejected(byte: u8) {
        prop_assert_eq!(
            parse_cursor_pos(&[byte]),
            Err(AuxDisplayError::InvalidReportSize {
                expected: CURSOR_POS_REPORT_LEN,
                actual: 1,
            })
        );
    }

    /// Cursor positions at or beyond the display size are never rejected.
    #[test]
    fn prop_cursor_not_bounded_by_display(
        params in any_display_params(),
        row_over in 0u8..=255,
        col_over in 0u8..=255,
    ) {
        let row = params.rows.saturating_add(row_over);
        let col = params.cols.saturating_add(col_over);
        prop_assert!(row >= params.rows);
        prop_assert!(col >= params.cols);
        prop_assert_eq!(parse_cursor_pos(&[row, col]), Ok(HidCursorPos { row, col }));
    }

    /// The typed capability view keeps every bit, reserved ones included.
    #[test]
    fn prop_capabilities_retain_all_bits(params in any_display_params()) {
        let caps = display_capabilities(&params);
        prop_assert_eq!(caps.bits(), params.flags);
        prop_assert_eq!(
            caps.bits() & DisplayCapabilities::RESERVED_MASK,
            params.flags & 0x1F
        );
    }

    /// Named and reserved bits partition each family's byte.
    #[test]
    fn prop_named_and_reserved_bits_partition(raw: u8) {
        let control = DisplayControl::from_bits_retain(raw);
        prop_assert_eq!(
            control.intersection(DisplayControl::all()).bits() | (raw & DisplayControl::RESERVED_MASK),
            raw
        );
        let cursor = CursorControl::from_bits_retain(raw);
        prop_assert_eq!(
            cursor.intersection(CursorControl::all()).bits() | (raw & CursorControl::RESERVED_MASK),
            raw
        );
    }

    /// Plain-record serialization preserves every field.
    #[test]
    fn prop_display_params_serde(params in any_display_params()) {
        let json = serde_json::to_string(&params)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let back: HidDisplayParams = serde_json::from_str(&json)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(back, params);
    }
}
