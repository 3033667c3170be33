//! Pluggable HID core capability check.
//!
//! The auxiliary display reports are registered as a class module of a
//! pluggable HID core. A legacy (non pluggable) core cannot host them. The
//! definitions in this crate compile either way; callers that are about to
//! register the display ask [`require_pluggable_core`] first.

use tracing::warn;

use crate::{AuxDisplayError, AuxDisplayResult};

/// `true` when built with the `pluggable-hid-core` feature.
pub const PLUGGABLE_HID_CORE: bool = cfg!(feature = "pluggable-hid-core");

/// HID core flavour this crate was built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HidCoreKind {
    /// Class modules can plug their report descriptors into the core.
    Pluggable,
    /// Fixed descriptor set; auxiliary display reports are unavailable.
    Legacy,
}

/// The HID core selected at build time.
pub const fn active_hid_core() -> HidCoreKind {
    if PLUGGABLE_HID_CORE {
        HidCoreKind::Pluggable
    } else {
        HidCoreKind::Legacy
    }
}

/// Check that the auxiliary display can be registered.
///
/// # Errors
///
/// Returns [`AuxDisplayError::LegacyHidCore`] when the crate was built
/// without the `pluggable-hid-core` feature.
pub fn require_pluggable_core() -> AuxDisplayResult<()> {
    check_hid_core(active_hid_core())
}

fn check_hid_core(kind: HidCoreKind) -> AuxDisplayResult<()> {
    match kind {
        HidCoreKind::Pluggable => Ok(()),
        HidCoreKind::Legacy => {
            warn!("using legacy HID core (non pluggable); auxiliary display reports unavailable");
            Err(AuxDisplayError::LegacyHidCore)
        }
    }
}
