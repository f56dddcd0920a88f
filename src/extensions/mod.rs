//! Optional extensions to the base depth zoom controller.

#[cfg(feature = "extension_anchor_indicator")]
pub mod anchor_indicator;
