//! Commands for the Luminescence BLE lighting device.
//!
//! Every command is one byte written to [`CHARACTERISTIC_UUID`] of
//! [`SERVICE_UUID`]. Once received the device stays in that mode until the
//! next command. The UUIDs are the same for every unit; only the advertised
//! name differs.

/// The attract mode effect list loaded from `luminescenceAttractCommands`
mod catalog;
pub use catalog::*;

/// Entry and mode types, plus conversion to the bytes sent to the device
mod commands;
pub use commands::*;

pub mod error;

/// The service for controlling the device
pub const SERVICE_UUID: &str = "6475221b-de88-46ed-9cbf-565f42149168";
/// The characteristic commands are written to
pub const CHARACTERISTIC_UUID: &str = "24517CE4-2DC1-6489-39A4-672BBE4344DF";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
