//! SSD1306 OLED controller driver
//!
//! This crate turns a [`selas_core::Framebuffer`] into the byte traffic a
//! SSD1306 expects over 4-wire SPI:
//!
//! - [`command::Command`] - every controller command as a pure value with
//!   a bit-exact encoding
//! - [`driver::Ssd1306`] - the bus session: owns the SPI channel plus the
//!   data/command and reset pins, tracks framing state, and streams full
//!   buffer paints page by page
//!
//! The controller is tolerant of out-of-range operands, so encoding masks
//! values to their valid bit width instead of rejecting them (a page
//! number is always taken modulo 8, a start line modulo 64, and so on).

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod driver;

// Re-export key types
pub use command::{AddressingMode, Command};
pub use driver::{HardwareConfig, Ssd1306};
