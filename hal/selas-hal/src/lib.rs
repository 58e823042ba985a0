//! Selas Hardware Abstraction Layer
//!
//! This crate defines the bus and pin traits the SSD1306 driver is generic
//! over, so the same driver code can run on different hardware platforms
//! (or against mocks on the host).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Driver (selas-ssd1306)                 │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  selas-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Chip-specific HAL (RP2040, STM32, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (data/command select, reset)
//! - [`spi::SpiBus`] - Byte-oriented SPI write channel

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::SpiBus;
