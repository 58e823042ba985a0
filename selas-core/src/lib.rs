//! Board-agnostic display logic for Selas
//!
//! This crate provides everything that does not touch a bus:
//!
//! - [`Framebuffer`] - bit-packed page-major pixel storage
//! - Toroidal scrolling in all four directions ([`scroll`])
//! - Glyph rendering with scaling and inversion ([`text`])
//! - The built-in 5x8 bitmap font ([`font`])
//!
//! # Pixel layout
//!
//! Pixels are packed eight-to-a-byte along the vertical axis, matching the
//! SSD1306's page addressing: byte `page * columns + x` holds the eight
//! pixels of column `x` in page `page`, with bit `b` being the pixel at
//! `(x, page * 8 + b)`. A page's bytes can therefore be streamed to the
//! controller verbatim.

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod framebuffer;
pub mod scroll;
pub mod text;

// Re-export key types
pub use font::{MonoFont, FONT_5X8, GLYPH_ROWS};
pub use framebuffer::{Framebuffer, FramebufferError};
pub use text::{draw_text, TextStyle};
