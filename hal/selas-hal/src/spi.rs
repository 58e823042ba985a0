//! SPI bus abstractions
//!
//! Provides a trait for the write-only SPI master operations the display
//! driver needs. The SSD1306 never clocks data back, so there is no read
//! side; command/data framing is signalled out of band on a separate pin.

/// Write-only SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    ///
    /// Blocks until the whole buffer has been clocked out.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}
