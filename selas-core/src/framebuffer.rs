//! Bit-packed frame buffer
//!
//! Storage is page-major: one byte per (page, column) pair, bit `b` of the
//! byte being the pixel at row `page * 8 + b`. `CAP` is the storage
//! capacity in bytes; a 128x64 panel needs 1024.

use heapless::Vec;

/// Frame buffer configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FramebufferError {
    /// Width or height of zero
    InvalidDimensions,
    /// Requested dimensions exceed the storage capacity `CAP`
    CapacityExceeded,
}

/// Bit-packed monochrome frame buffer
///
/// Dimensions are set at construction and can be changed with
/// [`resize`](Framebuffer::resize), which discards the pixel content.
/// The storage length is always exactly `pages * columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer<const CAP: usize> {
    pub(crate) pages: usize,
    pub(crate) columns: usize,
    pub(crate) storage: Vec<u8, CAP>,
}

impl<const CAP: usize> Framebuffer<CAP> {
    /// Create a zeroed buffer for a `width` x `height` pixel panel
    ///
    /// The page count is `height / 8` rounded up, so heights that are not
    /// a multiple of 8 get a partially used bottom page.
    pub fn new(width: usize, height: usize) -> Result<Self, FramebufferError> {
        let mut fb = Self {
            pages: 0,
            columns: 0,
            storage: Vec::new(),
        };
        fb.resize(width, height)?;
        Ok(fb)
    }

    /// Change the buffer dimensions, discarding all pixel content
    ///
    /// Zero dimensions are rejected rather than silently producing an
    /// empty buffer. On error the previous dimensions are kept.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), FramebufferError> {
        if width == 0 || height == 0 {
            return Err(FramebufferError::InvalidDimensions);
        }
        let pages = height.div_ceil(8);
        let len = pages * width;
        if len > CAP {
            return Err(FramebufferError::CapacityExceeded);
        }

        self.storage.clear();
        // Cannot fail: len <= CAP was checked above
        let _ = self.storage.resize(len, 0);
        self.pages = pages;
        self.columns = width;
        Ok(())
    }

    /// Set every pixel to off, keeping the dimensions
    pub fn clear(&mut self) {
        self.storage.fill(0);
    }

    /// Set or clear a single pixel
    ///
    /// Coordinates outside the buffer are silently ignored. The other
    /// seven pixels sharing the storage byte are left untouched.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= self.columns || y >= self.pages * 8 {
            return;
        }
        let mask = 1u8 << (y % 8);
        let pos = (y / 8) * self.columns + x;
        if on {
            self.storage[pos] |= mask;
        } else {
            self.storage[pos] &= !mask;
        }
    }

    /// Read a single pixel
    ///
    /// Coordinates outside the buffer read as off.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.columns || y >= self.pages * 8 {
            return false;
        }
        self.storage[(y / 8) * self.columns + x] & (1 << (y % 8)) != 0
    }

    /// Number of 8-pixel-tall pages
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Number of pixel columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Width in pixels (same as the column count)
    pub fn width(&self) -> usize {
        self.columns
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pages * 8
    }

    /// The `columns` storage bytes of page `p`, in column order
    ///
    /// # Panics
    ///
    /// Panics if `p >= pages()`.
    pub fn page(&self, p: usize) -> &[u8] {
        let start = p * self.columns;
        &self.storage[start..start + self.columns]
    }

    /// The whole packed storage, page-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Total count of on pixels
    pub fn count_on(&self) -> u32 {
        self.storage.iter().map(|b| b.count_ones()).sum()
    }
}
