//! Toroidal scrolling
//!
//! All four shifts wrap around: content leaving one edge reappears at the
//! opposite edge, so no pixel is ever lost. Shift amounts are reduced
//! modulo the relevant period (`columns` horizontally, `pages * 8`
//! vertically), which makes arbitrarily large amounts both correct and
//! cheap.
//!
//! Horizontal shifts move whole storage bytes, one per pixel column and
//! page. Vertical shifts run in two stages: a whole-page rotation for the
//! multiple-of-8 part, then a sub-page bit stage that stitches each byte
//! together with `n % 8` bits carried in from the adjacent page. The bit
//! stage reads from a snapshot taken after the page stage, so a byte is
//! never computed from an already-rewritten neighbor.

use heapless::Vec;

use crate::framebuffer::Framebuffer;

impl<const CAP: usize> Framebuffer<CAP> {
    /// Scroll the buffer `n` pixel columns to the left, wrapping around
    pub fn shift_left(&mut self, n: usize) {
        let n = n % self.columns;
        if n == 0 {
            return;
        }
        for p in 0..self.pages {
            let start = p * self.columns;
            self.storage[start..start + self.columns].rotate_left(n);
        }
    }

    /// Scroll the buffer `n` pixel columns to the right, wrapping around
    pub fn shift_right(&mut self, n: usize) {
        let n = n % self.columns;
        if n == 0 {
            return;
        }
        for p in 0..self.pages {
            let start = p * self.columns;
            self.storage[start..start + self.columns].rotate_right(n);
        }
    }

    /// Scroll the buffer `n` pixel rows up, wrapping around
    pub fn shift_up(&mut self, n: usize) {
        let n = n % (self.pages * 8);
        let (shift_page, shift_seg) = (n / 8, n % 8);

        if shift_page > 0 {
            // Page p takes what was at page (p + shift_page) % pages
            self.storage.rotate_left(shift_page * self.columns);
        }

        if shift_seg > 0 {
            let snapshot: Vec<u8, CAP> = self.storage.clone();
            let back = 8 - shift_seg;
            for p in 0..self.pages {
                let next = (p + 1) % self.pages;
                for c in 0..self.columns {
                    let pos = p * self.columns + c;
                    let next_pos = next * self.columns + c;
                    self.storage[pos] =
                        (snapshot[pos] >> shift_seg) | (snapshot[next_pos] << back);
                }
            }
        }
    }

    /// Scroll the buffer `n` pixel rows down, wrapping around
    pub fn shift_down(&mut self, n: usize) {
        let n = n % (self.pages * 8);
        let (shift_page, shift_seg) = (n / 8, n % 8);

        if shift_page > 0 {
            // Page p takes what was at page (p - shift_page) mod pages
            self.storage.rotate_right(shift_page * self.columns);
        }

        if shift_seg > 0 {
            let snapshot: Vec<u8, CAP> = self.storage.clone();
            let back = 8 - shift_seg;
            for p in 0..self.pages {
                let prev = (p + self.pages - 1) % self.pages;
                for c in 0..self.columns {
                    let pos = p * self.columns + c;
                    let prev_pos = prev * self.columns + c;
                    self.storage[pos] =
                        (snapshot[pos] << shift_seg) | (snapshot[prev_pos] >> back);
                }
            }
        }
    }
}
