//! SSD1306 bus session
//!
//! Owns the SPI channel and the two control pins for the duration of the
//! session and mirrors the controller's data/command framing state, so the
//! D/C line is only toggled when the framing actually changes between
//! consecutive writes.

use embedded_hal::delay::DelayNs;
use selas_core::Framebuffer;
use selas_hal::{OutputPin, SpiBus};

use crate::command::{AddressingMode, Command};

/// Reset pulse hold time
const RESET_HOLD_MS: u32 = 100;

/// Panel wiring configuration
///
/// The SEG/COM remap options must match how the controller's output pins
/// are routed to the OLED panel; the defaults suit a 128x64 module wired
/// straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HardwareConfig {
    /// Multiplex ratio (display height - 1)
    pub multiplex: u8,
    /// Vertical COM offset
    pub display_offset: u8,
    /// RAM row shown as the top display line
    pub start_line: u8,
    /// Mirror horizontally (SEG remap)
    pub segment_remap: bool,
    /// Mirror vertically (COM scan direction)
    pub com_scan_remap: bool,
    /// COM left/right remap
    pub left_right_remap: bool,
    /// Alternative COM pin configuration
    pub alternative_com_pins: bool,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            multiplex: 63,
            display_offset: 0,
            start_line: 0,
            segment_remap: false,
            com_scan_remap: false,
            left_right_remap: false,
            alternative_com_pins: false,
        }
    }
}

/// SSD1306 driver over 4-wire SPI
///
/// `DC` selects command (low) or data (high) framing for the bytes on the
/// bus; `RST` is the controller's active-low reset line. Both are owned by
/// the driver for its whole lifetime and handed back by
/// [`release`](Ssd1306::release).
pub struct Ssd1306<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    data_mode: bool,
}

impl<SPI, DC, RST> Ssd1306<SPI, DC, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Take ownership of the bus and control pins
    ///
    /// Starts in command framing with the D/C line driven low.
    pub fn new(spi: SPI, mut dc: DC, rst: RST) -> Self {
        dc.set_low();
        Self {
            spi,
            dc,
            rst,
            data_mode: false,
        }
    }

    /// Tear down the session, handing the hardware resources back
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }

    /// Pulse the reset line: assert low, hold, release
    ///
    /// Must run before any configuration after power-up.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        self.rst.set_low();
        delay.delay_ms(RESET_HOLD_MS);
        self.rst.set_high();
    }

    /// Write bytes in command framing
    fn command(&mut self, bytes: &[u8]) -> Result<(), SPI::Error> {
        if self.data_mode {
            self.dc.set_low();
            self.data_mode = false;
        }
        self.spi.write(bytes)
    }

    /// Write bytes in data framing
    fn data(&mut self, bytes: &[u8]) -> Result<(), SPI::Error> {
        if !self.data_mode {
            self.dc.set_high();
            self.data_mode = true;
        }
        self.spi.write(bytes)
    }

    /// Encode and send a single command
    pub fn send(&mut self, cmd: Command) -> Result<(), SPI::Error> {
        let (buf, len) = cmd.encode();
        self.command(&buf[..len])
    }

    /// Turn the display panel on or off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), SPI::Error> {
        self.send(Command::DisplayOn(on))
    }

    /// Invert the RAM-to-pixel polarity
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), SPI::Error> {
        self.send(Command::Invert(inverted))
    }

    /// Light every pixel regardless of RAM content
    pub fn set_all_on(&mut self, active: bool) -> Result<(), SPI::Error> {
        self.send(Command::AllPixelsOn(active))
    }

    /// Set the output contrast
    pub fn set_contrast(&mut self, value: u8) -> Result<(), SPI::Error> {
        self.send(Command::Contrast(value))
    }

    /// Send the panel wiring configuration
    ///
    /// Must match how the SEG/COM pins are connected to the OLED panel.
    pub fn configure_hardware(&mut self, config: &HardwareConfig) -> Result<(), SPI::Error> {
        self.send(Command::Multiplex(config.multiplex))?;
        self.send(Command::DisplayOffset(config.display_offset))?;
        self.send(Command::StartLine(config.start_line))?;
        self.send(Command::SegmentRemap(config.segment_remap))?;
        self.send(Command::ComScanRemap(config.com_scan_remap))?;
        self.send(Command::ComPins {
            alternative: config.alternative_com_pins,
            left_right_remap: config.left_right_remap,
        })?;
        self.send(Command::OscillatorFrequency)?;
        self.send(Command::PrechargePeriod)
    }

    /// Switch to page addressing and point at `(page, column)`
    pub fn page_addressing(&mut self, page: u8, column: u8) -> Result<(), SPI::Error> {
        self.send(Command::SetAddressingMode(AddressingMode::Page))?;
        self.send(Command::SelectPage(page))?;
        self.send(Command::ColumnLow(column))?;
        self.send(Command::ColumnHigh(column))
    }

    /// Switch to horizontal addressing over a page/column window
    pub fn horizontal_addressing(
        &mut self,
        page_start: u8,
        page_end: u8,
        column_start: u8,
        column_end: u8,
    ) -> Result<(), SPI::Error> {
        self.send(Command::SetAddressingMode(AddressingMode::Horizontal))?;
        self.send(Command::SetColumnRange {
            start: column_start,
            end: column_end,
        })?;
        self.send(Command::SetPageRange {
            start: page_start,
            end: page_end,
        })
    }

    /// Switch to vertical addressing over a page/column window
    pub fn vertical_addressing(
        &mut self,
        page_start: u8,
        page_end: u8,
        column_start: u8,
        column_end: u8,
    ) -> Result<(), SPI::Error> {
        self.send(Command::SetAddressingMode(AddressingMode::Vertical))?;
        self.send(Command::SetColumnRange {
            start: column_start,
            end: column_end,
        })?;
        self.send(Command::SetPageRange {
            start: page_start,
            end: page_end,
        })
    }

    /// Send the whole framebuffer to the controller
    ///
    /// For each page: page addressing at column 0, then the page's bytes
    /// as one data payload. The bus latency dominates, so callers should
    /// batch all drawing and paint once.
    pub fn paint<const CAP: usize>(&mut self, fb: &Framebuffer<CAP>) -> Result<(), SPI::Error> {
        for p in 0..fb.pages() {
            self.page_addressing(p as u8, 0)?;
            self.data(fb.page(p))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Dc(bool),
        Rst(bool),
        Write(Vec<u8, 160>),
    }

    type Log = RefCell<Vec<Event, 128>>;

    #[derive(Clone, Copy)]
    enum PinKind {
        Dc,
        Rst,
    }

    struct MockPin<'a> {
        log: &'a Log,
        kind: PinKind,
        high: bool,
    }

    impl<'a> MockPin<'a> {
        fn new(log: &'a Log, kind: PinKind) -> Self {
            Self {
                log,
                kind,
                high: false,
            }
        }

        fn record(&mut self, high: bool) {
            self.high = high;
            let event = match self.kind {
                PinKind::Dc => Event::Dc(high),
                PinKind::Rst => Event::Rst(high),
            };
            self.log.borrow_mut().push(event).unwrap();
        }
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            self.record(true);
        }

        fn set_low(&mut self) {
            self.record(false);
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockSpi<'a> {
        log: &'a Log,
        fail: bool,
    }

    impl SpiBus for MockSpi<'_> {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            let mut bytes = Vec::new();
            bytes.extend_from_slice(data).unwrap();
            self.log.borrow_mut().push(Event::Write(bytes)).unwrap();
            Ok(())
        }
    }

    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    fn driver(log: &Log) -> Ssd1306<MockSpi<'_>, MockPin<'_>, MockPin<'_>> {
        Ssd1306::new(
            MockSpi { log, fail: false },
            MockPin::new(log, PinKind::Dc),
            MockPin::new(log, PinKind::Rst),
        )
    }

    fn write(bytes: &[u8]) -> Event {
        let mut v = Vec::new();
        v.extend_from_slice(bytes).unwrap();
        Event::Write(v)
    }

    #[test]
    fn test_new_starts_in_command_framing() {
        let log = Log::default();
        let _drv = driver(&log);
        assert_eq!(log.borrow().as_slice(), &[Event::Dc(false)]);
    }

    #[test]
    fn test_dc_toggles_only_on_framing_change() {
        let log = Log::default();
        let mut drv = driver(&log);

        drv.send(Command::DisplayOn(true)).unwrap();
        drv.set_contrast(0x7F).unwrap();
        drv.data(&[1, 2, 3]).unwrap();
        drv.data(&[4, 5]).unwrap();
        drv.send(Command::Invert(false)).unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Dc(false), // construction
                write(&[0xAF]),
                write(&[0x81, 0x7F]), // no toggle between commands
                Event::Dc(true),
                write(&[1, 2, 3]),
                write(&[4, 5]), // no toggle between data payloads
                Event::Dc(false),
                write(&[0xA6]),
            ]
        );
    }

    #[test]
    fn test_reset_pulse() {
        let log = Log::default();
        let mut drv = driver(&log);
        let mut delay = MockDelay { total_ns: 0 };

        drv.reset(&mut delay);

        assert_eq!(
            log.borrow().as_slice(),
            &[Event::Dc(false), Event::Rst(false), Event::Rst(true)]
        );
        assert_eq!(delay.total_ns, 100_000_000);
    }

    #[test]
    fn test_configure_hardware_default_sequence() {
        let log = Log::default();
        let mut drv = driver(&log);

        drv.configure_hardware(&HardwareConfig::default()).unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Dc(false),
                write(&[0xA8, 63]),
                write(&[0xD3, 0]),
                write(&[0x40]),
                write(&[0xA0]),
                write(&[0xC0]),
                write(&[0xDA, 0x02]),
                write(&[0xD5, 0x81]),
                write(&[0xD9, 0x22]),
            ]
        );
    }

    #[test]
    fn test_configure_hardware_remapped_panel() {
        let log = Log::default();
        let mut drv = driver(&log);

        let config = HardwareConfig {
            segment_remap: true,
            com_scan_remap: true,
            alternative_com_pins: true,
            ..HardwareConfig::default()
        };
        drv.configure_hardware(&config).unwrap();

        let events = log.borrow();
        assert!(events.contains(&write(&[0xA1])));
        assert!(events.contains(&write(&[0xC8])));
        assert!(events.contains(&write(&[0xDA, 0x12])));
    }

    #[test]
    fn test_horizontal_addressing_window() {
        let log = Log::default();
        let mut drv = driver(&log);

        drv.horizontal_addressing(0, 7, 0, 127).unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Dc(false),
                write(&[0x20, 0x00]),
                write(&[0x21, 0x00, 0x7F]),
                write(&[0x22, 0x00, 0x07]),
            ]
        );
    }

    #[test]
    fn test_vertical_addressing_window() {
        let log = Log::default();
        let mut drv = driver(&log);

        drv.vertical_addressing(1, 6, 8, 119).unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Dc(false),
                write(&[0x20, 0x01]),
                write(&[0x21, 8, 119]),
                write(&[0x22, 1, 6]),
            ]
        );
    }

    #[test]
    fn test_paint_streams_every_page() {
        let log = Log::default();
        let mut drv = driver(&log);

        let mut fb = Framebuffer::<1024>::new(8, 16).unwrap();
        fb.set_pixel(0, 0, true); // page 0, column 0, bit 0
        fb.set_pixel(3, 12, true); // page 1, column 3, bit 4

        drv.paint(&fb).unwrap();

        let mut expected: Vec<Event, 128> = Vec::new();
        expected.push(Event::Dc(false)).unwrap();
        for p in 0..2u8 {
            if p > 0 {
                expected.push(Event::Dc(false)).unwrap();
            }
            expected.push(write(&[0x20, 0x02])).unwrap();
            expected.push(write(&[0xB0 | p])).unwrap();
            expected.push(write(&[0x00])).unwrap();
            expected.push(write(&[0x10])).unwrap();
            expected.push(Event::Dc(true)).unwrap();
            expected.push(write(fb.page(p as usize))).unwrap();
        }
        assert_eq!(log.borrow().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_paint_data_matches_buffer_content() {
        let log = Log::default();
        let mut drv = driver(&log);

        let mut fb = Framebuffer::<1024>::new(128, 64).unwrap();
        for x in 0..128 {
            fb.set_pixel(x, x % 64, true);
        }

        drv.paint(&fb).unwrap();

        let events = log.borrow();
        let payloads: Vec<&Event, 16> = events
            .iter()
            .filter(|e| matches!(e, Event::Write(w) if w.len() == 128))
            .collect();
        assert_eq!(payloads.len(), fb.pages());
        for (p, event) in payloads.iter().enumerate() {
            assert_eq!(**event, write(fb.page(p)));
        }
    }

    #[test]
    fn test_bus_error_propagates() {
        let log = Log::default();
        let mut drv = Ssd1306::new(
            MockSpi {
                log: &log,
                fail: true,
            },
            MockPin::new(&log, PinKind::Dc),
            MockPin::new(&log, PinKind::Rst),
        );

        assert!(drv.set_display_on(true).is_err());
        let fb = Framebuffer::<1024>::new(8, 8).unwrap();
        assert!(drv.paint(&fb).is_err());
    }

    #[test]
    fn test_release_returns_resources() {
        let log = Log::default();
        let drv = driver(&log);
        let (_spi, dc, _rst) = drv.release();
        assert!(dc.is_set_low());
    }
}
