//! Nibble/byte transport
//!
//! In 4-bit mode every byte crosses D4..D7 as two nibbles, high nibble
//! first. Each nibble is latched by the falling edge of the enable line:
//!
//! ```text
//! E   ___/‾‾‾\_________
//!      1us 1us   1ms
//! ```
//!
//! The bus is write-only. With no R/W line the controller cannot report
//! anything back, so none of these operations can fail.

use embedded_hal::delay::DelayNs;
use lcd4x20_core::command::timing;
use lcd4x20_core::PinMap;
use lcd4x20_hal::{Level, Lines, PinMode};

/// 4-bit parallel bus to the controller
pub struct Bus<L, D> {
    lines: L,
    delay: D,
    pins: PinMap,
}

impl<L: Lines, D: DelayNs> Bus<L, D> {
    /// Create a bus over a line capability and delay provider
    pub fn new(lines: L, delay: D, pins: PinMap) -> Self {
        Self { lines, delay, pins }
    }

    /// Configure every wired line as an output
    pub fn configure_outputs(&mut self) {
        for line in self.pins.lines() {
            self.lines.set_mode(line, PinMode::Output);
        }
    }

    /// Write the low four bits of `nibble`
    ///
    /// `is_command` selects the instruction register (RS low) instead of
    /// the data register (RS high).
    pub fn write_nibble(&mut self, nibble: u8, is_command: bool) {
        self.lines.set_level(self.pins.rs, Level::from(!is_command));

        if let Some(rw) = self.pins.rw {
            self.lines.set_low(rw);
        }

        // D4 carries bit 0
        for (bit, &line) in self.pins.data.iter().enumerate() {
            self.lines.set_level(line, Level::of_bit(nibble, bit as u8));
        }

        self.pulse_enable();
    }

    /// Write a full byte, high nibble first
    pub fn write_byte(&mut self, value: u8, is_command: bool) {
        self.write_nibble(value >> 4, is_command);
        self.write_nibble(value & 0x0F, is_command);
    }

    fn pulse_enable(&mut self) {
        let enable = self.pins.enable;

        self.lines.set_low(enable);
        self.delay.delay_us(timing::STROBE_EDGE_US);
        self.lines.set_high(enable);
        self.delay.delay_us(timing::STROBE_EDGE_US);
        self.lines.set_low(enable);
        self.delay.delay_ms(timing::STROBE_LATCH_MS);
    }

    /// Delay provider, for the waits a command needs after it is written
    pub fn delay(&mut self) -> &mut D {
        &mut self.delay
    }

    /// Line capability
    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// Wiring
    pub fn pins(&self) -> &PinMap {
        &self.pins
    }

    /// Give back the line capability and delay provider
    pub fn release(self) -> (L, D) {
        (self.lines, self.delay)
    }
}
