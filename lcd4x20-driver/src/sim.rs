//! Simulated 4x20 HD44780 for tests
//!
//! Records every line change and delay, latches nibbles on the falling
//! edge of E, and runs the resulting instructions against a DDRAM model so
//! tests can check what the glass would show.

use std::cell::RefCell;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use lcd4x20_core::{LcdConfig, PinMap, RowOffsetTable, COLS, ROWS};
use lcd4x20_hal::{Level, LineId, Lines, PinMode};

use crate::Lcd;

/// Wiring used by the tests
pub const PINS: PinMap = PinMap::new(0, 1, [2, 3, 4, 5]);

const LINE_COUNT: usize = 16;
const DDRAM_SIZE: usize = 0x80;

/// Line or timing activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Mode(LineId, PinMode),
    Level(LineId, Level),
    DelayNs(u32),
    DelayUs(u32),
    DelayMs(u32),
}

/// Instruction executed by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Command(u8),
    Data(u8),
}

struct State {
    levels: [Level; LINE_COUNT],
    modes: [Option<PinMode>; LINE_COUNT],
    events: Vec<Event>,
    nibbles: Vec<(bool, u8)>,
    ops: Vec<Op>,
    four_bit: bool,
    pending: Option<(bool, u8)>,
    ddram: [u8; DDRAM_SIZE],
    address: u8,
    display_control: u8,
    entry_mode: u8,
}

impl State {
    fn new() -> Self {
        Self {
            levels: [Level::Low; LINE_COUNT],
            modes: [None; LINE_COUNT],
            events: Vec::new(),
            nibbles: Vec::new(),
            ops: Vec::new(),
            // Controllers power up in 8-bit mode
            four_bit: false,
            pending: None,
            ddram: [b' '; DDRAM_SIZE],
            address: 0,
            display_control: 0,
            entry_mode: 0,
        }
    }

    fn set_level(&mut self, line: LineId, level: Level) {
        self.events.push(Event::Level(line, level));
        let previous = self.levels[line as usize];
        self.levels[line as usize] = level;

        if line == PINS.enable && previous == Level::High && level == Level::Low {
            self.latch();
        }
    }

    fn latch(&mut self) {
        let nibble = PINS
            .data
            .iter()
            .enumerate()
            .fold(0u8, |acc, (bit, &line)| {
                acc | ((self.levels[line as usize].is_high() as u8) << bit)
            });
        let is_command = !self.levels[PINS.rs as usize].is_high();
        self.nibbles.push((is_command, nibble));

        if !self.four_bit {
            // D0..D3 are not wired; they read as 0
            self.execute(is_command, nibble << 4);
            return;
        }

        match self.pending.take() {
            None => self.pending = Some((is_command, nibble)),
            Some((command, high)) => self.execute(command, (high << 4) | nibble),
        }
    }

    fn execute(&mut self, is_command: bool, byte: u8) {
        if !is_command {
            self.ops.push(Op::Data(byte));
            self.ddram[self.address as usize] = byte;
            self.address = match self.address {
                0x27 => 0x40,
                0x67 => 0x00,
                a => (a + 1) & 0x7F,
            };
            return;
        }

        self.ops.push(Op::Command(byte));
        if byte & 0x80 != 0 {
            self.address = byte & 0x7F;
        } else if byte & 0x40 != 0 {
            // CGRAM address, unused
        } else if byte & 0x20 != 0 {
            self.four_bit = byte & 0x10 == 0;
        } else if byte & 0x10 != 0 {
            // Cursor/display shift, unused
        } else if byte & 0x08 != 0 {
            self.display_control = byte;
        } else if byte & 0x04 != 0 {
            self.entry_mode = byte;
        } else if byte & 0x02 != 0 {
            self.address = 0;
        } else if byte == 0x01 {
            self.ddram.fill(b' ');
            self.address = 0;
        }
    }
}

/// Test handle onto the simulated controller
#[derive(Clone)]
pub struct Sim(Rc<RefCell<State>>);

/// Line capability wired to a [`Sim`]
pub struct SimLines(Rc<RefCell<State>>);

/// Delay provider that records into a [`Sim`] instead of waiting
pub struct SimDelay(Rc<RefCell<State>>);

impl Sim {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(State::new())))
    }

    pub fn lines(&self) -> SimLines {
        SimLines(self.0.clone())
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay(self.0.clone())
    }

    pub fn level(&self, line: LineId) -> Level {
        self.0.borrow().levels[line as usize]
    }

    pub fn force_level(&self, line: LineId, level: Level) {
        self.0.borrow_mut().levels[line as usize] = level;
    }

    pub fn mode(&self, line: LineId) -> Option<PinMode> {
        self.0.borrow().modes[line as usize]
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn nibbles(&self) -> Vec<(bool, u8)> {
        self.0.borrow().nibbles.clone()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.0.borrow().ops.clone()
    }

    /// Data bytes written since the last `clear_log`
    pub fn data(&self) -> Vec<u8> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Data(b) => Some(b),
                Op::Command(_) => None,
            })
            .collect()
    }

    pub fn clear_log(&self) {
        let mut state = self.0.borrow_mut();
        state.events.clear();
        state.nibbles.clear();
        state.ops.clear();
    }

    pub fn four_bit(&self) -> bool {
        self.0.borrow().four_bit
    }

    pub fn address(&self) -> u8 {
        self.0.borrow().address
    }

    pub fn display_control(&self) -> u8 {
        self.0.borrow().display_control
    }

    pub fn entry_mode(&self) -> u8 {
        self.0.borrow().entry_mode
    }

    /// Text shown on a 0-based row
    pub fn row(&self, row: usize) -> String {
        let base = RowOffsetTable::HD44780_4X20.base(row) as usize;
        let state = self.0.borrow();
        state.ddram[base..base + COLS].iter().map(|&b| b as char).collect()
    }

    /// Every row, top to bottom
    pub fn screen(&self) -> Vec<String> {
        (0..ROWS).map(|row| self.row(row)).collect()
    }
}

impl Lines for SimLines {
    fn set_mode(&mut self, line: LineId, mode: PinMode) {
        let mut state = self.0.borrow_mut();
        state.events.push(Event::Mode(line, mode));
        state.modes[line as usize] = Some(mode);
    }

    fn set_level(&mut self, line: LineId, level: Level) {
        self.0.borrow_mut().set_level(line, level);
    }

    fn read_level(&mut self, line: LineId) -> Level {
        self.0.borrow().levels[line as usize]
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().events.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.0.borrow_mut().events.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().events.push(Event::DelayMs(ms));
    }
}

/// Initialised display with an empty log
pub fn ready_lcd(config: LcdConfig) -> (Lcd<SimLines, SimDelay>, Sim) {
    let sim = Sim::new();
    let mut lcd = Lcd::new(sim.lines(), sim.delay(), PINS, config).unwrap();
    lcd.init();
    sim.clear_log();
    (lcd, sim)
}

/// Lines of the shadow buffer as text
pub fn buffer_rows<L: Lines, D: DelayNs>(lcd: &Lcd<L, D>) -> Vec<String> {
    (0..ROWS)
        .map(|row| String::from(lcd.buffer().row_str(row).unwrap()))
        .collect()
}
