//! 32-bit Galois linear-feedback shift register.
//!
//! Each step shifts the register right by one and, when the bit shifted out
//! was set, XORs the tap mask back in. The output bit of a step is the low
//! bit of the new register.

use log::{trace, warn};

pub const REGISTER_WIDTH: u32 = u32::BITS;
pub const DEFAULT_SEED: u32 = 1;
pub const DEFAULT_TAPS: u32 = 0x8020_0003;
pub const DEFAULT_CYCLES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lfsr {
    state: u32,
    taps: u32,
}

impl Lfsr {
    /// Loads `seed` into the register.
    ///
    /// A zero seed is accepted, but zero is an absorbing state: every step
    /// afterwards outputs 0.
    pub fn new(seed: u32, taps: u32) -> Self {
        Self { state: seed, taps }
    }

    /// Advances the register once and returns the new low bit.
    pub fn step(&mut self) -> u8 {
        let feedback = if self.state & 1 == 1 { self.taps } else { 0 };
        self.state = (self.state >> 1) ^ feedback;
        trace!("state {:#010x}", self.state);

        (self.state & 1) as u8
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn taps(&self) -> u32 {
        self.taps
    }

    pub fn is_degenerate(&self) -> bool {
        self.state == 0
    }

    /// Steps `cycles` times from the current state and collects the output
    /// bits. The register keeps its final state, so runs can be chained.
    pub fn run(&mut self, cycles: usize) -> Vec<u8> {
        let bits: Vec<u8> = self.by_ref().take(cycles).collect();

        if self.is_degenerate() && cycles > 0 {
            warn!("register settled at zero after {} cycles", cycles);
        }

        bits
    }
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, DEFAULT_TAPS)
    }
}

// Never ends; bound it with `take`.
impl Iterator for Lfsr {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.step())
    }
}

/// Runs a fresh register for `cycles` steps and collects the output bits.
///
/// `generate(0, taps, n)` returns `n` zeros for any `taps`.
pub fn generate(seed: u32, taps: u32, cycles: usize) -> Vec<u8> {
    Lfsr::new(seed, taps).run(cycles)
}
