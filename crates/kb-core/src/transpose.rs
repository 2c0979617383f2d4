//! Base-pitch transposer.

use crate::note::{NOTE_MAX, NOTE_MIN};

/// Holds the current base pitch and applies bounded semitone shifts.
///
/// The base is kept in `[NOTE_MIN, NOTE_MAX - key_span)` so that the
/// highest key offset (`key_span - 1`) still resolves to a note below
/// `NOTE_MAX`. Out-of-range shifts are silent no-ops, never errors.
#[derive(Clone, Copy, Debug)]
pub struct BaseTransposer {
    base: u8,
    key_span: u8,
}

impl BaseTransposer {
    /// Create a transposer for a keyboard of `key_span` keys.
    pub fn new(base: u8, key_span: u8) -> Self {
        debug_assert!(base < NOTE_MAX - key_span);
        Self { base, key_span }
    }

    /// Current base pitch.
    pub fn base(&self) -> u8 {
        self.base
    }

    /// Shift the base by `delta` semitones (±1 in practice).
    ///
    /// Returns true if the shift was applied, false if it would have left
    /// the valid range and was dropped.
    pub fn shift(&mut self, delta: i8) -> bool {
        let shifted = self.base as i16 + delta as i16;
        let limit = (NOTE_MAX - self.key_span) as i16;
        if shifted >= NOTE_MIN as i16 && shifted < limit {
            self.base = shifted as u8;
            true
        } else {
            false
        }
    }
}
