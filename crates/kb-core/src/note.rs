//! Note arithmetic for the keybed.
//!
//! The synth chip addresses a note as (octave, note-within-octave); the
//! engine works in absolute note numbers. These functions convert between
//! the two for the playable range `[NOTE_MIN, NOTE_MAX)`.

/// Lowest absolute note the engine will ever produce.
pub const NOTE_MIN: u8 = 0;

/// One past the highest absolute note (8 octaves of 12 semitones).
pub const NOTE_MAX: u8 = 96;

/// Semitones per octave.
pub const NOTES_PER_OCTAVE: u8 = 12;

/// Split an absolute note number into (octave, note-within-octave).
///
/// `split_note(36)` is `(3, 0)` (C3); `split_note(38)` is `(3, 2)` (D3).
/// For every `n` in `[0, 96)`, `octave * 12 + note == n` holds.
pub fn split_note(note: u8) -> (u8, u8) {
    let within = note % NOTES_PER_OCTAVE;
    let octave = note / NOTES_PER_OCTAVE;
    (octave, within)
}

/// Map a key offset from the current base pitch to a chip (octave, note).
///
/// The transposer keeps `base + offset` inside the playable range, so the
/// sum never wraps.
pub fn map_key(base: u8, offset: u8) -> (u8, u8) {
    split_note(base + offset)
}
