//! Patch: the settings vector programmed into idle channels.

/// Current synth settings, as small quantized parameters.
///
/// Lives for the whole process; updated from control reads and pushed to
/// channels that are not sounding. Tremolo and vibrato are fixed on for
/// this instrument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Patch {
    /// Carrier frequency multiplier (0-3 after quantization).
    pub multiplier: u8,
    /// Envelope attack rate.
    pub attack: u8,
    /// Envelope decay rate.
    pub decay: u8,
    /// Envelope sustain level.
    pub sustain: u8,
    /// Envelope release rate.
    pub release: u8,
    /// Amplitude modulation flag.
    pub tremolo: bool,
    /// Frequency modulation flag.
    pub vibrato: bool,
}

impl Patch {
    pub fn new() -> Self {
        Self {
            multiplier: 0,
            attack: 0,
            decay: 0,
            sustain: 0,
            release: 0,
            tremolo: true,
            vibrato: true,
        }
    }
}

impl Default for Patch {
    fn default() -> Self {
        Self::new()
    }
}
