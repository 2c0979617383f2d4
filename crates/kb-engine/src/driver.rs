//! Synth chip driver seam.

/// Which FM operator of a channel a setting targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoicePart {
    Modulator,
    Carrier,
}

/// Trait for the external synthesis chip driver.
///
/// The engine is oblivious to the bus protocol and register layout; it
/// only states which parameter changes and which channel sounds. All
/// channel arguments are table ids in `0..CHANNEL_COUNT`.
pub trait SynthDriver {
    /// Enable/disable amplitude modulation on a channel.
    fn set_tremolo(&mut self, channel: u8, on: bool);

    /// Enable/disable frequency modulation on a channel.
    fn set_vibrato(&mut self, channel: u8, on: bool);

    /// Set the frequency multiplier of one operator.
    fn set_multiplier(&mut self, channel: u8, part: VoicePart, value: u8);

    /// Set the envelope attack rate of one operator.
    fn set_attack(&mut self, channel: u8, part: VoicePart, value: u8);

    /// Set the envelope decay rate of one operator.
    fn set_decay(&mut self, channel: u8, part: VoicePart, value: u8);

    /// Set the envelope sustain level of one operator.
    fn set_sustain(&mut self, channel: u8, part: VoicePart, value: u8);

    /// Set the envelope release rate of one operator.
    fn set_release(&mut self, channel: u8, part: VoicePart, value: u8);

    /// Key a note on: start sounding (octave, note) on a channel.
    fn play_note(&mut self, channel: u8, octave: u8, note: u8);

    /// Key a note off: begin the channel's release phase.
    fn stop_note(&mut self, channel: u8);
}
