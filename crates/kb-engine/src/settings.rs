//! Settings distribution: sample the analog controls, detect changes,
//! and program idle channels.

use kb_core::{ChannelTable, Patch};

use crate::diag::{DiagEvent, DiagSink};
use crate::driver::{SynthDriver, VoicePart};
use crate::input::{Control, ControlSource, CONTROLS};

/// Raw 0-255 readings quantize down to small parameter steps.
const RAW_DIVISOR: u8 = 64;

fn quantize(raw: u8) -> u8 {
    raw / RAW_DIVISOR
}

/// Samples the five setting controls once per tick and pushes the
/// resulting patch to every channel that is not sounding.
///
/// A raw reading of 0 never changes a stored value, even when its
/// quantized value would differ: a floating or disconnected input reads
/// 0 and must not generate spurious updates.
pub struct SettingsDistributor {
    patch: Patch,
}

impl SettingsDistributor {
    pub fn new() -> Self {
        Self {
            patch: Patch::new(),
        }
    }

    /// The current accepted settings.
    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    fn stored(&self, control: Control) -> u8 {
        match control {
            Control::Multiplier => self.patch.multiplier,
            Control::Attack => self.patch.attack,
            Control::Decay => self.patch.decay,
            Control::Sustain => self.patch.sustain,
            Control::Release => self.patch.release,
        }
    }

    fn store(&mut self, control: Control, value: u8) {
        match control {
            Control::Multiplier => self.patch.multiplier = value,
            Control::Attack => self.patch.attack = value,
            Control::Decay => self.patch.decay = value,
            Control::Sustain => self.patch.sustain = value,
            Control::Release => self.patch.release = value,
        }
    }

    /// One distribution pass: read controls, then apply the patch to all
    /// idle channels. Runs before the key scan each tick, so a change
    /// never affects a note triggered earlier in the same tick.
    pub fn distribute<C, D, S>(
        &mut self,
        controls: &mut C,
        table: &ChannelTable,
        driver: &mut D,
        diag: &mut S,
    ) where
        C: ControlSource,
        D: SynthDriver,
        S: DiagSink,
    {
        for control in CONTROLS {
            let raw = controls.read(control);
            let value = quantize(raw);
            if raw != 0 && value != self.stored(control) {
                self.store(control, value);
                diag.emit(DiagEvent::SettingChanged { control, value });
            }
        }

        for id in table.idle_ids() {
            let ch = id as u8;
            driver.set_tremolo(ch, self.patch.tremolo);
            driver.set_vibrato(ch, self.patch.vibrato);
            driver.set_multiplier(ch, VoicePart::Carrier, self.patch.multiplier);
            driver.set_attack(ch, VoicePart::Carrier, self.patch.attack);
            driver.set_decay(ch, VoicePart::Carrier, self.patch.decay);
            driver.set_sustain(ch, VoicePart::Carrier, self.patch.sustain);
            driver.set_release(ch, VoicePart::Carrier, self.patch.release);
        }
    }
}

impl Default for SettingsDistributor {
    fn default() -> Self {
        Self::new()
    }
}
