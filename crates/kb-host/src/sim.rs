//! Simulated inputs and a register-logging driver for headless runs.

use kb_engine::{Control, ControlSource, KeySource, SynthDriver, VoicePart};

const SIM_KEYS: usize = 16;

fn control_index(control: Control) -> usize {
    match control {
        Control::Multiplier => 0,
        Control::Attack => 1,
        Control::Decay => 2,
        Control::Sustain => 3,
        Control::Release => 4,
    }
}

/// Input source with directly settable key levels, transpose levels, and
/// raw control values. Stands in for the pin-scanning hardware layer.
pub struct SimInput {
    keys: [bool; SIM_KEYS],
    up: bool,
    down: bool,
    controls: [u8; 5],
}

impl SimInput {
    pub fn new() -> Self {
        Self {
            keys: [false; SIM_KEYS],
            up: false,
            down: false,
            controls: [0; 5],
        }
    }

    /// Set a key's logical level.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        if let Some(level) = self.keys.get_mut(key as usize) {
            *level = pressed;
        }
    }

    /// Set the transpose input levels (up, down).
    pub fn set_transpose(&mut self, up: bool, down: bool) {
        self.up = up;
        self.down = down;
    }

    /// Set a control's raw 0-255 reading.
    pub fn set_control(&mut self, control: Control, raw: u8) {
        self.controls[control_index(control)] = raw;
    }
}

impl Default for SimInput {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for SimInput {
    fn key_pressed(&mut self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }

    fn transpose_up(&mut self) -> bool {
        self.up
    }

    fn transpose_down(&mut self) -> bool {
        self.down
    }
}

impl ControlSource for SimInput {
    fn read(&mut self, control: Control) -> u8 {
        self.controls[control_index(control)]
    }
}

fn part_name(part: VoicePart) -> &'static str {
    match part {
        VoicePart::Modulator => "mod",
        VoicePart::Carrier => "car",
    }
}

/// Driver that logs chip operations as text lines instead of bus writes.
///
/// Note on/off is always printed; the per-tick parameter refresh of idle
/// channels is printed only in verbose mode, because it repeats every
/// tick by design.
pub struct RegisterLogDriver {
    verbose: bool,
}

impl RegisterLogDriver {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }

    fn param(&self, channel: u8, part: VoicePart, name: &str, value: u8) {
        if self.verbose {
            println!("  ch{channel} {} {name} = {value}", part_name(part));
        }
    }
}

impl Default for RegisterLogDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthDriver for RegisterLogDriver {
    fn set_tremolo(&mut self, channel: u8, on: bool) {
        if self.verbose {
            println!("  ch{channel} tremolo = {on}");
        }
    }

    fn set_vibrato(&mut self, channel: u8, on: bool) {
        if self.verbose {
            println!("  ch{channel} vibrato = {on}");
        }
    }

    fn set_multiplier(&mut self, channel: u8, part: VoicePart, value: u8) {
        self.param(channel, part, "multiplier", value);
    }

    fn set_attack(&mut self, channel: u8, part: VoicePart, value: u8) {
        self.param(channel, part, "attack", value);
    }

    fn set_decay(&mut self, channel: u8, part: VoicePart, value: u8) {
        self.param(channel, part, "decay", value);
    }

    fn set_sustain(&mut self, channel: u8, part: VoicePart, value: u8) {
        self.param(channel, part, "sustain", value);
    }

    fn set_release(&mut self, channel: u8, part: VoicePart, value: u8) {
        self.param(channel, part, "release", value);
    }

    fn play_note(&mut self, channel: u8, octave: u8, note: u8) {
        println!("  ch{channel} note on  octave={octave} note={note}");
    }

    fn stop_note(&mut self, channel: u8) {
        println!("  ch{channel} note off");
    }
}
