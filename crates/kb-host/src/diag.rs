//! Line-oriented diagnostics, one println per notification.

use kb_engine::{Control, DiagEvent, DiagSink};

fn control_name(control: Control) -> &'static str {
    match control {
        Control::Multiplier => "multiplier",
        Control::Attack => "attack",
        Control::Decay => "decay",
        Control::Sustain => "sustain",
        Control::Release => "release",
    }
}

/// Prints each diagnostic notification as one line on stdout.
pub struct StdoutDiag;

impl DiagSink for StdoutDiag {
    fn emit(&mut self, event: DiagEvent) {
        match event {
            DiagEvent::KeyDown {
                key,
                channel,
                octave,
                note,
            } => {
                println!("key {key} down  -> ch{channel} octave {octave} note {note}");
            }
            DiagEvent::KeyUp { key, channel } => {
                println!("key {key} up    -> ch{channel} freed");
            }
            DiagEvent::SettingChanged { control, value } => {
                println!("setting {} = {}", control_name(control), value);
            }
            DiagEvent::BaseShifted { base } => {
                println!("base -> {base}");
            }
        }
    }
}
