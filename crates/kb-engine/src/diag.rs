//! Diagnostic notifications.
//!
//! Advisory only: the engine never reads these back. The hardware build
//! sends them down the serial line; the host prints them.

use crate::input::Control;

/// One diagnostic notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagEvent {
    /// A key press was committed to a channel.
    KeyDown {
        key: u8,
        channel: u8,
        octave: u8,
        note: u8,
    },
    /// A key release freed its channel.
    KeyUp { key: u8, channel: u8 },
    /// A control read produced a new accepted value.
    SettingChanged { control: Control, value: u8 },
    /// The base pitch moved.
    BaseShifted { base: u8 },
}

/// Sink for diagnostic notifications.
pub trait DiagSink {
    fn emit(&mut self, event: DiagEvent);
}

/// Sink that drops everything.
pub struct NullDiag;

impl DiagSink for NullDiag {
    fn emit(&mut self, _event: DiagEvent) {}
}
