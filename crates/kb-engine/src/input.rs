//! Input source seams: key levels and analog controls.

/// One of the five analog setting controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Multiplier,
    Attack,
    Decay,
    Sustain,
    Release,
}

/// All controls, in distribution order.
pub const CONTROLS: [Control; 5] = [
    Control::Multiplier,
    Control::Attack,
    Control::Decay,
    Control::Sustain,
    Control::Release,
];

/// Trait for the key/transpose input source.
///
/// Levels are sampled fresh once per tick; no debouncing, no interrupt
/// machinery. The engine never stores previous levels — re-trigger
/// suppression comes entirely from the channel bindings.
pub trait KeySource {
    /// Current logical level of key `key` (true = pressed).
    fn key_pressed(&mut self, key: u8) -> bool;

    /// Is the transpose-up input asserted this tick?
    fn transpose_up(&mut self) -> bool;

    /// Is the transpose-down input asserted this tick?
    fn transpose_down(&mut self) -> bool;
}

/// Trait for the analog settings source. Raw readings are 0-255.
pub trait ControlSource {
    fn read(&mut self, control: Control) -> u8;
}
