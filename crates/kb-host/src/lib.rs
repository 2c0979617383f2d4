//! Headless host for the keybed voice engine.
//!
//! Owns the scan engine and a driver, and steps them through the
//! fixed-cadence tick loop. Provides simulated input sources, a
//! register-logging driver, and a line-oriented diagnostics sink so a
//! full session can run without hardware.

mod diag;
mod script;
mod sim;

use std::time::Duration;

use kb_core::{CHANNEL_COUNT, DEFAULT_BASE, KEY_COUNT};
use kb_engine::{ControlSource, DiagSink, KeySource, SettingsDistributor, SynthDriver, VoiceManager};

pub use diag::StdoutDiag;
pub use script::{parse_script, run_script, Command, ScriptError};
pub use sim::{RegisterLogDriver, SimInput};

/// Pacing delay between ticks. Not a real-time scheduler, just a throttle.
pub const TICK_DELAY: Duration = Duration::from_millis(20);

/// The whole instrument, minus the hardware: scan engine, settings
/// distribution, and the driver they feed.
///
/// Single-owner by construction — one `Keybed`, one caller, no locking.
pub struct Keybed<D: SynthDriver, S: DiagSink> {
    manager: VoiceManager,
    distributor: SettingsDistributor,
    driver: D,
    diag: S,
}

impl<D: SynthDriver, S: DiagSink> Keybed<D, S> {
    /// Create a keybed with the standard channel/key counts and base pitch.
    pub fn new(driver: D, diag: S) -> Self {
        Self::with_config(CHANNEL_COUNT, KEY_COUNT, DEFAULT_BASE, driver, diag)
    }

    /// Create a keybed with explicit counts (tests use smaller tables).
    pub fn with_config(channels: usize, keys: u8, base: u8, driver: D, diag: S) -> Self {
        Self {
            manager: VoiceManager::new(channels, keys, base),
            distributor: SettingsDistributor::new(),
            driver,
            diag,
        }
    }

    /// Run one full tick: settings distribution first, then transpose
    /// sampling, then the key scan. The ordering guarantees a settings
    /// change can never retroactively affect a note triggered earlier in
    /// the same tick.
    pub fn tick<I>(&mut self, input: &mut I)
    where
        I: KeySource + ControlSource,
    {
        self.distributor
            .distribute(input, self.manager.table(), &mut self.driver, &mut self.diag);
        self.manager.scan_transpose(input, &mut self.diag);
        self.manager.scan_keys(input, &mut self.driver, &mut self.diag);
    }

    /// Run `ticks` ticks, sleeping `delay` between them.
    pub fn run_for<I>(&mut self, input: &mut I, ticks: u64, delay: Duration)
    where
        I: KeySource + ControlSource,
    {
        for _ in 0..ticks {
            self.tick(input);
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }
    }

    /// The scan engine (for inspection).
    pub fn manager(&self) -> &VoiceManager {
        &self.manager
    }

    /// The driver (for inspection in tests).
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The current accepted settings.
    pub fn patch(&self) -> &kb_core::Patch {
        self.distributor.patch()
    }
}
