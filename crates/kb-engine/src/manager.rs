//! Per-tick key scan: resolves channels, commits bindings, drives the chip.

use kb_core::{map_key, BaseTransposer, ChannelTable};

use crate::diag::{DiagEvent, DiagSink};
use crate::driver::SynthDriver;
use crate::input::KeySource;

/// Orchestrates one scan pass per tick over all keys.
///
/// Owns the channel table and the base transposer; all binding mutation
/// happens here, after resolution. Edge detection is level-based and
/// stateless: the `bound_key` field doubles as "is this key already
/// sounding" and "which key owns this channel".
pub struct VoiceManager {
    table: ChannelTable,
    transposer: BaseTransposer,
    key_count: u8,
}

impl VoiceManager {
    /// Create a manager for `channel_count` channels and `key_count` keys,
    /// with the base pitch at `base`.
    pub fn new(channel_count: usize, key_count: u8, base: u8) -> Self {
        Self {
            table: ChannelTable::new(channel_count),
            transposer: BaseTransposer::new(base, key_count),
            key_count,
        }
    }

    /// The channel table (for settings distribution and inspection).
    pub fn table(&self) -> &ChannelTable {
        &self.table
    }

    /// Current base pitch.
    pub fn base(&self) -> u8 {
        self.transposer.base()
    }

    /// Sample the two transpose inputs and shift the base accordingly.
    ///
    /// Level-based like the key scan: holding a transpose input shifts
    /// one semitone per tick until the bound clamps it.
    pub fn scan_transpose<K, S>(&mut self, keys: &mut K, diag: &mut S)
    where
        K: KeySource,
        S: DiagSink,
    {
        if keys.transpose_up() && self.transposer.shift(1) {
            diag.emit(DiagEvent::BaseShifted {
                base: self.transposer.base(),
            });
        }
        if keys.transpose_down() && self.transposer.shift(-1) {
            diag.emit(DiagEvent::BaseShifted {
                base: self.transposer.base(),
            });
        }
    }

    /// Scan all keys once: commit press edges, free release edges.
    ///
    /// A press is committed only when no channel already holds the key,
    /// so a held key does not re-trigger. A release frees the owning
    /// channel and keys the note off; a key that was never bound is a
    /// no-op either way.
    pub fn scan_keys<K, D, S>(&mut self, keys: &mut K, driver: &mut D, diag: &mut S)
    where
        K: KeySource,
        D: SynthDriver,
        S: DiagSink,
    {
        for key in 0..self.key_count {
            let pressed = keys.key_pressed(key);
            if pressed {
                if !self.table.key_is_bound(key) {
                    let id = self.table.resolve(key);
                    self.table.bind(id, key);
                    let (octave, note) = map_key(self.transposer.base(), key);
                    driver.play_note(id as u8, octave, note);
                    diag.emit(DiagEvent::KeyDown {
                        key,
                        channel: id as u8,
                        octave,
                        note,
                    });
                }
            } else if let Some(id) = self.table.owner_of(key) {
                self.table.unbind(id);
                driver.stop_note(id as u8);
                diag.emit(DiagEvent::KeyUp {
                    key,
                    channel: id as u8,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::NullDiag;
    use crate::driver::VoicePart;

    /// Key source with directly settable levels.
    struct TestKeys {
        levels: [bool; 16],
        up: bool,
        down: bool,
    }

    impl TestKeys {
        fn new() -> Self {
            Self {
                levels: [false; 16],
                up: false,
                down: false,
            }
        }

        fn press(&mut self, key: u8) {
            self.levels[key as usize] = true;
        }

        fn release(&mut self, key: u8) {
            self.levels[key as usize] = false;
        }
    }

    impl KeySource for TestKeys {
        fn key_pressed(&mut self, key: u8) -> bool {
            self.levels[key as usize]
        }

        fn transpose_up(&mut self) -> bool {
            self.up
        }

        fn transpose_down(&mut self) -> bool {
            self.down
        }
    }

    /// Driver that records every call.
    #[derive(Default)]
    struct TestDriver {
        played: Vec<(u8, u8, u8)>,
        stopped: Vec<u8>,
    }

    impl SynthDriver for TestDriver {
        fn set_tremolo(&mut self, _channel: u8, _on: bool) {}
        fn set_vibrato(&mut self, _channel: u8, _on: bool) {}
        fn set_multiplier(&mut self, _channel: u8, _part: VoicePart, _value: u8) {}
        fn set_attack(&mut self, _channel: u8, _part: VoicePart, _value: u8) {}
        fn set_decay(&mut self, _channel: u8, _part: VoicePart, _value: u8) {}
        fn set_sustain(&mut self, _channel: u8, _part: VoicePart, _value: u8) {}
        fn set_release(&mut self, _channel: u8, _part: VoicePart, _value: u8) {}

        fn play_note(&mut self, channel: u8, octave: u8, note: u8) {
            self.played.push((channel, octave, note));
        }

        fn stop_note(&mut self, channel: u8) {
            self.stopped.push(channel);
        }
    }

    fn scan(mgr: &mut VoiceManager, keys: &mut TestKeys, driver: &mut TestDriver) {
        mgr.scan_transpose(keys, &mut NullDiag);
        mgr.scan_keys(keys, driver, &mut NullDiag);
    }

    #[test]
    fn press_binds_lowest_channel_and_plays() {
        let mut mgr = VoiceManager::new(8, 8, 36);
        let mut keys = TestKeys::new();
        let mut driver = TestDriver::default();

        keys.press(0);
        scan(&mut mgr, &mut keys, &mut driver);

        assert_eq!(driver.played, [(0, 3, 0)]);
        assert_eq!(mgr.table().get(0).unwrap().bound_key, Some(0));
        assert!(mgr.table().get(0).unwrap().active);
    }

    #[test]
    fn held_key_does_not_retrigger() {
        let mut mgr = VoiceManager::new(8, 8, 36);
        let mut keys = TestKeys::new();
        let mut driver = TestDriver::default();

        keys.press(0);
        scan(&mut mgr, &mut keys, &mut driver);
        scan(&mut mgr, &mut keys, &mut driver);
        scan(&mut mgr, &mut keys, &mut driver);

        assert_eq!(driver.played.len(), 1);
    }

    #[test]
    fn second_key_takes_next_free_channel() {
        let mut mgr = VoiceManager::new(8, 8, 36);
        let mut keys = TestKeys::new();
        let mut driver = TestDriver::default();

        keys.press(0);
        scan(&mut mgr, &mut keys, &mut driver);
        keys.press(1);
        scan(&mut mgr, &mut keys, &mut driver);

        assert_eq!(driver.played, [(0, 3, 0), (1, 3, 1)]);
    }

    #[test]
    fn release_frees_channel_and_stops_note() {
        let mut mgr = VoiceManager::new(8, 8, 36);
        let mut keys = TestKeys::new();
        let mut driver = TestDriver::default();

        keys.press(0);
        scan(&mut mgr, &mut keys, &mut driver);
        keys.release(0);
        scan(&mut mgr, &mut keys, &mut driver);

        assert_eq!(driver.stopped, [0]);
        assert_eq!(mgr.table().get(0).unwrap().bound_key, None);
        assert!(!mgr.table().get(0).unwrap().active);
    }

    #[test]
    fn released_channel_is_reused_first() {
        let mut mgr = VoiceManager::new(8, 8, 36);
        let mut keys = TestKeys::new();
        let mut driver = TestDriver::default();

        keys.press(0);
        keys.press(1);
        scan(&mut mgr, &mut keys, &mut driver);
        keys.release(0);
        scan(&mut mgr, &mut keys, &mut driver);
        keys.press(0);
        scan(&mut mgr, &mut keys, &mut driver);

        // Channel 0 again, not channel 2.
        assert_eq!(driver.played.last(), Some(&(0, 3, 0)));
    }

    #[test]
    fn exhausted_table_steals_channel_zero() {
        let mut mgr = VoiceManager::new(4, 8, 36);
        let mut keys = TestKeys::new();
        let mut driver = TestDriver::default();

        for key in 0..4 {
            keys.press(key);
        }
        scan(&mut mgr, &mut keys, &mut driver);
        keys.press(4);
        scan(&mut mgr, &mut keys, &mut driver);

        // Fifth key lands on channel 0 even though key 0 held it.
        assert_eq!(driver.played.last(), Some(&(0, 3, 4)));
        assert_eq!(mgr.table().get(0).unwrap().bound_key, Some(4));
    }

    #[test]
    fn no_two_channels_bound_to_same_key() {
        let mut mgr = VoiceManager::new(8, 8, 36);
        let mut keys = TestKeys::new();
        let mut driver = TestDriver::default();

        keys.press(3);
        for _ in 0..5 {
            scan(&mut mgr, &mut keys, &mut driver);
        }

        let bound = mgr
            .table()
            .channels()
            .iter()
            .filter(|c| c.bound_key == Some(3))
            .count();
        assert_eq!(bound, 1);
    }

    #[test]
    fn transpose_up_raises_next_note() {
        let mut mgr = VoiceManager::new(8, 8, 36);
        let mut keys = TestKeys::new();
        let mut driver = TestDriver::default();

        keys.up = true;
        scan(&mut mgr, &mut keys, &mut driver);
        keys.up = false;
        assert_eq!(mgr.base(), 37);

        keys.press(0);
        scan(&mut mgr, &mut keys, &mut driver);
        // C#3: octave 3, note 1.
        assert_eq!(driver.played, [(0, 3, 1)]);
    }

    #[test]
    fn held_transpose_shifts_every_tick_until_clamped() {
        let mut mgr = VoiceManager::new(8, 8, 36);
        let mut keys = TestKeys::new();
        let mut driver = TestDriver::default();

        keys.down = true;
        for _ in 0..50 {
            scan(&mut mgr, &mut keys, &mut driver);
        }
        assert_eq!(mgr.base(), 0);
    }

    #[test]
    fn release_of_unbound_key_is_a_no_op() {
        let mut mgr = VoiceManager::new(8, 8, 36);
        let mut keys = TestKeys::new();
        let mut driver = TestDriver::default();

        scan(&mut mgr, &mut keys, &mut driver);
        assert!(driver.played.is_empty());
        assert!(driver.stopped.is_empty());
    }
}
