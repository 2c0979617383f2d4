//! Channel table: fixed-capacity registry of chip voice slots and the
//! key-to-channel allocation policy.

use heapless::Vec;

/// Identifier for a channel slot: its stable index in the table.
pub type ChannelId = usize;

/// Capacity bound of the channel table; actual channel count is set at
/// construction and never grows.
pub const MAX_CHANNELS: usize = 16;

/// One hardware synthesis voice slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Channel {
    /// Stable identity, equals the table index. Assigned once.
    pub id: u8,
    /// Key currently holding this channel; `None` = free.
    pub bound_key: Option<u8>,
    /// True while a note-on is in effect on this channel.
    pub active: bool,
}

/// Registry of channel slots with linear-scan lookup.
///
/// Invariants maintained through `bind`/`unbind`:
/// - at most one channel has `bound_key == Some(k)` for any key `k`;
/// - a channel with `active == true` always has a bound key.
#[derive(Clone, Debug)]
pub struct ChannelTable {
    channels: Vec<Channel, MAX_CHANNELS>,
}

impl ChannelTable {
    /// Create a table of `count` free channels (`count <= MAX_CHANNELS`).
    pub fn new(count: usize) -> Self {
        let mut channels = Vec::new();
        for id in 0..count.min(MAX_CHANNELS) {
            // Capacity checked by the min above.
            let _ = channels.push(Channel {
                id: id as u8,
                bound_key: None,
                active: false,
            });
        }
        Self { channels }
    }

    /// Resolve the channel to use for `key`. Pure lookup; never fails.
    ///
    /// Policy, in table order:
    /// 1. a channel already bound to `key` that has not yet sounded
    ///    (transitional state within a tick);
    /// 2. the lowest-index free channel (first fit — not round-robin);
    /// 3. channel 0 unconditionally when the table is exhausted. The
    ///    steal glitches whatever channel 0 is sounding, but the call
    ///    always returns a usable slot.
    pub fn resolve(&self, key: u8) -> ChannelId {
        if let Some(id) = self
            .channels
            .iter()
            .position(|c| c.bound_key == Some(key) && !c.active)
        {
            return id;
        }
        if let Some(id) = self
            .channels
            .iter()
            .position(|c| c.bound_key.is_none() && !c.active)
        {
            return id;
        }
        0
    }

    /// Is any channel currently bound to `key`?
    pub fn key_is_bound(&self, key: u8) -> bool {
        self.owner_of(key).is_some()
    }

    /// The channel currently bound to `key`, sounding or not.
    ///
    /// Unlike `resolve`, this never allocates: it only finds an existing
    /// binding, so the release path can free a sounding channel.
    pub fn owner_of(&self, key: u8) -> Option<ChannelId> {
        self.channels.iter().position(|c| c.bound_key == Some(key))
    }

    /// Bind `key` to the channel at `id` and mark it sounding.
    ///
    /// Any previous binding for `key` is cleared first, so the
    /// one-binding-per-key invariant holds at the table level even when
    /// the caller skips its own ownership check (the steal path rebinds
    /// a channel that way).
    pub fn bind(&mut self, id: ChannelId, key: u8) {
        if let Some(prev) = self.owner_of(key) {
            if prev != id {
                self.unbind(prev);
            }
        }
        if let Some(c) = self.channels.get_mut(id) {
            c.bound_key = Some(key);
            c.active = true;
        }
    }

    /// Free the channel at `id`: clears the binding and the active flag.
    pub fn unbind(&mut self, id: ChannelId) {
        if let Some(c) = self.channels.get_mut(id) {
            c.bound_key = None;
            c.active = false;
        }
    }

    /// Get a reference to a channel.
    pub fn get(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.get(id)
    }

    /// Get a mutable reference to a channel.
    pub fn get_mut(&mut self, id: ChannelId) -> Option<&mut Channel> {
        self.channels.get_mut(id)
    }

    /// All channels in table order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Number of channels in the table.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// True for an empty table (only possible with `new(0)`).
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channel ids that are not currently sounding, in table order.
    /// Settings changes are applied to these so a held note's timbre is
    /// not disturbed mid-play.
    pub fn idle_ids(&self) -> impl Iterator<Item = ChannelId> + '_ {
        self.channels
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.active)
            .map(|(id, _)| id)
    }
}
