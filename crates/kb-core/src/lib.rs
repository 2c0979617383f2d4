//! Core types for the keybed voice engine.
//!
//! This crate defines the data model shared by the scan engine and the
//! host: the channel table with its allocation policy, note arithmetic,
//! the base-pitch transposer, and the patch (settings) vector.
//!
//! Designed to be `no_std` compatible; all containers are fixed-capacity.

#![cfg_attr(not(feature = "std"), no_std)]

mod channel;
mod note;
mod patch;
mod transpose;

pub use channel::{Channel, ChannelId, ChannelTable, MAX_CHANNELS};
pub use note::{map_key, split_note, NOTES_PER_OCTAVE, NOTE_MAX, NOTE_MIN};
pub use patch::Patch;
pub use transpose::BaseTransposer;

/// Number of playable keys, offsets `0..KEY_COUNT` from the base pitch.
pub const KEY_COUNT: u8 = 8;

/// Number of hardware synthesis channels on the chip.
pub const CHANNEL_COUNT: usize = 9;

/// Base pitch at power-on (C3).
pub const DEFAULT_BASE: u8 = 36;
