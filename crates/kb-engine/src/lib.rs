//! Per-tick scan engine for the keybed voice allocator.
//!
//! Polls key and control inputs, resolves channels through the core
//! allocation policy, and drives the external synth chip through the
//! `SynthDriver` seam.

#![cfg_attr(not(feature = "std"), no_std)]

mod diag;
mod driver;
mod input;
mod manager;
mod settings;

pub use diag::{DiagEvent, DiagSink, NullDiag};
pub use driver::{SynthDriver, VoicePart};
pub use input::{Control, ControlSource, KeySource, CONTROLS};
pub use manager::VoiceManager;
pub use settings::SettingsDistributor;
