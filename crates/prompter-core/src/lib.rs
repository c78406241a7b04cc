#![cfg_attr(not(test), no_std)]

//! Playback and narration-capture coordination for a word-paced teleprompter.
//!
//! The [`app::PlaybackController`] owns the countdown, scrolling and
//! elapsed-time schedules and drives a [`recording::RecordingSession`]. Every
//! other module is either a leaf it consumes ([`script`], [`input`],
//! [`settings`]) or a pure derivation of its state ([`projector`],
//! [`composer`], [`render`]).

pub mod app;
pub mod composer;
pub mod input;
pub mod observer;
pub mod projector;
pub mod recording;
pub mod render;
pub mod script;
pub mod settings;
