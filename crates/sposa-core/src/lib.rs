//! Playback engine for the sposa RSVP reader.
//!
//! Everything in this crate is free of I/O: time arrives as `now_ms`
//! arguments, commands arrive through [`input::InputProvider`] or direct
//! calls on [`scheduler::Scheduler`], and output leaves as
//! [`render::PlaybackEvent`] values.

pub mod app;
pub mod content;
pub mod error;
pub mod input;
pub mod pivot;
pub mod render;
pub mod scheduler;
pub mod text_policy;
pub mod timing;

pub use app::{PlaybackStatus, Player, ReaderConfig, Schedule};
pub use content::{Document, Punctuation, Word};
pub use error::EngineError;
pub use input::{Command, JumpDirection, SpeedChange};
pub use render::{PlaybackEvent, Reveal, StatusFrame};
pub use scheduler::{FireOutcome, PendingTick, Scheduler};
