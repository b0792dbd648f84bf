//! View models emitted by the engine for the rendering layer.

use crate::{app::PlaybackStatus, content::Word};

/// A word has become the displayed word.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub word: Word,
    /// Char offset of the fixation point in `word`.
    pub pivot: usize,
    pub position: usize,
    pub total: usize,
    pub speed: f32,
    pub status: PlaybackStatus,
}

/// Engine state changed without a new word: speed, pause, or end of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusFrame {
    pub position: usize,
    pub total: usize,
    pub speed: f32,
    pub status: PlaybackStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackEvent {
    Reveal(Reveal),
    Status(StatusFrame),
    /// The engine quit; nothing follows.
    Closed,
}

impl PlaybackEvent {
    pub fn status(&self) -> PlaybackStatus {
        match self {
            Self::Reveal(reveal) => reveal.status,
            Self::Status(frame) => frame.status,
            Self::Closed => PlaybackStatus::Closed,
        }
    }

    /// `(position, total)` for progress display.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self {
            Self::Reveal(reveal) => Some((reveal.position, reveal.total)),
            Self::Status(frame) => Some((frame.position, frame.total)),
            Self::Closed => None,
        }
    }

    pub fn speed(&self) -> Option<f32> {
        match self {
            Self::Reveal(reveal) => Some(reveal.speed),
            Self::Status(frame) => Some(frame.speed),
            Self::Closed => None,
        }
    }
}
