//! Playback state machine: position, speed and run/pause status.

use heapless::Deque;
use log::{debug, warn};

use crate::{
    content::{Document, Word},
    error::EngineError,
    input::{Command, JumpDirection, SpeedChange},
    pivot::pivot_index,
    render::{PlaybackEvent, Reveal, StatusFrame},
    timing::DelayModel,
};

const OUTBOX_CAPACITY: usize = 16;
/// Speeds are kept on a 0.001 grid so repeated steps do not drift.
const SPEED_PRECISION: f32 = 1_000.0;
const SPEED_LIMITS: (f32, f32) = (0.01, 10.0);
const MAX_FACTOR: f32 = 10.0;
const MAX_LEAD_IN_MS: u64 = 10_000;

/// Constants the engine is built with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReaderConfig {
    /// Words per minute at speed 1.0. 244 wpm gives ~245.9 ms per word.
    pub base_wpm: u16,
    pub min_speed: f32,
    pub max_speed: f32,
    pub speed_step: f32,
    pub sentence_end_factor: f32,
    pub clause_factor: f32,
    /// Words with a longer core get a length bonus.
    pub long_word_chars: usize,
    pub long_word_bonus: f32,
    /// Minimum display time of the first word, so reading does not start
    /// mid-blink. Zero disables the hold.
    pub lead_in_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            base_wpm: 244,
            min_speed: 0.1,
            max_speed: 2.8,
            speed_step: 0.1,
            sentence_end_factor: 2.0,
            clause_factor: 1.5,
            long_word_chars: 8,
            long_word_bonus: 0.1,
            lead_in_ms: 0,
        }
    }
}

impl ReaderConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.base_wpm == 0 {
            return Err(EngineError::InvalidConfig("base_wpm must be positive"));
        }
        if !(self.min_speed.is_finite() && self.max_speed.is_finite()) || self.min_speed <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "speed bounds must be finite and positive",
            ));
        }
        if self.min_speed < SPEED_LIMITS.0 || self.max_speed > SPEED_LIMITS.1 {
            return Err(EngineError::InvalidConfig(
                "speed bounds must lie within 0.01..=10.0",
            ));
        }
        if self.min_speed > self.max_speed {
            return Err(EngineError::InvalidConfig("min_speed exceeds max_speed"));
        }
        if !self.speed_step.is_finite() || self.speed_step < 1.0 / SPEED_PRECISION {
            return Err(EngineError::InvalidConfig("speed_step must be at least 0.001"));
        }
        if !(self.clause_factor.is_finite() && self.sentence_end_factor.is_finite())
            || self.clause_factor < 1.0
            || self.sentence_end_factor > MAX_FACTOR
        {
            return Err(EngineError::InvalidConfig(
                "punctuation factors must lie within 1.0..=10.0",
            ));
        }
        if self.clause_factor > self.sentence_end_factor {
            return Err(EngineError::InvalidConfig(
                "clause_factor exceeds sentence_end_factor",
            ));
        }
        if !(0.0..=MAX_FACTOR).contains(&self.long_word_bonus) {
            return Err(EngineError::InvalidConfig(
                "long_word_bonus must lie within 0.0..=10.0",
            ));
        }
        if self.lead_in_ms > MAX_LEAD_IN_MS {
            return Err(EngineError::InvalidConfig("lead_in_ms must not exceed 10s"));
        }
        Ok(())
    }

    fn clamp_speed(&self, speed: f32) -> f32 {
        ((speed * SPEED_PRECISION).round() / SPEED_PRECISION).clamp(self.min_speed, self.max_speed)
    }
}

/// Externally visible playback state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackStatus {
    /// Suspended, never started.
    Idle,
    Running,
    /// Suspended after having run.
    Paused,
    /// Position is at the end of the document.
    Finished,
    /// Quit; every command is ignored.
    Closed,
}

impl PlaybackStatus {
    pub fn is_suspended(self) -> bool {
        matches!(self, Self::Idle | Self::Paused)
    }
}

/// What the scheduler must do with its timer slot after a transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Schedule {
    /// Arm the next tick `delay_ms` from now.
    Arm { generation: u64, delay_ms: u64 },
    /// Re-arm the next tick `delay_ms` after the current word was shown.
    Rearm { generation: u64, delay_ms: u64 },
    /// Drop any pending tick.
    Disarm,
    /// The command was a no-op; the slot stays as it is.
    Unchanged,
}

/// Owner of the single mutable playback state.
///
/// Every state-changing call bumps [`Player::generation`] and queues the
/// resulting [`PlaybackEvent`]s; the caller drains them with
/// [`Player::pop_event`].
pub struct Player {
    document: Document,
    config: ReaderConfig,
    delays: DelayModel,
    position: usize,
    speed: f32,
    running: bool,
    started: bool,
    closed: bool,
    generation: u64,
    outbox: Deque<PlaybackEvent, OUTBOX_CAPACITY>,
}

impl Player {
    pub fn new(document: Document, config: ReaderConfig) -> Result<Self, EngineError> {
        config.validate()?;

        debug!(
            "player: new words={} base_wpm={} speed_bounds={}..={}",
            document.len(),
            config.base_wpm,
            config.min_speed,
            config.max_speed
        );

        Ok(Self {
            delays: DelayModel::new(&config),
            speed: config.clamp_speed(1.0),
            document,
            config,
            position: 0,
            running: false,
            started: false,
            closed: false,
            generation: 0,
            outbox: Deque::new(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn delay_model(&self) -> &DelayModel {
        &self.delays
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.document.len()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.document.word(self.position)
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.closed {
            PlaybackStatus::Closed
        } else if self.position >= self.document.len() {
            PlaybackStatus::Finished
        } else if self.running {
            PlaybackStatus::Running
        } else if self.started {
            PlaybackStatus::Paused
        } else {
            PlaybackStatus::Idle
        }
    }

    pub fn apply(&mut self, command: Command) -> Schedule {
        match command {
            Command::TogglePause => self.toggle_pause(),
            Command::Speed(change) => self.set_speed(change),
            Command::Jump(direction) => self.jump_sentence(direction),
            Command::Restart => self.restart(),
            Command::Quit => self.quit(),
        }
    }

    pub fn pop_event(&mut self) -> Option<PlaybackEvent> {
        self.outbox.pop_front()
    }

    pub fn has_events(&self) -> bool {
        !self.outbox.is_empty()
    }
}

include!("runtime.rs");
include!("navigation.rs");
include!("view.rs");
