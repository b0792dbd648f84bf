//! Single-slot, generation-stamped tick scheduling.
//!
//! At most one "reveal next word" tick is pending at a time. Each tick carries
//! the player generation captured when it was armed; a tick whose generation
//! no longer matches is stale and firing it does nothing. Replacing or
//! clearing the slot is how a driver learns it may cancel its timer; the
//! generation check is what keeps a late timer from moving the position.

use log::{debug, trace};

use crate::{
    app::{PlaybackStatus, Player, ReaderConfig, Schedule},
    content::Document,
    error::EngineError,
    input::{Command, InputProvider},
    render::PlaybackEvent,
};

/// The armed tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PendingTick {
    pub generation: u64,
    /// When the current word went on screen.
    pub shown_at_ms: u64,
    pub due_ms: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FireOutcome {
    Advanced,
    /// The tick was armed under an older generation and was discarded.
    Stale,
}

/// Drives a [`Player`] forward in time from an external clock.
pub struct Scheduler {
    player: Player,
    slot: Option<PendingTick>,
}

impl Scheduler {
    pub fn new(player: Player) -> Self {
        Self { player, slot: None }
    }

    pub fn from_document(document: Document, config: ReaderConfig) -> Result<Self, EngineError> {
        Player::new(document, config).map(Self::new)
    }

    /// Queue the initial frame. An empty document queues nothing.
    pub fn start(&mut self) {
        self.player.present();
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn status(&self) -> PlaybackStatus {
        self.player.status()
    }

    pub fn is_closed(&self) -> bool {
        self.player.status() == PlaybackStatus::Closed
    }

    pub fn pending(&self) -> Option<PendingTick> {
        self.slot
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.slot.map(|tick| tick.due_ms)
    }

    pub fn apply(&mut self, command: Command, now_ms: u64) {
        trace!("scheduler: command {:?} at {}ms", command, now_ms);
        let schedule = self.player.apply(command);
        self.commit(schedule, now_ms);
    }

    /// Apply every command the provider has queued. Returns how many were applied.
    pub fn process_inputs<IN>(&mut self, input: &mut IN, now_ms: u64) -> Result<usize, IN::Error>
    where
        IN: InputProvider,
    {
        let mut applied = 0usize;
        while let Some(command) = input.poll_command()? {
            self.apply(command, now_ms);
            applied += 1;
            if self.is_closed() {
                break;
            }
        }
        Ok(applied)
    }

    /// Fire `tick`, normally once its deadline has passed.
    pub fn fire(&mut self, tick: PendingTick, now_ms: u64) -> FireOutcome {
        if tick.generation != self.player.generation() || self.is_closed() {
            trace!(
                "scheduler: stale tick generation={} current={}",
                tick.generation,
                self.player.generation()
            );
            return FireOutcome::Stale;
        }

        self.slot = None;
        let schedule = self.player.advance();
        self.commit(schedule, now_ms);
        FireOutcome::Advanced
    }

    /// Fire the pending tick if it is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<FireOutcome> {
        let tick = self.slot.filter(|tick| now_ms >= tick.due_ms)?;
        Some(self.fire(tick, now_ms))
    }

    pub fn pop_event(&mut self) -> Option<PlaybackEvent> {
        self.player.pop_event()
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = PlaybackEvent> + '_ {
        core::iter::from_fn(move || self.player.pop_event())
    }

    fn commit(&mut self, schedule: Schedule, now_ms: u64) {
        match schedule {
            Schedule::Arm {
                generation,
                delay_ms,
            } => {
                self.slot = Some(PendingTick {
                    generation,
                    shown_at_ms: now_ms,
                    due_ms: now_ms.saturating_add(delay_ms),
                });
            }
            Schedule::Rearm {
                generation,
                delay_ms,
            } => {
                let shown_at_ms = self.slot.map_or(now_ms, |tick| tick.shown_at_ms);
                self.slot = Some(PendingTick {
                    generation,
                    shown_at_ms,
                    due_ms: shown_at_ms.saturating_add(delay_ms).max(now_ms),
                });
            }
            Schedule::Disarm => self.slot = None,
            Schedule::Unchanged => return,
        }

        if let Some(tick) = self.slot {
            debug!(
                "scheduler: armed generation={} due={}ms",
                tick.generation, tick.due_ms
            );
        }
    }
}
