impl Player {
    /// Queue the current frame without changing state.
    pub fn present(&mut self) {
        if self.closed {
            return;
        }
        if self.current_word().is_some() {
            self.emit_reveal();
        } else if !self.document.is_empty() {
            self.emit_status();
        }
    }

    pub fn toggle_pause(&mut self) -> Schedule {
        match self.status() {
            PlaybackStatus::Closed | PlaybackStatus::Finished => return Schedule::Unchanged,
            _ => {}
        }

        self.running = !self.running;
        self.started = true;
        self.generation += 1;
        debug!(
            "player: toggle running={} position={} generation={}",
            self.running, self.position, self.generation
        );

        if self.running {
            self.emit_reveal();
            self.arm_current()
        } else {
            self.emit_status();
            Schedule::Disarm
        }
    }

    pub fn set_speed(&mut self, change: SpeedChange) -> Schedule {
        let delta = match change {
            SpeedChange::Up => self.config.speed_step,
            SpeedChange::Down => -self.config.speed_step,
        };
        self.adjust_speed(delta)
    }

    /// Shift the speed multiplier by `delta`, clamped to the configured bounds.
    pub fn adjust_speed(&mut self, delta: f32) -> Schedule {
        if self.closed {
            return Schedule::Unchanged;
        }

        let next = if delta.is_finite() {
            self.config.clamp_speed(self.speed + delta)
        } else {
            self.speed
        };
        self.speed = next;
        self.generation += 1;
        debug!(
            "player: speed={:.2} generation={}",
            self.speed, self.generation
        );
        self.emit_status();

        if self.running && self.current_word().is_some() {
            Schedule::Rearm {
                generation: self.generation,
                delay_ms: self.current_word_delay_ms(),
            }
        } else {
            Schedule::Disarm
        }
    }

    /// Move to the next word. Only the scheduler calls this, when a tick is due.
    pub fn advance(&mut self) -> Schedule {
        if self.closed || self.position >= self.document.len() {
            return Schedule::Unchanged;
        }

        self.position += 1;
        self.generation += 1;

        if self.position == self.document.len() {
            self.running = false;
            debug!(
                "player: finished words={} generation={}",
                self.position, self.generation
            );
            self.emit_status();
            return Schedule::Disarm;
        }

        self.emit_reveal();
        if self.running {
            self.arm_current()
        } else {
            Schedule::Disarm
        }
    }

    /// Rewind to the first word and start running.
    pub fn restart(&mut self) -> Schedule {
        if self.closed || self.document.is_empty() {
            return Schedule::Unchanged;
        }

        self.position = 0;
        self.running = true;
        self.started = true;
        self.generation += 1;
        debug!("player: restart generation={}", self.generation);
        self.emit_reveal();
        self.arm_current()
    }

    pub fn quit(&mut self) -> Schedule {
        if self.closed {
            return Schedule::Unchanged;
        }

        self.closed = true;
        self.running = false;
        self.generation += 1;
        debug!(
            "player: quit position={}/{} generation={}",
            self.position,
            self.document.len(),
            self.generation
        );
        self.push_event(PlaybackEvent::Closed);
        Schedule::Disarm
    }

    /// Display time of the word at the current position, in milliseconds.
    ///
    /// The first word is held for at least [`ReaderConfig::lead_in_ms`].
    pub fn current_word_delay_ms(&self) -> u64 {
        let Some(word) = self.current_word() else {
            return 0;
        };
        let delay_ms = self.delays.delay_ms(word, self.speed);
        if self.position == 0 {
            delay_ms.max(self.config.lead_in_ms)
        } else {
            delay_ms
        }
    }

    fn arm_current(&self) -> Schedule {
        if self.current_word().is_none() {
            return Schedule::Disarm;
        }

        Schedule::Arm {
            generation: self.generation,
            delay_ms: self.current_word_delay_ms(),
        }
    }
}
