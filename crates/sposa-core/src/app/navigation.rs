impl Player {
    /// Jump to the start of the next or previous sentence.
    ///
    /// Backward from mid-sentence lands on the start of the current sentence;
    /// from a sentence start it lands on the previous one. Both directions
    /// clamp at the ends of the document.
    pub fn jump_sentence(&mut self, direction: JumpDirection) -> Schedule {
        if self.closed {
            return Schedule::Unchanged;
        }

        let from = self.position;
        self.position = match direction {
            JumpDirection::Forward => self.document.next_sentence_start(from),
            JumpDirection::Backward => self.document.previous_sentence_start(from),
        };
        self.generation += 1;
        debug!(
            "player: jump {:?} {}->{} generation={}",
            direction, from, self.position, self.generation
        );

        if self.current_word().is_none() {
            self.running = false;
            if !self.document.is_empty() {
                self.emit_status();
            }
            return Schedule::Disarm;
        }

        self.emit_reveal();
        if self.running {
            self.arm_current()
        } else {
            Schedule::Disarm
        }
    }
}
