impl Player {
    fn emit_reveal(&mut self) {
        let Some(word) = self.current_word() else {
            return;
        };

        let reveal = Reveal {
            pivot: pivot_index(word),
            word: word.clone(),
            position: self.position,
            total: self.document.len(),
            speed: self.speed,
            status: self.status(),
        };
        self.push_event(PlaybackEvent::Reveal(reveal));
    }

    fn emit_status(&mut self) {
        let frame = StatusFrame {
            position: self.position,
            total: self.document.len(),
            speed: self.speed,
            status: self.status(),
        };
        self.push_event(PlaybackEvent::Status(frame));
    }

    fn push_event(&mut self, event: PlaybackEvent) {
        if let Err(event) = self.outbox.push_back(event) {
            warn!("player: outbox full, dropping oldest event");
            let _ = self.outbox.pop_front();
            let _ = self.outbox.push_back(event);
        }
    }
}
