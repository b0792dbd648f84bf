//! Word display durations.

use core::time::Duration;

use crate::{
    app::ReaderConfig,
    content::{Punctuation, Word},
};

const MIN_DELAY: Duration = Duration::from_nanos(1);

/// Maps a word and a speed multiplier to how long the word stays on screen.
///
/// `delay = base / speed * (punctuation_factor + length_bonus)` where
/// `base = 60 s / base_wpm` and
/// `length_bonus = long_word_bonus * sqrt(core_len - long_word_chars)`
/// for words longer than `long_word_chars`, otherwise zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayModel {
    base_interval: Duration,
    sentence_end_factor: f32,
    clause_factor: f32,
    long_word_chars: usize,
    long_word_bonus: f32,
}

impl DelayModel {
    pub fn new(config: &ReaderConfig) -> Self {
        Self {
            base_interval: Duration::from_secs_f64(60.0 / f64::from(config.base_wpm.max(1))),
            sentence_end_factor: config.sentence_end_factor,
            clause_factor: config.clause_factor,
            long_word_chars: config.long_word_chars,
            long_word_bonus: config.long_word_bonus,
        }
    }

    /// Display time of a plain word at speed 1.0.
    pub fn base_interval(&self) -> Duration {
        self.base_interval
    }

    pub fn delay(&self, word: &Word, speed: f32) -> Duration {
        let punctuation = match word.punctuation() {
            Punctuation::Hard => self.sentence_end_factor,
            Punctuation::Soft => self.clause_factor,
            Punctuation::None => 1.0,
        };

        let extra_chars = word.core_len().saturating_sub(self.long_word_chars);
        let length_bonus = self.long_word_bonus * (extra_chars as f32).sqrt();

        let scaled = self.base_interval.as_secs_f64() / f64::from(speed)
            * f64::from(punctuation + length_bonus);
        Duration::try_from_secs_f64(scaled)
            .unwrap_or(Duration::MAX)
            .max(MIN_DELAY)
    }

    /// [`Self::delay`] rounded to whole milliseconds, never below one.
    pub fn delay_ms(&self, word: &Word, speed: f32) -> u64 {
        (self.delay(word, speed).as_secs_f64() * 1_000.0).round().max(1.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> DelayModel {
        DelayModel::new(&ReaderConfig::default())
    }

    fn speeds() -> impl Iterator<Item = f32> {
        (1..=28).map(|tenths| tenths as f32 / 10.0)
    }

    #[test]
    fn base_interval_matches_244_wpm() {
        let base = model().base_interval().as_secs_f64();
        assert!((base - 0.2459).abs() < 1e-3, "base={base}");
    }

    #[test]
    fn delay_is_positive_across_speed_range() {
        let model = model();
        for text in ["a", "word", "end.", "pause,", "extraordinarily", "...", "\""] {
            let word = Word::new(text);
            for speed in speeds() {
                assert!(model.delay(&word, speed) > Duration::ZERO, "{text} at {speed}");
                assert!(model.delay_ms(&word, speed) >= 1);
            }
        }
    }

    #[test]
    fn faster_speed_never_lengthens_delay() {
        let model = model();
        let word = Word::new("incomprehensibilities,");
        let mut previous = Duration::MAX;
        for speed in speeds() {
            let delay = model.delay(&word, speed);
            assert!(delay <= previous, "speed={speed}");
            previous = delay;
        }
    }

    #[test]
    fn terminators_never_shorten_delay() {
        let model = model();
        for speed in speeds() {
            let bare = model.delay(&Word::new("sentence"), speed);
            for text in ["sentence.", "sentence!", "sentence?", "sentence,"] {
                assert!(model.delay(&Word::new(text), speed) >= bare);
            }
            assert!(
                model.delay(&Word::new("sentence."), speed)
                    >= model.delay(&Word::new("sentence,"), speed)
            );
        }
    }

    #[test]
    fn long_words_grow_sublinearly_and_never_drop_below_base() {
        let model = model();
        let base = model.delay(&Word::new("short"), 1.0);
        let nine = model.delay(&Word::new("abcdefghi"), 1.0);
        let twelve = model.delay(&Word::new("abcdefghijkl"), 1.0);
        let twenty = model.delay(&Word::new("abcdefghijklmnopqrst"), 1.0);

        assert_eq!(model.delay(&Word::new("abcdefgh"), 1.0), base);
        assert!(nine > base);
        assert!(twelve > nine);
        assert!(twenty > twelve);
        assert!(twenty - twelve < (twelve - base) * 2);
    }

    #[test]
    fn out_of_range_speeds_saturate_instead_of_panicking() {
        let model = model();
        let word = Word::new("end.");
        assert_eq!(model.delay(&word, 0.0), Duration::MAX);
        assert_eq!(model.delay(&word, 1e-30), Duration::MAX);
        assert!(model.delay(&word, f32::MAX) >= MIN_DELAY);
        assert_eq!(model.delay_ms(&word, 0.0), u64::MAX);
    }

    #[test]
    fn one_speed_step_up_from_default() {
        let model = model();
        let delay = model.delay(&Word::new("bare"), 1.1).as_secs_f64();
        let expected = model.base_interval().as_secs_f64() / 1.1;
        assert!((delay - expected).abs() < 1e-6);
        assert!((delay - 0.2236).abs() < 1e-3);
    }
}
