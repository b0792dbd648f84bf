use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use log::debug;
use sposa_core::{
    app::PlaybackStatus,
    pivot::split_at_pivot,
    render::PlaybackEvent,
    scheduler::Scheduler,
    text_policy::{progress_label, progress_percent, speed_label},
};

const ORP_ANCHOR_PERCENT: u16 = 42;
const PIVOT_COLOR: Color = Color::Rgb {
    r: 0x00,
    g: 0x80,
    b: 0xff,
};
const BAR_COLOR: Color = Color::Rgb {
    r: 0xcb,
    g: 0xa6,
    b: 0xf7,
};
const DIM_COLOR: Color = Color::Rgb {
    r: 0x6c,
    g: 0x70,
    b: 0x86,
};
const LEGEND: &str = "space play/pause  \u{2191}\u{2193} speed  \u{2190}\u{2192} sentence  r restart  q quit";

/// What is on screen, rebuilt from the engine's events.
#[derive(Clone, Debug, Default)]
struct ViewState {
    word: Option<(String, usize)>,
    position: usize,
    total: usize,
    speed: f32,
    status: Option<PlaybackStatus>,
}

impl ViewState {
    fn apply(&mut self, event: &PlaybackEvent) {
        match event {
            PlaybackEvent::Reveal(reveal) => {
                self.word = Some((reveal.word.text().to_owned(), reveal.pivot));
                self.position = reveal.position;
                self.total = reveal.total;
                self.speed = reveal.speed;
                self.status = Some(reveal.status);
            }
            PlaybackEvent::Status(frame) => {
                if frame.status == PlaybackStatus::Finished {
                    self.word = None;
                }
                self.position = frame.position;
                self.total = frame.total;
                self.speed = frame.speed;
                self.status = Some(frame.status);
            }
            PlaybackEvent::Closed => self.status = Some(PlaybackStatus::Closed),
        }
    }
}

/// Full-screen raw-mode display. Restores the terminal on drop.
pub(super) struct TerminalView {
    out: Stdout,
    base_wpm: u16,
    state: ViewState,
}

impl TerminalView {
    pub(super) fn enter(base_wpm: u16) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        debug!("terminal: entered raw mode");

        Ok(Self {
            out,
            base_wpm,
            state: ViewState::default(),
        })
    }

    /// Drain the engine's events and redraw once if any arrived.
    pub(super) fn present(&mut self, scheduler: &mut Scheduler) -> io::Result<()> {
        let mut dirty = false;
        for event in scheduler.drain_events() {
            self.state.apply(&event);
            dirty = true;
        }

        if dirty && self.state.status != Some(PlaybackStatus::Closed) {
            self.draw()?;
        }
        Ok(())
    }

    fn draw(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let middle = height / 2;

        queue!(self.out, Clear(ClearType::All))?;

        match &self.state.word {
            Some((text, pivot)) => {
                if let Some((before, pivot_char, after)) = split_at_pivot(text, *pivot) {
                    let column = word_start_column(width, *pivot);
                    queue!(
                        self.out,
                        MoveTo(column, middle),
                        SetAttribute(Attribute::Bold),
                        Print(before),
                        SetForegroundColor(PIVOT_COLOR),
                        Print(pivot_char),
                        ResetColor,
                        Print(after),
                        SetAttribute(Attribute::Reset),
                    )?;
                }
            }
            None if self.state.status == Some(PlaybackStatus::Finished) => {
                let message = if self.state.total == 0 { "(empty)" } else { "(end)" };
                queue!(
                    self.out,
                    MoveTo(centered_column(width, message), middle),
                    SetForegroundColor(DIM_COLOR),
                    Print(message),
                    ResetColor,
                )?;
            }
            None => {}
        }

        let mut readout = speed_label(self.base_wpm, self.state.speed);
        if self.state.status.is_some_and(PlaybackStatus::is_suspended) {
            let _ = readout.push_str("  paused");
        }
        let progress = progress_label(self.state.position, self.state.total);
        let bar = progress_bar(usize::from(width), self.state.position, self.state.total);

        queue!(
            self.out,
            MoveTo(centered_column(width, &readout), height.saturating_sub(3)),
            SetForegroundColor(DIM_COLOR),
            Print(readout.as_str()),
            MoveTo(0, height.saturating_sub(2)),
            SetForegroundColor(BAR_COLOR),
            Print(bar),
            SetForegroundColor(DIM_COLOR),
            MoveTo(width.saturating_sub(progress.len() as u16), height.saturating_sub(3)),
            Print(progress.as_str()),
            MoveTo(centered_column(width, LEGEND), height.saturating_sub(1)),
            Print(LEGEND),
            ResetColor,
        )?;

        self.out.flush()
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
        debug!("terminal: restored");
    }
}

/// Column where a word must start so its pivot sits on the ORP anchor.
fn word_start_column(width: u16, pivot: usize) -> u16 {
    let anchor = width.saturating_mul(ORP_ANCHOR_PERCENT) / 100;
    anchor.saturating_sub(u16::try_from(pivot).unwrap_or(u16::MAX))
}

fn centered_column(width: u16, text: &str) -> u16 {
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    width.saturating_sub(len) / 2
}

fn progress_bar(width: usize, position: usize, total: usize) -> String {
    let filled = width * usize::from(progress_percent(position, total)) / 100;
    let mut bar = String::with_capacity(width * 3);
    bar.extend(core::iter::repeat_n('\u{2588}', filled));
    bar.extend(core::iter::repeat_n('\u{2591}', width - filled));
    bar
}
