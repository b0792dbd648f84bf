use std::{
    io,
    thread::{self, JoinHandle},
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use log::{debug, warn};
use sposa_core::input::{Command, JumpDirection, SpeedChange};

const COMMAND_QUEUE_DEPTH: usize = 16;

pub(super) type CommandChannel = Channel<CriticalSectionRawMutex, Command, COMMAND_QUEUE_DEPTH>;

/// Key bindings: space, arrows or hjkl, `r`, and `q`/Esc/Ctrl-C.
pub(super) fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Up | KeyCode::Char('k') => Command::Speed(SpeedChange::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Speed(SpeedChange::Down),
        KeyCode::Right | KeyCode::Char('l') => Command::Jump(JumpDirection::Forward),
        KeyCode::Left | KeyCode::Char('h') => Command::Jump(JumpDirection::Backward),
        KeyCode::Char('r') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Queue `command` for the executor.
///
/// A full queue drops the command; held keys repeat anyway. Quit is the
/// exception: it waits for room, since the reader thread stops after it.
fn forward(commands: &CommandChannel, command: Command) {
    if command == Command::Quit {
        embassy_futures::block_on(commands.send(command));
    } else if commands.try_send(command).is_err() {
        warn!("keys: command queue full, dropping {:?}", command);
    }
}

/// Read keys on a dedicated thread and forward them to the executor.
pub(super) fn spawn_key_reader(commands: &'static CommandChannel) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("sposa-keys".into())
        .spawn(move || {
            loop {
                let key = match event::read() {
                    Ok(Event::Key(key)) => key,
                    Ok(_) => continue,
                    Err(err) => {
                        warn!("keys: terminal read failed: {}", err);
                        forward(commands, Command::Quit);
                        return;
                    }
                };

                let Some(command) = command_for_key(key) else {
                    continue;
                };
                debug!("keys: {:?} -> {:?}", key.code, command);
                forward(commands, command);
                if command == Command::Quit {
                    return;
                }
            }
        })
}
