//! Command abstraction between key bindings and the engine.

mod mock;

pub use mock::{MockInput, ScriptedInput};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpeedChange {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JumpDirection {
    Forward,
    Backward,
}

/// Logical commands consumed by the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    TogglePause,
    Speed(SpeedChange),
    Jump(JumpDirection),
    Restart,
    Quit,
}

/// Polled command provider.
pub trait InputProvider {
    type Error;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error>;
}
