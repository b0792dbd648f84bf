use super::{Command, InputProvider};

/// Provider with nothing to say.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error> {
        Ok(None)
    }
}

/// Replays a fixed command script, one command per poll.
#[derive(Debug, Clone)]
pub struct ScriptedInput<'a> {
    commands: &'a [Command],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    pub const fn new(commands: &'a [Command]) -> Self {
        Self {
            commands,
            cursor: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.commands.len()
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = core::convert::Infallible;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error> {
        let Some(command) = self.commands.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(command))
    }
}
