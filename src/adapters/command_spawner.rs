use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::ports::ProcessSpawner;

/// Spawns executables with `std::process::Command`.
///
/// The child gets null stdio and its handle is dropped right away, so it outlives
/// msgbox and is never waited on.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandSpawner;

impl CommandSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSpawner for CommandSpawner {
    fn spawn_detached(&self, executable: &Path) -> io::Result<()> {
        Command::new(executable)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}
