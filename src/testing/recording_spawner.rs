use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::ProcessSpawner;

/// Spawner double that records every spawn attempt.
#[derive(Default)]
pub struct RecordingSpawner {
    spawned: Mutex<Vec<PathBuf>>,
    failure: Option<(io::ErrorKind, String)>,
}

impl RecordingSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every spawn attempt fails with the given error.
    pub fn failing(kind: io::ErrorKind, message: &str) -> Self {
        Self { spawned: Mutex::new(Vec::new()), failure: Some((kind, message.to_string())) }
    }

    pub fn spawned(&self) -> Vec<PathBuf> {
        self.spawned.lock().unwrap().clone()
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn_detached(&self, executable: &Path) -> io::Result<()> {
        self.spawned.lock().unwrap().push(executable.to_path_buf());
        match &self.failure {
            Some((kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Ok(()),
        }
    }
}
