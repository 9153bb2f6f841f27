//! Fire-and-forget process launch.

use tracing::{info, warn};

use crate::domain::{LaunchRequest, LaunchResult, MISSING_EXECUTABLE_PATH};
use crate::ports::ProcessSpawner;

/// Starts the executable chosen by an affirmative decision.
pub struct ProcessLauncher<S: ProcessSpawner> {
    spawner: S,
}

impl<S: ProcessSpawner> ProcessLauncher<S> {
    pub fn new(spawner: S) -> Self {
        Self { spawner }
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Hand the request to the OS and report whether it was accepted.
    ///
    /// An empty path fails without any spawn attempt. Spawn errors are reported with
    /// the platform's message unchanged.
    pub fn launch(&self, request: &LaunchRequest) -> LaunchResult {
        let Some(path) = request.validated_path() else {
            warn!("launch requested without an executable path");
            return LaunchResult::Failed(MISSING_EXECUTABLE_PATH.to_string());
        };

        match self.spawner.spawn_detached(path) {
            Ok(()) => {
                info!(executable = %path.display(), "executable started");
                LaunchResult::Started
            }
            Err(err) => {
                warn!(executable = %path.display(), error = %err, "executable failed to start");
                LaunchResult::Failed(err.to_string())
            }
        }
    }
}
