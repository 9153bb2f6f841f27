use std::io;
use std::path::Path;

/// Port for handing a new process to the operating system.
pub trait ProcessSpawner {
    /// Start `executable` without waiting for it.
    ///
    /// Returns once the OS has accepted the child; the child is not tracked afterwards.
    fn spawn_detached(&self, executable: &Path) -> io::Result<()>;
}
