mod recording_spawner;
mod scripted_presenter;

pub use recording_spawner::RecordingSpawner;
pub use scripted_presenter::ScriptedPresenter;
