mod cancellation;
mod process_spawner;
mod prompt_presenter;

pub use cancellation::CancellationToken;
pub use process_spawner::ProcessSpawner;
pub use prompt_presenter::PromptPresenter;
