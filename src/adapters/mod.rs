pub mod command_spawner;
pub mod console_presenter;
pub mod line_presenter;
pub mod terminal_presenter;

pub use command_spawner::CommandSpawner;
pub use console_presenter::ConsolePresenter;
pub use line_presenter::LinePresenter;
pub use terminal_presenter::TerminalPresenter;
