pub mod parse;
pub mod prompt_options;
pub mod settings;

pub use parse::parse_config_content;
pub use prompt_options::PromptOptions;
pub use settings::{ConfigFile, PromptSettings};
