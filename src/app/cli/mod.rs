//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{AppError, PromptSettings};

#[derive(Parser)]
#[command(name = "msgbox")]
#[command(version)]
#[command(
    about = "Show a timed message box and optionally launch an executable",
    long_about = None
)]
struct Cli {
    /// Message to display [default: Hello!]
    #[arg(long, value_name = "TEXT")]
    msg: Option<String>,
    /// Title shown with the message [default: msgbox]
    #[arg(long, value_name = "TEXT")]
    caption: Option<String>,
    /// Time before auto-close, in seconds [default: 5]
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
    /// Path to executable to run if Yes is chosen
    #[arg(long, value_name = "PATH")]
    exe: Option<String>,
    /// Show Yes/No buttons instead of OK
    #[arg(long)]
    yesno: bool,
    /// Choose Yes automatically if the timeout occurs
    #[arg(long)]
    autoyes: bool,
    /// Read settings from a TOML config file; flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Settings given on the command line. Unset flags leave room for the config file.
    fn settings(&self) -> PromptSettings {
        PromptSettings {
            message: self.msg.clone(),
            caption: self.caption.clone(),
            timeout_secs: self.timeout,
            yes_no: self.yesno.then_some(true),
            auto_yes: self.autoyes.then_some(true),
            executable: self.exe.clone(),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = run_prompt(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_prompt(cli: &Cli) -> Result<(), AppError> {
    let options = crate::app::api::load_options(cli.settings(), cli.config.as_deref())?;

    println!("Showing message box: {}", options.spec.message());
    let report = crate::app::api::prompt(&options)?;
    for line in report.status_lines() {
        println!("{}", line);
    }

    report.into_result().map(|_| ())
}
