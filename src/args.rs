use std::path::PathBuf;

pub use clap::Parser;

/// Scaffold a new Python bot project
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Args {
    /// Directory to scaffold from. The bot is placed in a subdirectory unless
    /// this directory is already named after it
    #[clap(default_value = ".")]
    pub path: PathBuf,

    /// Accept every default answer without prompting
    #[clap(long, short)]
    pub yes: bool,

    /// Do not install the generated project's dependencies
    #[clap(long)]
    pub skip_install: bool,

    /// Do not print the welcome banner
    #[clap(long)]
    pub skip_welcome: bool,
}
