use anyhow::{Context, Result};
use botgen::{
    answers::{AcceptDefaults, Prompter, TerminalPrompter},
    args::{Args, Parser},
    error, info,
    install::CommandInstaller,
    scaffold::Scaffolder,
    trace,
};
use owo_colors::OwoColorize;
use std::process::ExitCode;

fn welcome() {
    println!(
        "Welcome to the {} generator!",
        env!("CARGO_PKG_NAME").if_supports_color(owo_colors::Stream::Stdout, |s| s
            .style(owo_colors::Style::new().bold().red()))
    );
}

fn scaffold(args: &Args, prompter: impl Prompter) -> Result<()> {
    let current_dir = std::path::absolute(&args.path)
        .with_context(|| format!("Failed to resolve {}", args.path.display()))?;

    trace!("Scaffolding from {}", current_dir.display());

    let out = Scaffolder::builder()
        .prompter(prompter)
        .installer(CommandInstaller)
        .skip_install(args.skip_install)
        .build()?
        .run(&current_dir)?;

    info!("Created your bot in {}", out.target.display());

    Ok(())
}

fn app(args: &Args) -> Result<()> {
    if !args.skip_welcome {
        welcome();
    }

    if args.yes {
        scaffold(args, AcceptDefaults)
    } else {
        scaffold(args, TerminalPrompter)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match app(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
