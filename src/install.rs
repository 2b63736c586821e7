use anyhow::{ensure, Context, Result};
use derive_builder::Builder;
use std::{path::Path, process::Command};

use crate::trace;

/// Which package managers get to install the generated project. Unset
/// builder fields come from [`InstallOptions::default`]: pip only.
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq)]
#[builder(default)]
pub struct InstallOptions {
    pub pip: bool,
    pub pipenv: bool,
}

impl InstallOptions {
    #[must_use]
    pub fn builder() -> InstallOptionsBuilder {
        InstallOptionsBuilder::default()
    }
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            pip: true,
            pipenv: false,
        }
    }
}

/// Installs the dependencies of a freshly scaffolded project.
pub trait Installer {
    /// # Errors
    ///
    /// Returns an [`Err`] if a package manager could not be started or
    /// reported a failure.
    fn install(&self, target: &Path, options: &InstallOptions) -> Result<()>;
}

/// Shells out to the package managers, letting them print straight to the
/// terminal.
#[derive(Debug, Default)]
pub struct CommandInstaller;

#[cfg(windows)]
const PYTHON: &str = "python";
#[cfg(not(windows))]
const PYTHON: &str = "python3";

impl CommandInstaller {
    fn commands(options: &InstallOptions) -> Vec<Command> {
        let mut commands = Vec::new();

        if options.pip {
            let mut pip = Command::new(PYTHON);
            pip.args(["-m", "pip", "install", "-r", "requirements.txt"]);
            commands.push(pip);
        }

        if options.pipenv {
            let mut pipenv = Command::new("pipenv");
            pipenv.args(["install", "-r", "requirements.txt"]);
            commands.push(pipenv);
        }

        commands
    }
}

impl Installer for CommandInstaller {
    fn install(&self, target: &Path, options: &InstallOptions) -> Result<()> {
        for mut command in Self::commands(options) {
            command.current_dir(target);
            let program = command.get_program().to_string_lossy().into_owned();

            trace!("Running {command:?} in {}", target.display());

            let status = command
                .status()
                .with_context(|| format!("Failed to run {program}"))?;

            ensure!(status.success(), "{program} exited with {status}");
        }

        Ok(())
    }
}
