use anyhow::{Context as _, Result};
use derive_builder::Builder;
use std::path::{Path, PathBuf};
use tera::Context;

use crate::{
    answers::{collect_answers, Answers, Prompter},
    case::directory_name,
    info,
    install::{InstallOptions, Installer},
    template::{Template, MAIN, README, REQUIREMENTS},
    trace, warn,
};

/// What [`materialize`] left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// Directory the files were written to
    pub target: PathBuf,
    /// Whether `target` is a subdirectory of the directory we started in
    pub created_dir: bool,
    pub files: Vec<PathBuf>,
}

/// Picks the directory the project goes to. A directory already named
/// `directory_name` is used as is, anything else gets a subdirectory.
#[must_use]
pub fn resolve_target(current_dir: &Path, directory_name: &str) -> (PathBuf, bool) {
    let already_there = current_dir
        .file_name()
        .is_some_and(|base| base == directory_name);

    if already_there {
        (current_dir.to_owned(), false)
    } else {
        (current_dir.join(directory_name), true)
    }
}

/// Writes `requirements.txt`, `main.py` and `README.md` for `answers`.
///
/// Files are written one after the other and existing ones are overwritten.
/// Whatever got written before a failure stays on disk.
///
/// # Errors
///
/// Returns an [`Err`] if the bot name can not be turned into a directory
/// name, a template fails to render or any IO error occurs.
pub fn materialize(answers: &Answers, current_dir: &Path) -> Result<Materialized> {
    let directory_name = directory_name(&answers.bot_name)?;
    let (target, created_dir) = resolve_target(current_dir, &directory_name);

    if created_dir {
        info!(
            "Your bot should be in a directory named {directory_name}\nI'll automatically create this folder."
        );
        fs_extra::dir::create_all(&target, false)
            .with_context(|| format!("Failed to create directory {}", target.display()))?;
    }

    let mut requirements = Context::new();
    requirements.insert("bot_name", &directory_name);

    let mut readme = Context::new();
    readme.insert("bot_name", &answers.bot_name);
    readme.insert("description", &answers.description);

    let files = vec![
        write(&target, REQUIREMENTS, &REQUIREMENTS.render(&requirements)?)?,
        write(&target, MAIN, MAIN.contents)?,
        write(&target, README, &README.render(&readme)?)?,
    ];

    Ok(Materialized {
        target,
        created_dir,
        files,
    })
}

fn write(target: &Path, template: Template, contents: &str) -> Result<PathBuf> {
    let path = target.join(template.file_name);

    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    trace!("Wrote {} ({} bytes)", path.display(), contents.len());

    Ok(path)
}

/// Hands the project over to `installer`, pip only. Failures are reported
/// and otherwise ignored.
pub fn install_dependencies(installer: &impl Installer, target: &Path) {
    let options = InstallOptions {
        pipenv: false,
        ..InstallOptions::default()
    };

    if let Err(e) = installer.install(target, &options) {
        warn!("Dependency installation failed: {e:#}");
    }
}

/// Runs a whole generation: prompts, files, dependencies.
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct Scaffolder<P: Prompter, I: Installer> {
    prompter: P,
    installer: I,
    #[builder(default)]
    skip_install: bool,
}

impl<P: Prompter, I: Installer> Scaffolder<P, I> {
    #[must_use]
    pub fn builder() -> ScaffolderBuilder<P, I> {
        ScaffolderBuilder::default()
    }

    /// # Errors
    ///
    /// Propagates prompting and [`materialize`] failures.
    pub fn run(&mut self, current_dir: &Path) -> Result<Materialized> {
        let answers = collect_answers(&mut self.prompter)?;
        let materialized = materialize(&answers, current_dir)?;

        if self.skip_install {
            trace!("Skipping dependency installation");
        } else {
            install_dependencies(&self.installer, &materialized.target);
        }

        Ok(materialized)
    }

    #[cfg(test)]
    pub(crate) fn installer(&self) -> &I {
        &self.installer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{tests::Scripted, AcceptDefaults};
    use anyhow::bail;
    use std::{cell::RefCell, fs};
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recording {
        calls: RefCell<Vec<(PathBuf, InstallOptions)>>,
        fail: bool,
    }

    impl Installer for Recording {
        fn install(&self, target: &Path, options: &InstallOptions) -> Result<()> {
            self.calls.borrow_mut().push((target.to_owned(), *options));
            if self.fail {
                bail!("pip exploded");
            }
            Ok(())
        }
    }

    fn answers(bot_name: &str, description: &str) -> Answers {
        Answers::builder()
            .bot_name(bot_name)
            .description(description)
            .build()
            .unwrap()
    }

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn resolves_target() {
        let (target, created) = resolve_target(Path::new("/work/my-bot"), "my-bot");
        assert_eq!(target, Path::new("/work/my-bot"));
        assert!(!created);

        let (target, created) = resolve_target(Path::new("/work"), "my-bot");
        assert_eq!(target, Path::new("/work/my-bot"));
        assert!(created);
    }

    #[test]
    fn defaults_give_sample() {
        let tmp = TempDir::new().unwrap();

        let out = materialize(&Answers::default(), tmp.path()).unwrap();

        assert_eq!(out.target, tmp.path().join("sample"));
        let requirements = fs::read_to_string(out.target.join("requirements.txt")).unwrap();
        assert!(requirements.contains("sample"));
        assert!(!requirements.contains("bot_name"));
    }

    #[test]
    fn creates_subdirectory() {
        let tmp = TempDir::new().unwrap();

        let out = materialize(&answers("My Cool Bot", "Says hi"), tmp.path()).unwrap();

        assert!(out.created_dir);
        assert_eq!(out.target, tmp.path().join("my-cool-bot"));
        assert_eq!(names(tmp.path()), ["my-cool-bot"]);
        assert_eq!(
            names(&out.target),
            ["README.md", "main.py", "requirements.txt"]
        );
        assert_eq!(
            out.files,
            [
                out.target.join("requirements.txt"),
                out.target.join("main.py"),
                out.target.join("README.md"),
            ]
        );
    }

    #[test]
    fn reuses_existing_subdirectory() {
        let tmp = TempDir::new().unwrap();
        let existing = tmp.path().join("my-cool-bot");
        fs::create_dir(&existing).unwrap();
        fs::write(existing.join("notes.txt"), "keep me").unwrap();
        fs::write(existing.join("main.py"), "old").unwrap();

        let out = materialize(&answers("My Cool Bot", "Says hi"), tmp.path()).unwrap();

        assert_eq!(out.target, existing);
        assert_eq!(fs::read_to_string(existing.join("notes.txt")).unwrap(), "keep me");
        assert_eq!(fs::read_to_string(existing.join("main.py")).unwrap(), MAIN.contents);
    }

    #[test]
    fn writes_in_place_when_named_after_bot() {
        let tmp = TempDir::new().unwrap();
        let here = tmp.path().join("my-cool-bot");
        fs::create_dir(&here).unwrap();

        let out = materialize(&answers("My Cool Bot", "Says hi"), &here).unwrap();

        assert!(!out.created_dir);
        assert_eq!(out.target, here);
        assert_eq!(names(&here), ["README.md", "main.py", "requirements.txt"]);
    }

    #[test]
    fn main_is_copied_verbatim() {
        let tmp = TempDir::new().unwrap();

        for (name, description) in [("Alpha", "one"), ("{{ bot_name }}", "<%= botName %>")] {
            let out = materialize(&answers(name, description), tmp.path()).unwrap();
            let written = fs::read(out.target.join("main.py")).unwrap();
            assert_eq!(written, MAIN.contents.as_bytes());
        }
    }

    #[test]
    fn readme_gets_raw_values() {
        let tmp = TempDir::new().unwrap();

        let out = materialize(&answers("My Cool Bot", "Tells jokes"), tmp.path()).unwrap();

        let readme = fs::read_to_string(out.target.join("README.md")).unwrap();
        assert!(readme.contains("My Cool Bot"));
        assert!(readme.contains("Tells jokes"));

        let requirements = fs::read_to_string(out.target.join("requirements.txt")).unwrap();
        assert!(requirements.contains("my-cool-bot"));
        assert!(!requirements.contains("My Cool Bot"));
    }

    #[test]
    fn non_ascii_name_is_lowercased() {
        let tmp = TempDir::new().unwrap();

        let out = materialize(&answers("Ünïcode Böt", "Grüßt"), tmp.path()).unwrap();

        assert_eq!(out.target, tmp.path().join("ünïcode-böt"));
        let requirements = fs::read_to_string(out.target.join("requirements.txt")).unwrap();
        assert!(requirements.contains("ünïcode-böt"));
        let readme = fs::read_to_string(out.target.join("README.md")).unwrap();
        assert!(readme.contains("Ünïcode Böt"));
    }

    #[test]
    fn unusable_name_writes_nothing() {
        let tmp = TempDir::new().unwrap();

        assert!(materialize(&answers("!!!", "x"), tmp.path()).is_err());
        assert!(names(tmp.path()).is_empty());
    }

    #[test]
    fn run_installs_with_pip_only() {
        let tmp = TempDir::new().unwrap();
        let mut scaffolder = Scaffolder::builder()
            .prompter(Scripted::new([Some("Echo Bot"), None, None]))
            .installer(Recording::default())
            .build()
            .unwrap();

        let out = scaffolder.run(tmp.path()).unwrap();

        assert_eq!(out.target, tmp.path().join("echo-bot"));
        assert_eq!(
            *scaffolder.installer().calls.borrow(),
            [(
                out.target.clone(),
                InstallOptions {
                    pip: true,
                    pipenv: false
                }
            )]
        );
    }

    #[test]
    fn install_failure_is_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let mut scaffolder = Scaffolder::builder()
            .prompter(AcceptDefaults)
            .installer(Recording {
                fail: true,
                ..Default::default()
            })
            .build()
            .unwrap();

        let out = scaffolder.run(tmp.path()).unwrap();

        assert_eq!(scaffolder.installer().calls.borrow().len(), 1);
        assert!(out.target.join("README.md").is_file());
    }

    #[test]
    fn skip_install() {
        let tmp = TempDir::new().unwrap();
        let mut scaffolder = Scaffolder::builder()
            .prompter(AcceptDefaults)
            .installer(Recording::default())
            .skip_install(true)
            .build()
            .unwrap();

        scaffolder.run(tmp.path()).unwrap();

        assert!(scaffolder.installer().calls.borrow().is_empty());
    }

    #[test]
    fn prompt_failure_stops_before_writing() {
        let tmp = TempDir::new().unwrap();
        let mut scaffolder = Scaffolder::builder()
            .prompter(Scripted::new([Some("Half")]))
            .installer(Recording::default())
            .build()
            .unwrap();

        assert!(scaffolder.run(tmp.path()).is_err());
        assert!(names(tmp.path()).is_empty());
        assert!(scaffolder.installer().calls.borrow().is_empty());
    }
}
