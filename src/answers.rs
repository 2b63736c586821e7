use anyhow::Result;
use derive_builder::Builder;
use inquire::{Select, Text};

pub const DEFAULT_BOT_NAME: &str = "sample";
pub const DEFAULT_DESCRIPTION: &str = "sample";

/// Starter dialog the generated bot ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    Echo,
}

impl Dialog {
    pub const ALL: &'static [Dialog] = &[Dialog::Echo];
}

impl std::fmt::Display for Dialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialog::Echo => write!(f, "Echo"),
        }
    }
}

/// What the user asked for. Lives for a single run.
///
/// Fields left unset on the builder come from [`Answers::default`].
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(setter(into), default)]
pub struct Answers {
    pub bot_name: String,
    pub description: String,
    pub dialog: Dialog,
}

impl Answers {
    #[must_use]
    pub fn builder() -> AnswersBuilder {
        AnswersBuilder::default()
    }
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            bot_name: DEFAULT_BOT_NAME.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            dialog: Dialog::default(),
        }
    }
}

/// Source of answers. Blocks until each question is answered.
pub trait Prompter {
    /// Asks a free text question, returning `default` when the user just
    /// confirms.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the interactive session can not be used.
    fn text(&mut self, message: &str, default: &str) -> Result<String>;

    /// Asks the user to pick one of `options`.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the interactive session can not be used.
    fn select(&mut self, message: &str, options: &[Dialog]) -> Result<Dialog>;
}

/// Prompts on the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, message: &str, default: &str) -> Result<String> {
        Ok(Text::new(message).with_default(default).prompt()?)
    }

    fn select(&mut self, message: &str, options: &[Dialog]) -> Result<Dialog> {
        Ok(Select::new(message, options.to_vec()).prompt()?)
    }
}

/// Answers every question with its default, for `--yes`.
#[derive(Debug, Default)]
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn text(&mut self, _message: &str, default: &str) -> Result<String> {
        Ok(default.to_owned())
    }

    fn select(&mut self, _message: &str, options: &[Dialog]) -> Result<Dialog> {
        Ok(options.first().copied().unwrap_or_default())
    }
}

/// Asks the bot name, the description and the dialog, in that order.
///
/// # Errors
///
/// Propagates any failure of the [`Prompter`].
pub fn collect_answers(prompter: &mut impl Prompter) -> Result<Answers> {
    let bot_name = prompter.text("What's the name of your bot?", DEFAULT_BOT_NAME)?;
    let description = prompter.text("What will your bot do?", DEFAULT_DESCRIPTION)?;
    let dialog = prompter.select("Which default dialog do you want?", Dialog::ALL)?;

    crate::trace!("Answers: bot_name={bot_name:?} description={description:?} dialog={dialog}");

    Ok(Answers {
        bot_name,
        description,
        dialog,
    })
}
