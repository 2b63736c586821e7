use anyhow::{Context as _, Result};
use tera::{Context, Tera};

/// A file bundled into the binary, written out under `file_name`.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub file_name: &'static str,
    pub contents: &'static str,
}

pub const REQUIREMENTS: Template = Template {
    file_name: "requirements.txt",
    contents: include_str!("../templates/requirements.txt"),
};

/// Copied as is, never rendered.
pub const MAIN: Template = Template {
    file_name: "main.py",
    contents: include_str!("../templates/main.py"),
};

pub const README: Template = Template {
    file_name: "README.md",
    contents: include_str!("../templates/README.md"),
};

impl Template {
    /// Renders this template with `context`.
    ///
    /// # Errors
    ///
    /// See [`render`].
    pub fn render(&self, context: &Context) -> Result<String> {
        render(self.file_name, self.contents, context)
    }
}

/// Substitutes the `{{ placeholders }}` in `text` with the values in
/// `context`. Nothing is escaped.
///
/// # Errors
///
/// Returns an [`Err`] if `text` is not a valid template or uses a value that
/// `context` does not have.
pub fn render(name: &str, text: &str, context: &Context) -> Result<String> {
    Tera::one_off(text, context, false).with_context(|| format!("Failed to render {name}"))
}
