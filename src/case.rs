use anyhow::{ensure, Result};
use heck::ToKebabCase;

/// Returns the name of the directory a bot called `bot_name` lives in:
/// lowercase words joined by single hyphens. Digits form words of their own,
/// so `Bot2` becomes `bot-2`.
///
/// # Errors
///
/// Returns an [`Err`] if nothing usable is left after normalization, e.g. a
/// name made only of punctuation.
pub fn directory_name(bot_name: &str) -> Result<String> {
    let name = split_digits(bot_name).to_kebab_case();

    ensure!(
        !name.is_empty(),
        "Bot name '{bot_name}' does not produce a usable directory name"
    );

    Ok(name)
}

fn split_digits(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if let Some(p) = prev {
            if (p.is_alphabetic() && c.is_numeric()) || (p.is_numeric() && c.is_alphabetic()) {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out
}
