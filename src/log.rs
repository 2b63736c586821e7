//! Colored console output.
//!
//! Every macro prints `label: message`, coloring the label only when the
//! target stream supports it.

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    (out, $label:literal, $style:expr, $($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            println!(
                "{}: {}",
                $label.if_supports_color(owo_colors::Stream::Stdout, |s| s.style($style)),
                format_args!($($arg)+)
            );
        }
    };
    (err, $label:literal, $style:expr, $($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            eprintln!(
                "{}: {}",
                $label.if_supports_color(owo_colors::Stream::Stderr, |s| s.style($style)),
                format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__emit!(err, "error", owo_colors::Style::new().bold().red(), $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__emit!(out, "warning", owo_colors::Style::new().bold().yellow(), $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__emit!(out, "info", owo_colors::Style::new().bold().green(), $($arg)+)
    };
}

/// Only prints when `BOTGEN_TRACE` is set.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        if std::env::var_os("BOTGEN_TRACE").is_some() {
            $crate::__emit!(out, "trace", owo_colors::Style::new().bold(), $($arg)+)
        }
    };
}
