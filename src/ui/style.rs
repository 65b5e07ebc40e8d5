use console::style;
use std::fmt::Display;

/// Green bold: confirmations, success toasts
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Red bold: inline load errors, error toasts
pub fn error<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// White bold: page and dialog titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: subtitles, timestamps, placeholders
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: warnings, validation messages
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Green: metric values
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: card labels, bullets
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan: info toasts, field labels
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}
