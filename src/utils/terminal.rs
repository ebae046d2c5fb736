//! Terminal output sanitization
//!
//! Titles come straight from a text file that may have been fetched over HTTP. They are
//! printed verbatim, so ANSI escape sequences and other control characters in them
//! could recolor the terminal or move the cursor. Everything the CLI prints from the
//! log passes through [`sanitize_for_terminal`] first.

use std::borrow::Cow;

const ESC: char = '\x1b';

/// Removes ANSI CSI sequences (`ESC [ ... letter`) and control characters
///
/// Tabs survive; bare escapes, bells, backspaces and line breaks do not, since a
/// title always renders on a single line.
///
/// # Examples
///
/// ```
/// use movie_log::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mAlien\x1b[0m"), "Alien");
/// assert_eq!(sanitize_for_terminal("Heat"), "Heat");
/// ```
pub fn sanitize_for_terminal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.is_control() && c != '\t') {
        return Cow::Borrowed(text);
    }

    let mut clean = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC && chars.next_if_eq(&'[').is_some() {
            // Parameters and intermediates run until the final letter.
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }
        clean.push(ch);
    }

    Cow::Owned(clean)
}
