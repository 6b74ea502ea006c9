//! Diagnostic severity levels.
//!
//! OxygenC's original driver only ever prints three kinds of message to
//! stderr/stdout: a red `[-] Error:`, a yellow `[!] Warning:`, and a green
//! `[+] Success:`. `Level` mirrors that, rather than the richer
//! error/warning/note/help hierarchy a multi-pass compiler would want.

use std::fmt;

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Lexing or parsing cannot continue; the driver exits with status 1.
    Error,
    /// Non-fatal; printed but compilation proceeds.
    Warning,
    /// A positive status message (e.g. "wrote output to ...").
    Success,
}

impl Level {
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Success => "Success",
        }
    }

    /// ANSI color code, matching the original driver's palette
    /// (31 red, 33 yellow, 32 green, each bold).
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",
            Level::Warning => "33",
            Level::Success => "32",
        }
    }

    /// Marker printed before the level name, e.g. `[-] Error: `.
    #[inline]
    pub const fn marker(&self) -> &'static str {
        match self {
            Level::Error => "[-]",
            Level::Warning => "[!]",
            Level::Success => "[+]",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
