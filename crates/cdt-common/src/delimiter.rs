//! Field delimiter kinds for tabular data sources.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Delimiter separating fields in a tabular data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Any run of whitespace.
    Whitespace,
    Tab,
    Space,
    Comma,
    Colon,
    Semicolon,
    Pipe,
}

impl Delimiter {
    /// All delimiter kinds in declaration order.
    pub const ALL: [Delimiter; 7] = [
        Delimiter::Whitespace,
        Delimiter::Tab,
        Delimiter::Space,
        Delimiter::Comma,
        Delimiter::Colon,
        Delimiter::Semicolon,
        Delimiter::Pipe,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Whitespace => "whitespace",
            Delimiter::Tab => "tab",
            Delimiter::Space => "space",
            Delimiter::Comma => "comma",
            Delimiter::Colon => "colon",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Pipe => "pipe",
        }
    }

    /// Literal or pattern the delimiter denotes in a data file.
    pub fn pattern(self) -> &'static str {
        match self {
            Delimiter::Whitespace => "\\s+",
            Delimiter::Tab => "\t",
            Delimiter::Space => " ",
            Delimiter::Comma => ",",
            Delimiter::Colon => ":",
            Delimiter::Semicolon => ";",
            Delimiter::Pipe => "|",
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
