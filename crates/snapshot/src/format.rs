//! Output layout selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout of the written document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FormatMode {
    /// Human-readable, tab-indented, one element per line.
    #[default]
    Pretty,
    /// Minimal single-line encoding.
    Compact,
}

impl FromStr for FormatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!(
                "unknown output format '{other}' (expected 'pretty' or 'compact')"
            )),
        }
    }
}

impl TryFrom<String> for FormatMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Compact => f.write_str("compact"),
        }
    }
}

/// Structural strings used while writing a document.
///
/// Built once from a [`FormatMode`] and never changed for the rest of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    mode: FormatMode,
    indent: &'static str,
    space: &'static str,
    eol: &'static str,
}

impl FormatConfig {
    /// Tab-indented multi-line layout.
    pub const PRETTY: Self = Self {
        mode: FormatMode::Pretty,
        indent: "\t",
        space: " ",
        eol: "\n",
    };

    /// Every structural element collapsed to nothing.
    pub const COMPACT: Self = Self {
        mode: FormatMode::Compact,
        indent: "",
        space: "",
        eol: "",
    };

    /// The configuration for `mode`.
    pub const fn new(mode: FormatMode) -> Self {
        match mode {
            FormatMode::Pretty => Self::PRETTY,
            FormatMode::Compact => Self::COMPACT,
        }
    }

    /// The layout these strings belong to.
    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    /// One nesting level of indentation.
    pub fn indent(&self) -> &'static str {
        self.indent
    }

    /// Separator placed around `:` between a key and its value.
    pub fn space(&self) -> &'static str {
        self.space
    }

    /// Line separator.
    pub fn eol(&self) -> &'static str {
        self.eol
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new(FormatMode::default())
    }
}

impl From<FormatMode> for FormatConfig {
    fn from(mode: FormatMode) -> Self {
        Self::new(mode)
    }
}
