//! Where program text comes from.

use std::io::{self, Read};
use std::path::PathBuf;

/// Program input named on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// A file path.
    File(PathBuf),
    /// Standard input, requested with `-`.
    Stdin,
    /// Source passed with `-e`.
    Inline(String),
}

/// Loaded program text and the name diagnostics refer to it by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Source {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read the text for `input`.
    pub fn load(input: &Input) -> io::Result<Source> {
        match input {
            Input::File(path) => {
                let text = std::fs::read_to_string(path)?;
                Ok(Source::new(path.display().to_string(), text))
            }
            Input::Stdin => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(Source::new("<stdin>", text))
            }
            Input::Inline(text) => Ok(Source::new("<inline>", text.clone())),
        }
    }
}
