//! Command prompt: parses submitted lines and produces output lines

use serde::{Deserialize, Serialize};

use crate::fs::{StaticFs, ROOT};

/// Banner printed when a terminal opens
pub const WELCOME: &str = "Fakerosoft Fakedows 98 [Version 4.10.1998]\n(C) Copyright Fakerosoft Corp 1981-1998.\n\nType \"help\" for available commands.\n\n";

const HELP: &str = "Available commands:

ls          - List files and directories
cat         - Display file contents (usage: cat <filename>)
help        - Show this help message
clear       - Clear the terminal screen
pwd         - Show current directory path

Try these files:
- about.txt
- projects.txt
- contact.txt
- skills.txt
- readme.txt";

/// Styling of an output line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineClass {
    #[default]
    Normal,
    Error,
    Success,
}

impl LineClass {
    /// CSS class for the line element, if any
    pub fn class(&self) -> Option<&'static str> {
        match self {
            LineClass::Normal => None,
            LineClass::Error => Some("error"),
            LineClass::Success => Some("success"),
        }
    }
}

/// One block of terminal output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub text: String,
    pub class: LineClass,
}

impl OutputLine {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: LineClass::Normal,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: LineClass::Error,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: LineClass::Success,
        }
    }
}

/// A parsed command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Ls,
    /// `cat` with its first argument, if any
    Cat(Option<String>),
    Help,
    Clear,
    Pwd,
    Unknown(String),
}

impl Command {
    /// Parse a non-empty, trimmed command line. Command names are
    /// case-sensitive; extra arguments are ignored.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        match name {
            "ls" => Command::Ls,
            "cat" => Command::Cat(parts.next().map(str::to_string)),
            "help" => Command::Help,
            "clear" => Command::Clear,
            "pwd" => Command::Pwd,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// An interactive prompt over a [`StaticFs`]
#[derive(Clone, Debug)]
pub struct Terminal {
    fs: StaticFs,
    cwd: String,
    output: Vec<OutputLine>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(StaticFs::default())
    }
}

impl Terminal {
    /// Open a terminal at the drive root, showing the welcome banner
    pub fn new(fs: StaticFs) -> Self {
        Self {
            fs,
            cwd: ROOT.to_string(),
            output: vec![OutputLine::normal(WELCOME)],
        }
    }

    /// Current directory
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Prompt text shown before the input field
    pub fn prompt(&self) -> String {
        format!("{}>", self.cwd)
    }

    /// Everything printed so far
    pub fn output(&self) -> &[OutputLine] {
        &self.output
    }

    /// Submit a line typed at the prompt: echo it, then run it.
    /// Returns the lines this submission added (empty after `clear`).
    pub fn submit(&mut self, input: &str) -> &[OutputLine] {
        let line = input.trim();
        let start = self.output.len();
        self.output.push(OutputLine::normal(format!("{}{}", self.prompt(), line)));
        if line.is_empty() {
            return &self.output[start..];
        }

        let command = Command::parse(line);
        tracing::debug!(?command, "terminal command");
        if command == Command::Clear {
            self.output.clear();
            return &[];
        }
        let result = self.execute(&command);
        self.output.push(result);
        &self.output[start..]
    }

    /// Produce the output of a command without touching the history.
    /// `Clear` yields an empty line; `submit` handles clearing.
    pub fn execute(&self, command: &Command) -> OutputLine {
        match command {
            Command::Ls => self.list(),
            Command::Cat(None) => OutputLine::error("Usage: cat <filename>"),
            Command::Cat(Some(name)) => match self.fs.read_file(&self.cwd, name) {
                Ok(content) => OutputLine::normal(content),
                Err(err) => OutputLine::error(err.to_string()),
            },
            Command::Help => OutputLine::success(HELP),
            Command::Clear => OutputLine::normal(""),
            Command::Pwd => OutputLine::normal(self.cwd.clone()),
            Command::Unknown(name) => OutputLine::error(format!(
                "'{}' is not recognized as an internal or external command.",
                name
            )),
        }
    }

    fn list(&self) -> OutputLine {
        let entries = match self.fs.read_dir(&self.cwd) {
            Ok(entries) => entries,
            Err(err) => return OutputLine::error(err.to_string()),
        };
        let mut text = format!("Directory of {}\n\n", self.cwd);
        for entry in entries {
            let tag = if entry.node.is_dir() { "<DIR>" } else { "     " };
            text.push_str(&format!("{}  {}\n", tag, entry.name));
        }
        text.push_str(&format!("\n{} item(s)", entries.len()));
        OutputLine::normal(text)
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod shell_tests;
