//! Line-based interaction scripts.
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! type name Jane Doe
//! blur name
//! submit contact-form
//! wait 2000
//! dump
//! ```

use std::num::ParseIntError;
use std::time::Duration;

use log::{debug, warn};
use pagedom::Event;
use portfolio::Command;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' needs {argument}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        argument: &'static str,
    },
    #[error("line {line}: '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Replace a control's value, as typing would.
    Type { id: String, text: String },
    Blur(String),
    Focus(String),
    Click(String),
    Submit(String),
    Scroll(u32),
    Wait(Duration),
    /// Print a snapshot of the page.
    Dump,
}

impl Step {
    /// The runtime command for this step. `Wait` has none.
    pub fn command(self) -> Option<Command> {
        let command = match self {
            Step::Type { id, text } => Command::Dispatch(Event::input(id, text)),
            Step::Blur(id) => Command::Dispatch(Event::blur(id)),
            Step::Focus(id) => Command::Dispatch(Event::focus(id)),
            Step::Click(id) => Command::Dispatch(Event::click(id)),
            Step::Submit(form) => Command::Dispatch(Event::submit(form)),
            Step::Scroll(top) => Command::ScrollTo(top),
            Step::Dump => Command::Snapshot,
            Step::Wait(_) => return None,
        };
        Some(command)
    }
}

pub fn parse(source: &str) -> Result<Vec<Step>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, text)| {
            let text = text.trim();
            (!text.is_empty() && !text.starts_with('#')).then_some((i + 1, text))
        })
        .map(|(line, text)| parse_line(line, text))
        .collect()
}

fn parse_line(line: usize, text: &str) -> Result<Step, ScriptError> {
    let (command, rest) = match text.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (text, ""),
    };

    let id = |command: &'static str| {
        rest.split_whitespace()
            .next()
            .map(str::to_string)
            .ok_or(ScriptError::MissingArgument {
                line,
                command,
                argument: "an element id",
            })
    };
    let number = |command: &'static str| -> Result<u64, ScriptError> {
        if rest.is_empty() {
            return Err(ScriptError::MissingArgument {
                line,
                command,
                argument: "a number",
            });
        }
        rest.parse().map_err(|source| ScriptError::InvalidNumber {
            line,
            value: rest.to_string(),
            source,
        })
    };

    let step = match command {
        "type" => {
            let id = id("type")?;
            // Everything after the id, spaces included; may be empty.
            let text = rest[id.len()..].trim_start().to_string();
            Step::Type { id, text }
        }
        "blur" => Step::Blur(id("blur")?),
        "focus" => Step::Focus(id("focus")?),
        "click" => Step::Click(id("click")?),
        "submit" => Step::Submit(id("submit")?),
        "scroll" => {
            let top = number("scroll")?;
            Step::Scroll(u32::try_from(top).unwrap_or(u32::MAX))
        }
        "wait" => Step::Wait(Duration::from_millis(number("wait")?)),
        "dump" => Step::Dump,
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };
    Ok(step)
}

/// Send `steps` to a running page, sleeping through each `wait`. Stops
/// early if the page goes away.
pub async fn feed(steps: Vec<Step>, commands: mpsc::Sender<Command>) {
    for step in steps {
        if let Step::Wait(duration) = step {
            debug!("waiting {duration:?}");
            tokio::time::sleep(duration).await;
            continue;
        }
        let Some(command) = step.command() else {
            continue;
        };
        if commands.send(command).await.is_err() {
            warn!("page stopped before the script finished");
            return;
        }
    }
}
