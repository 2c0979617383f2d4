//! Tiny line-oriented session scripts for headless runs.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! set attack 200
//! wait 2
//! press 0
//! wait 5
//! transpose up
//! wait 1
//! transpose off
//! release 0
//! wait 3
//! ```

use std::time::Duration;

use kb_engine::{Control, DiagSink, SynthDriver};

use crate::{Keybed, SimInput};

/// Error type for script parsing.
#[derive(Debug)]
pub enum ScriptError {
    /// Line did not start with a known command
    UnknownCommand { line: usize, text: String },
    /// Numeric argument missing or out of range
    BadNumber { line: usize },
    /// Control name not one of the five settings
    UnknownControl { line: usize, text: String },
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::UnknownCommand { line, text } => {
                write!(f, "line {}: unknown command '{}'", line, text)
            }
            ScriptError::BadNumber { line } => {
                write!(f, "line {}: missing or invalid number", line)
            }
            ScriptError::UnknownControl { line, text } => {
                write!(f, "line {}: unknown control '{}'", line, text)
            }
        }
    }
}

impl std::error::Error for ScriptError {}

/// One parsed script command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Press(u8),
    Release(u8),
    TransposeUp,
    TransposeDown,
    TransposeOff,
    Set(Control, u8),
    Wait(u64),
}

fn parse_control(word: &str, line: usize) -> Result<Control, ScriptError> {
    match word {
        "multiplier" => Ok(Control::Multiplier),
        "attack" => Ok(Control::Attack),
        "decay" => Ok(Control::Decay),
        "sustain" => Ok(Control::Sustain),
        "release" => Ok(Control::Release),
        _ => Err(ScriptError::UnknownControl {
            line,
            text: word.to_string(),
        }),
    }
}

fn parse_number<T: core::str::FromStr>(word: Option<&str>, line: usize) -> Result<T, ScriptError> {
    word.and_then(|w| w.parse().ok())
        .ok_or(ScriptError::BadNumber { line })
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw_line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let mut words = content.split_whitespace();
        let command = words.next().unwrap_or("");
        let parsed = match command {
            "press" => Command::Press(parse_number(words.next(), line)?),
            "release" => Command::Release(parse_number(words.next(), line)?),
            "transpose" => match words.next() {
                Some("up") => Command::TransposeUp,
                Some("down") => Command::TransposeDown,
                Some("off") => Command::TransposeOff,
                _ => {
                    return Err(ScriptError::UnknownCommand {
                        line,
                        text: content.to_string(),
                    })
                }
            },
            "set" => {
                let control = match words.next() {
                    Some(word) => parse_control(word, line)?,
                    None => {
                        return Err(ScriptError::UnknownCommand {
                            line,
                            text: content.to_string(),
                        })
                    }
                };
                Command::Set(control, parse_number(words.next(), line)?)
            }
            "wait" => Command::Wait(parse_number(words.next(), line)?),
            _ => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    text: content.to_string(),
                })
            }
        };
        commands.push(parsed);
    }
    Ok(commands)
}

/// Replay a parsed script through a keybed: input mutations take effect
/// on the next tick; `wait` runs ticks at the given pacing delay.
pub fn run_script<D, S>(
    keybed: &mut Keybed<D, S>,
    input: &mut SimInput,
    commands: &[Command],
    delay: Duration,
) where
    D: SynthDriver,
    S: DiagSink,
{
    for command in commands {
        match command {
            Command::Press(key) => input.set_key(*key, true),
            Command::Release(key) => input.set_key(*key, false),
            Command::TransposeUp => input.set_transpose(true, false),
            Command::TransposeDown => input.set_transpose(false, true),
            Command::TransposeOff => input.set_transpose(false, false),
            Command::Set(control, raw) => input.set_control(*control, *raw),
            Command::Wait(ticks) => keybed.run_for(input, *ticks, delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_command_forms() {
        let script = "\
# demo
press 0
release 0
transpose up
transpose off
set attack 200
wait 3
";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            [
                Command::Press(0),
                Command::Release(0),
                Command::TransposeUp,
                Command::TransposeOff,
                Command::Set(Control::Attack, 200),
                Command::Wait(3),
            ]
        );
    }

    #[test]
    fn trailing_comment_and_blank_lines_are_skipped() {
        let commands = parse_script("\n\npress 2  # key 2\n\n").unwrap();
        assert_eq!(commands, [Command::Press(2)]);
    }

    #[test]
    fn unknown_command_reports_line() {
        let err = parse_script("press 0\nfrobnicate\n").unwrap_err();
        match err {
            ScriptError::UnknownCommand { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_key_number_is_an_error() {
        assert!(matches!(
            parse_script("press x\n"),
            Err(ScriptError::BadNumber { line: 1 })
        ));
    }

    #[test]
    fn unknown_control_is_an_error() {
        assert!(matches!(
            parse_script("set flutter 10\n"),
            Err(ScriptError::UnknownControl { line: 1, .. })
        ));
    }
}
