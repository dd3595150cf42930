use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;
use tilesweep_core::{Coord, Coord2, MouseButton, Point};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Raw click in screen pixels.
    Click { pos: Point, button: MouseButton },
    /// Left click on the centre of a cell, addressed by grid coordinates.
    Open(Coord2),
    /// Right click on the centre of a cell, addressed by grid coordinates.
    Flag(Coord2),
    Restart,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    WrongArity {
        command: &'static str,
        expected: &'static str,
    },
    #[error("Invalid number `{value}`: {source}")]
    InvalidNumber {
        value: String,
        source: ParseIntError,
    },
}

pub const HELP: &str = "\
Commands:
  left PX PY    left click at screen pixel (PX, PY)
  right PX PY   right click at screen pixel (PX, PY)
  open X Y      reveal the cell at column X, row Y
  flag X Y      toggle a flag on the cell at column X, row Y
  restart       start a new game
  help          show this message
  quit          exit";

fn number<T: FromStr<Err = ParseIntError>>(value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|source| CommandError::InvalidNumber {
        value: value.to_owned(),
        source,
    })
}

fn pair<T: FromStr<Err = ParseIntError>>(
    command: &'static str,
    args: &[&str],
) -> Result<(T, T), CommandError> {
    match args {
        [a, b] => Ok((number(a)?, number(b)?)),
        _ => Err(CommandError::WrongArity {
            command,
            expected: "two numbers",
        }),
    }
}

fn no_args(command: &'static str, args: &[&str], value: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(value)
    } else {
        Err(CommandError::WrongArity {
            command,
            expected: "no arguments",
        })
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err(CommandError::Unknown(String::new()));
        };

        match name.to_ascii_lowercase().as_str() {
            "left" | "l" => {
                let (x, y) = pair::<i32>("left", args)?;
                Ok(Command::Click {
                    pos: Point::new(x, y),
                    button: MouseButton::Left,
                })
            }
            "right" | "r" => {
                let (x, y) = pair::<i32>("right", args)?;
                Ok(Command::Click {
                    pos: Point::new(x, y),
                    button: MouseButton::Right,
                })
            }
            "open" | "o" => pair::<Coord>("open", args).map(Command::Open),
            "flag" | "f" => pair::<Coord>("flag", args).map(Command::Flag),
            "restart" => no_args("restart", args, Command::Restart),
            "help" | "?" => no_args("help", args, Command::Help),
            "quit" | "q" | "exit" => no_args("quit", args, Command::Quit),
            _ => Err(CommandError::Unknown(name.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_screen_clicks() {
        assert_eq!(
            "left 45 -3".parse::<Command>(),
            Ok(Command::Click {
                pos: Point::new(45, -3),
                button: MouseButton::Left
            })
        );
        assert_eq!(
            "R 0 10".parse::<Command>(),
            Ok(Command::Click {
                pos: Point::new(0, 10),
                button: MouseButton::Right
            })
        );
    }

    #[test]
    fn parses_grid_commands() {
        assert_eq!("open 2 3".parse::<Command>(), Ok(Command::Open((2, 3))));
        assert_eq!("  f 0 8 ".parse::<Command>(), Ok(Command::Flag((0, 8))));
        assert_eq!("restart".parse::<Command>(), Ok(Command::Restart));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_owned()))
        );
        assert!(matches!(
            "open 1".parse::<Command>(),
            Err(CommandError::WrongArity { command: "open", .. })
        ));
        assert!(matches!(
            "open -1 2".parse::<Command>(),
            Err(CommandError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "quit now".parse::<Command>(),
            Err(CommandError::WrongArity { .. })
        ));
    }
}
