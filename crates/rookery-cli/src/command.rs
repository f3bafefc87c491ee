//! Session command parsing.

use rookery_core::{Coordinate, Game, Move, STARTING_LAYOUT};

use crate::error::CliError;

/// A runtime setting changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the board after every committed move.
    ShowBoard(bool),
    /// Report the side to move and check status after every committed move.
    Announce(bool),
}

/// A parsed session command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start over from the standard position.
    New,
    /// `position` -- load a layout.
    Position(Game),
    /// `moves <sq>` -- list legal destinations from a square.
    Moves(Coordinate),
    /// `move <from><to>` -- play a move for the side to move.
    Move(Move),
    /// `board` -- print the board.
    Board,
    /// `status` -- report check, checkmate, or stalemate.
    Status,
    /// `captured` -- list captured pieces.
    Captured,
    /// `perft <depth>` -- count leaf nodes with a per-move breakdown.
    Perft(usize),
    /// `set <option> <on|off>`.
    Set(SessionOption),
    /// `quit` -- leave the session.
    Quit,
    /// Unrecognized command (logged and ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    let args = &tokens[1..];
    match tokens[0] {
        "new" => Ok(Command::New),
        "board" => Ok(Command::Board),
        "status" => Ok(Command::Status),
        "captured" => Ok(Command::Captured),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(args),
        "moves" => parse_moves(args),
        "move" => parse_move(args),
        "perft" => parse_perft(args),
        "set" => parse_set(args),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [w|b]`
/// - `position <placement> [w|b]`
fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    let Some((&first, rest)) = tokens.split_first() else {
        return Err(CliError::Malformed {
            command: "position",
            reason: "missing startpos or placement",
        });
    };

    let placement = if first == "startpos" { STARTING_LAYOUT } else { first };
    let text = std::iter::once(placement)
        .chain(rest.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    let game: Game = text.parse()?;
    Ok(Command::Position(game))
}

fn parse_moves(tokens: &[&str]) -> Result<Command, CliError> {
    match tokens {
        [square] => Ok(Command::Moves(parse_square(square)?)),
        _ => Err(CliError::Malformed {
            command: "moves",
            reason: "expected one square",
        }),
    }
}

/// Accepts `move e2e4` and `move e2 e4`.
fn parse_move(tokens: &[&str]) -> Result<Command, CliError> {
    let (from, to) = match tokens {
        [joined] if joined.len() == 4 && joined.is_ascii() => {
            (parse_square(&joined[..2])?, parse_square(&joined[2..])?)
        }
        [from, to] => (parse_square(from)?, parse_square(to)?),
        _ => {
            return Err(CliError::Malformed {
                command: "move",
                reason: "expected <from><to> or <from> <to>",
            })
        }
    };
    Ok(Command::Move(Move::new(from, to)))
}

fn parse_perft(tokens: &[&str]) -> Result<Command, CliError> {
    let [value] = tokens else {
        return Err(CliError::Malformed {
            command: "perft",
            reason: "expected a depth",
        });
    };
    let depth = value.parse().map_err(|_| CliError::InvalidDepth {
        value: value.to_string(),
    })?;
    Ok(Command::Perft(depth))
}

/// Parse `set <option> <on|off>`.
fn parse_set(tokens: &[&str]) -> Result<Command, CliError> {
    let [name, value] = tokens else {
        return Err(CliError::Malformed {
            command: "set",
            reason: "expected <option> <on|off>",
        });
    };

    let enabled = match *value {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => {
            return Err(CliError::InvalidOptionValue {
                name: name.to_string(),
                value: value.to_string(),
            })
        }
    };

    match name.to_ascii_lowercase().as_str() {
        "showboard" => Ok(Command::Set(SessionOption::ShowBoard(enabled))),
        "announce" => Ok(Command::Set(SessionOption::Announce(enabled))),
        _ => Err(CliError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

fn parse_square(text: &str) -> Result<Coordinate, CliError> {
    Coordinate::from_algebraic(text).ok_or_else(|| CliError::InvalidSquare {
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rookery_core::{Color, Piece};

    use super::*;

    fn sq(s: &str) -> Coordinate {
        Coordinate::from_algebraic(s).unwrap()
    }

    #[test]
    fn parse_simple_keywords() {
        assert!(matches!(parse_command("new").unwrap(), Command::New));
        assert!(matches!(parse_command("board").unwrap(), Command::Board));
        assert!(matches!(parse_command("status").unwrap(), Command::Status));
        assert!(matches!(parse_command("captured").unwrap(), Command::Captured));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_position_startpos() {
        let Command::Position(game) = parse_command("position startpos").unwrap() else {
            panic!("expected Position");
        };
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn parse_position_startpos_black_to_move() {
        let Command::Position(game) = parse_command("position startpos b").unwrap() else {
            panic!("expected Position");
        };
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn parse_position_placement() {
        let Command::Position(game) = parse_command("position 4k3/8/8/8/8/8/8/R3K3 b").unwrap() else {
            panic!("expected Position");
        };
        assert_eq!(game.position().piece_at(sq("a1")), Some(Piece::WHITE_ROOK));
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn parse_position_missing_keyword() {
        assert!(matches!(
            parse_command("position"),
            Err(CliError::Malformed { command: "position", .. })
        ));
    }

    #[test]
    fn parse_position_invalid_layout() {
        assert!(matches!(
            parse_command("position invalid"),
            Err(CliError::InvalidLayout { .. })
        ));
        assert!(matches!(
            parse_command("position startpos x"),
            Err(CliError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn parse_moves_square() {
        let cmd = parse_command("moves g1").unwrap();
        assert!(matches!(cmd, Command::Moves(c) if c == sq("g1")));
        assert!(parse_command("moves").is_err());
        assert!(matches!(
            parse_command("moves z9"),
            Err(CliError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_move_joined_and_split() {
        let expected = Move::new(sq("e2"), sq("e4"));
        assert!(matches!(parse_command("move e2e4").unwrap(), Command::Move(m) if m == expected));
        assert!(matches!(parse_command("move e2 e4").unwrap(), Command::Move(m) if m == expected));
    }

    #[test]
    fn parse_move_malformed() {
        assert!(parse_command("move").is_err());
        assert!(parse_command("move e2e").is_err());
        assert!(parse_command("move e2 e4 e5").is_err());
        assert!(matches!(
            parse_command("move e2i4"),
            Err(CliError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_perft_depth() {
        assert!(matches!(parse_command("perft 3").unwrap(), Command::Perft(3)));
        assert!(matches!(
            parse_command("perft abc"),
            Err(CliError::InvalidDepth { .. })
        ));
        assert!(parse_command("perft").is_err());
    }

    #[test]
    fn parse_set_options() {
        assert!(matches!(
            parse_command("set showboard on").unwrap(),
            Command::Set(SessionOption::ShowBoard(true))
        ));
        assert!(matches!(
            parse_command("set announce off").unwrap(),
            Command::Set(SessionOption::Announce(false))
        ));
        assert!(matches!(
            parse_command("set hash 16"),
            Err(CliError::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            parse_command("set colour on"),
            Err(CliError::UnknownOption { .. })
        ));
    }

    #[test]
    fn parse_unknown_command() {
        let cmd = parse_command("foobar").unwrap();
        assert!(matches!(cmd, Command::Unknown(_)));
    }

    #[test]
    fn parse_empty_line() {
        let cmd = parse_command("").unwrap();
        assert!(matches!(cmd, Command::Unknown(_)));
    }
}
