//! Line-oriented play session over any reader/writer pair.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::perft::{divide, perft};
use rookery_core::{Coordinate, Game, GameStatus, Move, Piece};

use crate::command::{parse_command, Command, SessionOption};
use crate::error::CliError;

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every committed move.
    pub show_board: bool,
    /// Report the next player and check status after every committed move.
    pub announce: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: false,
            announce: true,
        }
    }
}

/// An interactive game session, holding the game and its settings.
///
/// Commands are read and executed one at a time on the calling thread.
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a new session with the starting position.
    pub fn new() -> Self {
        Self::with_game(Game::new())
    }

    /// Create a session around an existing game.
    pub fn with_game(game: Game) -> Self {
        Self {
            game,
            config: SessionConfig::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Parse errors are reported on `output` and logged; the game is left as it was.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("session ended");
        Ok(())
    }

    /// Execute one parsed command, writing any response to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), CliError> {
        match cmd {
            Command::New => {
                self.game.reset();
                self.announce(out)?;
            }
            Command::Position(game) => {
                self.game = game;
                debug!(layout = %self.game.position(), "position loaded");
                self.announce(out)?;
            }
            Command::Moves(from) => self.handle_moves(from, out)?,
            Command::Move(mv) => self.handle_move(mv, out)?,
            Command::Board => self.print_board(out)?,
            Command::Status => {
                let status = self.game.status();
                writeln!(out, "{} to move: {status}", self.game.side_to_move().name())?;
            }
            Command::Captured => self.handle_captured(out)?,
            Command::Perft(depth) => self.handle_perft(depth, out)?,
            Command::Set(option) => self.handle_set(option, out)?,
            Command::Quit => {}
            Command::Unknown(word) => {
                if !word.is_empty() {
                    warn!(cmd = %word, "unknown command ignored");
                }
            }
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&mut self, from: Coordinate, out: &mut W) -> Result<(), CliError> {
        let destinations = self.game.legal_moves_from(from);
        if destinations.is_empty() {
            writeln!(out, "moves {from}: none")?;
        } else {
            writeln!(out, "moves {from}: {destinations}")?;
        }
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, mv: Move, out: &mut W) -> Result<(), CliError> {
        match self.game.apply_move(mv.from(), mv.to()) {
            Ok(Some(captured)) => writeln!(out, "played {mv}, captured {}", describe(captured))?,
            Ok(None) => writeln!(out, "played {mv}")?,
            Err(e) => {
                warn!(error = %e, "move rejected");
                writeln!(out, "illegal move: {e}")?;
                return Ok(());
            }
        }

        if self.config.show_board {
            self.print_board(out)?;
        }
        if self.config.announce {
            self.announce(out)?;
        }
        Ok(())
    }

    fn handle_captured<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let captured = self.game.position().captured();
        if captured.is_empty() {
            writeln!(out, "captured: none")?;
        } else {
            let names: Vec<String> = captured.iter().map(|&p| describe(p)).collect();
            writeln!(out, "captured: {}", names.join(", "))?;
        }
        Ok(())
    }

    fn handle_perft<W: Write>(&self, depth: usize, out: &mut W) -> Result<(), CliError> {
        let results = divide(&self.game, depth);
        for (mv, nodes) in &results {
            writeln!(out, "{mv}: {nodes}")?;
        }
        let total = if results.is_empty() {
            perft(&self.game, depth)
        } else {
            results.iter().map(|(_, nodes)| nodes).sum()
        };
        writeln!(out, "nodes {total}")?;
        Ok(())
    }

    fn handle_set<W: Write>(&mut self, option: SessionOption, out: &mut W) -> Result<(), CliError> {
        let (name, enabled) = match option {
            SessionOption::ShowBoard(on) => {
                self.config.show_board = on;
                ("showboard", on)
            }
            SessionOption::Announce(on) => {
                self.config.announce = on;
                ("announce", on)
            }
        };
        writeln!(out, "{name} {}", if enabled { "on" } else { "off" })?;
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        writeln!(out, "{}", self.game.position().pretty())?;
        Ok(())
    }

    /// Tell the next player it is their turn, and whether the game is over.
    fn announce<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        let side = self.game.side_to_move();
        let status = self.game.status();
        debug!(side = %side, %status, "turn passed");
        match status {
            GameStatus::Ongoing => writeln!(out, "{} to move", side.name())?,
            GameStatus::Check => writeln!(out, "{} to move, in check", side.name())?,
            GameStatus::Checkmate => writeln!(out, "checkmate, {} wins", side.flip().name())?,
            GameStatus::Stalemate => writeln!(out, "stalemate, draw")?,
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(piece: Piece) -> String {
    format!("{} {}", piece.color().name(), piece.kind().name())
}
