//! Layout text for [`Position`]: FEN-style piece placement with an optional side field.
//!
//! The first `/`-separated segment describes row 1 (Black's home rank), the
//! last one row 8. Uppercase letters are White pieces, lowercase Black, and
//! digits 1-8 are runs of empty squares.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::coordinate::Coordinate;
use crate::error::LayoutError;
use crate::piece::Piece;
use crate::position::Position;

/// Placement text of the standard starting position.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parse `"<placement> [w|b]"` into a validated position and side to move.
///
/// The side defaults to White when omitted.
pub fn parse_layout(text: &str) -> Result<(Position, Color), LayoutError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.is_empty() || fields.len() > 2 {
        return Err(LayoutError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let position: Position = fields[0].parse()?;
    position.validate()?;

    let side = match fields.get(1) {
        None | Some(&"w") => Color::White,
        Some(&"b") => Color::Black,
        Some(other) => {
            return Err(LayoutError::InvalidColor {
                found: other.to_string(),
            })
        }
    };

    Ok((position, side))
}

impl FromStr for Position {
    type Err = LayoutError;

    /// Parse a bare placement. No king-count validation is done here.
    fn from_str(placement: &str) -> Result<Position, LayoutError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut position = Position::empty();

        for (row_index, row_str) in rows.iter().enumerate() {
            let row = row_index as u8 + 1;
            let mut column: u8 = 1;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(LayoutError::InvalidPieceChar { character: c });
                    }
                    let next = column as u32 + digit;
                    if next > 9 {
                        return Err(LayoutError::BadRowLength {
                            row: row as usize,
                            length: next as usize - 1,
                        });
                    }
                    column = next as u8;
                } else {
                    let piece = Piece::from_layout_char(c)
                        .ok_or(LayoutError::InvalidPieceChar { character: c })?;
                    let Some(coord) = Coordinate::new(row, column) else {
                        return Err(LayoutError::BadRowLength {
                            row: row as usize,
                            length: column as usize,
                        });
                    };
                    position.place_piece(coord, piece);
                    column += 1;
                }
            }

            if column != 9 {
                return Err(LayoutError::BadRowLength {
                    row: row as usize,
                    length: column as usize - 1,
                });
            }
        }

        Ok(position)
    }
}

impl fmt::Display for Position {
    /// Write the placement only; the captured tally has no text form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1u8..=8 {
            let mut empty_count = 0u8;

            for column in 1u8..=8 {
                match Coordinate::new(row, column).and_then(|c| self.piece_at(c)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < 8 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
