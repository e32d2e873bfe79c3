//! Terminal play on top of the board engine.
//!
//! Everything here is a collaborator of the core: rendering, move-input
//! parsing and move selection all go through the board's public API and
//! only ever hand it validated square indices.

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::board::{Board, Color, GameStatus, Piece, Square, SquareIdx};

/// Error type for move-input parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Blank input line
    Empty,
    /// Input is not two numbers
    InvalidSyntax { input: String },
    /// A number is not a playable-square index (1-32)
    OutOfRange { value: u32 },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Empty => write!(f, "empty move input"),
            MoveParseError::InvalidSyntax { input } => {
                write!(f, "cannot parse '{input}' as a move, expected e.g. '9 13'")
            }
            MoveParseError::OutOfRange { value } => {
                write!(f, "square {value} out of range (must be 1-32)")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// How a side's moves are chosen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayerKind {
    /// Prompt on stdin
    Human,
    /// Uniform choice among the legal moves
    Random,
}

/// Render the position as an 8x8 glyph grid, one row per line.
#[must_use]
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..8 {
        for col in 0..8 {
            let sq = Square(row, col);
            if !sq.is_playable() {
                out.push_str("██");
                continue;
            }
            let glyph = match board.piece_at(SquareIdx::from_square(sq)) {
                None => "  ",
                Some((Color::White, Piece::Man)) => "⛂ ",
                Some((Color::White, Piece::King)) => "⛃ ",
                Some((Color::Black, Piece::Man)) => "⛀ ",
                Some((Color::Black, Piece::King)) => "⛁ ",
            };
            out.push_str(glyph);
        }
        out.push('\n');
    }
    out
}

/// Parse a move as two square numbers.
///
/// Accepts separators matching the printed notation: whitespace, comma,
/// `-` or `x`, with optional surrounding parentheses.
pub fn parse_move(input: &str) -> Result<(SquareIdx, SquareIdx), MoveParseError> {
    let trimmed = input
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .trim();
    if trimmed.is_empty() {
        return Err(MoveParseError::Empty);
    }

    let parts: Vec<&str> = trimmed
        .split(|ch: char| ch == ',' || ch == '-' || ch == 'x' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(MoveParseError::InvalidSyntax {
            input: trimmed.to_string(),
        });
    }

    let parse_square = |part: &str| -> Result<SquareIdx, MoveParseError> {
        let value: u32 = part.parse().map_err(|_| MoveParseError::InvalidSyntax {
            input: trimmed.to_string(),
        })?;
        u8::try_from(value)
            .ok()
            .and_then(SquareIdx::new)
            .ok_or(MoveParseError::OutOfRange { value })
    };

    Ok((parse_square(parts[0])?, parse_square(parts[1])?))
}

/// Prompt until a legal move is entered and applied.
///
/// Parse failures and illegal moves are reported and re-prompted; the
/// board is only changed by the accepted move.
pub fn human_turn(board: &mut Board) -> io::Result<()> {
    let stdin = io::stdin();
    loop {
        print!("{} --> ", board.turn());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "move input closed",
            ));
        }

        match parse_move(&line) {
            Ok((from, to)) => match board.apply_move(from, to) {
                Ok(_) => return Ok(()),
                Err(err) => println!("{err}"),
            },
            Err(err) => println!("{err}"),
        }
    }
}

/// Apply a uniformly random legal move. No-op on a terminal position.
pub fn random_turn<R: Rng>(board: &mut Board, rng: &mut R) {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return;
    }
    let mv = moves[rng.gen_range(0..moves.len())];
    board
        .apply_move(mv.from(), mv.to())
        .expect("generated moves are legal");
}

/// Drive one game to a terminal state, rendering between hops.
pub fn run_game(white: PlayerKind, black: PlayerKind) -> io::Result<GameStatus> {
    let mut board = Board::new();
    let mut rng = rand::thread_rng();

    loop {
        match board.terminal_status() {
            GameStatus::Ongoing(side) => {
                println!("{}", render(&board));
                let player = match side {
                    Color::White => white,
                    Color::Black => black,
                };
                match player {
                    PlayerKind::Human => human_turn(&mut board)?,
                    PlayerKind::Random => {
                        println!("{side}'s turn.");
                        random_turn(&mut board, &mut rng);
                    }
                }
                #[cfg(feature = "logging")]
                if let Some(record) = board.history().last() {
                    log::debug!("history tail: {record}");
                }
            }
            status => {
                println!("{}", render(&board));
                match status.winner() {
                    Some(winner) => println!("{winner} wins!"),
                    None => unreachable!("terminal status has a winner"),
                }
                let score: Vec<String> =
                    board.history().iter().map(ToString::to_string).collect();
                println!("{}", score.join(" "));
                return Ok(status);
            }
        }
    }
}

/// Entry point for the binary: player kinds from argv, one game.
pub fn run() -> io::Result<()> {
    let mut args = std::env::args().skip(1);
    let white = player_from_arg(args.next().as_deref());
    let black = player_from_arg(args.next().as_deref());
    run_game(white, black).map(|_| ())
}

fn player_from_arg(arg: Option<&str>) -> PlayerKind {
    match arg {
        Some("human") => PlayerKind::Human,
        _ => PlayerKind::Random,
    }
}
