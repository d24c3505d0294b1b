//! Error types for chess board operations.

use std::fmt;

use super::{Color, PieceKind, Square};

/// Why a requested move was refused. The board is never mutated when one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square
    EmptySquare { square: Square },
    /// The piece on the origin square belongs to the side not to move
    NotYourTurn { square: Square, to_move: Color },
    /// The destination is not among the piece's legal destinations
    IllegalMove { from: Square, to: Square },
    /// The promotion choice is not a knight, bishop, rook or queen
    InvalidPromotion { kind: PieceKind },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::NotYourTurn { square, to_move } => {
                write!(f, "Piece on {square} cannot move, {to_move} to move")
            }
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            MoveError::InvalidPromotion { kind } => {
                write!(f, "Cannot promote to '{}'", kind.to_char())
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board layout strings (`<placement> [w|b] [KQkq|-]`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Placement must describe exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement
    InvalidPiece { char: char },
    /// A rank describes more or fewer than eight files
    BadRankWidth { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Each side needs exactly one king
    KingCount { color: Color, found: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            LayoutError::BadRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            LayoutError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            LayoutError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            LayoutError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let e4 = Square::new(3, 4).unwrap();
        let e5 = Square::new(4, 4).unwrap();
        let err = MoveError::IllegalMove { from: e4, to: e5 };
        assert!(err.to_string().contains("e4e5"));

        let err = MoveError::NotYourTurn {
            square: e4,
            to_move: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_layout_error_messages() {
        let err = LayoutError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
        let err = LayoutError::KingCount {
            color: Color::White,
            found: 2,
        };
        assert!(err.to_string().contains('2'));
    }
}
