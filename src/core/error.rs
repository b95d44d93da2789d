use std::fmt;

#[derive(Debug)]
pub enum GameError {
    UnknownColor(String),
    CellCountMismatch { expected: usize, got: usize },
    EmptyPalette,
    ZeroSide,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColor(name) => write!(f, "unknown color: {}", name),
            Self::CellCountMismatch { expected, got } => {
                write!(f, "cell count mismatch: expected {}, got {}", expected, got)
            }
            Self::EmptyPalette => write!(f, "palette has no entries"),
            Self::ZeroSide => write!(f, "grid side must be at least 1"),
        }
    }
}

impl std::error::Error for GameError {}

pub type Result<T> = std::result::Result<T, GameError>;
