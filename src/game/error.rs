use thiserror::Error;

/// Board configuration that cannot be played on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(i32),

    #[error("board {axis} must be a positive multiple of the cell size {cell_size}, got {value}")]
    MisalignedBoard {
        axis: &'static str,
        value: i32,
        cell_size: i32,
    },

    #[error("board must have at least 2 cells so food can be placed, got {cells}")]
    BoardTooSmall { cells: i32 },
}
