use grid_util::point::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: &'static str },

    #[error("node {point} is not in the grid")]
    NodeNotInGrid { point: Point },

    #[error("unknown tile {tile:?} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, tile: char },
}
